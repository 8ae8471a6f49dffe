//! Tap actions.
//!
//! Actions are plain values describing what happens when a user taps an
//! interactive element. They carry no construction context: they are always
//! serialized inside a parent, in the parent's key convention.

use serde_json::{Map, Value};

use super::attributes::{Attributes, Configure, string_value, unknown};
use crate::message::{
    error::{BuildError, BuildResult, ValidationError},
    serialization::{Payload, PayloadWriter, SerializationMode},
    validation::EnumValidator,
};

const ACTION_TYPE: EnumValidator = EnumValidator::new(&["message", "postback", "uri"]);

/// What happens when a user taps an interactive element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sends a text message from the user.
    Message(MessageAction),
    /// Sends data back to the bot without showing it as a message.
    Postback(PostbackAction),
    /// Opens a URI.
    Uri(UriAction),
}

impl Action {
    /// Creates an action from an attribute map whose `type` entry names the
    /// action kind.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::RequiredField`] if `type` is missing, and a
    /// validation error for an unknown kind or an unknown or mistyped
    /// attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use flexcraft::message::domain::{Action, Attributes};
    ///
    /// let attributes = Attributes::new()
    ///     .with("type", "postback")
    ///     .with("data", "buy=1")
    ///     .with("displayText", "Buy");
    /// let action = Action::from_attributes(&attributes).expect("valid postback");
    /// assert!(matches!(action, Action::Postback(_)));
    /// ```
    pub fn from_attributes(attributes: &Attributes) -> BuildResult<Self> {
        let kind = attributes
            .get("type")
            .ok_or(BuildError::required("action", "type"))?
            .as_str()
            .ok_or_else(|| ValidationError::wrong_type("type", "a string"))?;
        let remaining: Map<String, Value> = attributes
            .iter()
            .filter(|(name, _)| name.as_str() != "type")
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        let fields = Attributes::from(remaining);
        match kind {
            "message" => MessageAction::from_attributes(&fields).map(Self::from),
            "postback" => PostbackAction::from_attributes(&fields).map(Self::from),
            "uri" => UriAction::from_attributes(&fields).map(Self::from),
            other => Err(ACTION_TYPE.rejection("type", other).into()),
        }
    }

    /// Serializes the action in the given convention.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::RequiredField`] if the action's mandatory field
    /// was never set.
    pub fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        match self {
            Self::Message(action) => action.payload(mode),
            Self::Postback(action) => action.payload(mode),
            Self::Uri(action) => action.payload(mode),
        }
    }

    /// Serializes the action with standard keys.
    ///
    /// # Errors
    ///
    /// See [`Action::payload`].
    pub fn serialize(&self) -> BuildResult<Payload> {
        self.payload(SerializationMode::Standard)
    }

    /// Returns the label shown on the element, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Message(action) => action.label.as_deref(),
            Self::Postback(action) => action.label.as_deref(),
            Self::Uri(action) => action.label.as_deref(),
        }
    }
}

impl From<MessageAction> for Action {
    fn from(action: MessageAction) -> Self {
        Self::Message(action)
    }
}

impl From<PostbackAction> for Action {
    fn from(action: PostbackAction) -> Self {
        Self::Postback(action)
    }
}

impl From<UriAction> for Action {
    fn from(action: UriAction) -> Self {
        Self::Uri(action)
    }
}

/// Sends `text` as a message from the user.
///
/// # Examples
///
/// ```
/// use flexcraft::message::domain::MessageAction;
/// use serde_json::json;
///
/// let action = MessageAction::new("Yes").with_label("Yes");
/// let payload = action.serialize().expect("text is set");
/// assert_eq!(
///     serde_json::Value::Object(payload),
///     json!({"type": "message", "label": "Yes", "text": "Yes"}),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageAction {
    /// Text sent when the action runs. Required.
    pub text: Option<String>,
    /// Label shown on the element.
    pub label: Option<String>,
}

impl MessageAction {
    /// Creates an action sending `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            label: None,
        }
    }

    /// Creates an action from an attribute map.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown or mistyped attribute.
    pub fn from_attributes(attributes: &Attributes) -> BuildResult<Self> {
        let mut action = Self::default();
        action.apply_attributes(attributes)?;
        Ok(action)
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Serializes the action in the given convention.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::RequiredField`] if `text` is unset.
    pub fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        let text = self
            .text
            .as_deref()
            .ok_or(BuildError::required(Self::NODE, "text"))?;
        let mut writer = PayloadWriter::tagged(mode, "message");
        writer
            .put_opt("label", self.label.as_deref())
            .put("text", text);
        Ok(writer.finish())
    }

    /// Serializes the action with standard keys.
    ///
    /// # Errors
    ///
    /// See [`MessageAction::payload`].
    pub fn serialize(&self) -> BuildResult<Payload> {
        self.payload(SerializationMode::Standard)
    }
}

impl Configure for MessageAction {
    const NODE: &'static str = "message action";

    fn apply_attribute(&mut self, name: &str, value: &Value) -> BuildResult<()> {
        match name {
            "text" => self.text = string_value(name, value)?,
            "label" => self.label = string_value(name, value)?,
            _ => return Err(unknown(Self::NODE, name).into()),
        }
        Ok(())
    }
}

/// Sends `data` to the bot, optionally echoing `display_text` in the chat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostbackAction {
    /// Data delivered to the bot. Required.
    pub data: Option<String>,
    /// Label shown on the element.
    pub label: Option<String>,
    /// Text shown in the chat as if the user had sent it.
    pub display_text: Option<String>,
}

impl PostbackAction {
    /// Creates an action delivering `data`.
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            ..Self::default()
        }
    }

    /// Creates an action from an attribute map.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown or mistyped attribute.
    pub fn from_attributes(attributes: &Attributes) -> BuildResult<Self> {
        let mut action = Self::default();
        action.apply_attributes(attributes)?;
        Ok(action)
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the text echoed in the chat.
    #[must_use]
    pub fn with_display_text(mut self, display_text: impl Into<String>) -> Self {
        self.display_text = Some(display_text.into());
        self
    }

    /// Serializes the action in the given convention.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::RequiredField`] if `data` is unset.
    pub fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        let data = self
            .data
            .as_deref()
            .ok_or(BuildError::required(Self::NODE, "data"))?;
        let mut writer = PayloadWriter::tagged(mode, "postback");
        writer
            .put_opt("label", self.label.as_deref())
            .put("data", data)
            .put_opt("displayText", self.display_text.as_deref());
        Ok(writer.finish())
    }

    /// Serializes the action with standard keys.
    ///
    /// # Errors
    ///
    /// See [`PostbackAction::payload`].
    pub fn serialize(&self) -> BuildResult<Payload> {
        self.payload(SerializationMode::Standard)
    }
}

impl Configure for PostbackAction {
    const NODE: &'static str = "postback action";

    fn apply_attribute(&mut self, name: &str, value: &Value) -> BuildResult<()> {
        match name {
            "data" => self.data = string_value(name, value)?,
            "label" => self.label = string_value(name, value)?,
            "display_text" => self.display_text = string_value(name, value)?,
            _ => return Err(unknown(Self::NODE, name).into()),
        }
        Ok(())
    }
}

/// Opens `uri`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriAction {
    /// The URI to open. Required.
    pub uri: Option<String>,
    /// Label shown on the element.
    pub label: Option<String>,
}

impl UriAction {
    /// Creates an action opening `uri`.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            label: None,
        }
    }

    /// Creates an action from an attribute map.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown or mistyped attribute.
    pub fn from_attributes(attributes: &Attributes) -> BuildResult<Self> {
        let mut action = Self::default();
        action.apply_attributes(attributes)?;
        Ok(action)
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Serializes the action in the given convention.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::RequiredField`] if `uri` is unset.
    pub fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        let uri = self
            .uri
            .as_deref()
            .ok_or(BuildError::required(Self::NODE, "uri"))?;
        let mut writer = PayloadWriter::tagged(mode, "uri");
        writer
            .put_opt("label", self.label.as_deref())
            .put("uri", uri);
        Ok(writer.finish())
    }

    /// Serializes the action with standard keys.
    ///
    /// # Errors
    ///
    /// See [`UriAction::payload`].
    pub fn serialize(&self) -> BuildResult<Payload> {
        self.payload(SerializationMode::Standard)
    }
}

impl Configure for UriAction {
    const NODE: &'static str = "uri action";

    fn apply_attribute(&mut self, name: &str, value: &Value) -> BuildResult<()> {
        match name {
            "uri" => self.uri = string_value(name, value)?,
            "label" => self.label = string_value(name, value)?,
            _ => return Err(unknown(Self::NODE, name).into()),
        }
        Ok(())
    }
}
