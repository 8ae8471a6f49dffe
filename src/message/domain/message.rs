//! Top-level messages.

use serde_json::Value;

use super::{
    Attributes, Bubble, BuildContext, Carousel, QuickReply,
    attributes::{Configure, Construct, string_value, unknown},
};
use crate::message::{
    error::{BuildError, BuildResult},
    serialization::{Node, Payload, PayloadWriter, SerializationMode},
    validation::{MAX_ALT_TEXT_LENGTH, MAX_TEXT_MESSAGE_LENGTH, validate_length},
};

/// A message sent to a chat.
#[derive(Debug, Clone)]
pub enum Message {
    /// A plain text message.
    Text(TextMessage),
    /// A Flex message.
    Flex(FlexMessage),
}

impl Node for Message {
    fn context(&self) -> &BuildContext {
        match self {
            Self::Text(message) => message.context(),
            Self::Flex(message) => message.context(),
        }
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        match self {
            Self::Text(message) => message.payload(mode),
            Self::Flex(message) => message.payload(mode),
        }
    }
}

impl From<TextMessage> for Message {
    fn from(message: TextMessage) -> Self {
        Self::Text(message)
    }
}

impl From<FlexMessage> for Message {
    fn from(message: FlexMessage) -> Self {
        Self::Flex(message)
    }
}

/// A plain text message.
#[derive(Debug, Clone, Default)]
pub struct TextMessage {
    context: BuildContext,
    text: Option<String>,
    quote_token: Option<String>,
    quick_reply: Option<QuickReply>,
}

impl TextMessage {
    /// Sets the message text. Required.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Quotes an earlier message by its quote token.
    pub fn quote_token(&mut self, token: impl Into<String>) -> &mut Self {
        self.quote_token = Some(token.into());
        self
    }

    /// Attaches a quick reply, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `block`.
    pub fn quick_reply<F>(&mut self, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut QuickReply) -> BuildResult<()>,
    {
        let quick_reply = QuickReply::build(self.context.clone(), &Attributes::new(), block)?;
        self.quick_reply = Some(quick_reply);
        Ok(self)
    }
}

impl Configure for TextMessage {
    const NODE: &'static str = "text message";

    fn apply_attribute(&mut self, name: &str, value: &Value) -> BuildResult<()> {
        match name {
            "text" => self.text = string_value(name, value)?,
            "quote_token" => self.quote_token = string_value(name, value)?,
            _ => return Err(unknown(Self::NODE, name).into()),
        }
        Ok(())
    }
}

impl Construct for TextMessage {
    fn new_in(context: BuildContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }
}

impl Node for TextMessage {
    fn context(&self) -> &BuildContext {
        &self.context
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        let text = self
            .text
            .as_deref()
            .ok_or(BuildError::required(Self::NODE, "text"))?;
        if self.context.config().enforce_platform_limits {
            validate_length("text", text, MAX_TEXT_MESSAGE_LENGTH)?;
        }
        let mut writer = PayloadWriter::tagged(mode, "text");
        writer
            .put("text", text)
            .put_opt("quoteToken", self.quote_token.as_deref())
            .put_node("quickReply", self.quick_reply.as_ref())?;
        Ok(writer.finish())
    }
}

/// The root content of a Flex message.
#[derive(Debug, Clone)]
pub enum FlexContents {
    /// A single bubble.
    Bubble(Box<Bubble>),
    /// A carousel of bubbles.
    Carousel(Carousel),
}

impl Node for FlexContents {
    fn context(&self) -> &BuildContext {
        match self {
            Self::Bubble(node) => node.context(),
            Self::Carousel(node) => node.context(),
        }
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        match self {
            Self::Bubble(node) => node.payload(mode),
            Self::Carousel(node) => node.payload(mode),
        }
    }
}

/// A message whose body is a tree of boxes and components.
///
/// # Examples
///
/// ```
/// use flexcraft::message::domain::{Attributes, BuildContext, Construct, FlexMessage};
/// use flexcraft::message::serialization::Node;
///
/// let message = FlexMessage::build(
///     BuildContext::new(),
///     &Attributes::new().with("altText", "Greeting"),
///     |flex| {
///         flex.bubble(&Attributes::new(), |bubble| {
///             bubble.body(&Attributes::new(), |body| {
///                 body.add_text(&Attributes::new().with("text", "Welcome!"), |_| Ok(()))?;
///                 Ok(())
///             })?;
///             Ok(())
///         })?;
///         Ok(())
///     },
/// )
/// .expect("valid message");
///
/// let payload = message.serialize().expect("complete message");
/// assert_eq!(payload["contents"]["body"]["contents"][0]["text"], "Welcome!");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlexMessage {
    context: BuildContext,
    alt_text: Option<String>,
    contents: Option<FlexContents>,
    quick_reply: Option<QuickReply>,
}

impl FlexMessage {
    /// Sets the text shown where the Flex layout cannot be rendered.
    pub fn alt_text(&mut self, alt_text: impl Into<String>) -> &mut Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    /// Sets the root content to a bubble, replacing any previous root.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn bubble<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut Bubble) -> BuildResult<()>,
    {
        let bubble = Bubble::build(self.context.clone(), attributes, block)?;
        self.contents = Some(FlexContents::Bubble(Box::new(bubble)));
        Ok(self)
    }

    /// Sets the root content to a carousel, replacing any previous root.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn carousel<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut Carousel) -> BuildResult<()>,
    {
        let carousel = Carousel::build(self.context.clone(), attributes, block)?;
        self.contents = Some(FlexContents::Carousel(carousel));
        Ok(self)
    }

    /// Attaches a quick reply, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `block`.
    pub fn quick_reply<F>(&mut self, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut QuickReply) -> BuildResult<()>,
    {
        let quick_reply = QuickReply::build(self.context.clone(), &Attributes::new(), block)?;
        self.quick_reply = Some(quick_reply);
        Ok(self)
    }

    /// Returns the root content, if set.
    #[must_use]
    pub const fn contents(&self) -> Option<&FlexContents> {
        self.contents.as_ref()
    }
}

impl Configure for FlexMessage {
    const NODE: &'static str = "flex message";

    fn apply_attribute(&mut self, name: &str, value: &Value) -> BuildResult<()> {
        match name {
            "alt_text" => self.alt_text = string_value(name, value)?,
            _ => return Err(unknown(Self::NODE, name).into()),
        }
        Ok(())
    }
}

impl Construct for FlexMessage {
    fn new_in(context: BuildContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }
}

impl Node for FlexMessage {
    fn context(&self) -> &BuildContext {
        &self.context
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        let Some(contents) = self.contents.as_ref() else {
            tracing::debug!("flex message has no root content");
            return Err(BuildError::structural(
                Self::NODE,
                "a bubble or carousel must be set",
            ));
        };
        let alt_text = self
            .alt_text
            .as_deref()
            .ok_or(BuildError::required(Self::NODE, "altText"))?;
        if self.context.config().enforce_platform_limits {
            validate_length("altText", alt_text, MAX_ALT_TEXT_LENGTH)?;
        }
        let mut writer = PayloadWriter::tagged(mode, "flex");
        writer
            .put("altText", alt_text)
            .put_node("contents", Some(contents))?
            .put_node("quickReply", self.quick_reply.as_ref())?;
        Ok(writer.finish())
    }
}
