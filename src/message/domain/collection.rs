//! The root of a construction pass.

use std::sync::Arc;

use serde_json::Value;

use super::{Attributes, BuildContext, FlexMessage, Message, TextMessage, attributes::Construct};
use crate::message::{
    error::{BuildError, BuildResult},
    ports::Context,
    serialization::Node,
};

/// An ordered sequence of top-level messages.
///
/// # Examples
///
/// ```
/// use flexcraft::message::domain::{Attributes, BuildContext, MessageCollection};
///
/// let collection = MessageCollection::build_with(BuildContext::new(), |messages| {
///     messages.text(&Attributes::new().with("text", "Hello, world!"), |_| Ok(()))?;
///     Ok(())
/// })
/// .expect("valid collection");
///
/// assert_eq!(
///     collection.to_wire_format().expect("complete messages"),
///     r#"[{"type":"text","text":"Hello, world!"}]"#,
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCollection {
    context: BuildContext,
    messages: Vec<Message>,
}

impl MessageCollection {
    /// Creates an empty collection within `context`.
    #[must_use]
    pub const fn new(context: BuildContext) -> Self {
        Self {
            context,
            messages: Vec::new(),
        }
    }

    /// Creates a collection within `context` and runs `block` against it.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `block`.
    pub fn build_with<F>(context: BuildContext, block: F) -> BuildResult<Self>
    where
        F: FnOnce(&mut Self) -> BuildResult<()>,
    {
        tracing::debug!(mode = ?context.mode(), "building message collection");
        let mut collection = Self::new(context);
        block(&mut collection)?;
        Ok(collection)
    }

    /// Appends a text message.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn text<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut TextMessage) -> BuildResult<()>,
    {
        let message = TextMessage::build(self.context.clone(), attributes, block)?;
        self.messages.push(Message::Text(message));
        Ok(self)
    }

    /// Appends a Flex message.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn flex<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut FlexMessage) -> BuildResult<()>,
    {
        let message = FlexMessage::build(self.context.clone(), attributes, block)?;
        self.messages.push(Message::Flex(message));
        Ok(self)
    }

    /// Appends a message built elsewhere.
    ///
    /// The message keeps the context it was built in; it is serialized in
    /// this collection's convention regardless.
    pub fn push(&mut self, message: impl Into<Message>) -> &mut Self {
        self.messages.push(message.into());
        self
    }

    /// Returns the messages in append order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the construction context shared by every message.
    #[must_use]
    pub const fn context(&self) -> &BuildContext {
        &self.context
    }

    /// Serializes every message, in order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while serializing a message.
    pub fn build(&self) -> BuildResult<Vec<Value>> {
        let mode = self.context.mode();
        tracing::debug!(?mode, count = self.messages.len(), "serializing messages");
        self.messages
            .iter()
            .map(|message| message.payload(mode).map(Value::Object))
            .collect()
    }

    /// Serializes every message and encodes the result as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns the first serialization error, or [`BuildError::Encoding`] if
    /// the payload cannot be encoded.
    pub fn to_wire_format(&self) -> BuildResult<String> {
        let payloads = self.build()?;
        serde_json::to_string(&payloads).map_err(BuildError::from)
    }
}

/// Builds a message collection, deciding the output convention from
/// `delegate` when one is given.
///
/// # Errors
///
/// Returns the first error raised by `block`.
pub fn build<F>(delegate: Option<Arc<dyn Context>>, block: F) -> BuildResult<MessageCollection>
where
    F: FnOnce(&mut MessageCollection) -> BuildResult<()>,
{
    let context = delegate.map_or_else(BuildContext::new, BuildContext::with_delegate);
    MessageCollection::build_with(context, block)
}
