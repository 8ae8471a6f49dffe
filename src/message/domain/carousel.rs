//! Carousels: horizontally swipeable sequences of bubbles.

use serde_json::Value;

use super::{
    Attributes, Bubble, BuildContext,
    attributes::{Configure, Construct, unknown},
};
use crate::message::{
    error::{BuildError, BuildResult},
    serialization::{Node, Payload, PayloadWriter, SerializationMode},
    validation::{MAX_CAROUSEL_BUBBLES, validate_item_count},
};

/// An ordered sequence of one to twelve bubbles.
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    context: BuildContext,
    contents: Vec<Bubble>,
}

impl Carousel {
    /// Appends a bubble.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn add_bubble<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut Bubble) -> BuildResult<()>,
    {
        let bubble = Bubble::build(self.context.clone(), attributes, block)?;
        self.contents.push(bubble);
        Ok(self)
    }

    /// Returns the bubbles in append order.
    #[must_use]
    pub fn bubbles(&self) -> &[Bubble] {
        &self.contents
    }
}

impl Configure for Carousel {
    const NODE: &'static str = "carousel";

    fn apply_attribute(&mut self, name: &str, _value: &Value) -> BuildResult<()> {
        Err(unknown(Self::NODE, name).into())
    }
}

impl Construct for Carousel {
    fn new_in(context: BuildContext) -> Self {
        Self {
            context,
            contents: Vec::new(),
        }
    }
}

impl Node for Carousel {
    fn context(&self) -> &BuildContext {
        &self.context
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        if self.contents.is_empty() {
            tracing::debug!("carousel has no bubbles");
            return Err(BuildError::required(Self::NODE, "contents"));
        }
        validate_item_count(Self::NODE, self.contents.len(), MAX_CAROUSEL_BUBBLES)?;
        let mut writer = PayloadWriter::tagged(mode, "carousel");
        writer.put_nodes("contents", &self.contents)?;
        Ok(writer.finish())
    }
}
