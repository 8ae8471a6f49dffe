//! Bubbles: one self-contained unit of a Flex message.

use serde_json::{Map, Value};

use super::{
    Action, Attributes, BubbleSize, BuildContext, Direction, FlexBox, Image,
    attributes::{
        Configure, Construct, action_value, keyword_value, object_value, to_keyword, unknown,
    },
    groups::Actionable,
};
use crate::message::{
    error::{BuildError, BuildResult},
    serialization::{Node, Payload, PayloadWriter, SerializationMode},
};

/// The content of a bubble's hero slot.
#[derive(Debug, Clone)]
pub enum Hero {
    /// A box.
    Box(Box<FlexBox>),
    /// An image, the usual hero.
    Image(Image),
}

impl Node for Hero {
    fn context(&self) -> &BuildContext {
        match self {
            Self::Box(node) => node.context(),
            Self::Image(node) => node.context(),
        }
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        match self {
            Self::Box(node) => node.payload(mode),
            Self::Image(node) => node.payload(mode),
        }
    }
}

/// A bubble with up to four slots: header, hero, body and footer.
///
/// Assigning a slot replaces whatever it held before; no slot is required.
#[derive(Debug, Clone, Default)]
pub struct Bubble {
    context: BuildContext,
    size: Option<BubbleSize>,
    direction: Option<Direction>,
    header: Option<FlexBox>,
    hero: Option<Hero>,
    body: Option<FlexBox>,
    footer: Option<FlexBox>,
    styles: Option<Map<String, Value>>,
    action: Option<Action>,
}

impl Bubble {
    /// Sets the header slot.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn header<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut FlexBox) -> BuildResult<()>,
    {
        self.header = Some(FlexBox::build(self.context.clone(), attributes, block)?);
        Ok(self)
    }

    /// Sets the hero slot to a box.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn hero<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut FlexBox) -> BuildResult<()>,
    {
        let hero = FlexBox::build(self.context.clone(), attributes, block)?;
        self.hero = Some(Hero::Box(Box::new(hero)));
        Ok(self)
    }

    /// Sets the hero slot to an image.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn hero_image<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut Image) -> BuildResult<()>,
    {
        let hero = Image::build(self.context.clone(), attributes, block)?;
        self.hero = Some(Hero::Image(hero));
        Ok(self)
    }

    /// Sets the body slot.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn body<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut FlexBox) -> BuildResult<()>,
    {
        self.body = Some(FlexBox::build(self.context.clone(), attributes, block)?);
        Ok(self)
    }

    /// Sets the footer slot.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn footer<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut FlexBox) -> BuildResult<()>,
    {
        self.footer = Some(FlexBox::build(self.context.clone(), attributes, block)?);
        Ok(self)
    }

    /// Sets the width class.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn size<V>(&mut self, size: V) -> BuildResult<&mut Self>
    where
        V: TryInto<BubbleSize>,
        BuildError: From<V::Error>,
    {
        self.size = Some(to_keyword(size)?);
        Ok(self)
    }

    /// Sets the text direction.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn direction<V>(&mut self, direction: V) -> BuildResult<&mut Self>
    where
        V: TryInto<Direction>,
        BuildError: From<V::Error>,
    {
        self.direction = Some(to_keyword(direction)?);
        Ok(self)
    }

    /// Sets the free-form block styles, keyed by slot name.
    pub fn styles(&mut self, styles: Map<String, Value>) -> &mut Self {
        self.styles = Some(styles);
        self
    }

    /// Returns the header slot.
    #[must_use]
    pub const fn header_box(&self) -> Option<&FlexBox> {
        self.header.as_ref()
    }

    /// Returns the hero slot.
    #[must_use]
    pub const fn hero_content(&self) -> Option<&Hero> {
        self.hero.as_ref()
    }

    /// Returns the body slot.
    #[must_use]
    pub const fn body_box(&self) -> Option<&FlexBox> {
        self.body.as_ref()
    }

    /// Returns the footer slot.
    #[must_use]
    pub const fn footer_box(&self) -> Option<&FlexBox> {
        self.footer.as_ref()
    }
}

impl Configure for Bubble {
    const NODE: &'static str = "bubble";

    fn apply_attribute(&mut self, name: &str, value: &Value) -> BuildResult<()> {
        match name {
            "size" => self.size = keyword_value(name, value)?,
            "direction" => self.direction = keyword_value(name, value)?,
            "styles" => self.styles = object_value(name, value)?,
            "action" => self.action = action_value(name, value)?,
            _ => return Err(unknown(Self::NODE, name).into()),
        }
        Ok(())
    }
}

impl Construct for Bubble {
    fn new_in(context: BuildContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }
}

impl Actionable for Bubble {
    fn action_mut(&mut self) -> &mut Option<Action> {
        &mut self.action
    }
}

impl Node for Bubble {
    fn context(&self) -> &BuildContext {
        &self.context
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        let mut writer = PayloadWriter::tagged(mode, "bubble");
        writer
            .put_keyword("size", self.size)
            .put_keyword("direction", self.direction)
            .put_node("header", self.header.as_ref())?
            .put_node("hero", self.hero.as_ref())?
            .put_node("body", self.body.as_ref())?
            .put_node("footer", self.footer.as_ref())?
            .put_map("styles", self.styles.as_ref())
            .put_action("action", self.action.as_ref())?;
        Ok(writer.finish())
    }
}
