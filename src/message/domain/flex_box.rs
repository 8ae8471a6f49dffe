//! Box containers and the components they hold.

use serde_json::Value;

use super::{
    Action, AlignItems, Attributes, BoxLayout, BuildContext, Button, EmptyBoxPolicy, Image,
    JustifyContent, Separator, Text,
    attributes::{
        Configure, Construct, action_value, keyword_value, size_value, string_value, to_keyword,
        unknown,
    },
    groups::{Actionable, FlexChild, ItemLayout, MARGIN, Offsets, Padded, Padding, Positioned},
};
use crate::message::{
    error::{BuildError, BuildResult},
    serialization::{Node, Payload, PayloadWriter, SerializationMode},
    validation::{SizeFormat, SizeValidator},
};

const DIMENSION: SizeValidator = SizeValidator::new(&[SizeFormat::Pixel, SizeFormat::Percentage]);
const CORNER_RADIUS: SizeValidator = SizeValidator::new(&[SizeFormat::Pixel, SizeFormat::Keyword]);
const BORDER_WIDTH: SizeValidator =
    SizeValidator::new(&[SizeFormat::Pixel, SizeFormat::BorderKeyword]);

/// A child of a [`FlexBox`].
#[derive(Debug, Clone)]
pub enum Component {
    /// A nested box.
    Box(Box<FlexBox>),
    /// A text.
    Text(Text),
    /// A button.
    Button(Button),
    /// An image.
    Image(Image),
    /// A separator.
    Separator(Separator),
}

impl Node for Component {
    fn context(&self) -> &BuildContext {
        match self {
            Self::Box(node) => node.context(),
            Self::Text(node) => node.context(),
            Self::Button(node) => node.context(),
            Self::Image(node) => node.context(),
            Self::Separator(node) => node.context(),
        }
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        match self {
            Self::Box(node) => node.payload(mode),
            Self::Text(node) => node.payload(mode),
            Self::Button(node) => node.payload(mode),
            Self::Image(node) => node.payload(mode),
            Self::Separator(node) => node.payload(mode),
        }
    }
}

/// A layout container arranging its children in one direction.
///
/// # Examples
///
/// ```
/// use flexcraft::message::domain::{Attributes, BuildContext, Construct, FlexBox, Padded};
/// use flexcraft::message::serialization::Node;
///
/// let body = FlexBox::build(
///     BuildContext::new(),
///     &Attributes::new().with("layout", "vertical"),
///     |body| {
///         body.padding_all("12px")?;
///         body.add_text(&Attributes::new().with("text", "Welcome!"), |_| Ok(()))?;
///         body.add_separator();
///         Ok(())
///     },
/// )
/// .expect("valid box");
///
/// let payload = body.serialize().expect("complete box");
/// assert_eq!(payload["layout"], "vertical");
/// assert_eq!(payload["paddingAll"], "12px");
/// assert_eq!(payload["contents"].as_array().map(Vec::len), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlexBox {
    context: BuildContext,
    layout: BoxLayout,
    contents: Vec<Component>,
    item_layout: ItemLayout,
    spacing: Option<String>,
    padding: Padding,
    offsets: Offsets,
    width: Option<String>,
    max_width: Option<String>,
    height: Option<String>,
    max_height: Option<String>,
    background_color: Option<String>,
    border_color: Option<String>,
    border_width: Option<String>,
    corner_radius: Option<String>,
    justify_content: Option<JustifyContent>,
    align_items: Option<AlignItems>,
    action: Option<Action>,
}

impl FlexBox {
    /// Returns the children in append order.
    #[must_use]
    pub fn contents(&self) -> &[Component] {
        &self.contents
    }

    /// Returns the layout direction.
    #[must_use]
    pub const fn layout_direction(&self) -> BoxLayout {
        self.layout
    }

    /// Appends a nested box.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn add_box<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut Self) -> BuildResult<()>,
    {
        self.append(attributes, block, |node: FlexBox| Component::Box(Box::new(node)))
    }

    /// Appends a text.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn add_text<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut Text) -> BuildResult<()>,
    {
        self.append(attributes, block, Component::Text)
    }

    /// Appends a button.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn add_button<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut Button) -> BuildResult<()>,
    {
        self.append(attributes, block, Component::Button)
    }

    /// Appends an image.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn add_image<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut Image) -> BuildResult<()>,
    {
        self.append(attributes, block, Component::Image)
    }

    /// Appends a separator.
    pub fn add_separator(&mut self) -> &mut Self {
        let separator = Separator::new_in(self.context.clone());
        self.contents.push(Component::Separator(separator));
        self
    }

    fn append<N, F>(
        &mut self,
        attributes: &Attributes,
        block: F,
        wrap: fn(N) -> Component,
    ) -> BuildResult<&mut Self>
    where
        N: Construct,
        F: FnOnce(&mut N) -> BuildResult<()>,
    {
        let child = N::build(self.context.clone(), attributes, block)?;
        self.contents.push(wrap(child));
        Ok(self)
    }

    /// Sets the layout direction.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless `layout` is `horizontal`,
    /// `vertical` or `baseline`.
    pub fn layout<V>(&mut self, layout: V) -> BuildResult<&mut Self>
    where
        V: TryInto<BoxLayout>,
        BuildError: From<V::Error>,
    {
        self.layout = to_keyword(layout)?;
        Ok(self)
    }

    /// Sets the minimum space between children.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `spacing` is not `<n>px` or a spacing
    /// keyword.
    pub fn spacing(&mut self, spacing: impl Into<String>) -> BuildResult<&mut Self> {
        self.spacing = Some(sized("spacing", MARGIN, spacing)?);
        Ok(self)
    }

    /// Sets the width, in pixels or as a percentage.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    pub fn width(&mut self, width: impl Into<String>) -> BuildResult<&mut Self> {
        self.width = Some(sized("width", DIMENSION, width)?);
        Ok(self)
    }

    /// Sets the maximum width, in pixels or as a percentage.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    pub fn max_width(&mut self, width: impl Into<String>) -> BuildResult<&mut Self> {
        self.max_width = Some(sized("maxWidth", DIMENSION, width)?);
        Ok(self)
    }

    /// Sets the height, in pixels or as a percentage.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    pub fn height(&mut self, height: impl Into<String>) -> BuildResult<&mut Self> {
        self.height = Some(sized("height", DIMENSION, height)?);
        Ok(self)
    }

    /// Sets the maximum height, in pixels or as a percentage.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    pub fn max_height(&mut self, height: impl Into<String>) -> BuildResult<&mut Self> {
        self.max_height = Some(sized("maxHeight", DIMENSION, height)?);
        Ok(self)
    }

    /// Sets the background colour as a hex string.
    pub fn background_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.background_color = Some(color.into());
        self
    }

    /// Sets the border colour as a hex string.
    pub fn border_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.border_color = Some(color.into());
        self
    }

    /// Sets the border width, in pixels or as a keyword such as `light`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed width.
    pub fn border_width(&mut self, width: impl Into<String>) -> BuildResult<&mut Self> {
        self.border_width = Some(sized("borderWidth", BORDER_WIDTH, width)?);
        Ok(self)
    }

    /// Sets the corner radius, in pixels or as a spacing keyword.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed radius.
    pub fn corner_radius(&mut self, radius: impl Into<String>) -> BuildResult<&mut Self> {
        self.corner_radius = Some(sized("cornerRadius", CORNER_RADIUS, radius)?);
        Ok(self)
    }

    /// Sets how free space is distributed along the main axis.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn justify_content<V>(&mut self, justify: V) -> BuildResult<&mut Self>
    where
        V: TryInto<JustifyContent>,
        BuildError: From<V::Error>,
    {
        self.justify_content = Some(to_keyword(justify)?);
        Ok(self)
    }

    /// Sets how children are aligned along the cross axis.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn align_items<V>(&mut self, align: V) -> BuildResult<&mut Self>
    where
        V: TryInto<AlignItems>,
        BuildError: From<V::Error>,
    {
        self.align_items = Some(to_keyword(align)?);
        Ok(self)
    }
}

fn sized(
    field: &'static str,
    validator: SizeValidator,
    value: impl Into<String>,
) -> BuildResult<String> {
    let size_text = value.into();
    validator.validate(field, &size_text)?;
    Ok(size_text)
}

impl Configure for FlexBox {
    const NODE: &'static str = "box";

    fn apply_attribute(&mut self, name: &str, value: &Value) -> BuildResult<()> {
        if self.item_layout.apply(name, value)?
            || self.padding.apply(name, value)?
            || self.offsets.apply(name, value)?
        {
            return Ok(());
        }
        match name {
            "layout" => self.layout = keyword_value(name, value)?.unwrap_or(self.layout),
            "spacing" => self.spacing = size_value("spacing", MARGIN, value)?,
            "width" => self.width = size_value("width", DIMENSION, value)?,
            "max_width" => self.max_width = size_value("maxWidth", DIMENSION, value)?,
            "height" => self.height = size_value("height", DIMENSION, value)?,
            "max_height" => self.max_height = size_value("maxHeight", DIMENSION, value)?,
            "background_color" => self.background_color = string_value(name, value)?,
            "border_color" => self.border_color = string_value(name, value)?,
            "border_width" => {
                self.border_width = size_value("borderWidth", BORDER_WIDTH, value)?;
            }
            "corner_radius" => {
                self.corner_radius = size_value("cornerRadius", CORNER_RADIUS, value)?;
            }
            "justify_content" => self.justify_content = keyword_value(name, value)?,
            "align_items" => self.align_items = keyword_value(name, value)?,
            "action" => self.action = action_value(name, value)?,
            _ => return Err(unknown(Self::NODE, name).into()),
        }
        Ok(())
    }
}

impl Construct for FlexBox {
    fn new_in(context: BuildContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }
}

impl FlexChild for FlexBox {
    fn item_layout_mut(&mut self) -> &mut ItemLayout {
        &mut self.item_layout
    }
}

impl Padded for FlexBox {
    fn padding_mut(&mut self) -> &mut Padding {
        &mut self.padding
    }
}

impl Positioned for FlexBox {
    fn offsets_mut(&mut self) -> &mut Offsets {
        &mut self.offsets
    }
}

impl Actionable for FlexBox {
    fn action_mut(&mut self) -> &mut Option<Action> {
        &mut self.action
    }
}

impl Node for FlexBox {
    fn context(&self) -> &BuildContext {
        &self.context
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        if self.contents.is_empty() && self.context.config().empty_box == EmptyBoxPolicy::Reject {
            tracing::debug!("empty box rejected by configuration");
            return Err(BuildError::required(Self::NODE, "contents"));
        }
        let mut writer = PayloadWriter::tagged(mode, "box");
        writer
            .put_keyword("layout", Some(self.layout))
            .put_nodes("contents", &self.contents)?;
        self.item_layout.write(&mut writer);
        writer.put_opt("spacing", self.spacing.as_deref());
        self.padding.write(&mut writer);
        self.offsets.write(&mut writer);
        writer
            .put_opt("width", self.width.as_deref())
            .put_opt("maxWidth", self.max_width.as_deref())
            .put_opt("height", self.height.as_deref())
            .put_opt("maxHeight", self.max_height.as_deref())
            .put_opt("backgroundColor", self.background_color.as_deref())
            .put_opt("borderColor", self.border_color.as_deref())
            .put_opt("borderWidth", self.border_width.as_deref())
            .put_opt("cornerRadius", self.corner_radius.as_deref())
            .put_keyword("justifyContent", self.justify_content)
            .put_keyword("alignItems", self.align_items)
            .put_action("action", self.action.as_ref())?;
        Ok(writer.finish())
    }
}
