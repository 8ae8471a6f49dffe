//! Text components and their inline spans.

use serde_json::Value;

use super::{
    Action, AdjustMode, Align, BuildContext, Decoration, FontStyle, FontWeight, Gravity,
    attributes::{
        Attributes, Configure, Construct, action_value, bool_value, keyword_value, size_value,
        string_value, to_keyword, u32_value, unknown,
    },
    groups::{Actionable, FlexChild, ItemLayout, Offsets, Positioned},
};
use crate::message::{
    error::{BuildError, BuildResult},
    serialization::{Node, Payload, PayloadWriter, SerializationMode},
    validation::{SizeFormat, SizeValidator},
};

const TEXT_SIZE: SizeValidator = SizeValidator::new(&[SizeFormat::Pixel, SizeFormat::FontKeyword]);
const LINE_SPACING: SizeValidator = SizeValidator::new(&[SizeFormat::Pixel]);

/// A run of text, optionally split into styled [`Span`]s.
///
/// A text needs content: its own `text`, at least one span, or both. When
/// spans are present the platform renders them instead of `text`.
///
/// # Examples
///
/// ```
/// use flexcraft::message::domain::{Attributes, BuildContext, Construct, Text};
/// use flexcraft::message::serialization::Node;
///
/// let text = Text::build(BuildContext::new(), &Attributes::new(), |text| {
///     text.add_span(&Attributes::new().with("text", "Hello "), |_| Ok(()))?;
///     text.add_span(&Attributes::new().with("text", "world"), |span| {
///         span.bold();
///         Ok(())
///     })?;
///     Ok(())
/// })
/// .expect("valid text");
///
/// let payload = text.serialize().expect("text has spans");
/// assert!(payload.get("text").is_none());
/// assert_eq!(payload["contents"].as_array().map(Vec::len), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Text {
    context: BuildContext,
    text: Option<String>,
    contents: Vec<Span>,
    adjust_mode: Option<AdjustMode>,
    item_layout: ItemLayout,
    offsets: Offsets,
    size: Option<String>,
    scaling: Option<bool>,
    wrap: Option<bool>,
    line_spacing: Option<String>,
    max_lines: Option<u32>,
    weight: Option<FontWeight>,
    color: Option<String>,
    action: Option<Action>,
    style: Option<FontStyle>,
    decoration: Option<Decoration>,
    align: Option<Align>,
    gravity: Option<Gravity>,
}

impl Text {
    /// Sets the plain text.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a span built from `attributes` and `block`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    pub fn add_span<F>(&mut self, attributes: &Attributes, block: F) -> BuildResult<&mut Self>
    where
        F: FnOnce(&mut Span) -> BuildResult<()>,
    {
        let span = Span::build(self.context.clone(), attributes, block)?;
        self.contents.push(span);
        Ok(self)
    }

    /// Returns the spans in append order.
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.contents
    }

    /// Returns `true` if the text has its own text or at least one span.
    #[must_use]
    pub const fn has_content(&self) -> bool {
        self.text.is_some() || !self.contents.is_empty()
    }

    /// Shrinks the font to fit the available space.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn adjust_mode<V>(&mut self, mode: V) -> BuildResult<&mut Self>
    where
        V: TryInto<AdjustMode>,
        BuildError: From<V::Error>,
    {
        self.adjust_mode = Some(to_keyword(mode)?);
        Ok(self)
    }

    /// Sets the font size, in pixels or as a keyword from `xxs` to `5xl`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    pub fn size(&mut self, size: impl Into<String>) -> BuildResult<&mut Self> {
        let text_size = size.into();
        TEXT_SIZE.validate("size", &text_size)?;
        self.size = Some(text_size);
        Ok(self)
    }

    /// Scales the font with the user's accessibility settings.
    pub const fn scaling(&mut self, scaling: bool) -> &mut Self {
        self.scaling = Some(scaling);
        self
    }

    /// Wraps long text onto several lines.
    pub const fn wrap(&mut self, wrap: bool) -> &mut Self {
        self.wrap = Some(wrap);
        self
    }

    /// Sets the line spacing, in pixels.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `spacing` is not `<n>px`.
    pub fn line_spacing(&mut self, spacing: impl Into<String>) -> BuildResult<&mut Self> {
        let spacing_text = spacing.into();
        LINE_SPACING.validate("lineSpacing", &spacing_text)?;
        self.line_spacing = Some(spacing_text);
        Ok(self)
    }

    /// Limits the number of rendered lines. `0` means unlimited.
    pub const fn max_lines(&mut self, max_lines: u32) -> &mut Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Sets the font weight.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn weight<V>(&mut self, weight: V) -> BuildResult<&mut Self>
    where
        V: TryInto<FontWeight>,
        BuildError: From<V::Error>,
    {
        self.weight = Some(to_keyword(weight)?);
        Ok(self)
    }

    /// Sets the font colour as a hex string.
    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the font style.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn style<V>(&mut self, style: V) -> BuildResult<&mut Self>
    where
        V: TryInto<FontStyle>,
        BuildError: From<V::Error>,
    {
        self.style = Some(to_keyword(style)?);
        Ok(self)
    }

    /// Sets the line decoration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn decoration<V>(&mut self, decoration: V) -> BuildResult<&mut Self>
    where
        V: TryInto<Decoration>,
        BuildError: From<V::Error>,
    {
        self.decoration = Some(to_keyword(decoration)?);
        Ok(self)
    }

    /// Sets the horizontal alignment.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn align<V>(&mut self, align: V) -> BuildResult<&mut Self>
    where
        V: TryInto<Align>,
        BuildError: From<V::Error>,
    {
        self.align = Some(to_keyword(align)?);
        Ok(self)
    }

    /// Sets the vertical alignment.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn gravity<V>(&mut self, gravity: V) -> BuildResult<&mut Self>
    where
        V: TryInto<Gravity>,
        BuildError: From<V::Error>,
    {
        self.gravity = Some(to_keyword(gravity)?);
        Ok(self)
    }
}

impl Configure for Text {
    const NODE: &'static str = "text";

    fn apply_attribute(&mut self, name: &str, value: &Value) -> BuildResult<()> {
        if self.item_layout.apply(name, value)? || self.offsets.apply(name, value)? {
            return Ok(());
        }
        match name {
            "text" => self.text = string_value(name, value)?,
            "adjust_mode" => self.adjust_mode = keyword_value(name, value)?,
            "size" => self.size = size_value("size", TEXT_SIZE, value)?,
            "scaling" => self.scaling = bool_value(name, value)?,
            "wrap" => self.wrap = bool_value(name, value)?,
            "line_spacing" => {
                self.line_spacing = size_value("lineSpacing", LINE_SPACING, value)?;
            }
            "max_lines" => self.max_lines = u32_value(name, value)?,
            "weight" => self.weight = keyword_value(name, value)?,
            "color" => self.color = string_value(name, value)?,
            "style" => self.style = keyword_value(name, value)?,
            "decoration" => self.decoration = keyword_value(name, value)?,
            "align" => self.align = keyword_value(name, value)?,
            "gravity" => self.gravity = keyword_value(name, value)?,
            "action" => self.action = action_value(name, value)?,
            _ => return Err(unknown(Self::NODE, name).into()),
        }
        Ok(())
    }
}

impl Construct for Text {
    fn new_in(context: BuildContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }
}

impl FlexChild for Text {
    fn item_layout_mut(&mut self) -> &mut ItemLayout {
        &mut self.item_layout
    }
}

impl Positioned for Text {
    fn offsets_mut(&mut self) -> &mut Offsets {
        &mut self.offsets
    }
}

impl Actionable for Text {
    fn action_mut(&mut self) -> &mut Option<Action> {
        &mut self.action
    }
}

impl Node for Text {
    fn context(&self) -> &BuildContext {
        &self.context
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        if !self.has_content() {
            tracing::debug!("text has neither text nor spans");
            return Err(BuildError::required(Self::NODE, "text"));
        }
        let mut writer = PayloadWriter::tagged(mode, "text");
        writer.put_opt("text", self.text.as_deref());
        if !self.contents.is_empty() {
            writer.put_nodes("contents", &self.contents)?;
        }
        writer.put_keyword("adjustMode", self.adjust_mode);
        self.item_layout.write(&mut writer);
        self.offsets.write(&mut writer);
        writer
            .put_opt("size", self.size.as_deref())
            .put_opt("scaling", self.scaling)
            .put_opt("wrap", self.wrap)
            .put_opt("lineSpacing", self.line_spacing.as_deref())
            .put_opt("maxLines", self.max_lines)
            .put_keyword("weight", self.weight)
            .put_opt("color", self.color.as_deref())
            .put_action("action", self.action.as_ref())?
            .put_keyword("style", self.style)
            .put_keyword("decoration", self.decoration)
            .put_keyword("align", self.align)
            .put_keyword("gravity", self.gravity);
        Ok(writer.finish())
    }
}

/// An inline styled run inside a [`Text`]. Spans carry no action.
#[derive(Debug, Clone, Default)]
pub struct Span {
    context: BuildContext,
    text: Option<String>,
    color: Option<String>,
    size: Option<String>,
    weight: Option<FontWeight>,
    style: Option<FontStyle>,
    decoration: Option<Decoration>,
}

impl Span {
    /// Sets the span's text.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the font colour as a hex string.
    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the font size, in pixels or as a keyword from `xxs` to `5xl`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    pub fn size(&mut self, size: impl Into<String>) -> BuildResult<&mut Self> {
        let text_size = size.into();
        TEXT_SIZE.validate("size", &text_size)?;
        self.size = Some(text_size);
        Ok(self)
    }

    /// Sets the font weight.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn weight<V>(&mut self, weight: V) -> BuildResult<&mut Self>
    where
        V: TryInto<FontWeight>,
        BuildError: From<V::Error>,
    {
        self.weight = Some(to_keyword(weight)?);
        Ok(self)
    }

    /// Sets the font style.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn style<V>(&mut self, style: V) -> BuildResult<&mut Self>
    where
        V: TryInto<FontStyle>,
        BuildError: From<V::Error>,
    {
        self.style = Some(to_keyword(style)?);
        Ok(self)
    }

    /// Sets the line decoration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn decoration<V>(&mut self, decoration: V) -> BuildResult<&mut Self>
    where
        V: TryInto<Decoration>,
        BuildError: From<V::Error>,
    {
        self.decoration = Some(to_keyword(decoration)?);
        Ok(self)
    }

    /// Sets the weight to bold.
    pub const fn bold(&mut self) -> &mut Self {
        self.weight = Some(FontWeight::Bold);
        self
    }

    /// Underlines the span.
    pub const fn underline(&mut self) -> &mut Self {
        self.decoration = Some(Decoration::Underline);
        self
    }

    /// Strikes the span through.
    pub const fn line_through(&mut self) -> &mut Self {
        self.decoration = Some(Decoration::LineThrough);
        self
    }
}

impl Configure for Span {
    const NODE: &'static str = "span";

    fn apply_attribute(&mut self, name: &str, value: &Value) -> BuildResult<()> {
        match name {
            "text" => self.text = string_value(name, value)?,
            "color" => self.color = string_value(name, value)?,
            "size" => self.size = size_value("size", TEXT_SIZE, value)?,
            "weight" => self.weight = keyword_value(name, value)?,
            "style" => self.style = keyword_value(name, value)?,
            "decoration" => self.decoration = keyword_value(name, value)?,
            _ => return Err(unknown(Self::NODE, name).into()),
        }
        Ok(())
    }
}

impl Construct for Span {
    fn new_in(context: BuildContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }
}

impl Node for Span {
    fn context(&self) -> &BuildContext {
        &self.context
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        let text = self
            .text
            .as_deref()
            .ok_or(BuildError::required(Self::NODE, "text"))?;
        let mut writer = PayloadWriter::tagged(mode, "span");
        writer
            .put("text", text)
            .put_opt("color", self.color.as_deref())
            .put_opt("size", self.size.as_deref())
            .put_keyword("weight", self.weight)
            .put_keyword("style", self.style)
            .put_keyword("decoration", self.decoration);
        Ok(writer.finish())
    }
}
