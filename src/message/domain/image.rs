//! Image components.

use serde_json::Value;

use super::{
    Action, Align, AspectMode, BuildContext, Gravity,
    attributes::{
        Configure, Construct, action_value, bool_value, keyword_value, size_value, string_value,
        to_keyword, unknown,
    },
    groups::{Actionable, FlexChild, ItemLayout, Offsets, Positioned},
};
use crate::message::{
    error::{BuildError, BuildResult},
    serialization::{Node, Payload, PayloadWriter, SerializationMode},
    validation::{SizeFormat, SizeValidator, validate_aspect_ratio},
};

const IMAGE_SIZE: SizeValidator = SizeValidator::new(&[
    SizeFormat::Pixel,
    SizeFormat::Percentage,
    SizeFormat::ImageKeyword,
]);

/// An image loaded from `url`.
#[derive(Debug, Clone, Default)]
pub struct Image {
    context: BuildContext,
    url: Option<String>,
    item_layout: ItemLayout,
    offsets: Offsets,
    align: Option<Align>,
    gravity: Option<Gravity>,
    size: Option<String>,
    aspect_ratio: Option<String>,
    aspect_mode: Option<AspectMode>,
    background_color: Option<String>,
    animated: Option<bool>,
    action: Option<Action>,
}

impl Image {
    /// Sets the image URL. Required.
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
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

    /// Sets the image width, in pixels, as a percentage, or as a keyword
    /// from `xxs` to `5xl` or `full`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    pub fn size(&mut self, size: impl Into<String>) -> BuildResult<&mut Self> {
        let size_text = size.into();
        IMAGE_SIZE.validate("size", &size_text)?;
        self.size = Some(size_text);
        Ok(self)
    }

    /// Sets the aspect ratio as `<width>:<height>`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed ratio.
    pub fn aspect_ratio(&mut self, ratio: impl Into<String>) -> BuildResult<&mut Self> {
        let ratio_text = ratio.into();
        validate_aspect_ratio(&ratio_text)?;
        self.aspect_ratio = Some(ratio_text);
        Ok(self)
    }

    /// Sets how the image fills its area.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn aspect_mode<V>(&mut self, mode: V) -> BuildResult<&mut Self>
    where
        V: TryInto<AspectMode>,
        BuildError: From<V::Error>,
    {
        self.aspect_mode = Some(to_keyword(mode)?);
        Ok(self)
    }

    /// Sets the background colour as a hex string.
    pub fn background_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.background_color = Some(color.into());
        self
    }

    /// Plays an animated image.
    pub const fn animated(&mut self, animated: bool) -> &mut Self {
        self.animated = Some(animated);
        self
    }
}

impl Configure for Image {
    const NODE: &'static str = "image";

    fn apply_attribute(&mut self, name: &str, value: &Value) -> BuildResult<()> {
        if self.item_layout.apply(name, value)? || self.offsets.apply(name, value)? {
            return Ok(());
        }
        match name {
            "url" => self.url = string_value(name, value)?,
            "align" => self.align = keyword_value(name, value)?,
            "gravity" => self.gravity = keyword_value(name, value)?,
            "size" => self.size = size_value("size", IMAGE_SIZE, value)?,
            "aspect_ratio" => {
                let ratio = string_value(name, value)?;
                if let Some(text) = ratio.as_deref() {
                    validate_aspect_ratio(text)?;
                }
                self.aspect_ratio = ratio;
            }
            "aspect_mode" => self.aspect_mode = keyword_value(name, value)?,
            "background_color" => self.background_color = string_value(name, value)?,
            "animated" => self.animated = bool_value(name, value)?,
            "action" => self.action = action_value(name, value)?,
            _ => return Err(unknown(Self::NODE, name).into()),
        }
        Ok(())
    }
}

impl Construct for Image {
    fn new_in(context: BuildContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }
}

impl FlexChild for Image {
    fn item_layout_mut(&mut self) -> &mut ItemLayout {
        &mut self.item_layout
    }
}

impl Positioned for Image {
    fn offsets_mut(&mut self) -> &mut Offsets {
        &mut self.offsets
    }
}

impl Actionable for Image {
    fn action_mut(&mut self) -> &mut Option<Action> {
        &mut self.action
    }
}

impl Node for Image {
    fn context(&self) -> &BuildContext {
        &self.context
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        let url = self
            .url
            .as_deref()
            .ok_or(BuildError::required(Self::NODE, "url"))?;
        let mut writer = PayloadWriter::tagged(mode, "image");
        writer.put("url", url);
        self.item_layout.write(&mut writer);
        self.offsets.write(&mut writer);
        writer
            .put_keyword("align", self.align)
            .put_keyword("gravity", self.gravity)
            .put_opt("size", self.size.as_deref())
            .put_opt("aspectRatio", self.aspect_ratio.as_deref())
            .put_keyword("aspectMode", self.aspect_mode)
            .put_opt("backgroundColor", self.background_color.as_deref())
            .put_opt("animated", self.animated)
            .put_action("action", self.action.as_ref())?;
        Ok(writer.finish())
    }
}
