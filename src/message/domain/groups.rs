//! Attribute groups shared by several node kinds.
//!
//! A node embeds the groups it supports by value and implements the
//! matching trait, whose provided methods are the group's setters.

use serde_json::Value;

use super::{
    Action, Position,
    attributes::{keyword_value, size_value, to_keyword, u32_value},
};
use crate::message::{
    error::{BuildError, BuildResult},
    serialization::PayloadWriter,
    validation::{SizeFormat, SizeValidator},
};

pub(crate) const MARGIN: SizeValidator =
    SizeValidator::new(&[SizeFormat::Pixel, SizeFormat::Keyword]);
pub(crate) const OFFSET: SizeValidator = SizeValidator::new(&[
    SizeFormat::Pixel,
    SizeFormat::Percentage,
    SizeFormat::Keyword,
]);
pub(crate) const PADDING: SizeValidator = SizeValidator::new(&[
    SizeFormat::Pixel,
    SizeFormat::Percentage,
    SizeFormat::Keyword,
]);

/// How a component sits among its siblings: `flex` and `margin`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemLayout {
    flex: Option<u32>,
    margin: Option<String>,
}

impl ItemLayout {
    pub(crate) fn apply(&mut self, name: &str, value: &Value) -> BuildResult<bool> {
        match name {
            "flex" => self.flex = u32_value(name, value)?,
            "margin" => self.margin = size_value("margin", MARGIN, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub(crate) fn write(&self, writer: &mut PayloadWriter) {
        writer
            .put_opt("flex", self.flex)
            .put_opt("margin", self.margin.as_deref());
    }
}

/// Setters for [`ItemLayout`].
pub trait FlexChild {
    /// Returns the embedded group.
    fn item_layout_mut(&mut self) -> &mut ItemLayout;

    /// Sets the share of free space the component takes.
    fn flex(&mut self, flex: u32) -> &mut Self {
        self.item_layout_mut().flex = Some(flex);
        self
    }

    /// Sets the space before the component, in pixels or as a keyword.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `margin` is not `<n>px` or a spacing
    /// keyword.
    fn margin(&mut self, margin: impl Into<String>) -> BuildResult<&mut Self> {
        let margin_text = margin.into();
        MARGIN.validate("margin", &margin_text)?;
        self.item_layout_mut().margin = Some(margin_text);
        Ok(self)
    }
}

/// Position scheme and edge offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Offsets {
    position: Option<Position>,
    top: Option<String>,
    bottom: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

impl Offsets {
    pub(crate) fn apply(&mut self, name: &str, value: &Value) -> BuildResult<bool> {
        match name {
            "position" => self.position = keyword_value(name, value)?,
            "offset_top" => self.top = size_value("offsetTop", OFFSET, value)?,
            "offset_bottom" => self.bottom = size_value("offsetBottom", OFFSET, value)?,
            "offset_start" => self.start = size_value("offsetStart", OFFSET, value)?,
            "offset_end" => self.end = size_value("offsetEnd", OFFSET, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub(crate) fn write(&self, writer: &mut PayloadWriter) {
        writer
            .put_keyword("position", self.position)
            .put_opt("offsetTop", self.top.as_deref())
            .put_opt("offsetBottom", self.bottom.as_deref())
            .put_opt("offsetStart", self.start.as_deref())
            .put_opt("offsetEnd", self.end.as_deref());
    }
}

fn offset(field: &'static str, value: impl Into<String>) -> BuildResult<String> {
    let offset_text = value.into();
    OFFSET.validate(field, &offset_text)?;
    Ok(offset_text)
}

/// Setters for [`Offsets`].
pub trait Positioned {
    /// Returns the embedded group.
    fn offsets_mut(&mut self) -> &mut Offsets;

    /// Sets the position scheme.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `position` is not a known keyword.
    fn position<V>(&mut self, position: V) -> BuildResult<&mut Self>
    where
        V: TryInto<Position>,
        BuildError: From<V::Error>,
    {
        self.offsets_mut().position = Some(to_keyword(position)?);
        Ok(self)
    }

    /// Sets the top offset.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    fn offset_top(&mut self, value: impl Into<String>) -> BuildResult<&mut Self> {
        self.offsets_mut().top = Some(offset("offsetTop", value)?);
        Ok(self)
    }

    /// Sets the bottom offset.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    fn offset_bottom(&mut self, value: impl Into<String>) -> BuildResult<&mut Self> {
        self.offsets_mut().bottom = Some(offset("offsetBottom", value)?);
        Ok(self)
    }

    /// Sets the start offset.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    fn offset_start(&mut self, value: impl Into<String>) -> BuildResult<&mut Self> {
        self.offsets_mut().start = Some(offset("offsetStart", value)?);
        Ok(self)
    }

    /// Sets the end offset.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    fn offset_end(&mut self, value: impl Into<String>) -> BuildResult<&mut Self> {
        self.offsets_mut().end = Some(offset("offsetEnd", value)?);
        Ok(self)
    }
}

/// Inner spacing of a box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Padding {
    all: Option<String>,
    top: Option<String>,
    bottom: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

impl Padding {
    pub(crate) fn apply(&mut self, name: &str, value: &Value) -> BuildResult<bool> {
        match name {
            "padding_all" => self.all = size_value("paddingAll", PADDING, value)?,
            "padding_top" => self.top = size_value("paddingTop", PADDING, value)?,
            "padding_bottom" => self.bottom = size_value("paddingBottom", PADDING, value)?,
            "padding_start" => self.start = size_value("paddingStart", PADDING, value)?,
            "padding_end" => self.end = size_value("paddingEnd", PADDING, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub(crate) fn write(&self, writer: &mut PayloadWriter) {
        writer
            .put_opt("paddingAll", self.all.as_deref())
            .put_opt("paddingTop", self.top.as_deref())
            .put_opt("paddingBottom", self.bottom.as_deref())
            .put_opt("paddingStart", self.start.as_deref())
            .put_opt("paddingEnd", self.end.as_deref());
    }
}

fn padding(field: &'static str, value: impl Into<String>) -> BuildResult<String> {
    let padding_text = value.into();
    PADDING.validate(field, &padding_text)?;
    Ok(padding_text)
}

/// Setters for [`Padding`].
pub trait Padded {
    /// Returns the embedded group.
    fn padding_mut(&mut self) -> &mut Padding;

    /// Sets the padding on every edge.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    fn padding_all(&mut self, value: impl Into<String>) -> BuildResult<&mut Self> {
        self.padding_mut().all = Some(padding("paddingAll", value)?);
        Ok(self)
    }

    /// Sets the top padding.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    fn padding_top(&mut self, value: impl Into<String>) -> BuildResult<&mut Self> {
        self.padding_mut().top = Some(padding("paddingTop", value)?);
        Ok(self)
    }

    /// Sets the bottom padding.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    fn padding_bottom(&mut self, value: impl Into<String>) -> BuildResult<&mut Self> {
        self.padding_mut().bottom = Some(padding("paddingBottom", value)?);
        Ok(self)
    }

    /// Sets the start padding.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    fn padding_start(&mut self, value: impl Into<String>) -> BuildResult<&mut Self> {
        self.padding_mut().start = Some(padding("paddingStart", value)?);
        Ok(self)
    }

    /// Sets the end padding.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed size.
    fn padding_end(&mut self, value: impl Into<String>) -> BuildResult<&mut Self> {
        self.padding_mut().end = Some(padding("paddingEnd", value)?);
        Ok(self)
    }
}

/// Setters for the tap action of an interactive node.
pub trait Actionable {
    /// Returns the action slot.
    fn action_mut(&mut self) -> &mut Option<Action>;

    /// Sets the action, replacing any previous one.
    fn action(&mut self, action: impl Into<Action>) -> &mut Self {
        *self.action_mut() = Some(action.into());
        self
    }
}
