//! Button components.

use serde_json::Value;

use super::{
    Action, AdjustMode, BuildContext, ButtonHeight, ButtonStyle, Gravity,
    attributes::{
        Configure, Construct, action_value, keyword_value, string_value, to_keyword, unknown,
    },
    groups::{Actionable, FlexChild, ItemLayout, Offsets, Positioned},
};
use crate::message::{
    error::{BuildError, BuildResult},
    serialization::{Node, Payload, PayloadWriter, SerializationMode},
};

/// A tappable button.
///
/// Unlike other interactive components, a button must have an action: it is
/// rejected at serialization time without one. `style` defaults to `link`
/// and `height` to `md`.
#[derive(Debug, Clone, Default)]
pub struct Button {
    context: BuildContext,
    action: Option<Action>,
    item_layout: ItemLayout,
    offsets: Offsets,
    height: ButtonHeight,
    style: ButtonStyle,
    color: Option<String>,
    gravity: Option<Gravity>,
    adjust_mode: Option<AdjustMode>,
}

impl Button {
    /// Sets the button style.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn style<V>(&mut self, style: V) -> BuildResult<&mut Self>
    where
        V: TryInto<ButtonStyle>,
        BuildError: From<V::Error>,
    {
        self.style = to_keyword(style)?;
        Ok(self)
    }

    /// Sets the button height.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown keyword.
    pub fn height<V>(&mut self, height: V) -> BuildResult<&mut Self>
    where
        V: TryInto<ButtonHeight>,
        BuildError: From<V::Error>,
    {
        self.height = to_keyword(height)?;
        Ok(self)
    }

    /// Sets the label colour for `link` buttons, or the fill colour
    /// otherwise.
    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = Some(color.into());
        self
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

    /// Shrinks the label font to fit the button.
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
}

impl Configure for Button {
    const NODE: &'static str = "button";

    fn apply_attribute(&mut self, name: &str, value: &Value) -> BuildResult<()> {
        if self.item_layout.apply(name, value)? || self.offsets.apply(name, value)? {
            return Ok(());
        }
        match name {
            "height" => self.height = keyword_value(name, value)?.unwrap_or(self.height),
            "style" => self.style = keyword_value(name, value)?.unwrap_or(self.style),
            "color" => self.color = string_value(name, value)?,
            "gravity" => self.gravity = keyword_value(name, value)?,
            "adjust_mode" => self.adjust_mode = keyword_value(name, value)?,
            "action" => self.action = action_value(name, value)?,
            _ => return Err(unknown(Self::NODE, name).into()),
        }
        Ok(())
    }
}

impl Construct for Button {
    fn new_in(context: BuildContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }
}

impl FlexChild for Button {
    fn item_layout_mut(&mut self) -> &mut ItemLayout {
        &mut self.item_layout
    }
}

impl Positioned for Button {
    fn offsets_mut(&mut self) -> &mut Offsets {
        &mut self.offsets
    }
}

impl Actionable for Button {
    fn action_mut(&mut self) -> &mut Option<Action> {
        &mut self.action
    }
}

impl Node for Button {
    fn context(&self) -> &BuildContext {
        &self.context
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        let Some(action) = self.action.as_ref() else {
            tracing::debug!("button has no action");
            return Err(BuildError::required(Self::NODE, "action"));
        };
        let mut writer = PayloadWriter::tagged(mode, "button");
        writer.put_action("action", Some(action))?;
        self.item_layout.write(&mut writer);
        self.offsets.write(&mut writer);
        writer
            .put_keyword("height", Some(self.height))
            .put_keyword("style", Some(self.style))
            .put_opt("color", self.color.as_deref())
            .put_keyword("gravity", self.gravity)
            .put_keyword("adjustMode", self.adjust_mode);
        Ok(writer.finish())
    }
}
