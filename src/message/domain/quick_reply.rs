//! Quick replies: suggested-action buttons attached to a message.

use serde_json::Value;

use super::{
    Action, BuildContext,
    attributes::{Configure, Construct, unknown},
};
use crate::message::{
    error::BuildResult,
    serialization::{Node, Payload, PayloadWriter, SerializationMode},
    validation::{MAX_QUICK_REPLY_ITEMS, validate_item_count},
};

/// One suggested action with an optional icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickReplyItem {
    /// The action run when the item is tapped.
    pub action: Action,
    /// URL of the icon shown beside the label.
    pub image_url: Option<String>,
}

impl QuickReplyItem {
    fn payload(&self, mode: SerializationMode) -> BuildResult<Value> {
        let mut writer = PayloadWriter::tagged(mode, "action");
        writer
            .put_opt("imageUrl", self.image_url.as_deref())
            .put_action("action", Some(&self.action))?;
        Ok(Value::Object(writer.finish()))
    }
}

/// An ordered list of suggested actions.
///
/// The platform accepts at most thirteen items; the limit is checked at
/// serialization time unless the builder configuration disables platform
/// limits.
///
/// # Examples
///
/// ```
/// use flexcraft::message::domain::{
///     Attributes, BuildContext, Construct, MessageAction, PostbackAction, QuickReply,
/// };
/// use flexcraft::message::serialization::Node;
///
/// let quick_reply = QuickReply::build(BuildContext::new(), &Attributes::new(), |reply| {
///     reply.add_item(MessageAction::new("Yes").with_label("Yes"));
///     reply.add_item_with_image(PostbackAction::new("answer=no"), "https://example.com/no.png");
///     Ok(())
/// })
/// .expect("valid quick reply");
///
/// let payload = quick_reply.serialize().expect("two items");
/// assert_eq!(payload["items"].as_array().map(Vec::len), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuickReply {
    context: BuildContext,
    items: Vec<QuickReplyItem>,
}

impl QuickReply {
    /// Appends an item without an icon.
    pub fn add_item(&mut self, action: impl Into<Action>) -> &mut Self {
        self.items.push(QuickReplyItem {
            action: action.into(),
            image_url: None,
        });
        self
    }

    /// Appends an item with an icon.
    pub fn add_item_with_image(
        &mut self,
        action: impl Into<Action>,
        image_url: impl Into<String>,
    ) -> &mut Self {
        self.items.push(QuickReplyItem {
            action: action.into(),
            image_url: Some(image_url.into()),
        });
        self
    }

    /// Returns the items in append order.
    #[must_use]
    pub fn items(&self) -> &[QuickReplyItem] {
        &self.items
    }
}

impl Configure for QuickReply {
    const NODE: &'static str = "quick reply";

    fn apply_attribute(&mut self, name: &str, _value: &Value) -> BuildResult<()> {
        Err(unknown(Self::NODE, name).into())
    }
}

impl Construct for QuickReply {
    fn new_in(context: BuildContext) -> Self {
        Self {
            context,
            items: Vec::new(),
        }
    }
}

impl Node for QuickReply {
    fn context(&self) -> &BuildContext {
        &self.context
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        if self.context.config().enforce_platform_limits {
            validate_item_count(Self::NODE, self.items.len(), MAX_QUICK_REPLY_ITEMS)?;
        }
        let items = self
            .items
            .iter()
            .map(|item| item.payload(mode))
            .collect::<BuildResult<Vec<_>>>()?;
        let mut writer = PayloadWriter::new(mode);
        writer.put("items", items);
        Ok(writer.finish())
    }
}
