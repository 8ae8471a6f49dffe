//! Unit tests for quick replies.

use rstest::rstest;
use serde_json::{Value, json};

use super::fixtures::{alternate_context, context, lenient_context, none};
use crate::message::{
    domain::{
        Attributes, BuildContext, Construct, MessageAction, PostbackAction, QuickReply,
        UriAction,
    },
    error::{BuildError, ValidationError},
    serialization::Node,
};

fn quick_reply_of(context: BuildContext, count: usize) -> QuickReply {
    QuickReply::build(context, &none(), |reply| {
        for index in 0..count {
            reply.add_item(MessageAction::new(format!("option {index}")));
        }
        Ok(())
    })
    .expect("quick reply should build")
}

#[rstest]
fn items_serialize_with_optional_image(context: BuildContext) {
    let reply = QuickReply::build(context, &none(), |reply| {
        reply
            .add_item(MessageAction::new("Yes").with_label("Yes"))
            .add_item_with_image(
                PostbackAction::new("answer=no").with_label("No"),
                "https://example.com/no.png",
            );
        Ok(())
    })
    .expect("valid quick reply");

    assert_eq!(
        Value::Object(reply.serialize().expect("two items")),
        json!({
            "items": [
                {"type": "action", "action": {"type": "message", "label": "Yes", "text": "Yes"}},
                {
                    "type": "action",
                    "imageUrl": "https://example.com/no.png",
                    "action": {"type": "postback", "label": "No", "data": "answer=no"},
                },
            ]
        })
    );
}

#[rstest]
fn image_url_is_snake_cased_in_alternate_mode(alternate_context: BuildContext) {
    let reply = QuickReply::build(alternate_context, &none(), |reply| {
        reply.add_item_with_image(UriAction::new("https://example.com"), "https://example.com/i.png");
        Ok(())
    })
    .expect("valid quick reply");

    let payload = Value::Object(reply.serialize().expect("one item"));
    assert_eq!(payload["items"][0]["image_url"], "https://example.com/i.png");
    assert!(payload["items"][0].get("imageUrl").is_none());
}

#[rstest]
fn thirteen_items_are_accepted(context: BuildContext) {
    let reply = quick_reply_of(context, 13);
    assert_eq!(reply.items().len(), 13);
    assert!(reply.serialize().is_ok());
}

#[rstest]
fn fourteen_items_are_rejected(context: BuildContext) {
    let reply = quick_reply_of(context, 14);
    assert_eq!(
        reply.serialize().expect_err("over capacity"),
        BuildError::Validation(ValidationError::TooManyItems {
            node: "quick reply",
            max: 13,
            actual: 14,
        })
    );
}

#[rstest]
fn lenient_config_skips_the_item_limit(lenient_context: BuildContext) {
    let reply = quick_reply_of(lenient_context, 14);
    let payload = reply.serialize().expect("limits are not enforced");
    assert_eq!(payload["items"].as_array().map(Vec::len), Some(14));
}

#[rstest]
fn incomplete_action_fails_the_quick_reply(context: BuildContext) {
    let reply = QuickReply::build(context, &none(), |reply| {
        reply.add_item(PostbackAction::default());
        Ok(())
    })
    .expect("valid quick reply");
    assert_eq!(
        reply.serialize().expect_err("postback has no data"),
        BuildError::required("postback action", "data")
    );
}

#[rstest]
fn quick_reply_takes_no_attributes(context: BuildContext) {
    let err = QuickReply::from_attributes(context, &Attributes::new().with("items", json!([])))
        .expect_err("items are appended, not assigned");
    assert!(err.is_validation());
}
