//! Unit tests for bubbles and their slots.

use rstest::rstest;
use serde_json::{Map, Value, json};

use super::fixtures::{alternate_context, attrs, context, fill_bubble, none};
use crate::message::{
    domain::{
        Actionable, Attributes, Bubble, BubbleSize, BuildContext, Construct, Direction, Hero,
        UriAction,
    },
    error::BuildError,
    serialization::Node,
};

#[rstest]
fn empty_bubble_serializes_to_type_only(context: BuildContext) {
    let bubble = Bubble::from_attributes(context, &none()).expect("no attributes");
    assert_eq!(
        Value::Object(bubble.serialize().expect("no slot is required")),
        json!({"type": "bubble"})
    );
}

#[rstest]
fn slots_serialize_in_layout_order(context: BuildContext) {
    let bubble = Bubble::build(context, &none(), |bubble| {
        bubble.footer(&none(), |footer| {
            footer.add_separator();
            Ok(())
        })?;
        fill_bubble(bubble, "body")?;
        bubble.hero_image(&attrs("url", "https://example.com/hero.png"), |_| Ok(()))?;
        bubble.header(&none(), |header| {
            header.add_separator();
            Ok(())
        })?;
        Ok(())
    })
    .expect("valid bubble");

    let payload = bubble.serialize().expect("complete bubble");
    let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
    assert_eq!(keys, ["type", "header", "hero", "body", "footer"]);
    assert_eq!(payload["hero"]["type"], "image");
}

#[rstest]
fn assigning_a_slot_twice_keeps_the_last_value(context: BuildContext) {
    let bubble = Bubble::build(context, &none(), |bubble| {
        fill_bubble(bubble, "first")?;
        fill_bubble(bubble, "second")?;
        bubble.hero_image(&attrs("url", "u"), |_| Ok(()))?;
        bubble.hero(&none(), |hero| {
            hero.add_separator();
            Ok(())
        })?;
        Ok(())
    })
    .expect("valid bubble");

    assert!(matches!(bubble.hero_content(), Some(Hero::Box(_))));
    let payload = Value::Object(bubble.serialize().expect("complete bubble"));
    assert_eq!(payload["body"]["contents"][0]["text"], "second");
    assert_eq!(payload["body"]["contents"].as_array().map(Vec::len), Some(1));
}

#[rstest]
fn slot_accessors_expose_children(context: BuildContext) {
    let bubble = Bubble::build(context, &none(), |bubble| fill_bubble(bubble, "x"))
        .expect("valid bubble");
    assert!(bubble.header_box().is_none());
    assert!(bubble.footer_box().is_none());
    assert_eq!(bubble.body_box().map(|body| body.contents().len()), Some(1));
}

#[rstest]
fn bubble_attributes_and_action(context: BuildContext) {
    let attributes = Attributes::new().with("size", "kilo").with("direction", "rtl");
    let bubble = Bubble::build(context, &attributes, |bubble| {
        bubble.action(UriAction::new("https://example.com"));
        Ok(())
    })
    .expect("valid bubble");

    assert_eq!(
        Value::Object(bubble.serialize().expect("complete bubble")),
        json!({
            "type": "bubble",
            "size": "kilo",
            "direction": "rtl",
            "action": {"type": "uri", "uri": "https://example.com"},
        })
    );
}

#[rstest]
fn bubble_setters_accept_enums_and_strings(context: BuildContext) {
    let mut bubble = Bubble::from_attributes(context, &none()).expect("no attributes");
    assert!(bubble.size(BubbleSize::Giga).is_ok());
    assert!(bubble.direction(Direction::Ltr).is_ok());
    assert!(bubble.size("tera").is_err());
    assert!(bubble.direction("up").is_err());
}

#[rstest]
fn styles_are_recased_with_the_document(alternate_context: BuildContext) {
    let mut styles = Map::new();
    styles.insert("footer".to_owned(), json!({"backgroundColor": "#000000", "separator": true}));
    let bubble = Bubble::build(alternate_context, &none(), |bubble| {
        bubble.styles(styles);
        Ok(())
    })
    .expect("valid bubble");

    let payload = Value::Object(bubble.serialize().expect("complete bubble"));
    assert_eq!(
        payload["styles"],
        json!({"footer": {"background_color": "#000000", "separator": true}})
    );
}

#[rstest]
fn styles_attribute_must_be_an_object(context: BuildContext) {
    let err = Bubble::from_attributes(context, &attrs("styles", "dark"))
        .expect_err("styles must be a mapping");
    assert!(err.is_validation());
}

#[rstest]
fn incomplete_slot_fails_the_bubble(context: BuildContext) {
    let bubble = Bubble::build(context, &none(), |bubble| {
        bubble.hero_image(&none(), |_| Ok(()))?;
        Ok(())
    })
    .expect("valid bubble");
    assert_eq!(
        bubble.serialize().expect_err("hero image has no url"),
        BuildError::required("image", "url")
    );
}
