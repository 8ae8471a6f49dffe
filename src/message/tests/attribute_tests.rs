//! Unit tests for attribute maps and construction.

use rstest::rstest;
use serde_json::{Value, json};

use super::fixtures::{attrs, context, none};
use crate::message::{
    domain::{Attributes, BuildContext, Button, Construct, FlexBox, Image, Text},
    error::{BuildError, ValidationError},
    serialization::Node,
};

#[rstest]
fn camel_and_snake_case_names_are_equivalent(context: BuildContext) {
    let camel = FlexBox::from_attributes(
        context.clone(),
        &Attributes::new().with("paddingAll", "4px").with("offsetTop", "1px"),
    )
    .expect("camelCase names");
    let snake = FlexBox::from_attributes(
        context,
        &Attributes::new().with("padding_all", "4px").with("offset_top", "1px"),
    )
    .expect("snake_case names");

    assert_eq!(
        camel.serialize().expect("complete"),
        snake.serialize().expect("complete")
    );
}

#[rstest]
fn attributes_apply_in_order_so_later_entries_win(context: BuildContext) {
    let attributes = Attributes::new()
        .with("padding_all", "4px")
        .with("paddingAll", "8px");
    let body = FlexBox::from_attributes(context, &attributes).expect("valid");
    assert_eq!(body.serialize().expect("complete")["paddingAll"], "8px");
}

#[rstest]
fn block_runs_after_attributes(context: BuildContext) {
    let text = Text::build(context, &attrs("text", "from attributes"), |text| {
        text.text("from block");
        Ok(())
    })
    .expect("valid text");
    assert_eq!(text.serialize().expect("complete")["text"], "from block");
}

#[rstest]
fn first_invalid_attribute_stops_construction(context: BuildContext) {
    let attributes = Attributes::new()
        .with("size", "giant")
        .with("colour", "#000000");
    let err = Text::from_attributes(context, &attributes).expect_err("size is invalid");
    assert!(matches!(
        err,
        BuildError::Validation(ValidationError::InvalidSize { field: "size", .. })
    ));
}

#[rstest]
fn block_is_not_run_when_attributes_fail(context: BuildContext) {
    let mut ran = false;
    let result = Image::build(context, &attrs("size", "enormous"), |_| {
        ran = true;
        Ok(())
    });
    assert!(result.is_err());
    assert!(!ran);
}

#[rstest]
#[case("wrap", json!("yes"), "a boolean")]
#[case("maxLines", json!("2"), "a non-negative integer")]
#[case("text", json!(5), "a string")]
#[case("weight", json!(true), "a string")]
fn wrong_json_types_are_reported(
    context: BuildContext,
    #[case] name: &str,
    #[case] value: Value,
    #[case] expected_type: &str,
) {
    let err = Text::from_attributes(context, &attrs(name, value)).expect_err("wrong type");
    match err {
        BuildError::Validation(ValidationError::WrongType { expected, .. }) => {
            assert_eq!(expected, expected_type);
        }
        other => panic!("expected WrongType, got {other:?}"),
    }
}

#[rstest]
fn attributes_convert_from_json_objects() {
    let attributes = Attributes::try_from(json!({"layout": "vertical", "spacing": "sm"}))
        .expect("an object");
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes.get("layout"), Some(&json!("vertical")));
    assert!(Attributes::try_from(json!(["layout"])).is_err());
}

#[rstest]
fn empty_attributes_leave_defaults(context: BuildContext) {
    assert!(none().is_empty());
    let body = FlexBox::from_attributes(context, &none()).expect("no attributes");
    let payload = body.serialize().expect("complete");
    let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
    assert_eq!(keys, ["type", "layout", "contents"]);
}

#[rstest]
#[case("margin")]
#[case("flex")]
#[case("size")]
#[case("wrap")]
#[case("maxLines")]
#[case("weight")]
#[case("position")]
#[case("offsetTop")]
#[case("action")]
fn null_values_leave_attributes_unset(context: BuildContext, #[case] name: &str) {
    let attributes = Attributes::new().with(name, json!(null)).with("text", "hi");
    let text = Text::from_attributes(context, &attributes).expect("null means unset");
    assert_eq!(
        Value::Object(text.serialize().expect("complete")),
        json!({"type": "text", "text": "hi"})
    );
}

#[rstest]
fn null_clears_an_earlier_value(context: BuildContext) {
    let attributes = Attributes::new()
        .with("offsetTop", "4px")
        .with("offset_top", Value::Null);
    let body = FlexBox::from_attributes(context, &attributes).expect("valid");
    assert!(!body.serialize().expect("complete").contains_key("offsetTop"));
}

#[rstest]
fn null_layout_keeps_the_default(context: BuildContext) {
    let body = FlexBox::from_attributes(context, &attrs("layout", Value::Null)).expect("valid");
    assert_eq!(body.serialize().expect("complete")["layout"], "horizontal");
}

#[rstest]
fn null_does_not_excuse_unknown_names(context: BuildContext) {
    let err = Text::from_attributes(context, &attrs("colour", Value::Null))
        .expect_err("unknown attribute");
    assert!(matches!(
        err,
        BuildError::Validation(ValidationError::UnknownAttribute { .. })
    ));
}

#[rstest]
fn button_action_can_come_from_attributes(context: BuildContext) {
    let attributes = Attributes::try_from(json!({
        "style": "primary",
        "action": {"type": "uri", "label": "Open", "uri": "https://example.com"}
    }))
    .expect("an object");
    let button = Button::from_attributes(context, &attributes).expect("valid button");
    assert_eq!(
        Value::Object(button.serialize().expect("action is set")),
        json!({
            "type": "button",
            "action": {"type": "uri", "label": "Open", "uri": "https://example.com"},
            "height": "md",
            "style": "primary"
        })
    );
}

#[rstest]
fn action_attribute_must_be_an_object(context: BuildContext) {
    let err = Button::from_attributes(context, &attrs("action", "tap"))
        .expect_err("not an object");
    assert!(matches!(
        err,
        BuildError::Validation(ValidationError::WrongType { expected: "an object", .. })
    ));
}
