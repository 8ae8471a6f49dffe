//! Unit tests for text, span, image, button and separator components.

use rstest::rstest;
use serde_json::{Value, json};

use super::fixtures::{attrs, context, none};
use crate::message::{
    domain::{
        Actionable, Attributes, BuildContext, Button, ButtonStyle, Construct, FlexChild,
        FontWeight, Image, MessageAction, Positioned, Separator, Span, Text, UriAction,
    },
    error::{BuildError, ValidationError},
    serialization::Node,
};

fn serialized<N: Node>(node: &N) -> Value {
    Value::Object(node.serialize().expect("node should serialize"))
}

// ============================================================================
// Text
// ============================================================================

#[rstest]
fn plain_text_serializes_to_type_and_text(context: BuildContext) {
    let text = Text::from_attributes(context, &attrs("text", "Hello")).expect("valid text");
    assert_eq!(serialized(&text), json!({"type": "text", "text": "Hello"}));
}

#[rstest]
fn text_without_text_or_spans_is_rejected(context: BuildContext) {
    let text = Text::from_attributes(context, &attrs("wrap", true)).expect("valid attributes");
    assert!(!text.has_content());
    assert_eq!(
        text.serialize().expect_err("no content"),
        BuildError::required("text", "text")
    );
}

#[rstest]
fn text_with_only_spans_omits_text_key(context: BuildContext) {
    let text = Text::build(context, &none(), |text| {
        text.add_span(&attrs("text", "Hi"), |span| {
            span.bold().color("#ff0000");
            Ok(())
        })?;
        Ok(())
    })
    .expect("valid text");

    assert_eq!(
        serialized(&text),
        json!({
            "type": "text",
            "contents": [{"type": "span", "text": "Hi", "color": "#ff0000", "weight": "bold"}],
        })
    );
}

#[rstest]
fn text_writes_attributes_in_schema_order(context: BuildContext) {
    let attributes = Attributes::new()
        .with("text", "Hello")
        .with("wrap", true)
        .with("size", "xl")
        .with("maxLines", 2)
        .with("flex", 1);
    let text = Text::build(context, &attributes, |text| {
        text.weight(FontWeight::Bold)?.align("center")?;
        text.margin("md")?;
        Ok(())
    })
    .expect("valid text");

    let payload = text.serialize().expect("text has content");
    let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["type", "text", "flex", "margin", "size", "wrap", "maxLines", "weight", "align"]
    );
}

#[rstest]
#[case("size", json!("10px"), true)]
#[case("size", json!("5xl"), true)]
#[case("size", json!("full"), false)]
#[case("lineSpacing", json!("4px"), true)]
#[case("lineSpacing", json!("md"), false)]
#[case("weight", json!("heavy"), false)]
#[case("adjustMode", json!("shrink-to-fit"), true)]
#[case("decoration", json!("line-through"), true)]
#[case("offsetTop", json!("10%"), true)]
#[case("position", json!("fixed"), false)]
fn text_attribute_domains(
    context: BuildContext,
    #[case] name: &str,
    #[case] value: Value,
    #[case] accepted: bool,
) {
    let attributes = Attributes::new().with("text", "x").with(name, value);
    let result = Text::from_attributes(context, &attributes);
    assert_eq!(result.is_ok(), accepted, "{name}");
}

#[rstest]
fn text_setter_rejects_bad_size_and_keeps_previous_value(context: BuildContext) {
    let mut text = Text::from_attributes(context, &attrs("text", "x")).expect("valid text");
    text.size("sm").expect("sm is a font size");
    assert!(text.size("huge").is_err());

    let payload = text.serialize().expect("text has content");
    assert_eq!(payload.get("size"), Some(&json!("sm")));
}

#[rstest]
fn text_action_is_serialized(context: BuildContext) {
    let text = Text::build(context, &attrs("text", "Tap"), |text| {
        text.action(MessageAction::new("tapped"));
        Ok(())
    })
    .expect("valid text");
    assert_eq!(
        serialized(&text)["action"],
        json!({"type": "message", "text": "tapped"})
    );
}

// ============================================================================
// Span
// ============================================================================

#[rstest]
fn span_requires_text(context: BuildContext) {
    let span = Span::from_attributes(context, &none()).expect("no attributes");
    assert_eq!(
        span.serialize().expect_err("text is unset"),
        BuildError::required("span", "text")
    );
}

#[rstest]
fn span_convenience_setters(context: BuildContext) {
    let mut span = Span::from_attributes(context, &attrs("text", "x")).expect("valid span");
    span.underline().line_through();
    assert_eq!(serialized(&span)["decoration"], json!("line-through"));
}

#[rstest]
fn span_rejects_action_attribute(context: BuildContext) {
    let err = Span::from_attributes(context, &attrs("action", json!({})))
        .expect_err("spans carry no action");
    assert!(err.is_validation());
}

// ============================================================================
// Image
// ============================================================================

#[rstest]
fn image_requires_url(context: BuildContext) {
    let image = Image::from_attributes(context, &attrs("size", "full")).expect("valid image");
    assert_eq!(
        image.serialize().expect_err("url is unset"),
        BuildError::required("image", "url")
    );
}

#[rstest]
fn image_serializes_presentation_attributes(context: BuildContext) {
    let attributes = Attributes::new()
        .with("url", "https://example.com/hero.png")
        .with("size", "full")
        .with("aspectRatio", "20:13")
        .with("aspectMode", "cover");
    let image = Image::build(context, &attributes, |image| {
        image.action(UriAction::new("https://example.com"));
        Ok(())
    })
    .expect("valid image");

    assert_eq!(
        serialized(&image),
        json!({
            "type": "image",
            "url": "https://example.com/hero.png",
            "size": "full",
            "aspectRatio": "20:13",
            "aspectMode": "cover",
            "action": {"type": "uri", "uri": "https://example.com"},
        })
    );
}

#[rstest]
#[case("16:9", true)]
#[case("16x9", false)]
fn image_validates_aspect_ratio(context: BuildContext, #[case] ratio: &str, #[case] ok: bool) {
    let attributes = Attributes::new().with("url", "u").with("aspectRatio", ratio);
    assert_eq!(Image::from_attributes(context, &attributes).is_ok(), ok);
}

// ============================================================================
// Button
// ============================================================================

#[rstest]
fn button_emits_defaults_for_style_and_height(context: BuildContext) {
    let button = Button::build(context, &none(), |button| {
        button.action(MessageAction::new("Yes").with_label("Yes"));
        Ok(())
    })
    .expect("valid button");

    assert_eq!(
        serialized(&button),
        json!({
            "type": "button",
            "action": {"type": "message", "label": "Yes", "text": "Yes"},
            "height": "md",
            "style": "link",
        })
    );
}

#[rstest]
fn button_without_action_is_rejected(context: BuildContext) {
    let button = Button::from_attributes(context, &attrs("style", "primary")).expect("valid");
    assert_eq!(
        button.serialize().expect_err("action is unset"),
        BuildError::required("button", "action")
    );
}

#[rstest]
fn button_rejects_unknown_style(context: BuildContext) {
    let err = Button::from_attributes(context, &attrs("style", "flashy"))
        .expect_err("flashy is not a style");
    assert!(matches!(
        err,
        BuildError::Validation(ValidationError::NotInEnum { field: "style", .. })
    ));
}

#[rstest]
fn button_validates_margin_and_offsets(context: BuildContext) {
    let mut button = Button::from_attributes(context, &none()).expect("no attributes");
    assert!(button.margin("12px").is_ok());
    assert!(button.margin("12").is_err());
    assert!(button.offset_start("5%").is_ok());
    assert!(button.offset_start("left").is_err());
    assert!(button.style(ButtonStyle::Primary).is_ok());
}

// ============================================================================
// Separator
// ============================================================================

#[rstest]
fn separator_serializes_to_type_only(context: BuildContext) {
    let separator = Separator::new_in(context);
    assert_eq!(serialized(&separator), json!({"type": "separator"}));
}

#[rstest]
fn separator_has_no_attributes(context: BuildContext) {
    let err = Separator::from_attributes(context, &attrs("color", "#000000"))
        .expect_err("separators take no attributes");
    assert_eq!(
        err,
        BuildError::Validation(ValidationError::unknown_attribute("separator", "color"))
    );
}
