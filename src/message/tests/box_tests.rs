//! Unit tests for box containers.

use rstest::rstest;
use serde_json::{Value, json};

use super::fixtures::{attrs, box_with_text, context, none, strict_context};
use crate::message::{
    domain::{
        Actionable, AlignItems, Attributes, BoxLayout, BuildContext, Component, Construct,
        FlexBox, JustifyContent, Padded, PostbackAction,
    },
    error::{BuildError, ValidationError},
    serialization::Node,
};

#[rstest]
fn layout_defaults_to_horizontal(context: BuildContext) {
    let body = FlexBox::from_attributes(context, &none()).expect("no attributes");
    assert_eq!(body.layout_direction(), BoxLayout::Horizontal);
    let payload = body.serialize().expect("empty boxes are allowed by default");
    assert_eq!(payload.get("layout"), Some(&json!("horizontal")));
    assert_eq!(payload.get("contents"), Some(&json!([])));
}

#[rstest]
fn empty_box_is_rejected_under_strict_config(strict_context: BuildContext) {
    let body = FlexBox::from_attributes(strict_context, &none()).expect("no attributes");
    assert_eq!(
        body.serialize().expect_err("empty box"),
        BuildError::required("box", "contents")
    );
}

#[rstest]
fn strict_config_accepts_box_with_children(strict_context: BuildContext) {
    let body = box_with_text(&strict_context, "hello");
    assert!(body.serialize().is_ok());
}

#[rstest]
fn typed_appends_keep_order(context: BuildContext) {
    let body = FlexBox::build(context, &attrs("layout", "vertical"), |body| {
        body.add_text(&attrs("text", "title"), |_| Ok(()))?;
        body.add_separator();
        body.add_image(&attrs("url", "https://example.com/a.png"), |_| Ok(()))?;
        body.add_box(&none(), |inner| {
            inner.add_text(&attrs("text", "nested"), |_| Ok(()))?;
            Ok(())
        })?;
        body.add_button(&none(), |button| {
            button.action(PostbackAction::new("go"));
            Ok(())
        })?;
        Ok(())
    })
    .expect("valid box");

    let kinds: Vec<&str> = body
        .contents()
        .iter()
        .map(|component| match component {
            Component::Box(_) => "box",
            Component::Text(_) => "text",
            Component::Button(_) => "button",
            Component::Image(_) => "image",
            Component::Separator(_) => "separator",
        })
        .collect();
    assert_eq!(kinds, ["text", "separator", "image", "box", "button"]);

    let payload = Value::Object(body.serialize().expect("complete box"));
    assert_eq!(payload["contents"][3]["contents"][0]["text"], "nested");
    assert_eq!(payload["contents"][4]["action"]["data"], "go");
}

#[rstest]
fn children_inherit_the_box_context(strict_context: BuildContext) {
    let body = FlexBox::build(strict_context, &none(), |body| {
        body.add_box(&none(), |_| Ok(()))?;
        Ok(())
    })
    .expect("valid box");

    // The nested box is empty and was built with the strict config.
    assert_eq!(
        body.serialize().expect_err("nested box is empty"),
        BuildError::required("box", "contents")
    );
}

#[rstest]
fn incomplete_child_fails_the_parent(context: BuildContext) {
    let body = FlexBox::build(context, &none(), |body| {
        body.add_image(&none(), |_| Ok(()))?;
        Ok(())
    })
    .expect("valid box");
    assert_eq!(
        body.serialize().expect_err("image has no url"),
        BuildError::required("image", "url")
    );
}

#[rstest]
fn box_serializes_every_set_attribute(context: BuildContext) {
    let attributes = Attributes::new()
        .with("layout", "vertical")
        .with("spacing", "md")
        .with("paddingAll", "12px")
        .with("backgroundColor", "#FFFFFF")
        .with("cornerRadius", "8px")
        .with("borderWidth", "light");
    let body = FlexBox::build(context, &attributes, |body| {
        body.add_separator();
        body.justify_content(JustifyContent::SpaceBetween)?
            .align_items(AlignItems::Center)?
            .width("50%")?
            .padding_top("5%")?;
        Ok(())
    })
    .expect("valid box");

    assert_eq!(
        Value::Object(body.serialize().expect("complete box")),
        json!({
            "type": "box",
            "layout": "vertical",
            "contents": [{"type": "separator"}],
            "spacing": "md",
            "paddingAll": "12px",
            "paddingTop": "5%",
            "width": "50%",
            "backgroundColor": "#FFFFFF",
            "borderWidth": "light",
            "cornerRadius": "8px",
            "justifyContent": "space-between",
            "alignItems": "center",
        })
    );
}

#[rstest]
#[case("layout", json!("diagonal"))]
#[case("spacing", json!("10%"))]
#[case("paddingAll", json!("wide"))]
#[case("width", json!("md"))]
#[case("cornerRadius", json!("50%"))]
#[case("borderWidth", json!("thick"))]
#[case("justifyContent", json!("start"))]
#[case("flex", json!(-1))]
#[case("layout", json!(1))]
fn box_rejects_out_of_domain_attributes(
    context: BuildContext,
    #[case] name: &str,
    #[case] value: Value,
) {
    let err = FlexBox::from_attributes(context, &attrs(name, value))
        .expect_err("attribute should be rejected");
    assert!(err.is_validation(), "{name}: {err}");
}

#[rstest]
fn box_rejects_unknown_attribute(context: BuildContext) {
    let err = FlexBox::from_attributes(context, &attrs("url", "https://example.com"))
        .expect_err("boxes have no url");
    assert_eq!(
        err,
        BuildError::Validation(ValidationError::unknown_attribute("box", "url"))
    );
}

#[rstest]
fn block_error_aborts_construction(context: BuildContext) {
    let result = FlexBox::build(context, &none(), |body| {
        body.add_text(&attrs("text", "ok"), |_| Ok(()))?;
        body.layout("diagonal")?;
        Ok(())
    });
    assert!(matches!(
        result,
        Err(BuildError::Validation(ValidationError::NotInEnum { field: "layout", .. }))
    ));
}
