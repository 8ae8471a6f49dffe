//! Unit tests for carousels.

use rstest::rstest;
use serde_json::Value;

use super::fixtures::{bubble_with_text, context, fill_bubble, none};
use crate::message::{
    domain::{BuildContext, Carousel, Construct},
    error::{BuildError, ValidationError},
    serialization::Node,
};

fn carousel_of(context: BuildContext, count: usize) -> Carousel {
    Carousel::build(context, &none(), |carousel| {
        for index in 0..count {
            carousel.add_bubble(&none(), |bubble| fill_bubble(bubble, &format!("#{index}")))?;
        }
        Ok(())
    })
    .expect("carousel should build")
}

#[rstest]
fn empty_carousel_is_rejected(context: BuildContext) {
    let carousel = carousel_of(context, 0);
    assert_eq!(
        carousel.serialize().expect_err("no bubbles"),
        BuildError::required("carousel", "contents")
    );
}

#[rstest]
#[case(1)]
#[case(12)]
fn carousel_within_limit_serializes(context: BuildContext, #[case] count: usize) {
    let carousel = carousel_of(context, count);
    let payload = carousel.serialize().expect("within limit");
    assert_eq!(payload["type"], "carousel");
    assert_eq!(payload["contents"].as_array().map(Vec::len), Some(count));
}

#[rstest]
fn thirteen_bubbles_exceed_the_limit(context: BuildContext) {
    let carousel = carousel_of(context, 13);
    assert_eq!(carousel.bubbles().len(), 13);
    assert_eq!(
        carousel.serialize().expect_err("over capacity"),
        BuildError::Validation(ValidationError::TooManyItems {
            node: "carousel",
            max: 12,
            actual: 13,
        })
    );
}

#[rstest]
fn bubbles_keep_append_order(context: BuildContext) {
    let carousel = carousel_of(context, 3);
    let payload = Value::Object(carousel.serialize().expect("within limit"));
    let first_texts: Vec<&Value> = (0..3)
        .map(|index| &payload["contents"][index]["body"]["contents"][0]["text"])
        .collect();
    assert_eq!(first_texts, [&Value::from("#0"), &Value::from("#1"), &Value::from("#2")]);
}

#[rstest]
fn bubble_fixture_matches_carousel_entry(context: BuildContext) {
    let bubble = bubble_with_text(&context, "#0");
    let carousel = carousel_of(context, 1);
    let standalone = bubble.serialize().expect("complete bubble");
    let entry = Value::Object(carousel.serialize().expect("one bubble"));
    assert_eq!(entry["contents"][0], Value::Object(standalone));
}
