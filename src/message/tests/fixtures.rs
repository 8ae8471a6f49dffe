//! Shared fixtures and helpers for component tree tests.

use rstest::fixture;
use serde_json::Value;

use crate::message::{
    domain::{Attributes, BuildContext, BuilderConfig, Bubble, Construct, FlexBox},
    error::BuildResult,
    serialization::SerializationMode,
};

#[fixture]
pub fn context() -> BuildContext {
    BuildContext::new()
}

#[fixture]
pub fn alternate_context() -> BuildContext {
    BuildContext::with_mode(SerializationMode::Alternate)
}

#[fixture]
pub fn strict_context() -> BuildContext {
    BuildContext::new().with_config(BuilderConfig::strict())
}

#[fixture]
pub fn lenient_context() -> BuildContext {
    BuildContext::new().with_config(BuilderConfig::lenient())
}

/// Shorthand for an attribute map with a single entry.
pub fn attrs(name: &str, value: impl Into<Value>) -> Attributes {
    Attributes::new().with(name, value)
}

/// Shorthand for an empty attribute map.
pub fn none() -> Attributes {
    Attributes::new()
}

/// Builds a box holding one text.
pub fn box_with_text(context: &BuildContext, text: &str) -> FlexBox {
    FlexBox::build(context.clone(), &none(), |body| {
        body.add_text(&attrs("text", text), |_| Ok(()))?;
        Ok(())
    })
    .expect("box should build")
}

/// Builds a bubble whose body holds one text.
pub fn bubble_with_text(context: &BuildContext, text: &str) -> Bubble {
    Bubble::build(context.clone(), &none(), |bubble| {
        fill_bubble(bubble, text)
    })
    .expect("bubble should build")
}

/// Construction block giving a bubble a body with one text.
pub fn fill_bubble(bubble: &mut Bubble, text: &str) -> BuildResult<()> {
    bubble.body(&none(), |body| {
        body.add_text(&attrs("text", text), |_| Ok(()))?;
        Ok(())
    })?;
    Ok(())
}

/// Collects every object key in `value`, at any depth.
pub fn all_keys(value: &Value) -> Vec<String> {
    let mut keys = Vec::new();
    collect_keys(value, &mut keys);
    keys
}

fn collect_keys(value: &Value, keys: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                keys.push(key.clone());
                collect_keys(inner, keys);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_keys(item, keys);
            }
        }
        _ => {}
    }
}
