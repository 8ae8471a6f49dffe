//! Output key conventions.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The key-naming convention used for one serialized document.
///
/// Schema keys are declared once in their camelCase platform spelling and
/// converted on output, so the two conventions share every value and
/// every validation rule.
///
/// # Examples
///
/// ```
/// use flexcraft::message::serialization::SerializationMode;
///
/// assert_eq!(SerializationMode::Standard.key("paddingAll"), "paddingAll");
/// assert_eq!(SerializationMode::Alternate.key("paddingAll"), "padding_all");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SerializationMode {
    /// camelCase keys, exactly as the messaging platform's API documents them.
    #[default]
    Standard,
    /// snake_case keys, as expected by SDK-style consumers.
    Alternate,
}

impl SerializationMode {
    /// Returns `true` for [`SerializationMode::Alternate`].
    #[must_use]
    pub const fn is_alternate(self) -> bool {
        matches!(self, Self::Alternate)
    }

    /// Converts a canonical camelCase schema key to this convention.
    #[must_use]
    pub fn key(self, name: &'static str) -> Cow<'static, str> {
        match self {
            Self::Standard => Cow::Borrowed(name),
            Self::Alternate => Cow::Owned(snake_case(name)),
        }
    }

    /// Recursively renames every object key inside `value`.
    ///
    /// Used for free-form mappings whose keys are supplied by the caller.
    #[must_use]
    pub fn recase(self, value: &Value) -> Value {
        match (self, value) {
            (Self::Standard, _) => value.clone(),
            (Self::Alternate, Value::Object(map)) => Value::Object(
                map.iter()
                    .map(|(key, inner)| (snake_case(key), self.recase(inner)))
                    .collect(),
            ),
            (Self::Alternate, Value::Array(items)) => {
                Value::Array(items.iter().map(|item| self.recase(item)).collect())
            }
            (Self::Alternate, _) => value.clone(),
        }
    }
}

/// Converts `paddingAll` to `padding_all`. Already snake_case input is
/// returned unchanged.
pub(crate) fn snake_case(name: &str) -> String {
    let mut converted = String::with_capacity(name.len() + 4);
    for character in name.chars() {
        if character.is_ascii_uppercase() {
            converted.push('_');
            converted.push(character.to_ascii_lowercase());
        } else {
            converted.push(character);
        }
    }
    converted
}
