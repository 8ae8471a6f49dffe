//! Platform cardinality and length limits.
//!
//! Each rule is a pure function returning `Ok(())` on success or a specific
//! [`ValidationError`] on failure.

use crate::message::error::ValidationError;

/// Maximum number of bubbles in a carousel.
pub const MAX_CAROUSEL_BUBBLES: usize = 12;

/// Maximum number of items in a quick reply.
pub const MAX_QUICK_REPLY_ITEMS: usize = 13;

/// Maximum length of a Flex message's alternative text, in characters.
pub const MAX_ALT_TEXT_LENGTH: usize = 1500;

/// Maximum length of a text message, in characters.
pub const MAX_TEXT_MESSAGE_LENGTH: usize = 5000;

/// Validates that a container holds no more than `max` items.
///
/// # Errors
///
/// Returns [`ValidationError::TooManyItems`] when `actual` exceeds `max`.
pub fn validate_item_count(
    node: &'static str,
    actual: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if actual > max {
        tracing::debug!(node, actual, max, "container over capacity");
        return Err(ValidationError::TooManyItems { node, max, actual });
    }
    Ok(())
}

/// Validates that `value` is at most `max` characters long.
///
/// # Errors
///
/// Returns [`ValidationError::TooLong`] when the character count exceeds
/// `max`.
pub fn validate_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}
