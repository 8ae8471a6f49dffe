//! Attribute validators and platform limits.
//!
//! Validators run when an attribute is assigned; limits run when a
//! container is serialized, once construction has finished.

pub mod limits;
pub mod validators;

pub use limits::{
    MAX_ALT_TEXT_LENGTH, MAX_CAROUSEL_BUBBLES, MAX_QUICK_REPLY_ITEMS, MAX_TEXT_MESSAGE_LENGTH,
    validate_item_count, validate_length,
};
pub use validators::{EnumValidator, SizeFormat, SizeValidator, validate_aspect_ratio};
