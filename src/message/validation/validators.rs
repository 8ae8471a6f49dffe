//! Attribute validators.
//!
//! Validators are pure values that check a candidate against a domain.
//! They never enforce presence: callers decide whether a field is required.

use std::fmt;

use crate::message::error::ValidationError;

const KEYWORD_SIZES: &[&str] = &["none", "xs", "sm", "md", "lg", "xl", "xxl"];
const FONT_SIZES: &[&str] = &[
    "xxs", "xs", "sm", "md", "lg", "xl", "xxl", "3xl", "4xl", "5xl",
];
const IMAGE_SIZES: &[&str] = &[
    "xxs", "xs", "sm", "md", "lg", "xl", "xxl", "3xl", "4xl", "5xl", "full",
];
const BORDER_WIDTHS: &[&str] = &["none", "light", "normal", "medium", "semi-bold", "bold"];

/// Checks that a value belongs to a fixed set of keywords.
///
/// # Examples
///
/// ```
/// use flexcraft::message::validation::EnumValidator;
///
/// let layouts = EnumValidator::new(&["horizontal", "vertical", "baseline"]);
/// assert!(layouts.validate("layout", Some("vertical")).is_ok());
/// assert!(layouts.validate("layout", None).is_ok());
/// assert!(layouts.validate("layout", Some("diagonal")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValidator {
    allowed: &'static [&'static str],
}

impl EnumValidator {
    /// Creates a validator accepting exactly `allowed`.
    #[must_use]
    pub const fn new(allowed: &'static [&'static str]) -> Self {
        Self { allowed }
    }

    /// Returns the accepted keywords.
    #[must_use]
    pub const fn allowed(&self) -> &'static [&'static str] {
        self.allowed
    }

    /// Validates `value` for the attribute `field`. `None` always passes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotInEnum`] if the value is not one of the
    /// accepted keywords.
    pub fn validate(&self, field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
        let Some(candidate) = value else {
            return Ok(());
        };
        if self.allowed.contains(&candidate) {
            return Ok(());
        }
        Err(self.rejection(field, candidate))
    }

    /// Builds the error reported when `value` is outside the accepted set.
    #[must_use]
    pub fn rejection(&self, field: &'static str, value: &str) -> ValidationError {
        tracing::debug!(field, value, "keyword rejected");
        ValidationError::NotInEnum {
            field,
            value: value.to_owned(),
            allowed: self.allowed.to_vec(),
        }
    }
}

/// A string format accepted by a [`SizeValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeFormat {
    /// An integer followed by `px`, such as `10px`.
    Pixel,
    /// A spacing keyword: `none`, `xs`, `sm`, `md`, `lg`, `xl` or `xxl`.
    Keyword,
    /// A font-size keyword from `xxs` to `5xl`.
    FontKeyword,
    /// An image-size keyword from `xxs` to `5xl`, or `full`.
    ImageKeyword,
    /// A border-width keyword such as `light` or `semi-bold`.
    BorderKeyword,
    /// Digits followed by `%`, such as `50%` or `12.5%`.
    Percentage,
}

impl SizeFormat {
    /// Returns `true` if `value` is written in this format.
    #[must_use]
    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::Pixel => value.strip_suffix("px").is_some_and(is_digits),
            Self::Keyword => KEYWORD_SIZES.contains(&value),
            Self::FontKeyword => FONT_SIZES.contains(&value),
            Self::ImageKeyword => IMAGE_SIZES.contains(&value),
            Self::BorderKeyword => BORDER_WIDTHS.contains(&value),
            Self::Percentage => value.strip_suffix('%').is_some_and(is_decimal),
        }
    }
}

impl fmt::Display for SizeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pixel => "pixel",
            Self::Keyword => "keyword",
            Self::FontKeyword => "font-keyword",
            Self::ImageKeyword => "image-keyword",
            Self::BorderKeyword => "border-keyword",
            Self::Percentage => "percentage",
        };
        f.write_str(name)
    }
}

/// Checks that a value is written in at least one of a set of size formats.
///
/// # Examples
///
/// ```
/// use flexcraft::message::validation::{SizeFormat, SizeValidator};
///
/// let margin = SizeValidator::new(&[SizeFormat::Pixel, SizeFormat::Keyword]);
/// assert!(margin.validate("margin", "10px").is_ok());
/// assert!(margin.validate("margin", "md").is_ok());
/// assert!(margin.validate("margin", "50%").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeValidator {
    formats: &'static [SizeFormat],
}

impl SizeValidator {
    /// Creates a validator accepting any of `formats`.
    #[must_use]
    pub const fn new(formats: &'static [SizeFormat]) -> Self {
        Self { formats }
    }

    /// Returns the accepted formats.
    #[must_use]
    pub const fn formats(&self) -> &'static [SizeFormat] {
        self.formats
    }

    /// Validates `value` for the attribute `field`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSize`] listing the accepted formats
    /// if no format matches.
    pub fn validate(&self, field: &'static str, value: &str) -> Result<(), ValidationError> {
        if self.formats.iter().any(|format| format.matches(value)) {
            return Ok(());
        }
        tracing::debug!(field, value, "size rejected");
        Err(ValidationError::InvalidSize {
            field,
            value: value.to_owned(),
            accepted: self.formats.to_vec(),
        })
    }
}

/// Validates an aspect ratio written as `<width>:<height>`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAspectRatio`] if either side is missing,
/// not an integer, or zero.
pub fn validate_aspect_ratio(value: &str) -> Result<(), ValidationError> {
    let valid = value.split_once(':').is_some_and(|(width, height)| {
        is_positive_integer(width) && is_positive_integer(height)
    });
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidAspectRatio(value.to_owned()))
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

fn is_decimal(value: &str) -> bool {
    match value.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(value),
    }
}

fn is_positive_integer(value: &str) -> bool {
    is_digits(value) && value.bytes().any(|byte| byte != b'0')
}
