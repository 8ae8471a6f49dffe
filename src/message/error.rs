//! Error types for component tree construction and serialization.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers. All errors describe a mistake in how
//! the tree was built; none of them are transient.

use std::convert::Infallible;

use thiserror::Error;

use super::validation::SizeFormat;

/// Result type for construction and serialization operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised while building or serializing a message tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A mandatory field was never set.
    #[error("{node} requires '{field}'")]
    RequiredField {
        /// The node kind missing the field.
        node: &'static str,
        /// The canonical name of the missing field.
        field: &'static str,
    },

    /// A field was set to a value outside its domain.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A required compositional relationship is missing.
    #[error("{node} is incomplete: {reason}")]
    Structural {
        /// The node kind with the missing relationship.
        node: &'static str,
        /// Description of what is missing.
        reason: String,
    },

    /// The serialized payload could not be encoded as JSON.
    #[error("failed to encode payload: {0}")]
    Encoding(String),
}

impl BuildError {
    /// Creates a required-field error.
    #[must_use]
    pub const fn required(node: &'static str, field: &'static str) -> Self {
        Self::RequiredField { node, field }
    }

    /// Creates a structural error.
    #[must_use]
    pub fn structural(node: &'static str, reason: impl Into<String>) -> Self {
        Self::Structural {
            node,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error reports a missing mandatory field.
    #[must_use]
    pub const fn is_required_field(&self) -> bool {
        matches!(self, Self::RequiredField { .. })
    }

    /// Returns `true` if this error reports an out-of-domain value.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` if this error reports a missing relationship.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Structural { .. })
    }
}

impl From<Infallible> for BuildError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<serde_json::Error> for BuildError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

/// Errors raised when a value falls outside its declared domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value is not one of the enumerated keywords.
    #[error("invalid value '{value}' for '{field}'; expected one of: {}", .allowed.join(", "))]
    NotInEnum {
        /// The attribute being set.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Every accepted keyword.
        allowed: Vec<&'static str>,
    },

    /// The value does not match any accepted size format.
    #[error("invalid size '{value}' for '{field}'; accepted formats: {}", format_formats(.accepted))]
    InvalidSize {
        /// The attribute being set.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Every format the attribute accepts.
        accepted: Vec<SizeFormat>,
    },

    /// The aspect ratio is not `<width>:<height>`.
    #[error("invalid aspect ratio '{0}'; expected '<width>:<height>' with positive integers")]
    InvalidAspectRatio(String),

    /// A container holds more children than the platform accepts.
    #[error("{node} holds {actual} items, exceeds limit of {max}")]
    TooManyItems {
        /// The container kind.
        node: &'static str,
        /// The maximum allowed number of items.
        max: usize,
        /// The actual number of items.
        actual: usize,
    },

    /// A string is longer than the platform accepts.
    #[error("'{field}' is {actual} characters long, exceeds limit of {max}")]
    TooLong {
        /// The attribute being checked.
        field: &'static str,
        /// The maximum allowed number of characters.
        max: usize,
        /// The actual number of characters.
        actual: usize,
    },

    /// An attribute map names an attribute the node does not have.
    #[error("unknown attribute '{attribute}' for {node}")]
    UnknownAttribute {
        /// The node kind being configured.
        node: &'static str,
        /// The unrecognised attribute name.
        attribute: String,
    },

    /// An attribute map carries a value of the wrong JSON type.
    #[error("attribute '{attribute}' must be {expected}")]
    WrongType {
        /// The attribute being set.
        attribute: String,
        /// Description of the expected JSON type.
        expected: &'static str,
    },
}

fn format_formats(formats: &[SizeFormat]) -> String {
    formats
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Creates an unknown-attribute error.
    #[must_use]
    pub fn unknown_attribute(node: &'static str, attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            node,
            attribute: attribute.into(),
        }
    }

    /// Creates a wrong-type error.
    #[must_use]
    pub fn wrong_type(attribute: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongType {
            attribute: attribute.into(),
            expected,
        }
    }
}
