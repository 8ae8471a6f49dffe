//! Builder configuration.

use serde::{Deserialize, Serialize};

/// How an empty box is treated at serialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyBoxPolicy {
    /// Serialize an empty box with an empty `contents` array.
    #[default]
    Allow,
    /// Reject an empty box with a required-field error.
    Reject,
}

/// Configuration for checks that the platform contract leaves open.
///
/// Checks the tree always needs (required fields, keyword domains,
/// carousel size) are not configurable.
///
/// # Examples
///
/// ```
/// use flexcraft::message::domain::{BuilderConfig, EmptyBoxPolicy};
///
/// let config = BuilderConfig::default();
/// assert_eq!(config.empty_box, EmptyBoxPolicy::Allow);
/// assert!(config.enforce_platform_limits);
///
/// let lenient = BuilderConfig::lenient();
/// assert!(!lenient.enforce_platform_limits);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Treatment of boxes without children.
    pub empty_box: EmptyBoxPolicy,
    /// Whether quick-reply size and text lengths are checked against the
    /// platform's documented limits.
    pub enforce_platform_limits: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            empty_box: EmptyBoxPolicy::Allow,
            enforce_platform_limits: true,
        }
    }
}

impl BuilderConfig {
    /// Creates a configuration that also rejects empty boxes.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            empty_box: EmptyBoxPolicy::Reject,
            enforce_platform_limits: true,
        }
    }

    /// Creates a configuration that skips platform limit checks.
    ///
    /// Useful when the payload is post-processed before it is sent.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            empty_box: EmptyBoxPolicy::Allow,
            enforce_platform_limits: false,
        }
    }
}
