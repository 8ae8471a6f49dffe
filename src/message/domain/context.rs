//! The construction context threaded through every node.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::BuilderConfig;
use crate::message::{ports::Context, serialization::SerializationMode};

/// Shared state for one construction pass.
///
/// Holds the output convention, the builder configuration and the optional
/// caller-supplied [`Context`]. The convention is resolved once, when the
/// root is created, and every node built beneath that root carries a clone
/// of the same value, so it cannot change part-way through a tree.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use flexcraft::message::adapters::memory::InMemoryContext;
/// use flexcraft::message::domain::BuildContext;
/// use flexcraft::message::serialization::SerializationMode;
///
/// let context = BuildContext::with_delegate(Arc::new(InMemoryContext::alternate()));
/// assert_eq!(context.mode(), SerializationMode::Alternate);
/// assert_eq!(BuildContext::new().mode(), SerializationMode::Standard);
/// ```
#[derive(Clone, Default)]
pub struct BuildContext {
    mode: SerializationMode,
    config: BuilderConfig,
    delegate: Option<Arc<dyn Context>>,
}

impl BuildContext {
    /// Creates a context with the standard convention and no delegate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with an explicit convention and no delegate.
    #[must_use]
    pub fn with_mode(mode: SerializationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Creates a context around a caller-supplied delegate, asking it once
    /// which convention to use.
    #[must_use]
    pub fn with_delegate(delegate: Arc<dyn Context>) -> Self {
        let mode = if delegate.alternate_mode() {
            SerializationMode::Alternate
        } else {
            SerializationMode::Standard
        };
        Self {
            mode,
            config: BuilderConfig::default(),
            delegate: Some(delegate),
        }
    }

    /// Replaces the builder configuration.
    #[must_use]
    pub const fn with_config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the output convention.
    #[must_use]
    pub const fn mode(&self) -> SerializationMode {
        self.mode
    }

    /// Returns the builder configuration.
    #[must_use]
    pub const fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Returns the caller-supplied delegate, if any.
    #[must_use]
    pub fn delegate(&self) -> Option<&dyn Context> {
        self.delegate.as_deref()
    }

    /// Resolves `name` through the delegate.
    ///
    /// Returns `None` when there is no delegate or it does not respond to
    /// `name`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Value> {
        self.delegate
            .as_deref()
            .filter(|delegate| delegate.responds_to(name))
            .and_then(|delegate| delegate.resolve(name))
    }
}

impl fmt::Debug for BuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildContext")
            .field("mode", &self.mode)
            .field("config", &self.config)
            .field("delegate", &self.delegate.is_some())
            .finish()
    }
}
