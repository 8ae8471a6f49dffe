//! In-memory implementation of the `Context` port.

use std::collections::HashMap;

use serde_json::Value;

use crate::message::ports::context::Context;

/// A context backed by a fixed table of named values.
///
/// Suitable for callers that only need to choose an output convention, or
/// for tests that exercise name resolution without a real helper object.
///
/// # Examples
///
/// ```
/// use flexcraft::message::adapters::memory::InMemoryContext;
/// use flexcraft::message::ports::Context;
/// use serde_json::json;
///
/// let context = InMemoryContext::alternate().with_value("greeting", "hi");
/// assert!(context.alternate_mode());
/// assert_eq!(context.resolve("greeting"), Some(json!("hi")));
/// assert!(!context.responds_to("farewell"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryContext {
    values: HashMap<String, Value>,
    alternate: bool,
}

impl InMemoryContext {
    /// Creates an empty context using the standard key convention.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty context using the alternate key convention.
    #[must_use]
    pub fn alternate() -> Self {
        Self {
            alternate: true,
            ..Self::default()
        }
    }

    /// Adds a named value the context resolves.
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Returns the number of named values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no named values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Context for InMemoryContext {
    fn responds_to(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    fn resolve(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    fn alternate_mode(&self) -> bool {
        self.alternate
    }
}
