//! Context port.
//!
//! A context is the opaque capability object a caller hands to the root of
//! a construction. The tree never interprets it beyond asking which output
//! convention to use; convenience layers use the lookup methods to forward
//! names they do not handle themselves.

use serde_json::Value;

/// Port for the caller-supplied construction context.
pub trait Context: Send + Sync {
    /// Returns `true` if `name` resolves to something in this context.
    fn responds_to(&self, name: &str) -> bool;

    /// Resolves `name` to a value, if the context provides one.
    fn resolve(&self, name: &str) -> Option<Value>;

    /// Returns `true` if documents built under this context use the
    /// alternate (snake_case) key convention.
    fn alternate_mode(&self) -> bool;
}
