//! In-memory adapter implementations.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! callers without a helper object of their own, and for unit testing.

mod context;

pub use context::InMemoryContext;
