//! Port definitions for the message builder.
//!
//! Ports define abstract interfaces that the builder consumes from its
//! callers, following hexagonal architecture principles.

pub mod context;

pub use context::Context;
