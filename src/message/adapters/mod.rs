//! Adapters for the message builder's ports.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryContext`]: a [`Context`] backed by a table of named
//!   values and a fixed key convention
//!
//! [`Context`]: crate::message::ports::Context

pub mod memory;
