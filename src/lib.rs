//! Flexcraft: declarative builder for chat-platform messages.
//!
//! This crate builds text and Flex messages as typed component trees,
//! validates every attribute as it is set, and serializes finished trees
//! into the JSON payload the messaging API consumes. Keys are written in
//! camelCase or, for SDK-style consumers, snake_case.
//!
//! # Modules
//!
//! - [`message`]: component tree, validation and serialization

pub mod message;
