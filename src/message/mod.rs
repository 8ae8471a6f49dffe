//! Validated component trees for chat-platform messages.
//!
//! This module implements the node types, attribute validation and
//! two-convention serialization behind text and Flex messages.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: the component tree ([`domain::FlexMessage`], [`domain::Bubble`], [`domain::FlexBox`], etc.)
//! - **Ports**: the capability interface consumed from callers ([`ports::Context`])
//! - **Adapters**: concrete implementations ([`adapters::memory::InMemoryContext`])
//! - **Validation**: attribute domains and platform limits
//! - **Serialization**: the [`serialization::Node`] trait and key conventions
//!
//! # Example
//!
//! ```
//! use flexcraft::message::{self, domain::Attributes};
//!
//! let collection = message::build(None, |messages| {
//!     messages.flex(&Attributes::new().with("altText", "Greeting"), |flex| {
//!         flex.bubble(&Attributes::new(), |bubble| {
//!             bubble.body(&Attributes::new().with("layout", "vertical"), |body| {
//!                 body.add_text(&Attributes::new().with("text", "Welcome!"), |_| Ok(()))?;
//!                 Ok(())
//!             })?;
//!             Ok(())
//!         })?;
//!         Ok(())
//!     })?;
//!     Ok(())
//! })
//! .expect("valid tree");
//!
//! let payloads = collection.build().expect("complete tree");
//! assert_eq!(payloads[0]["contents"]["body"]["contents"][0]["text"], "Welcome!");
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod serialization;
pub mod validation;

pub use domain::build;

#[cfg(test)]
mod tests;
