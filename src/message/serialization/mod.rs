//! Serialization of component trees into wire payloads.
//!
//! Every node implements [`Node`]. Serialization is a read-only recursive
//! traversal: it may run any number of times on a finished tree and always
//! yields the same payload. A parent passes its own [`SerializationMode`]
//! to its children, so a single document never mixes key conventions.

pub mod mode;
pub mod writer;

pub use mode::SerializationMode;
pub use writer::{Payload, PayloadWriter};

use crate::message::{domain::BuildContext, error::BuildResult};

/// A node of the message component tree.
pub trait Node {
    /// Returns the construction context the node was created in.
    fn context(&self) -> &BuildContext;

    /// Serializes the node and its children using `mode`.
    ///
    /// # Errors
    ///
    /// Returns a required-field, validation or structural error when the
    /// node or one of its descendants is incomplete.
    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload>;

    /// Serializes the node using the convention of its own context.
    ///
    /// # Errors
    ///
    /// See [`Node::payload`].
    fn serialize(&self) -> BuildResult<Payload> {
        self.payload(self.context().mode())
    }
}
