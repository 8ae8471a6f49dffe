//! The single routine every node uses to emit its payload.

use serde_json::{Map, Value};

use super::{Node, SerializationMode};
use crate::message::{
    domain::{Action, Keyword},
    error::BuildResult,
};

/// An ordered mapping from schema keys to JSON values.
pub type Payload = Map<String, Value>;

/// Accumulates one node's payload.
///
/// Keys are given in their canonical camelCase spelling and renamed for the
/// writer's [`SerializationMode`]. Absent values are skipped, never written
/// as `null`.
#[derive(Debug, Clone)]
pub struct PayloadWriter {
    mode: SerializationMode,
    payload: Payload,
}

impl PayloadWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new(mode: SerializationMode) -> Self {
        Self {
            mode,
            payload: Payload::new(),
        }
    }

    /// Creates a writer whose first key is the `type` tag.
    #[must_use]
    pub fn tagged(mode: SerializationMode, kind: &'static str) -> Self {
        let mut writer = Self::new(mode);
        writer.put("type", kind);
        writer
    }

    /// Returns the key convention in use.
    #[must_use]
    pub const fn mode(&self) -> SerializationMode {
        self.mode
    }

    /// Writes a value.
    pub fn put(&mut self, key: &'static str, value: impl Into<Value>) -> &mut Self {
        self.payload
            .insert(self.mode.key(key).into_owned(), value.into());
        self
    }

    /// Writes a value when present.
    pub fn put_opt<V: Into<Value>>(&mut self, key: &'static str, value: Option<V>) -> &mut Self {
        if let Some(present) = value {
            self.put(key, present);
        }
        self
    }

    /// Writes a keyword's wire spelling when present.
    pub fn put_keyword<K: Keyword>(&mut self, key: &'static str, value: Option<K>) -> &mut Self {
        self.put_opt(key, value.map(Keyword::as_str))
    }

    /// Writes a caller-supplied mapping when present, renaming its keys.
    pub fn put_map(&mut self, key: &'static str, value: Option<&Map<String, Value>>) -> &mut Self {
        if let Some(map) = value {
            let renamed = self.mode.recase(&Value::Object(map.clone()));
            self.put(key, renamed);
        }
        self
    }

    /// Writes an action's payload when present.
    ///
    /// # Errors
    ///
    /// Returns the action's required-field error.
    pub fn put_action(&mut self, key: &'static str, action: Option<&Action>) -> BuildResult<&mut Self> {
        if let Some(present) = action {
            let payload = present.payload(self.mode)?;
            self.put(key, payload);
        }
        Ok(self)
    }

    /// Writes a child node's payload when present, in this writer's mode.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while serializing the child.
    pub fn put_node<N: Node + ?Sized>(&mut self, key: &'static str, node: Option<&N>) -> BuildResult<&mut Self> {
        if let Some(present) = node {
            let payload = present.payload(self.mode)?;
            self.put(key, payload);
        }
        Ok(self)
    }

    /// Writes a list of child payloads, in this writer's mode.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while serializing a child.
    pub fn put_nodes<N: Node>(&mut self, key: &'static str, nodes: &[N]) -> BuildResult<&mut Self> {
        let items = nodes
            .iter()
            .map(|node| node.payload(self.mode).map(Value::Object))
            .collect::<BuildResult<Vec<_>>>()?;
        self.put(key, items);
        Ok(self)
    }

    /// Returns the accumulated payload.
    #[must_use]
    pub fn finish(self) -> Payload {
        self.payload
    }
}
