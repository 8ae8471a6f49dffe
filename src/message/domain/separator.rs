//! Separator components.

use serde_json::Value;

use super::{
    BuildContext,
    attributes::{Configure, Construct, unknown},
};
use crate::message::{
    error::BuildResult,
    serialization::{Node, Payload, PayloadWriter, SerializationMode},
};

/// A horizontal or vertical rule between siblings.
#[derive(Debug, Clone, Default)]
pub struct Separator {
    context: BuildContext,
}

impl Configure for Separator {
    const NODE: &'static str = "separator";

    fn apply_attribute(&mut self, name: &str, _value: &Value) -> BuildResult<()> {
        Err(unknown(Self::NODE, name).into())
    }
}

impl Construct for Separator {
    fn new_in(context: BuildContext) -> Self {
        Self { context }
    }
}

impl Node for Separator {
    fn context(&self) -> &BuildContext {
        &self.context
    }

    fn payload(&self, mode: SerializationMode) -> BuildResult<Payload> {
        Ok(PayloadWriter::tagged(mode, "separator").finish())
    }
}
