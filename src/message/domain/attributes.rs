//! Attribute maps and node construction.
//!
//! Every node can be created from an [`Attributes`] map followed by a
//! construction block. Attribute names are accepted in either camelCase or
//! snake_case; values are validated as soon as they are applied. A `null`
//! value leaves the attribute unset.

use serde_json::{Map, Value};

use super::{Action, BuildContext, Keyword};
use crate::message::{
    error::{BuildResult, ValidationError},
    serialization::mode::snake_case,
    validation::SizeValidator,
};

/// An ordered map of initial attribute values.
///
/// # Examples
///
/// ```
/// use flexcraft::message::domain::Attributes;
///
/// let attributes = Attributes::new()
///     .with("layout", "vertical")
///     .with("paddingAll", "10px");
/// assert_eq!(attributes.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// Creates an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an attribute value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Returns the value for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Iterates over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Attributes {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ValidationError::wrong_type("attributes", "an object")),
        }
    }
}

/// Applies named attribute values to a node.
pub trait Configure {
    /// The node kind, used in error messages.
    const NODE: &'static str;

    /// Applies one attribute. `name` is already in snake_case.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the attribute is unknown to this node,
    /// has the wrong JSON type, or is outside its domain.
    fn apply_attribute(&mut self, name: &str, value: &Value) -> BuildResult<()>;

    /// Applies every attribute in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`Configure::apply_attribute`].
    fn apply_attributes(&mut self, attributes: &Attributes) -> BuildResult<()> {
        for (name, value) in attributes.iter() {
            self.apply_attribute(&snake_case(name), value)?;
        }
        Ok(())
    }
}

/// Creates nodes within a construction context.
pub trait Construct: Configure + Sized {
    /// Creates an unconfigured node carrying `context`.
    fn new_in(context: BuildContext) -> Self;

    /// Creates a node, applies `attributes`, then runs `block` against it.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute or by `block`.
    fn build<F>(context: BuildContext, attributes: &Attributes, block: F) -> BuildResult<Self>
    where
        F: FnOnce(&mut Self) -> BuildResult<()>,
    {
        let mut node = Self::new_in(context);
        node.apply_attributes(attributes)?;
        block(&mut node)?;
        Ok(node)
    }

    /// Creates a node from `attributes` alone.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an attribute.
    fn from_attributes(context: BuildContext, attributes: &Attributes) -> BuildResult<Self> {
        Self::build(context, attributes, |_| Ok(()))
    }
}

pub(crate) fn unknown(node: &'static str, name: &str) -> ValidationError {
    ValidationError::unknown_attribute(node, name)
}

pub(crate) fn string_value(name: &str, value: &Value) -> Result<Option<String>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        _ => Err(ValidationError::wrong_type(name, "a string")),
    }
}

pub(crate) fn bool_value(name: &str, value: &Value) -> Result<Option<bool>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(flag) => Ok(Some(*flag)),
        _ => Err(ValidationError::wrong_type(name, "a boolean")),
    }
}

pub(crate) fn u32_value(name: &str, value: &Value) -> Result<Option<u32>, ValidationError> {
    if value.is_null() {
        return Ok(None);
    }
    value
        .as_u64()
        .and_then(|number| u32::try_from(number).ok())
        .map(Some)
        .ok_or_else(|| ValidationError::wrong_type(name, "a non-negative integer"))
}

pub(crate) fn keyword_value<K>(name: &str, value: &Value) -> Result<Option<K>, ValidationError>
where
    K: Keyword + for<'a> TryFrom<&'a str, Error = ValidationError>,
{
    string_value(name, value)?
        .map(|text| K::try_from(text.as_str()))
        .transpose()
}

pub(crate) fn size_value(
    field: &'static str,
    validator: SizeValidator,
    value: &Value,
) -> Result<Option<String>, ValidationError> {
    let text = string_value(field, value)?;
    if let Some(size) = text.as_deref() {
        validator.validate(field, size)?;
    }
    Ok(text)
}

pub(crate) fn object_value(
    name: &str,
    value: &Value,
) -> Result<Option<Map<String, Value>>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map.clone())),
        _ => Err(ValidationError::wrong_type(name, "an object")),
    }
}

pub(crate) fn action_value(name: &str, value: &Value) -> BuildResult<Option<Action>> {
    object_value(name, value)?
        .map(|map| Action::from_attributes(&Attributes::from(map)))
        .transpose()
}

/// Converts a keyword argument, accepting either the enum itself or its
/// wire spelling.
pub(crate) fn to_keyword<K, V>(value: V) -> BuildResult<K>
where
    V: TryInto<K>,
    crate::message::error::BuildError: From<V::Error>,
{
    Ok(value.try_into()?)
}
