//! Variables: typed values that may be bound indirectly.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::number;
use crate::value::{ColorValue, ImageReference, Value};

/// A type that can be stored as a variable literal.
///
/// The provided methods use the type's own serde impls; `f64` overrides
/// them to keep non-finite numbers (see [`crate::number`]).
pub trait Literal: Sized + Serialize + DeserializeOwned {
    fn serialize_literal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }

    fn deserialize_literal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::deserialize(deserializer)
    }
}

impl Literal for f64 {
    fn serialize_literal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        number::serialize(self, serializer)
    }

    fn deserialize_literal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        number::deserialize(deserializer)
    }
}

impl Literal for String {}
impl Literal for bool {}
impl Literal for ColorValue {}
impl Literal for ImageReference {}
impl Literal for Value {}

fn serialize_literal<T: Literal, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    value.serialize_literal(serializer)
}

fn deserialize_literal<'de, T: Literal, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<T, D::Error> {
    T::deserialize_literal(deserializer)
}

/// How a [`Variable`] obtains its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    rename_all = "camelCase",
    bound(serialize = "T: Literal", deserialize = "T: Literal")
)]
pub enum Binding<T> {
    /// A value stored in the document.
    Literal {
        #[serde(
            serialize_with = "serialize_literal",
            deserialize_with = "deserialize_literal"
        )]
        value: T,
    },
    /// A named property supplied by the host or an enclosing component.
    Property { name: String },
    /// A key path into external data.
    #[serde(rename_all = "camelCase")]
    Data { key_path: String },
}

/// A typed value that is either a literal or resolved at render time.
///
/// The binding is fixed at construction; resolution never mutates it.
/// On the wire a variable is its binding:
///
/// ```text
/// { "kind": "literal",  "value": 3.0 }
/// { "kind": "property", "name": "title" }
/// { "kind": "data",     "keyPath": "items[0].title" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(serialize = "T: Literal", deserialize = "T: Literal")
)]
pub struct Variable<T> {
    binding: Binding<T>,
}

impl<T> Variable<T> {
    pub fn literal(value: T) -> Self {
        Self {
            binding: Binding::Literal { value },
        }
    }

    pub fn property(name: impl Into<String>) -> Self {
        Self {
            binding: Binding::Property { name: name.into() },
        }
    }

    pub fn data(key_path: impl Into<String>) -> Self {
        Self {
            binding: Binding::Data {
                key_path: key_path.into(),
            },
        }
    }

    pub fn binding(&self) -> &Binding<T> {
        &self.binding
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.binding, Binding::Literal { .. })
    }

    /// The literal value, if this variable is not bound.
    pub fn literal_value(&self) -> Option<&T> {
        match &self.binding {
            Binding::Literal { value } => Some(value),
            _ => None,
        }
    }

    /// The property name, if bound to a property.
    pub fn property_name(&self) -> Option<&str> {
        match &self.binding {
            Binding::Property { name } => Some(name),
            _ => None,
        }
    }
}

impl<T> From<Binding<T>> for Variable<T> {
    fn from(binding: Binding<T>) -> Self {
        Self { binding }
    }
}

impl From<&str> for Variable<String> {
    fn from(value: &str) -> Self {
        Variable::literal(value.to_string())
    }
}

impl From<f64> for Variable<f64> {
    fn from(value: f64) -> Self {
        Variable::literal(value)
    }
}

impl From<bool> for Variable<bool> {
    fn from(value: bool) -> Self {
        Variable::literal(value)
    }
}
