//! Field-level access to tagged wire objects.
//!
//! [`Fields`] reads one JSON object on behalf of a node, action or nested
//! record, reporting failures as [`DecodeError::MalformedField`] against
//! the owner's type name. Variable-typed fields are read through the
//! version band recorded in the [`DecodeContext`]. [`FieldWriter`] is the
//! inverse and always writes the current shape.

use std::collections::BTreeMap;

use layerkit_model::{Literal, Variable, number};
use serde::Serialize;
use serde::de::{Deserialize, DeserializeOwned};
use serde_json::{Map, Value};

use crate::codec::context::DecodeContext;
use crate::codec::legacy::LegacyValue;
use crate::codec::node::{decode_node, encode_node};
use crate::codec::version::VARIABLE_BINDINGS_SINCE;
use crate::error::{DecodeError, EncodeError};
use crate::node::Node;

/// Key carrying the wire tag of nodes and actions.
pub const TYPE_NAME_KEY: &str = "__typeName";

/// Read-only view over one wire object.
pub(crate) struct Fields<'a> {
    owner: &'static str,
    map: &'a Map<String, Value>,
    context: &'a DecodeContext,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(
        owner: &'static str,
        map: &'a Map<String, Value>,
        context: &'a DecodeContext,
    ) -> Self {
        Self {
            owner,
            map,
            context,
        }
    }

    /// View `value` as an object owned by `owner`.
    pub(crate) fn of(
        owner: &'static str,
        value: &'a Value,
        context: &'a DecodeContext,
    ) -> Result<Self, DecodeError> {
        let map = value
            .as_object()
            .ok_or_else(|| DecodeError::malformed(owner, "", "object"))?;
        Ok(Self::new(owner, map, context))
    }

    /// Same object, reported under a different owner.
    pub(crate) fn relabel(&self, owner: &'static str) -> Self {
        Self::new(owner, self.map, self.context)
    }

    pub(crate) fn owner(&self) -> &'static str {
        self.owner
    }

    pub(crate) fn context(&self) -> &'a DecodeContext {
        self.context
    }

    /// Present, non-null value of `field`.
    fn get(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field).filter(|value| !value.is_null())
    }

    fn malformed<T>(&self, field: &str) -> DecodeError {
        DecodeError::malformed(self.owner, field, short_type_name::<T>())
    }

    fn parse<T: DeserializeOwned>(&self, field: &str, value: &'a Value) -> Result<T, DecodeError> {
        T::deserialize(value).map_err(|error| {
            tracing::debug!(node = self.owner, field, %error, "field failed to decode");
            self.malformed::<T>(field)
        })
    }

    pub(crate) fn required<T: DeserializeOwned>(&self, field: &str) -> Result<T, DecodeError> {
        let value = self.get(field).ok_or_else(|| self.malformed::<T>(field))?;
        self.parse(field, value)
    }

    /// Missing and `null` both decode to `None`.
    pub(crate) fn optional<T: DeserializeOwned>(
        &self,
        field: &str,
    ) -> Result<Option<T>, DecodeError> {
        self.get(field)
            .map(|value| self.parse(field, value))
            .transpose()
    }

    /// Optional raw number, which may be written as `"Infinity"` and the like.
    pub(crate) fn optional_number(&self, field: &str) -> Result<Option<f64>, DecodeError> {
        self.get(field)
            .map(|value| {
                number::deserialize(value).map_err(|error| {
                    tracing::debug!(node = self.owner, field, %error, "field failed to decode");
                    self.malformed::<f64>(field)
                })
            })
            .transpose()
    }

    pub(crate) fn variable<T: Literal>(
        &self,
        field: &str,
    ) -> Result<Variable<T>, DecodeError> {
        let value = self
            .get(field)
            .ok_or_else(|| self.malformed::<Variable<T>>(field))?;
        self.parse_variable(field, value)
    }

    pub(crate) fn optional_variable<T: Literal>(
        &self,
        field: &str,
    ) -> Result<Option<Variable<T>>, DecodeError> {
        self.get(field)
            .map(|value| self.parse_variable(field, value))
            .transpose()
    }

    /// Object of variables keyed by name. Missing decodes to empty.
    pub(crate) fn variable_map<T: Literal>(
        &self,
        field: &str,
    ) -> Result<BTreeMap<String, Variable<T>>, DecodeError> {
        let Some(value) = self.get(field) else {
            return Ok(BTreeMap::new());
        };
        let map = value
            .as_object()
            .ok_or_else(|| self.malformed::<BTreeMap<String, Variable<T>>>(field))?;
        map.iter()
            .map(|(key, value)| Ok((key.clone(), self.parse_variable(field, value)?)))
            .collect()
    }

    fn parse_variable<T: Literal>(
        &self,
        field: &str,
        value: &'a Value,
    ) -> Result<Variable<T>, DecodeError> {
        if self.context.is_before(VARIABLE_BINDINGS_SINCE) {
            tracing::trace!(
                node = self.owner,
                field,
                version = self.context.version(),
                "reading legacy value shape"
            );
            LegacyValue::<T>::deserialize(value)
                .map(LegacyValue::into_variable)
                .map_err(|error| {
                    tracing::debug!(node = self.owner, field, %error, "legacy value failed to decode");
                    self.malformed::<Variable<T>>(field)
                })
        } else {
            self.parse(field, value)
        }
    }

    /// Array of nested objects, each read by `decode` under `owner`.
    /// Missing decodes to empty.
    pub(crate) fn objects<T>(
        &self,
        field: &str,
        owner: &'static str,
        decode: impl Fn(&Fields<'a>) -> Result<T, DecodeError>,
    ) -> Result<Vec<T>, DecodeError> {
        let Some(value) = self.get(field) else {
            return Ok(Vec::new());
        };
        let items = value
            .as_array()
            .ok_or_else(|| DecodeError::malformed(self.owner, field, "array"))?;
        items
            .iter()
            .map(|item| decode(&Fields::of(owner, item, self.context)?))
            .collect()
    }

    /// Array of child nodes, each dispatched through the registry.
    pub(crate) fn nodes(&self, field: &str) -> Result<Vec<Node>, DecodeError> {
        let items = self
            .get(field)
            .and_then(Value::as_array)
            .ok_or_else(|| DecodeError::malformed(self.owner, field, "array of nodes"))?;
        items
            .iter()
            .map(|item| decode_node(item, self.context))
            .collect()
    }
}

/// Builds one wire object, tag first.
pub(crate) struct FieldWriter {
    owner: &'static str,
    map: Map<String, Value>,
}

impl FieldWriter {
    /// Start an object tagged with `type_name`.
    pub(crate) fn tagged(type_name: &'static str) -> Self {
        let mut map = Map::new();
        map.insert(TYPE_NAME_KEY.to_string(), Value::String(type_name.to_string()));
        Self {
            owner: type_name,
            map,
        }
    }

    /// Start an untagged nested object.
    pub(crate) fn untagged(owner: &'static str) -> Self {
        Self {
            owner,
            map: Map::new(),
        }
    }

    /// Write `value`; `None` is written as an explicit `null`.
    pub(crate) fn put<T: Serialize + ?Sized>(
        &mut self,
        field: &str,
        value: &T,
    ) -> Result<(), EncodeError> {
        let value = serde_json::to_value(value).map_err(|source| EncodeError::Field {
            node: self.owner,
            field: field.to_string(),
            source,
        })?;
        self.map.insert(field.to_string(), value);
        Ok(())
    }

    /// Write an optional raw number in its wire form.
    pub(crate) fn put_number(&mut self, field: &str, value: Option<f64>) -> Result<(), EncodeError> {
        let value = number::option::serialize(&value, serde_json::value::Serializer).map_err(
            |source| EncodeError::Field {
                node: self.owner,
                field: field.to_string(),
                source,
            },
        )?;
        self.map.insert(field.to_string(), value);
        Ok(())
    }

    /// Write `value` only when present.
    pub(crate) fn put_if_present<T: Serialize>(
        &mut self,
        field: &str,
        value: Option<&T>,
    ) -> Result<(), EncodeError> {
        match value {
            Some(value) => self.put(field, value),
            None => Ok(()),
        }
    }

    /// Write an already-encoded value.
    pub(crate) fn put_raw(&mut self, field: &str, value: Value) {
        self.map.insert(field.to_string(), value);
    }

    pub(crate) fn put_nodes(&mut self, field: &str, nodes: &[Node]) -> Result<(), EncodeError> {
        let encoded = nodes
            .iter()
            .map(encode_node)
            .collect::<Result<Vec<_>, _>>()?;
        self.put_raw(field, Value::Array(encoded));
        Ok(())
    }

    pub(crate) fn finish(self) -> Value {
        Value::Object(self.map)
    }
}

/// Type name with module paths stripped, e.g. `Option<Variable<f64>>`.
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut token = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            token.push(c);
        } else {
            short.push_str(token.rsplit("::").next().unwrap_or_default());
            token.clear();
            short.push(c);
        }
    }
    short.push_str(token.rsplit("::").next().unwrap_or_default());
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::version::CURRENT_VERSION;
    use serde_json::json;

    #[test]
    fn short_type_names() {
        assert_eq!(short_type_name::<f64>(), "f64");
        assert_eq!(
            short_type_name::<Option<Variable<String>>>(),
            "Option<Variable<String>>"
        );
        assert_eq!(
            short_type_name::<BTreeMap<String, Variable<f64>>>(),
            "BTreeMap<String, Variable<f64>>"
        );
    }

    #[test]
    fn null_and_missing_are_absent() {
        let object = json!({"a": null, "b": 2.5});
        let context = DecodeContext::new(CURRENT_VERSION);
        let fields = Fields::of("Test", &object, &context).unwrap();

        assert_eq!(fields.optional::<f64>("a").unwrap(), None);
        assert_eq!(fields.optional::<f64>("missing").unwrap(), None);
        assert_eq!(fields.optional::<f64>("b").unwrap(), Some(2.5));
        assert!(matches!(
            fields.required::<f64>("a"),
            Err(DecodeError::MalformedField { node: "Test", .. })
        ));
    }

    #[test]
    fn wrong_type_names_expected_shape() {
        let object = json!({"count": "three"});
        let context = DecodeContext::new(CURRENT_VERSION);
        let fields = Fields::of("Test", &object, &context).unwrap();

        let Err(DecodeError::MalformedField {
            field, expected, ..
        }) = fields.required::<u32>("count")
        else {
            panic!("expected malformed field");
        };
        assert_eq!(field, "count");
        assert_eq!(expected, "u32");
    }

    #[test]
    fn variables_follow_the_version_band() {
        let legacy = json!({"title": {"propertyName": "heading"}});
        let current = json!({"title": {"kind": "property", "name": "heading"}});

        let old = DecodeContext::new(VARIABLE_BINDINGS_SINCE - 1);
        let new = DecodeContext::new(VARIABLE_BINDINGS_SINCE);

        let from_legacy: Variable<String> =
            Fields::of("Test", &legacy, &old).unwrap().variable("title").unwrap();
        let from_current: Variable<String> =
            Fields::of("Test", &current, &new).unwrap().variable("title").unwrap();
        assert_eq!(from_legacy, from_current);
        assert_eq!(from_current.property_name(), Some("heading"));

        // Legacy shape is rejected once bindings are tagged.
        assert!(
            Fields::of("Test", &legacy, &new)
                .unwrap()
                .variable::<String>("title")
                .is_err()
        );
    }

    #[test]
    fn raw_numbers_keep_non_finite_values() {
        let mut writer = FieldWriter::tagged("HStackLayer");
        writer.put_number("spacing", Some(f64::INFINITY)).unwrap();
        writer.put_number("minLength", None).unwrap();
        let encoded = writer.finish();
        assert_eq!(
            encoded,
            json!({"__typeName": "HStackLayer", "spacing": "Infinity", "minLength": null})
        );

        let context = DecodeContext::new(CURRENT_VERSION);
        let fields = Fields::of("HStackLayer", &encoded, &context).unwrap();
        assert_eq!(fields.optional_number("spacing").unwrap(), Some(f64::INFINITY));
        assert_eq!(fields.optional_number("minLength").unwrap(), None);
        assert!(matches!(
            Fields::of("HStackLayer", &json!({"spacing": true}), &context)
                .unwrap()
                .optional_number("spacing"),
            Err(DecodeError::MalformedField { field, .. }) if field == "spacing"
        ));
    }

    #[test]
    fn writer_puts_tag_first_and_nulls() {
        let mut writer = FieldWriter::tagged("LineLimitModifier");
        writer.put("min", &None::<Variable<f64>>).unwrap();
        writer.put("max", &Some(Variable::literal(3.0))).unwrap();
        let encoded = serde_json::to_string(&writer.finish()).unwrap();
        assert_eq!(
            encoded,
            r#"{"__typeName":"LineLimitModifier","min":null,"max":{"kind":"literal","value":3.0}}"#
        );
    }
}
