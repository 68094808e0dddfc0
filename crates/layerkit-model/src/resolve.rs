//! Resolution of variables against property values and external data.
//!
//! Resolution is best-effort and never fails. [`Variable::resolve`]
//! substitutes the type's fallback (empty string, `0`, `false`, clear
//! color, empty image reference) when a binding cannot be satisfied;
//! [`Variable::resolve_strict`] reports the absence instead so callers can
//! suppress a subtree rather than render a default.
//!
//! Both are pure functions of the variable and the context. Nothing is
//! cached and nothing is mutated.

use std::fmt;

use crate::key_path::KeyPath;
use crate::value::{ColorValue, ImageReference, PropertyValues, Value};
use crate::variable::{Binding, Variable};

/// Types a [`Variable`] can resolve to.
pub trait Resolvable: Clone {
    /// Value used when a binding cannot be satisfied.
    fn fallback() -> Self;

    /// Extract from a property value; `None` on a type mismatch.
    fn from_property(value: &Value) -> Option<Self>;

    /// Extract from a node of external data; `None` on a type mismatch.
    fn from_data(data: &serde_json::Value) -> Option<Self>;
}

impl Resolvable for String {
    fn fallback() -> Self {
        String::new()
    }

    fn from_property(value: &Value) -> Option<Self> {
        value.as_text().map(str::to_string)
    }

    fn from_data(data: &serde_json::Value) -> Option<Self> {
        match data {
            serde_json::Value::String(text) => Some(text.clone()),
            serde_json::Value::Number(number) => Some(number.to_string()),
            serde_json::Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }
}

impl Resolvable for f64 {
    fn fallback() -> Self {
        0.0
    }

    fn from_property(value: &Value) -> Option<Self> {
        value.as_number()
    }

    fn from_data(data: &serde_json::Value) -> Option<Self> {
        data.as_f64()
    }
}

impl Resolvable for bool {
    fn fallback() -> Self {
        false
    }

    fn from_property(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn from_data(data: &serde_json::Value) -> Option<Self> {
        data.as_bool()
    }
}

impl Resolvable for ColorValue {
    fn fallback() -> Self {
        ColorValue::CLEAR
    }

    fn from_property(value: &Value) -> Option<Self> {
        match value {
            Value::Color(color) => Some(*color),
            _ => None,
        }
    }

    fn from_data(data: &serde_json::Value) -> Option<Self> {
        match data {
            serde_json::Value::String(hex) => ColorValue::from_hex(hex),
            serde_json::Value::Object(_) => serde_json::from_value(data.clone()).ok(),
            _ => None,
        }
    }
}

impl Resolvable for ImageReference {
    fn fallback() -> Self {
        ImageReference::default()
    }

    fn from_property(value: &Value) -> Option<Self> {
        match value {
            Value::Image(image) => Some(image.clone()),
            _ => None,
        }
    }

    fn from_data(data: &serde_json::Value) -> Option<Self> {
        match data {
            serde_json::Value::String(url) => Some(ImageReference::url(url.clone())),
            serde_json::Value::Object(_) => serde_json::from_value(data.clone()).ok(),
            _ => None,
        }
    }
}

impl Resolvable for Value {
    fn fallback() -> Self {
        Value::Text(String::new())
    }

    fn from_property(value: &Value) -> Option<Self> {
        Some(value.clone())
    }

    fn from_data(data: &serde_json::Value) -> Option<Self> {
        Value::from_json(data)
    }
}

/// Inputs available to resolution.
///
/// Borrowed and read-only: the same context may be shared across threads
/// and used for any number of resolutions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionContext<'a> {
    pub property_values: Option<&'a PropertyValues>,
    pub data: Option<&'a serde_json::Value>,
}

impl<'a> ResolutionContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property_values(mut self, property_values: &'a PropertyValues) -> Self {
        self.property_values = Some(property_values);
        self
    }

    pub fn with_data(mut self, data: &'a serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn property(&self, name: &str) -> Option<&'a Value> {
        self.property_values?.get(name)
    }
}

/// Why a resolution fell back to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultReason {
    MissingProperty,
    PropertyTypeMismatch,
    NoData,
    InvalidKeyPath,
    UnresolvedKeyPath,
    DataTypeMismatch,
}

impl fmt::Display for DefaultReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DefaultReason::MissingProperty => "property not supplied",
            DefaultReason::PropertyTypeMismatch => "property has a different type",
            DefaultReason::NoData => "no data in scope",
            DefaultReason::InvalidKeyPath => "key path is malformed",
            DefaultReason::UnresolvedKeyPath => "key path does not match the data",
            DefaultReason::DataTypeMismatch => "data has a different type",
        })
    }
}

/// A recorded fallback. Not an error: surfaced for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionDefaulted {
    /// The property name or key path that failed.
    pub binding: String,
    pub reason: DefaultReason,
}

impl fmt::Display for ResolutionDefaulted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' defaulted: {}", self.binding, self.reason)
    }
}

/// Result of [`Variable::resolve_traced`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub fallback: Option<ResolutionDefaulted>,
}

impl<T: Resolvable> Variable<T> {
    /// Resolve to a concrete value, substituting the fallback on failure.
    pub fn resolve(&self, context: &ResolutionContext<'_>) -> T {
        self.resolve_traced(context).value
    }

    /// Resolve, or `None` when the binding cannot be satisfied.
    pub fn resolve_strict(&self, context: &ResolutionContext<'_>) -> Option<T> {
        self.try_resolve(context).ok()
    }

    /// Resolve and report whether the fallback was used.
    pub fn resolve_traced(&self, context: &ResolutionContext<'_>) -> Resolved<T> {
        match self.try_resolve(context) {
            Ok(value) => Resolved {
                value,
                fallback: None,
            },
            Err(defaulted) => {
                tracing::trace!(
                    binding = %defaulted.binding,
                    reason = %defaulted.reason,
                    "variable resolved to fallback"
                );
                Resolved {
                    value: T::fallback(),
                    fallback: Some(defaulted),
                }
            }
        }
    }

    fn try_resolve(&self, context: &ResolutionContext<'_>) -> Result<T, ResolutionDefaulted> {
        match self.binding() {
            Binding::Literal { value } => Ok(value.clone()),
            Binding::Property { name } => {
                let defaulted = |reason| ResolutionDefaulted {
                    binding: name.clone(),
                    reason,
                };
                let value = context
                    .property(name)
                    .ok_or_else(|| defaulted(DefaultReason::MissingProperty))?;
                T::from_property(value).ok_or_else(|| defaulted(DefaultReason::PropertyTypeMismatch))
            }
            Binding::Data { key_path } => {
                let defaulted = |reason| ResolutionDefaulted {
                    binding: key_path.clone(),
                    reason,
                };
                let data = context.data.ok_or_else(|| defaulted(DefaultReason::NoData))?;
                let path =
                    KeyPath::parse(key_path).map_err(|_| defaulted(DefaultReason::InvalidKeyPath))?;
                let node = path
                    .evaluate(data)
                    .ok_or_else(|| defaulted(DefaultReason::UnresolvedKeyPath))?;
                T::from_data(node).ok_or_else(|| defaulted(DefaultReason::DataTypeMismatch))
            }
        }
    }
}

/// Resolve `variable` in `context`, substituting the fallback on failure.
pub fn resolve<T: Resolvable>(variable: &Variable<T>, context: &ResolutionContext<'_>) -> T {
    variable.resolve(context)
}

/// Resolve `variable` in `context`, or `None` when the binding is unsatisfied.
pub fn resolve_strict<T: Resolvable>(
    variable: &Variable<T>,
    context: &ResolutionContext<'_>,
) -> Option<T> {
    variable.resolve_strict(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn properties() -> PropertyValues {
        let mut values = PropertyValues::new();
        values.insert("title".into(), Value::from("Welcome"));
        values.insert("count".into(), Value::Number(4.0));
        values.insert("isOn".into(), Value::Boolean(true));
        values
    }

    #[test]
    fn literal_ignores_context() {
        let context = ResolutionContext::new();
        assert_eq!(Variable::literal(7.5).resolve(&context), 7.5);
        assert_eq!(Variable::literal(false).resolve_strict(&context), Some(false));
    }

    #[test]
    fn property_lookup_and_fallbacks() {
        let values = properties();
        let context = ResolutionContext::new().with_property_values(&values);

        assert_eq!(Variable::<String>::property("title").resolve(&context), "Welcome");
        assert_eq!(Variable::<f64>::property("count").resolve(&context), 4.0);
        assert!(Variable::<bool>::property("isOn").resolve(&context));

        assert_eq!(Variable::<String>::property("missing").resolve(&context), "");
        assert_eq!(Variable::<String>::property("missing").resolve_strict(&context), None);

        let traced = Variable::<f64>::property("title").resolve_traced(&context);
        assert_eq!(traced.value, 0.0);
        assert_eq!(
            traced.fallback.map(|d| d.reason),
            Some(DefaultReason::PropertyTypeMismatch)
        );
    }

    #[test]
    fn strict_distinguishes_false_from_absent() {
        let values = properties();
        let mut with_false = values.clone();
        with_false.insert("isOn".into(), Value::Boolean(false));
        let context = ResolutionContext::new().with_property_values(&with_false);

        assert_eq!(Variable::<bool>::property("isOn").resolve_strict(&context), Some(false));
        assert_eq!(Variable::<bool>::property("other").resolve_strict(&context), None);
    }

    #[test]
    fn data_lookup_and_fallbacks() {
        let data = json!({"user": {"name": "Ada", "age": 36, "avatar": "https://x/a.png"}});
        let context = ResolutionContext::new().with_data(&data);

        assert_eq!(Variable::<String>::data("user.name").resolve(&context), "Ada");
        assert_eq!(Variable::<f64>::data("user.age").resolve(&context), 36.0);
        assert_eq!(Variable::<String>::data("user.age").resolve(&context), "36");
        assert_eq!(
            Variable::<ImageReference>::data("user.avatar").resolve(&context),
            ImageReference::url("https://x/a.png")
        );

        let traced = Variable::<f64>::data("user.name.first").resolve_traced(&context);
        assert_eq!(traced.value, 0.0);
        assert_eq!(
            traced.fallback.map(|d| d.reason),
            Some(DefaultReason::UnresolvedKeyPath)
        );

        let traced = Variable::<bool>::data("user..age").resolve_traced(&context);
        assert!(!traced.value);
        assert_eq!(
            traced.fallback.map(|d| d.reason),
            Some(DefaultReason::InvalidKeyPath)
        );

        let no_data = ResolutionContext::new();
        assert_eq!(
            Variable::<String>::data("user.name").resolve_traced(&no_data).fallback,
            Some(ResolutionDefaulted {
                binding: "user.name".into(),
                reason: DefaultReason::NoData,
            })
        );
    }

    #[test]
    fn color_from_data() {
        let data = json!({"brand": "#FF0000", "accent": {"red": 0.0, "green": 1.0, "blue": 0.0, "alpha": 1.0}});
        let context = ResolutionContext::new().with_data(&data);
        assert_eq!(
            Variable::<ColorValue>::data("brand").resolve(&context),
            ColorValue::rgba(1.0, 0.0, 0.0, 1.0)
        );
        assert_eq!(
            Variable::<ColorValue>::data("accent").resolve(&context),
            ColorValue::rgba(0.0, 1.0, 0.0, 1.0)
        );
        assert_eq!(
            Variable::<ColorValue>::data("missing").resolve(&context),
            ColorValue::CLEAR
        );
    }

    #[test]
    fn free_functions_delegate() {
        let context = ResolutionContext::new();
        assert_eq!(resolve(&Variable::<String>::property("x"), &context), "");
        assert_eq!(resolve_strict(&Variable::<String>::property("x"), &context), None);
    }
}
