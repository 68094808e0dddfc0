//! Scalar values carried by documents and supplied by hosts.
//!
//! A [`Value`] is the closed set of things a property can hold: text, a
//! number, a boolean, a color or an image reference. Values are immutable
//! once constructed and compare structurally.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Property values keyed by property name.
///
/// Ordered so that iteration (and therefore encoding) is deterministic.
pub type PropertyValues = BTreeMap<String, Value>;

/// A scalar value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Value {
    Text(String),
    #[serde(with = "crate::number")]
    Number(f64),
    Boolean(bool),
    Color(ColorValue),
    Image(ImageReference),
}

impl Value {
    /// Name of the variant as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Color(_) => "color",
            Value::Image(_) => "image",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Convert a node of external data into a value.
    ///
    /// Strings, numbers and booleans map to their scalar counterparts.
    /// `null`, arrays and objects have no scalar form.
    pub fn from_json(json: &serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::String(text) => Some(Value::Text(text.clone())),
            serde_json::Value::Number(number) => number.as_f64().map(Value::Number),
            serde_json::Value::Bool(flag) => Some(Value::Boolean(*flag)),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<ColorValue> for Value {
    fn from(value: ColorValue) -> Self {
        Value::Color(value)
    }
}

impl From<ImageReference> for Value {
    fn from(value: ImageReference) -> Self {
        Value::Image(value)
    }
}

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorValue {
    #[serde(with = "crate::number")]
    pub red: f64,
    #[serde(with = "crate::number")]
    pub green: f64,
    #[serde(with = "crate::number")]
    pub blue: f64,
    #[serde(with = "crate::number")]
    pub alpha: f64,
}

impl ColorValue {
    pub const CLEAR: ColorValue = ColorValue::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: ColorValue = ColorValue::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: ColorValue = ColorValue::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return None;
        }
        let channel = |index: usize| -> Option<f64> {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .ok()
                .map(|byte| f64::from(byte) / 255.0)
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

/// Reference to an image: a bundled asset, a remote URL or a platform symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ImageReference {
    Asset {
        name: String,
    },
    Url {
        url: String,
    },
    #[serde(rename_all = "camelCase")]
    System {
        symbol_name: String,
    },
}

impl ImageReference {
    pub fn asset(name: impl Into<String>) -> Self {
        ImageReference::Asset { name: name.into() }
    }

    pub fn url(url: impl Into<String>) -> Self {
        ImageReference::Url { url: url.into() }
    }

    pub fn system(symbol_name: impl Into<String>) -> Self {
        ImageReference::System {
            symbol_name: symbol_name.into(),
        }
    }

    /// True for the empty asset reference used when nothing resolved.
    pub fn is_empty(&self) -> bool {
        matches!(self, ImageReference::Asset { name } if name.is_empty())
    }
}

impl Default for ImageReference {
    fn default() -> Self {
        ImageReference::Asset {
            name: String::new(),
        }
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageReference::Asset { name } => write!(f, "asset:{name}"),
            ImageReference::Url { url } => f.write_str(url),
            ImageReference::System { symbol_name } => write!(f, "system:{symbol_name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_wire_shape_is_adjacently_tagged() {
        let json = serde_json::to_value(Value::Number(2.5)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "number", "value": 2.5}));

        let back: Value =
            serde_json::from_value(serde_json::json!({"type": "text", "value": "hi"})).unwrap();
        assert_eq!(back, Value::from("hi"));
    }

    #[test]
    fn color_from_hex() {
        assert_eq!(ColorValue::from_hex("#FFFFFF"), Some(ColorValue::WHITE));
        assert_eq!(ColorValue::from_hex("000000ff"), Some(ColorValue::BLACK));
        let translucent = ColorValue::from_hex("#FF000080").unwrap();
        assert_eq!(translucent.red, 1.0);
        assert!((translucent.alpha - 128.0 / 255.0).abs() < f64::EPSILON);
        assert_eq!(ColorValue::from_hex("#FFF"), None);
        assert_eq!(ColorValue::from_hex("#GG0000"), None);
    }

    #[test]
    fn image_reference_wire_shape() {
        let json = serde_json::to_value(ImageReference::system("star.fill")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "system", "symbolName": "star.fill"})
        );
        assert!(ImageReference::default().is_empty());
        assert!(!ImageReference::asset("logo").is_empty());
    }

    #[test]
    fn from_json_scalars_only() {
        assert_eq!(
            Value::from_json(&serde_json::json!(3)),
            Some(Value::Number(3.0))
        );
        assert_eq!(Value::from_json(&serde_json::json!(null)), None);
        assert_eq!(Value::from_json(&serde_json::json!({"a": 1})), None);
    }
}
