//! Legacy wire shapes and the version-band migrations that read them.
//!
//! Each function here decodes one field group as it was stored in one
//! range of document versions and maps it into the current in-memory
//! shape. Bands are retired by deleting the function once the minimum
//! supported version passes them.

use layerkit_model::Variable;
use serde::Deserialize;

use crate::codec::fields::Fields;
use crate::error::DecodeError;
use crate::geometry::UnitPoint;
use crate::kinds::{LineLimitModifier, RotationEffectModifier};
use crate::style::AngleUnit;

/// Value shape used by every variable-typed field before tagged bindings.
///
/// A bare literal, `{ "propertyName": name }` or `{ "keyPath": path }`.
/// Text literals are taken verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum LegacyValue<T> {
    Property {
        #[serde(rename = "propertyName")]
        property_name: String,
    },
    Data {
        #[serde(rename = "keyPath")]
        key_path: String,
    },
    Literal(T),
}

impl<T> LegacyValue<T> {
    pub(crate) fn into_variable(self) -> Variable<T> {
        match self {
            LegacyValue::Property { property_name } => Variable::property(property_name),
            LegacyValue::Data { key_path } => Variable::data(key_path),
            LegacyValue::Literal(value) => Variable::literal(value),
        }
    }
}

/// `LineLimitModifier` before `min`/`max`: an optional whole `numberOfLines`
/// becomes the upper bound, the lower bound stays empty.
pub(crate) fn line_limit_from_number_of_lines(
    fields: &Fields<'_>,
) -> Result<LineLimitModifier, DecodeError> {
    let number_of_lines: Option<i64> = fields.optional("numberOfLines")?;
    tracing::trace!(
        version = fields.context().version(),
        number_of_lines,
        "migrating numberOfLines to line limit range"
    );
    Ok(LineLimitModifier {
        min: None,
        max: number_of_lines.map(|lines| Variable::literal(lines as f64)),
    })
}

/// `RotationEffectModifier` before explicit units: `angle` is in degrees.
pub(crate) fn rotation_from_degrees(
    fields: &Fields<'_>,
) -> Result<RotationEffectModifier, DecodeError> {
    tracing::trace!(
        version = fields.context().version(),
        "migrating unit-less rotation angle to degrees"
    );
    Ok(RotationEffectModifier {
        angle_size: fields.variable("angle")?,
        angle_unit: AngleUnit::Degrees,
        anchor: fields.optional::<UnitPoint>("anchor")?.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_shapes() {
        let literal: LegacyValue<String> = serde_json::from_value(json!("**Hello**")).unwrap();
        assert_eq!(literal.into_variable(), Variable::literal("**Hello**".to_string()));

        let property: LegacyValue<f64> =
            serde_json::from_value(json!({"propertyName": "count"})).unwrap();
        assert_eq!(property.into_variable(), Variable::property("count"));

        let data: LegacyValue<bool> =
            serde_json::from_value(json!({"keyPath": "user.isMember"})).unwrap();
        assert_eq!(data.into_variable(), Variable::data("user.isMember"));
    }

    #[test]
    fn legacy_object_literal_is_not_mistaken_for_a_binding() {
        let color: LegacyValue<layerkit_model::ColorValue> = serde_json::from_value(
            json!({"red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0}),
        )
        .unwrap();
        assert_eq!(
            color.into_variable(),
            Variable::literal(layerkit_model::ColorValue::rgba(1.0, 0.0, 0.0, 1.0))
        );
    }
}
