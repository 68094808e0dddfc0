//! Wire codec for actions carried by buttons and toolbar items.
//!
//! Actions are tagged with `__typeName` like nodes, but have no id,
//! name or children.

use layerkit_model::{Action, Parameter, ParameterValue};
use serde_json::Value;

use crate::codec::fields::{FieldWriter, Fields, TYPE_NAME_KEY};
use crate::error::{DecodeError, EncodeError};

const PARAMETER_FIELDS: &str = "one of textValue, numberValue, booleanValue, imageValue";

pub(crate) fn decode_actions(fields: &Fields<'_>, field: &str) -> Result<Vec<Action>, DecodeError> {
    fields.objects(field, "Action", decode_action)
}

fn decode_action(fields: &Fields<'_>) -> Result<Action, DecodeError> {
    let type_name: String = fields.required(TYPE_NAME_KEY)?;
    let action = match type_name.as_str() {
        "DismissAction" => Action::Dismiss,
        "RefreshAction" => Action::Refresh,
        "OpenURLAction" => Action::OpenUrl {
            url: fields.relabel("OpenURLAction").variable("url")?,
        },
        "CustomAction" => {
            let fields = fields.relabel("CustomAction");
            Action::Custom {
                identifier: fields.variable("identifier")?,
                parameters: fields.objects("parameters", "Parameter", decode_parameter)?,
            }
        }
        "SetPropertyAction" => {
            let fields = fields.relabel("SetPropertyAction");
            Action::SetProperty {
                property_name: fields.optional("propertyName")?,
                value: decode_parameter_value(&fields)?,
            }
        }
        "TogglePropertyAction" => Action::ToggleProperty {
            property_name: fields.relabel("TogglePropertyAction").optional("propertyName")?,
        },
        "IncrementPropertyAction" => {
            let fields = fields.relabel("IncrementPropertyAction");
            Action::IncrementProperty {
                property_name: fields.optional("propertyName")?,
                value: fields.variable("value")?,
            }
        }
        "DecrementPropertyAction" => {
            let fields = fields.relabel("DecrementPropertyAction");
            Action::DecrementProperty {
                property_name: fields.optional("propertyName")?,
                value: fields.variable("value")?,
            }
        }
        _ => return Err(DecodeError::UnknownActionType { type_name }),
    };
    Ok(action)
}

fn decode_parameter(fields: &Fields<'_>) -> Result<Parameter, DecodeError> {
    Ok(Parameter {
        key: fields.required("key")?,
        value: decode_parameter_value(fields)?
            .ok_or_else(|| DecodeError::malformed(fields.owner(), "value", PARAMETER_FIELDS))?,
    })
}

/// First present typed value field, in text, number, boolean, image order.
fn decode_parameter_value(fields: &Fields<'_>) -> Result<Option<ParameterValue>, DecodeError> {
    if let Some(text) = fields.optional_variable("textValue")? {
        return Ok(Some(ParameterValue::Text(text)));
    }
    if let Some(number) = fields.optional_variable("numberValue")? {
        return Ok(Some(ParameterValue::Number(number)));
    }
    if let Some(boolean) = fields.optional_variable("booleanValue")? {
        return Ok(Some(ParameterValue::Boolean(boolean)));
    }
    if let Some(image) = fields.optional_variable("imageValue")? {
        return Ok(Some(ParameterValue::Image(image)));
    }
    Ok(None)
}

pub(crate) fn encode_actions(actions: &[Action]) -> Result<Value, EncodeError> {
    actions
        .iter()
        .map(encode_action)
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

fn encode_action(action: &Action) -> Result<Value, EncodeError> {
    let mut writer = FieldWriter::tagged(action.type_name());
    match action {
        Action::Dismiss | Action::Refresh => {}
        Action::OpenUrl { url } => writer.put("url", url)?,
        Action::Custom {
            identifier,
            parameters,
        } => {
            writer.put("identifier", identifier)?;
            let parameters = parameters
                .iter()
                .map(encode_parameter)
                .collect::<Result<Vec<_>, _>>()?;
            writer.put_raw("parameters", Value::Array(parameters));
        }
        Action::SetProperty {
            property_name,
            value,
        } => {
            writer.put("propertyName", property_name)?;
            if let Some(value) = value {
                put_parameter_value(&mut writer, value)?;
            }
        }
        Action::ToggleProperty { property_name } => writer.put("propertyName", property_name)?,
        Action::IncrementProperty {
            property_name,
            value,
        }
        | Action::DecrementProperty {
            property_name,
            value,
        } => {
            writer.put("propertyName", property_name)?;
            writer.put("value", value)?;
        }
    }
    Ok(writer.finish())
}

fn encode_parameter(parameter: &Parameter) -> Result<Value, EncodeError> {
    let mut writer = FieldWriter::untagged("Parameter");
    writer.put("key", &parameter.key)?;
    put_parameter_value(&mut writer, &parameter.value)?;
    Ok(writer.finish())
}

fn put_parameter_value(writer: &mut FieldWriter, value: &ParameterValue) -> Result<(), EncodeError> {
    match value {
        ParameterValue::Text(text) => writer.put("textValue", text),
        ParameterValue::Number(number) => writer.put("numberValue", number),
        ParameterValue::Boolean(boolean) => writer.put("booleanValue", boolean),
        ParameterValue::Image(image) => writer.put("imageValue", image),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::context::DecodeContext;
    use crate::codec::version::CURRENT_VERSION;
    use layerkit_model::Variable;
    use serde_json::json;

    fn decode(value: Value, version: u32) -> Result<Vec<Action>, DecodeError> {
        let holder = json!({ "actions": value });
        let context = DecodeContext::new(version);
        let fields = Fields::of("ButtonLayer", &holder, &context)?;
        decode_actions(&fields, "actions")
    }

    #[test]
    fn custom_action_round_trip() {
        let actions = vec![
            Action::Custom {
                identifier: Variable::from("addToCart"),
                parameters: vec![Parameter {
                    key: "sku".into(),
                    value: ParameterValue::Text(Variable::data("product.sku")),
                }],
            },
            Action::Dismiss,
        ];
        let encoded = encode_actions(&actions).unwrap();
        assert_eq!(
            encoded[0],
            json!({
                "__typeName": "CustomAction",
                "identifier": {"kind": "literal", "value": "addToCart"},
                "parameters": [{"key": "sku", "textValue": {"kind": "data", "keyPath": "product.sku"}}]
            })
        );
        assert_eq!(decode(encoded, CURRENT_VERSION).unwrap(), actions);
    }

    #[test]
    fn legacy_parameters() {
        let actions = decode(
            json!([
                {"__typeName": "CustomAction", "identifier": "share", "parameters": [
                    {"key": "count", "numberValue": {"propertyName": "quantity"}}
                ]},
                {"__typeName": "IncrementPropertyAction", "propertyName": "count", "value": 2}
            ]),
            12,
        )
        .unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Custom {
                    identifier: Variable::from("share"),
                    parameters: vec![Parameter {
                        key: "count".into(),
                        value: ParameterValue::Number(Variable::property("quantity")),
                    }],
                },
                Action::IncrementProperty {
                    property_name: Some("count".into()),
                    value: Variable::literal(2.0),
                },
            ]
        );
    }

    #[test]
    fn unknown_action_fails() {
        let result = decode(json!([{"__typeName": "LaunchRocketAction"}]), CURRENT_VERSION);
        assert!(matches!(
            result,
            Err(DecodeError::UnknownActionType { type_name }) if type_name == "LaunchRocketAction"
        ));
    }

    #[test]
    fn parameter_without_value_fails() {
        let result = decode(
            json!([{"__typeName": "CustomAction", "identifier": {"kind": "literal", "value": "x"},
                    "parameters": [{"key": "a"}]}]),
            CURRENT_VERSION,
        );
        assert!(matches!(
            result,
            Err(DecodeError::MalformedField { node: "Parameter", .. })
        ));
    }
}
