//! Nested records that carry variables and so follow the version band.

use layerkit_model::Condition;

use crate::codec::fields::Fields;
use crate::error::DecodeError;
use crate::kinds::HttpHeader;

pub(crate) fn decode_conditions(
    fields: &Fields<'_>,
    field: &str,
) -> Result<Vec<Condition>, DecodeError> {
    fields.objects(field, "Condition", |fields| {
        Ok(Condition::new(
            fields.variable("subject")?,
            fields.required("predicate")?,
            fields.optional("value")?,
        ))
    })
}

pub(crate) fn decode_headers(
    fields: &Fields<'_>,
    field: &str,
) -> Result<Vec<HttpHeader>, DecodeError> {
    fields.objects(field, "HttpHeader", |fields| {
        Ok(HttpHeader {
            key: fields.required("key")?,
            value: fields.variable("value")?,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::context::DecodeContext;
    use layerkit_model::{Predicate, Value, Variable};
    use serde_json::json;

    #[test]
    fn legacy_condition_subject() {
        let holder = json!({"conditions": [
            {"subject": {"keyPath": "user.tier"}, "predicate": "equals",
             "value": {"type": "text", "value": "gold"}}
        ]});
        let context = DecodeContext::new(15);
        let fields = Fields::of("ConditionalLayer", &holder, &context).unwrap();
        let conditions = decode_conditions(&fields, "conditions").unwrap();
        assert_eq!(
            conditions,
            vec![Condition::new(
                Variable::data("user.tier"),
                Predicate::Equals,
                Some(Value::from("gold")),
            )]
        );
    }

    #[test]
    fn missing_list_is_empty() {
        let holder = json!({});
        let context = DecodeContext::new(17);
        let fields = Fields::of("DataSourceLayer", &holder, &context).unwrap();
        assert!(decode_headers(&fields, "headers").unwrap().is_empty());
    }
}
