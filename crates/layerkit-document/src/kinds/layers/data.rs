//! Layers driven by external data.

use std::time::Duration;

use layerkit_model::{
    CollectionQuery, Condition, Limit, ResolutionContext, SortDescriptor, Variable, all_hold,
};
use serde::Serialize;

use crate::codec::{FieldWriter, Fields, KindCodec, decode_conditions, decode_headers};
use crate::error::{DecodeError, EncodeError};
use crate::style::HttpMethod;

/// Repeats its children once per item of an array in the data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionLayer {
    pub key_path: String,
    pub filters: Vec<Condition>,
    pub sort_descriptors: Vec<SortDescriptor>,
    pub limit: Option<Limit>,
}

impl CollectionLayer {
    pub fn query(&self) -> CollectionQuery<'_> {
        CollectionQuery {
            key_path: &self.key_path,
            filters: &self.filters,
            sort_descriptors: &self.sort_descriptors,
            limit: self.limit,
        }
    }

    /// Items to render, each becoming the data for one copy of the children.
    pub fn items<'a>(&self, context: &ResolutionContext<'a>) -> Vec<&'a serde_json::Value> {
        self.query().items(context)
    }
}

impl KindCodec for CollectionLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            key_path: fields.required("keyPath")?,
            filters: decode_conditions(fields, "filters")?,
            sort_descriptors: fields.optional("sortDescriptors")?.unwrap_or_default(),
            limit: fields.optional("limit")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("keyPath", &self.key_path)?;
        writer.put("filters", &self.filters)?;
        writer.put("sortDescriptors", &self.sort_descriptors)?;
        writer.put("limit", &self.limit)
    }
}

/// Shows its children only while every condition holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionalLayer {
    pub conditions: Vec<Condition>,
}

impl ConditionalLayer {
    pub fn is_satisfied(&self, context: &ResolutionContext<'_>) -> bool {
        all_hold(&self.conditions, context)
    }
}

impl KindCodec for ConditionalLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            conditions: decode_conditions(fields, "conditions")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("conditions", &self.conditions)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpHeader {
    pub key: String,
    pub value: Variable<String>,
}

/// Fetches JSON and exposes it as data to its children.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSourceLayer {
    pub url: Variable<String>,
    pub http_method: HttpMethod,
    pub headers: Vec<HttpHeader>,
    pub http_body: Option<Variable<String>>,
    /// Seconds between refreshes; `None` fetches once.
    pub poll_interval: Option<f64>,
}

/// A data source request with every binding resolved, for the host to send.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub poll_interval: Option<Duration>,
}

impl DataSourceLayer {
    pub fn request(&self, context: &ResolutionContext<'_>) -> DataRequest {
        DataRequest {
            url: self.url.resolve(context),
            method: self.http_method,
            headers: self
                .headers
                .iter()
                .map(|header| (header.key.clone(), header.value.resolve(context)))
                .collect(),
            body: self.http_body.as_ref().map(|body| body.resolve(context)),
            poll_interval: self
                .poll_interval
                .filter(|seconds| seconds.is_finite() && *seconds > 0.0)
                .map(Duration::from_secs_f64),
        }
    }
}

impl KindCodec for DataSourceLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            url: fields.variable("url")?,
            http_method: fields.required("httpMethod")?,
            headers: decode_headers(fields, "headers")?,
            http_body: fields.optional_variable("httpBody")?,
            poll_interval: fields.optional_number("pollInterval")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("url", &self.url)?;
        writer.put("httpMethod", &self.http_method)?;
        writer.put("headers", &self.headers)?;
        writer.put("httpBody", &self.http_body)?;
        writer.put_number("pollInterval", self.poll_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layerkit_model::{Predicate, PropertyValues, Value};
    use serde_json::json;

    #[test]
    fn collection_items_with_limit() {
        let data = json!({"products": [
            {"name": "Lamp", "price": 40},
            {"name": "Chair", "price": 120},
            {"name": "Desk", "price": 300},
            {"name": "Rug", "price": 80}
        ]});
        let layer = CollectionLayer {
            key_path: "products".into(),
            filters: vec![Condition::new(
                Variable::data("price"),
                Predicate::IsGreaterThan,
                Some(Value::from(50.0)),
            )],
            sort_descriptors: vec![SortDescriptor::descending("price")],
            limit: Some(Limit {
                show: 2,
                start_at: 1,
            }),
        };
        let context = ResolutionContext::new().with_data(&data);
        let names: Vec<_> = layer
            .items(&context)
            .into_iter()
            .map(|item| item["name"].as_str().unwrap_or_default())
            .collect();
        assert_eq!(names, ["Desk", "Chair"]);
    }

    #[test]
    fn conditional_requires_every_condition() {
        let mut values = PropertyValues::new();
        values.insert("isMember".into(), Value::from(true));
        let context = ResolutionContext::new().with_property_values(&values);

        let mut layer = ConditionalLayer {
            conditions: vec![Condition::new(
                Variable::property("isMember"),
                Predicate::IsTrue,
                None,
            )],
        };
        assert!(layer.is_satisfied(&context));

        layer.conditions.push(Condition::new(
            Variable::property("tier"),
            Predicate::IsSet,
            None,
        ));
        assert!(!layer.is_satisfied(&context));
    }

    #[test]
    fn data_request_resolves_bindings() {
        let mut values = PropertyValues::new();
        values.insert("token".into(), Value::from("abc"));
        let context = ResolutionContext::new().with_property_values(&values);

        let layer = DataSourceLayer {
            url: Variable::from("https://api.example.com/items"),
            http_method: HttpMethod::Post,
            headers: vec![HttpHeader {
                key: "Authorization".into(),
                value: Variable::property("token"),
            }],
            http_body: Some(Variable::from("{}")),
            poll_interval: Some(30.0),
        };
        let request = layer.request(&context);
        assert_eq!(request.url, "https://api.example.com/items");
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.headers, vec![("Authorization".into(), "abc".into())]);
        assert_eq!(request.body.as_deref(), Some("{}"));
        assert_eq!(request.poll_interval, Some(Duration::from_secs(30)));
    }

    #[test]
    fn non_positive_poll_interval_fetches_once() {
        let layer = DataSourceLayer {
            url: Variable::from("https://example.com"),
            http_method: HttpMethod::Get,
            headers: Vec::new(),
            http_body: None,
            poll_interval: Some(0.0),
        };
        assert_eq!(layer.request(&ResolutionContext::new()).poll_interval, None);
    }
}
