//! Actions triggered by buttons and toolbar items.
//!
//! The document only describes actions. Resolving one turns its variable
//! parameters into concrete values; executing it is up to the host, either
//! through [`ActionHandlers`] for custom actions or by applying property
//! actions to the host's own [`PropertyValues`].

use std::collections::BTreeMap;
use std::fmt;

use crate::resolve::ResolutionContext;
use crate::value::{ImageReference, PropertyValues, Value};
use crate::variable::Variable;

/// A value passed along with an action.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Text(Variable<String>),
    Number(Variable<f64>),
    Boolean(Variable<bool>),
    Image(Variable<ImageReference>),
}

impl ParameterValue {
    /// Resolve with fallbacks, as parameters are always delivered.
    pub fn resolve(&self, context: &ResolutionContext<'_>) -> Value {
        match self {
            ParameterValue::Text(variable) => Value::Text(variable.resolve(context)),
            ParameterValue::Number(variable) => Value::Number(variable.resolve(context)),
            ParameterValue::Boolean(variable) => Value::Boolean(variable.resolve(context)),
            ParameterValue::Image(variable) => Value::Image(variable.resolve(context)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub key: String,
    pub value: ParameterValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Dismiss,
    OpenUrl {
        url: Variable<String>,
    },
    Refresh,
    Custom {
        identifier: Variable<String>,
        parameters: Vec<Parameter>,
    },
    SetProperty {
        property_name: Option<String>,
        value: Option<ParameterValue>,
    },
    ToggleProperty {
        property_name: Option<String>,
    },
    IncrementProperty {
        property_name: Option<String>,
        value: Variable<f64>,
    },
    DecrementProperty {
        property_name: Option<String>,
        value: Variable<f64>,
    },
}

impl Action {
    /// Wire tag of this action.
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::Dismiss => "DismissAction",
            Action::OpenUrl { .. } => "OpenURLAction",
            Action::Refresh => "RefreshAction",
            Action::Custom { .. } => "CustomAction",
            Action::SetProperty { .. } => "SetPropertyAction",
            Action::ToggleProperty { .. } => "TogglePropertyAction",
            Action::IncrementProperty { .. } => "IncrementPropertyAction",
            Action::DecrementProperty { .. } => "DecrementPropertyAction",
        }
    }

    /// Resolve all parameters in `context`.
    ///
    /// Returns `None` when the action cannot be performed: a custom action
    /// whose identifier does not resolve, or a property action without a
    /// target property or value.
    pub fn resolve(&self, context: &ResolutionContext<'_>) -> Option<ResolvedAction> {
        let resolved = match self {
            Action::Dismiss => ResolvedAction::Dismiss,
            Action::Refresh => ResolvedAction::Refresh,
            Action::OpenUrl { url } => ResolvedAction::OpenUrl(url.resolve(context)),
            Action::Custom {
                identifier,
                parameters,
            } => ResolvedAction::Custom {
                name: identifier.resolve_strict(context)?,
                parameters: parameters
                    .iter()
                    .map(|parameter| (parameter.key.clone(), parameter.value.resolve(context)))
                    .collect(),
            },
            Action::SetProperty {
                property_name,
                value,
            } => ResolvedAction::SetProperty {
                property_name: property_name.clone()?,
                value: value.as_ref()?.resolve(context),
            },
            Action::ToggleProperty { property_name } => ResolvedAction::ToggleProperty {
                property_name: property_name.clone()?,
            },
            Action::IncrementProperty {
                property_name,
                value,
            } => ResolvedAction::IncrementProperty {
                property_name: property_name.clone()?,
                by: value.resolve(context),
            },
            Action::DecrementProperty {
                property_name,
                value,
            } => ResolvedAction::DecrementProperty {
                property_name: property_name.clone()?,
                by: value.resolve(context),
            },
        };
        Some(resolved)
    }
}

/// An action with every parameter resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedAction {
    Dismiss,
    OpenUrl(String),
    Refresh,
    Custom {
        name: String,
        parameters: BTreeMap<String, Value>,
    },
    SetProperty {
        property_name: String,
        value: Value,
    },
    ToggleProperty {
        property_name: String,
    },
    IncrementProperty {
        property_name: String,
        by: f64,
    },
    DecrementProperty {
        property_name: String,
        by: f64,
    },
}

impl ResolvedAction {
    pub fn is_property_action(&self) -> bool {
        matches!(
            self,
            ResolvedAction::SetProperty { .. }
                | ResolvedAction::ToggleProperty { .. }
                | ResolvedAction::IncrementProperty { .. }
                | ResolvedAction::DecrementProperty { .. }
        )
    }

    /// Apply a property action to `properties`.
    ///
    /// Returns true when a property changed. Toggling requires an existing
    /// boolean, incrementing and decrementing an existing number; anything
    /// else is left untouched.
    pub fn apply_to(&self, properties: &mut PropertyValues) -> bool {
        match self {
            ResolvedAction::SetProperty {
                property_name,
                value,
            } => {
                properties.insert(property_name.clone(), value.clone());
                true
            }
            ResolvedAction::ToggleProperty { property_name } => {
                match properties.get_mut(property_name) {
                    Some(Value::Boolean(flag)) => {
                        *flag = !*flag;
                        true
                    }
                    other => {
                        tracing::warn!(
                            property = %property_name,
                            found = other.map_or("nothing", |value| value.kind()),
                            "toggle requires a boolean property"
                        );
                        false
                    }
                }
            }
            ResolvedAction::IncrementProperty { property_name, by } => {
                adjust_number(properties, property_name, *by)
            }
            ResolvedAction::DecrementProperty { property_name, by } => {
                adjust_number(properties, property_name, -*by)
            }
            _ => false,
        }
    }
}

fn adjust_number(properties: &mut PropertyValues, property_name: &str, delta: f64) -> bool {
    match properties.get_mut(property_name) {
        Some(Value::Number(number)) => {
            *number += delta;
            true
        }
        other => {
            tracing::warn!(
                property = %property_name,
                found = other.map_or("nothing", |value| value.kind()),
                "increment and decrement require a number property"
            );
            false
        }
    }
}

/// Host callback for a custom action.
pub type ActionHandler = Box<dyn Fn(&BTreeMap<String, Value>) + Send + Sync>;

/// Named registry of host callbacks for custom actions.
#[derive(Default)]
pub struct ActionHandlers {
    handlers: BTreeMap<String, ActionHandler>,
}

impl ActionHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any previous handler.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&BTreeMap<String, Value>) + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invoke the handler for a resolved custom action.
    ///
    /// Returns false for non-custom actions and for names with no handler.
    pub fn dispatch(&self, action: &ResolvedAction) -> bool {
        let ResolvedAction::Custom { name, parameters } = action else {
            return false;
        };
        match self.handlers.get(name) {
            Some(handler) => {
                handler(parameters);
                true
            }
            None => {
                tracing::debug!(action = %name, "no handler registered for custom action");
                false
            }
        }
    }
}

impl fmt::Debug for ActionHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionHandlers")
            .field("names", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn custom_action_resolves_parameters() {
        let mut values = PropertyValues::new();
        values.insert("productId".into(), Value::from("sku-1"));
        let context = ResolutionContext::new().with_property_values(&values);

        let action = Action::Custom {
            identifier: Variable::literal("addToCart".to_string()),
            parameters: vec![
                Parameter {
                    key: "id".into(),
                    value: ParameterValue::Text(Variable::property("productId")),
                },
                Parameter {
                    key: "quantity".into(),
                    value: ParameterValue::Number(Variable::property("missing")),
                },
            ],
        };

        let resolved = action.resolve(&context).unwrap();
        let ResolvedAction::Custom { name, parameters } = &resolved else {
            panic!("expected custom action");
        };
        assert_eq!(name, "addToCart");
        assert_eq!(parameters["id"], Value::from("sku-1"));
        assert_eq!(parameters["quantity"], Value::Number(0.0));
    }

    #[test]
    fn unresolved_identifier_skips_action() {
        let action = Action::Custom {
            identifier: Variable::property("actionName"),
            parameters: vec![],
        };
        assert_eq!(action.resolve(&ResolutionContext::new()), None);
    }

    #[test]
    fn dispatch_invokes_registered_handler() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut handlers = ActionHandlers::new();
        let sink = Arc::clone(&seen);
        handlers.register("share", move |parameters| {
            sink.lock().unwrap().push(parameters.len());
        });

        let share = ResolvedAction::Custom {
            name: "share".into(),
            parameters: BTreeMap::from([("url".to_string(), Value::from("https://a"))]),
        };
        let unknown = ResolvedAction::Custom {
            name: "other".into(),
            parameters: BTreeMap::new(),
        };

        assert!(handlers.dispatch(&share));
        assert!(!handlers.dispatch(&unknown));
        assert!(!handlers.dispatch(&ResolvedAction::Dismiss));
        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[test]
    fn property_actions_update_values() {
        let mut values = PropertyValues::new();
        values.insert("isOn".into(), Value::Boolean(false));
        values.insert("count".into(), Value::Number(2.0));

        let toggle = ResolvedAction::ToggleProperty {
            property_name: "isOn".into(),
        };
        let increment = ResolvedAction::IncrementProperty {
            property_name: "count".into(),
            by: 3.0,
        };
        let decrement_text = ResolvedAction::DecrementProperty {
            property_name: "isOn".into(),
            by: 1.0,
        };

        assert!(toggle.apply_to(&mut values));
        assert!(increment.apply_to(&mut values));
        assert!(!decrement_text.apply_to(&mut values));
        assert_eq!(values["isOn"], Value::Boolean(true));
        assert_eq!(values["count"], Value::Number(5.0));
    }

    #[test]
    fn property_action_without_target_is_dropped() {
        let action = Action::ToggleProperty {
            property_name: None,
        };
        assert_eq!(action.resolve(&ResolutionContext::new()), None);
    }
}
