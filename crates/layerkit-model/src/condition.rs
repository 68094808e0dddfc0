//! Conditions used by conditional layers and collection filters.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::resolve::ResolutionContext;
use crate::value::Value;
use crate::variable::Variable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Predicate {
    Equals,
    DoesNotEqual,
    IsGreaterThan,
    IsLessThan,
    IsSet,
    IsNotSet,
    IsTrue,
    IsFalse,
}

impl Predicate {
    /// Whether the predicate compares the subject against a value.
    pub fn takes_value(&self) -> bool {
        matches!(
            self,
            Predicate::Equals
                | Predicate::DoesNotEqual
                | Predicate::IsGreaterThan
                | Predicate::IsLessThan
        )
    }
}

/// A test against a bound subject.
///
/// The subject is resolved strictly: when it cannot be resolved the
/// subject is "not set", and every comparison other than `isNotSet` and
/// `doesNotEqual` fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub subject: Variable<Value>,
    pub predicate: Predicate,
    #[serde(default)]
    pub value: Option<Value>,
}

impl Condition {
    pub fn new(subject: Variable<Value>, predicate: Predicate, value: Option<Value>) -> Self {
        Self {
            subject,
            predicate,
            value,
        }
    }

    pub fn evaluate(&self, context: &ResolutionContext<'_>) -> bool {
        let subject = self.subject.resolve_strict(context);
        match self.predicate {
            Predicate::IsSet => subject.is_some(),
            Predicate::IsNotSet => subject.is_none(),
            Predicate::IsTrue => matches!(subject, Some(Value::Boolean(true))),
            Predicate::IsFalse => matches!(subject, Some(Value::Boolean(false))),
            Predicate::Equals => match (&subject, &self.value) {
                (Some(subject), Some(expected)) => values_equal(subject, expected),
                _ => false,
            },
            Predicate::DoesNotEqual => match (&subject, &self.value) {
                (Some(subject), Some(expected)) => !values_equal(subject, expected),
                _ => true,
            },
            Predicate::IsGreaterThan => self.compare(subject.as_ref()) == Some(Ordering::Greater),
            Predicate::IsLessThan => self.compare(subject.as_ref()) == Some(Ordering::Less),
        }
    }

    fn compare(&self, subject: Option<&Value>) -> Option<Ordering> {
        compare_values(subject?, self.value.as_ref()?)
    }
}

/// True when every condition holds. An empty list holds.
pub fn all_hold(conditions: &[Condition], context: &ResolutionContext<'_>) -> bool {
    conditions.iter().all(|condition| condition.evaluate(context))
}

/// Equality with numeric text coerced when the other side is a number.
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Text(b)) | (Value::Text(b), Value::Number(a)) => {
            b.trim().parse::<f64>().is_ok_and(|b| b == *a)
        }
        _ => left == right,
    }
}

/// Ordering for values of comparable kinds; `None` otherwise.
pub(crate) fn compare_values(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Text(b)) => {
            a.partial_cmp(&b.trim().parse::<f64>().ok()?)
        }
        (Value::Text(a), Value::Number(b)) => a.trim().parse::<f64>().ok()?.partial_cmp(b),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PropertyValues;
    use serde_json::json;

    #[test]
    fn set_and_not_set() {
        let data = json!({"name": "Ada"});
        let context = ResolutionContext::new().with_data(&data);

        let set = Condition::new(Variable::data("name"), Predicate::IsSet, None);
        let missing = Condition::new(Variable::data("nickname"), Predicate::IsSet, None);
        let not_set = Condition::new(Variable::data("nickname"), Predicate::IsNotSet, None);

        assert!(set.evaluate(&context));
        assert!(!missing.evaluate(&context));
        assert!(not_set.evaluate(&context));
    }

    #[test]
    fn comparisons() {
        let data = json!({"score": 42, "label": "10"});
        let context = ResolutionContext::new().with_data(&data);

        let greater = Condition::new(
            Variable::data("score"),
            Predicate::IsGreaterThan,
            Some(Value::Number(40.0)),
        );
        let less = Condition::new(
            Variable::data("score"),
            Predicate::IsLessThan,
            Some(Value::Number(40.0)),
        );
        let equals_text = Condition::new(
            Variable::data("label"),
            Predicate::Equals,
            Some(Value::Number(10.0)),
        );

        assert!(greater.evaluate(&context));
        assert!(!less.evaluate(&context));
        assert!(equals_text.evaluate(&context));
    }

    #[test]
    fn missing_subject_fails_comparisons() {
        let context = ResolutionContext::new();
        let equals = Condition::new(
            Variable::property("x"),
            Predicate::Equals,
            Some(Value::from("a")),
        );
        let not_equals = Condition::new(
            Variable::property("x"),
            Predicate::DoesNotEqual,
            Some(Value::from("a")),
        );
        assert!(!equals.evaluate(&context));
        assert!(not_equals.evaluate(&context));
    }

    #[test]
    fn boolean_predicates_read_properties() {
        let mut values = PropertyValues::new();
        values.insert("isMember".into(), Value::Boolean(false));
        let context = ResolutionContext::new().with_property_values(&values);

        let is_false = Condition::new(Variable::property("isMember"), Predicate::IsFalse, None);
        let is_true = Condition::new(Variable::property("isMember"), Predicate::IsTrue, None);
        assert!(is_false.evaluate(&context));
        assert!(!is_true.evaluate(&context));
        assert!(!all_hold(&[is_false, is_true], &context));
        assert!(all_hold(&[], &context));
    }
}
