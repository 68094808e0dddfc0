//! Interactive controls.

use std::ops::RangeInclusive;

use layerkit_model::{Action, ResolutionContext, ResolvedAction, Variable};

use crate::codec::{FieldWriter, Fields, KindCodec, decode_actions, encode_actions};
use crate::error::{DecodeError, EncodeError};
use crate::style::ButtonRole;

/// A button. Its children are the label; `actions` run in order on tap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonLayer {
    pub role: Option<ButtonRole>,
    pub actions: Vec<Action>,
}

impl ButtonLayer {
    /// Resolve every action, dropping the ones that cannot run.
    pub fn resolve_actions(&self, context: &ResolutionContext<'_>) -> Vec<ResolvedAction> {
        self.actions
            .iter()
            .filter_map(|action| action.resolve(context))
            .collect()
    }
}

impl KindCodec for ButtonLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            role: fields.optional("role")?,
            actions: decode_actions(fields, "actions")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("role", &self.role)?;
        writer.put_raw("actions", encode_actions(&self.actions)?);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecureFieldLayer {
    pub title: Variable<String>,
    pub text: Variable<String>,
}

impl KindCodec for SecureFieldLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            title: fields.variable("title")?,
            text: fields.variable("text")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("title", &self.title)?;
        writer.put("text", &self.text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldLayer {
    pub title: Variable<String>,
    pub text: Variable<String>,
}

impl KindCodec for TextFieldLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            title: fields.variable("title")?,
            text: fields.variable("text")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("title", &self.title)?;
        writer.put("text", &self.text)
    }
}

/// A numeric stepper bound to `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepperLayer {
    pub label: Option<Variable<String>>,
    pub value: Variable<f64>,
    pub min_value: Option<Variable<f64>>,
    pub max_value: Option<Variable<f64>>,
    pub step: Option<Variable<f64>>,
}

impl StepperLayer {
    /// Bounds of the stepper.
    ///
    /// Both bounds must be set and `min < max`. A bound that does not
    /// resolve counts as 0.
    pub fn range(&self, context: &ResolutionContext<'_>) -> Option<RangeInclusive<f64>> {
        let min = self.min_value.as_ref()?.resolve(context);
        let max = self.max_value.as_ref()?.resolve(context);
        (min < max).then_some(min..=max)
    }

    /// Increment per step: 1 when unset, 0 when set but unresolved.
    pub fn step(&self, context: &ResolutionContext<'_>) -> f64 {
        self.step.as_ref().map_or(1.0, |step| step.resolve(context))
    }
}

impl KindCodec for StepperLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            label: fields.optional_variable("label")?,
            value: fields.variable("value")?,
            min_value: fields.optional_variable("minValue")?,
            max_value: fields.optional_variable("maxValue")?,
            step: fields.optional_variable("step")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("label", &self.label)?;
        writer.put("value", &self.value)?;
        writer.put("minValue", &self.min_value)?;
        writer.put("maxValue", &self.max_value)?;
        writer.put("step", &self.step)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleLayer {
    pub label: Variable<String>,
    pub is_on: Variable<bool>,
}

impl KindCodec for ToggleLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            label: fields.variable("label")?,
            is_on: fields.variable("isOn")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("label", &self.label)?;
        writer.put("isOn", &self.is_on)
    }
}
