use layerkit_model::Variable;

use crate::codec::{FieldWriter, Fields, KindCodec};
use crate::error::{DecodeError, EncodeError};
use crate::style::{AccessibilityChildBehavior, AccessibilityTrait};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccessibilityAddTraitsModifier {
    pub traits: Vec<AccessibilityTrait>,
}

impl KindCodec for AccessibilityAddTraitsModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            traits: fields.required("traits")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("traits", &self.traits)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccessibilityElementModifier {
    pub children_behavior: AccessibilityChildBehavior,
}

impl KindCodec for AccessibilityElementModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            children_behavior: fields.required("childrenBehavior")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("childrenBehavior", &self.children_behavior)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccessibilityHiddenModifier {
    pub is_hidden: Variable<bool>,
}

impl KindCodec for AccessibilityHiddenModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            is_hidden: fields.variable("isHidden")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("isHidden", &self.is_hidden)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccessibilityLabelModifier {
    pub label: Variable<String>,
}

impl KindCodec for AccessibilityLabelModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            label: fields.variable("label")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("label", &self.label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccessibilitySortPriorityModifier {
    pub sort_priority: Variable<f64>,
}

impl KindCodec for AccessibilitySortPriorityModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            sort_priority: fields.variable("sortPriority")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("sortPriority", &self.sort_priority)
    }
}
