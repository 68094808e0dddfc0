//! Top-level canvas nodes and reusable components.

use std::collections::BTreeMap;

use layerkit_model::{PropertyValues, ResolutionContext, Value, Variable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::codec::{FieldWriter, Fields, KindCodec};
use crate::error::{DecodeError, EncodeError};
use crate::geometry::{ArtboardFrame, Point};
use crate::style::PreviewSettings;

/// A screen on the canvas.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArtboardNode {
    pub position: Point,
    pub frame: ArtboardFrame,
    pub preview_settings: PreviewSettings,
}

impl KindCodec for ArtboardNode {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            position: fields.required("position")?,
            frame: fields.required("frame")?,
            preview_settings: fields.required("previewSettings")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("position", &self.position)?;
        writer.put("frame", &self.frame)?;
        writer.put("previewSettings", &self.preview_settings)
    }
}

/// A property a main component exposes, with its default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentProperty {
    pub name: String,
    pub value: Value,
}

/// A reusable component definition. Its children are the component body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MainComponentNode {
    pub properties: Vec<ComponentProperty>,
    pub position: Point,
}

impl MainComponentNode {
    /// Declared defaults, keyed by property name. Later declarations win.
    pub fn default_values(&self) -> PropertyValues {
        self.properties
            .iter()
            .map(|property| (property.name.clone(), property.value.clone()))
            .collect()
    }
}

impl KindCodec for MainComponentNode {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            properties: fields.optional("properties")?.unwrap_or_default(),
            position: fields.required("position")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("properties", &self.properties)?;
        writer.put("position", &self.position)
    }
}

/// A placement of a main component, overriding some of its properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentInstanceNode {
    pub component_id: Uuid,
    pub overrides: BTreeMap<String, Variable<Value>>,
}

impl ComponentInstanceNode {
    pub fn new(component_id: Uuid) -> Self {
        Self {
            component_id,
            overrides: BTreeMap::new(),
        }
    }

    pub fn with_override(mut self, name: impl Into<String>, value: Variable<Value>) -> Self {
        self.overrides.insert(name.into(), value);
        self
    }

    /// Property values the component body renders with.
    ///
    /// Starts from the component's defaults; each override is resolved
    /// strictly in `context` and replaces the default only when it yields a
    /// value. Overrides naming undeclared properties are ignored.
    pub fn property_values(
        &self,
        component: &MainComponentNode,
        context: &ResolutionContext<'_>,
    ) -> PropertyValues {
        let mut values = component.default_values();
        for (name, variable) in &self.overrides {
            let Some(slot) = values.get_mut(name) else {
                tracing::trace!(property = %name, "override names no declared property");
                continue;
            };
            if let Some(value) = variable.resolve_strict(context) {
                *slot = value;
            }
        }
        values
    }
}

impl KindCodec for ComponentInstanceNode {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            component_id: fields.required("componentID")?,
            overrides: fields.variable_map("overrides")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("componentID", &self.component_id)?;
        writer.put("overrides", &self.overrides)
    }
}
