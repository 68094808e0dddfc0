//! Color, blending and transform effects.

use layerkit_model::{ColorValue, ResolutionContext, Variable};

use crate::codec::{FieldWriter, Fields, KindCodec, ROTATION_UNITS_SINCE, rotation_from_degrees};
use crate::error::{DecodeError, EncodeError};
use crate::geometry::UnitPoint;
use crate::style::{AngleUnit, BlendMode, ButtonStyle};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlendModeModifier {
    pub blend_mode: BlendMode,
}

impl KindCodec for BlendModeModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            blend_mode: fields.required("blendMode")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("blendMode", &self.blend_mode)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonStyleModifier {
    pub button_style: ButtonStyle,
}

impl KindCodec for ButtonStyleModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            button_style: fields.required("buttonStyle")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("buttonStyle", &self.button_style)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForegroundColorModifier {
    pub color: Variable<ColorValue>,
}

impl KindCodec for ForegroundColorModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            color: fields.variable("color")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("color", &self.color)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpacityModifier {
    pub opacity: Variable<f64>,
}

impl OpacityModifier {
    /// Resolved opacity clamped to `0..=1`.
    pub fn opacity(&self, context: &ResolutionContext<'_>) -> f64 {
        self.opacity.resolve(context).clamp(0.0, 1.0)
    }
}

impl KindCodec for OpacityModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            opacity: fields.variable("opacity")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("opacity", &self.opacity)
    }
}

/// Rotates the subtree by `angle_size` in `angle_unit` around `anchor`.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationEffectModifier {
    pub angle_size: Variable<f64>,
    pub angle_unit: AngleUnit,
    pub anchor: UnitPoint,
}

impl RotationEffectModifier {
    pub fn radians(&self, context: &ResolutionContext<'_>) -> f64 {
        self.angle_unit.to_radians(self.angle_size.resolve(context))
    }
}

impl KindCodec for RotationEffectModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        if fields.context().is_before(ROTATION_UNITS_SINCE) {
            return rotation_from_degrees(fields);
        }
        Ok(Self {
            angle_size: fields.variable("angleSize")?,
            angle_unit: fields.required("angleUnit")?,
            anchor: fields.required("anchor")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("angleSize", &self.angle_size)?;
        writer.put("angleUnit", &self.angle_unit)?;
        writer.put("anchor", &self.anchor)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShadowModifier {
    pub color: Variable<ColorValue>,
    pub radius: Variable<f64>,
    pub x: Variable<f64>,
    pub y: Variable<f64>,
}

impl KindCodec for ShadowModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            color: fields.variable("color")?,
            radius: fields.variable("radius")?,
            x: fields.variable("x")?,
            y: fields.variable("y")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("color", &self.color)?;
        writer.put("radius", &self.radius)?;
        writer.put("x", &self.x)?;
        writer.put("y", &self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TintModifier {
    pub color: Variable<ColorValue>,
}

impl KindCodec for TintModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            color: fields.variable("color")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("color", &self.color)
    }
}
