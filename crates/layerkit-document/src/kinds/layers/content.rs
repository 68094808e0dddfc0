//! Stacks, shapes, text and images.

use layerkit_model::{ImageReference, ResolutionContext, Variable};

use crate::codec::{FieldWriter, Fields, KindCodec};
use crate::error::{DecodeError, EncodeError};
use crate::geometry::{Alignment, Axis, HorizontalAlignment, VerticalAlignment};
use crate::style::{CornerStyle, ImageResizing, RenderingMode};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HStackLayer {
    pub alignment: VerticalAlignment,
    pub spacing: Option<f64>,
}

impl KindCodec for HStackLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            alignment: fields.required("alignment")?,
            spacing: fields.optional_number("spacing")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("alignment", &self.alignment)?;
        writer.put_number("spacing", self.spacing)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VStackLayer {
    pub alignment: HorizontalAlignment,
    pub spacing: Option<f64>,
}

impl KindCodec for VStackLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            alignment: fields.required("alignment")?,
            spacing: fields.optional_number("spacing")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("alignment", &self.alignment)?;
        writer.put_number("spacing", self.spacing)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZStackLayer {
    pub alignment: Alignment,
}

impl KindCodec for ZStackLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            alignment: fields.required("alignment")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("alignment", &self.alignment)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayer {
    pub image: Variable<ImageReference>,
    pub resizing: ImageResizing,
    pub rendering_mode: RenderingMode,
}

impl ImageLayer {
    /// Image to display, or `None` when the binding leaves nothing to show.
    pub fn source(&self, context: &ResolutionContext<'_>) -> Option<ImageReference> {
        self.image
            .resolve_strict(context)
            .filter(|image| !image.is_empty())
    }
}

impl KindCodec for ImageLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            image: fields.variable("image")?,
            resizing: fields.required("resizing")?,
            rendering_mode: fields.required("renderingMode")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("image", &self.image)?;
        writer.put("resizing", &self.resizing)?;
        writer.put("renderingMode", &self.rendering_mode)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectangleLayer {
    pub corner_radius: Variable<f64>,
    pub corner_style: CornerStyle,
}

impl KindCodec for RoundedRectangleLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            corner_radius: fields.variable("cornerRadius")?,
            corner_style: fields.required("cornerStyle")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("cornerRadius", &self.corner_radius)?;
        writer.put("cornerStyle", &self.corner_style)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollViewLayer {
    pub axis: Axis,
    pub shows_indicators: bool,
}

impl Default for ScrollViewLayer {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            shows_indicators: true,
        }
    }
}

impl KindCodec for ScrollViewLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            axis: fields.required("axis")?,
            shows_indicators: fields.required("showsIndicators")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("axis", &self.axis)?;
        writer.put("showsIndicators", &self.shows_indicators)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpacerLayer {
    pub min_length: Option<f64>,
}

impl KindCodec for SpacerLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            min_length: fields.optional_number("minLength")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put_number("minLength", self.min_length)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLayer {
    pub value: Variable<String>,
}

impl KindCodec for TextLayer {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            value: fields.variable("value")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("value", &self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layerkit_model::{PropertyValues, Value};

    #[test]
    fn empty_image_has_no_source() {
        let layer = ImageLayer {
            image: Variable::property("avatar"),
            resizing: ImageResizing::ScaleToFit,
            rendering_mode: RenderingMode::Original,
        };
        assert_eq!(layer.source(&ResolutionContext::new()), None);

        let mut values = PropertyValues::new();
        values.insert("avatar".into(), Value::Image(ImageReference::default()));
        let context = ResolutionContext::new().with_property_values(&values);
        assert_eq!(layer.source(&context), None);

        values.insert("avatar".into(), Value::Image(ImageReference::system("person")));
        let context = ResolutionContext::new().with_property_values(&values);
        assert_eq!(layer.source(&context), Some(ImageReference::system("person")));
    }
}
