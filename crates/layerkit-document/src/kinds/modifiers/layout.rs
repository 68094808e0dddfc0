//! Size, position and layering modifiers.

use layerkit_model::{ResolutionContext, Variable};

use crate::codec::{FieldWriter, Fields, KindCodec};
use crate::error::{DecodeError, EncodeError};
use crate::geometry::{Alignment, Edge, EdgeInsets};
use crate::style::ContentMode;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AspectRatioModifier {
    /// Width over height; `None` keeps the content's own ratio.
    pub ratio: Option<Variable<f64>>,
    pub content_mode: ContentMode,
}

impl KindCodec for AspectRatioModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            ratio: fields.optional_variable("ratio")?,
            content_mode: fields.required("contentMode")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("ratio", &self.ratio)?;
        writer.put("contentMode", &self.content_mode)
    }
}

/// Renders the first child behind the subtree; the rest are the subtree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BackgroundModifier {
    pub alignment: Alignment,
}

impl KindCodec for BackgroundModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            alignment: fields.required("alignment")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("alignment", &self.alignment)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayModifier {
    pub alignment: Alignment,
}

impl KindCodec for OverlayModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            alignment: fields.required("alignment")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("alignment", &self.alignment)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaskModifier {
    pub alignment: Alignment,
}

impl KindCodec for MaskModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            alignment: fields.required("alignment")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("alignment", &self.alignment)
    }
}

/// Fixed or flexible frame. Every dimension is optional.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameModifier {
    pub width: Option<Variable<f64>>,
    pub height: Option<Variable<f64>>,
    pub min_width: Option<Variable<f64>>,
    pub max_width: Option<Variable<f64>>,
    pub min_height: Option<Variable<f64>>,
    pub max_height: Option<Variable<f64>>,
    pub alignment: Alignment,
}

impl FrameModifier {
    /// Whether the frame uses the fixed `width`/`height` form.
    pub fn is_fixed(&self) -> bool {
        self.min_width.is_none()
            && self.max_width.is_none()
            && self.min_height.is_none()
            && self.max_height.is_none()
    }
}

impl KindCodec for FrameModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            width: fields.optional_variable("width")?,
            height: fields.optional_variable("height")?,
            min_width: fields.optional_variable("minWidth")?,
            max_width: fields.optional_variable("maxWidth")?,
            min_height: fields.optional_variable("minHeight")?,
            max_height: fields.optional_variable("maxHeight")?,
            alignment: fields.required("alignment")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("width", &self.width)?;
        writer.put("height", &self.height)?;
        writer.put("minWidth", &self.min_width)?;
        writer.put("maxWidth", &self.max_width)?;
        writer.put("minHeight", &self.min_height)?;
        writer.put("maxHeight", &self.max_height)?;
        writer.put("alignment", &self.alignment)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPriorityModifier {
    pub priority: Variable<f64>,
}

impl KindCodec for LayoutPriorityModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            priority: fields.variable("priority")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("priority", &self.priority)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OffsetModifier {
    pub width: Variable<f64>,
    pub height: Variable<f64>,
}

impl KindCodec for OffsetModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            width: fields.variable("width")?,
            height: fields.variable("height")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("width", &self.width)?;
        writer.put("height", &self.height)
    }
}

/// Padding length used when edges are given without a length.
pub const DEFAULT_PADDING: f64 = 16.0;

/// Padding, either one length on a set of edges or four separate insets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaddingModifier {
    pub edges: Option<Vec<Edge>>,
    pub length: Option<Variable<f64>>,
    pub leading_inset: Option<Variable<f64>>,
    pub trailing_inset: Option<Variable<f64>>,
    pub top_inset: Option<Variable<f64>>,
    pub bottom_inset: Option<Variable<f64>>,
}

impl PaddingModifier {
    /// Uniform padding of `length` on every edge.
    pub fn uniform(length: f64) -> Self {
        Self {
            edges: Some(Edge::ALL.to_vec()),
            length: Some(Variable::literal(length)),
            ..Self::default()
        }
    }

    /// Resolved insets, or `None` when the modifier adds no padding.
    ///
    /// `edges` takes precedence: those edges get `length`, or
    /// [`DEFAULT_PADDING`] when the length is unset or unresolved. Without
    /// edges the four insets apply only when all of them are set; an inset
    /// that does not resolve is zero.
    pub fn insets(&self, context: &ResolutionContext<'_>) -> Option<EdgeInsets> {
        if let Some(edges) = &self.edges {
            let length = self
                .length
                .as_ref()
                .and_then(|length| length.resolve_strict(context))
                .unwrap_or(DEFAULT_PADDING);
            return Some(EdgeInsets::on_edges(edges, length));
        }
        let (Some(top), Some(leading), Some(bottom), Some(trailing)) = (
            &self.top_inset,
            &self.leading_inset,
            &self.bottom_inset,
            &self.trailing_inset,
        ) else {
            return None;
        };
        Some(EdgeInsets {
            top: top.resolve(context),
            leading: leading.resolve(context),
            bottom: bottom.resolve(context),
            trailing: trailing.resolve(context),
        })
    }
}

impl KindCodec for PaddingModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            edges: fields.optional("edges")?,
            length: fields.optional_variable("length")?,
            leading_inset: fields.optional_variable("leadingInset")?,
            trailing_inset: fields.optional_variable("trailingInset")?,
            top_inset: fields.optional_variable("topInset")?,
            bottom_inset: fields.optional_variable("bottomInset")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("edges", &self.edges)?;
        writer.put("length", &self.length)?;
        writer.put("leadingInset", &self.leading_inset)?;
        writer.put("trailingInset", &self.trailing_inset)?;
        writer.put("topInset", &self.top_inset)?;
        writer.put("bottomInset", &self.bottom_inset)
    }
}
