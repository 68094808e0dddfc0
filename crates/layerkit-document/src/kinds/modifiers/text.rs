//! Text styling modifiers.

use layerkit_model::{ResolutionContext, Variable};

use crate::codec::{
    FieldWriter, Fields, KindCodec, LINE_LIMIT_RANGE_SINCE, line_limit_from_number_of_lines,
};
use crate::error::{DecodeError, EncodeError};
use crate::style::{Font, TextAlignment, TextCase};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontModifier {
    pub font: Font,
}

impl KindCodec for FontModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            font: fields.required("font")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("font", &self.font)
    }
}

/// Bounds on the number of lines text may occupy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineLimitModifier {
    pub min: Option<Variable<f64>>,
    pub max: Option<Variable<f64>>,
}

impl LineLimitModifier {
    /// Resolved bounds as whole line counts. Negative counts are dropped.
    pub fn lines(&self, context: &ResolutionContext<'_>) -> (Option<u32>, Option<u32>) {
        let count = |bound: &Option<Variable<f64>>| {
            bound
                .as_ref()
                .map(|variable| variable.resolve(context))
                .filter(|lines| *lines >= 0.0)
                .map(|lines| lines.round() as u32)
        };
        (count(&self.min), count(&self.max))
    }
}

impl KindCodec for LineLimitModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        if fields.context().is_before(LINE_LIMIT_RANGE_SINCE) {
            return line_limit_from_number_of_lines(fields);
        }
        Ok(Self {
            min: fields.optional_variable("min")?,
            max: fields.optional_variable("max")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("min", &self.min)?;
        writer.put("max", &self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultilineTextAlignmentModifier {
    pub text_alignment: TextAlignment,
}

impl KindCodec for MultilineTextAlignmentModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            text_alignment: fields.required("textAlignment")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("textAlignment", &self.text_alignment)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextCaseModifier {
    pub text_case: TextCase,
}

impl KindCodec for TextCaseModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            text_case: fields.required("textCase")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("textCase", &self.text_case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::DecodeContext;
    use serde_json::json;

    fn decode(value: serde_json::Value, version: u32) -> LineLimitModifier {
        let context = DecodeContext::new(version);
        let fields = Fields::of("LineLimitModifier", &value, &context).unwrap();
        LineLimitModifier::decode(&fields).unwrap()
    }

    #[test]
    fn line_limit_bands() {
        assert_eq!(
            decode(json!({"numberOfLines": 5}), 10),
            LineLimitModifier {
                min: None,
                max: Some(Variable::literal(5.0)),
            }
        );
        assert_eq!(decode(json!({"numberOfLines": null}), 15), LineLimitModifier::default());
        assert_eq!(
            decode(json!({"min": 1, "max": {"propertyName": "lines"}}), 16),
            LineLimitModifier {
                min: Some(Variable::literal(1.0)),
                max: Some(Variable::property("lines")),
            }
        );
        assert_eq!(
            decode(json!({"min": null, "max": {"kind": "literal", "value": 2.0}}), 17),
            LineLimitModifier {
                min: None,
                max: Some(Variable::literal(2.0)),
            }
        );
    }

    #[test]
    fn resolved_line_counts() {
        let modifier = LineLimitModifier {
            min: Some(Variable::literal(-1.0)),
            max: Some(Variable::literal(3.0)),
        };
        assert_eq!(modifier.lines(&ResolutionContext::new()), (None, Some(3)));
    }
}
