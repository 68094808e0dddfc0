//! Toolbar modifiers.

use layerkit_model::{
    Action, ColorValue, ImageReference, ResolutionContext, ResolvedAction, Variable,
};

use crate::codec::{FieldWriter, Fields, KindCodec, decode_actions, encode_actions};
use crate::error::{DecodeError, EncodeError};
use crate::style::{ColorScheme, ToolbarItemPlacement, ToolbarPlacement, Visibility};

#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarBackgroundColorModifier {
    pub color: Variable<ColorValue>,
    pub bar: ToolbarPlacement,
}

impl KindCodec for ToolbarBackgroundColorModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            color: fields.variable("color")?,
            bar: fields.required("bar")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("color", &self.color)?;
        writer.put("bar", &self.bar)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolbarBackgroundVisibilityModifier {
    pub visibility: Visibility,
    pub bar: ToolbarPlacement,
}

impl KindCodec for ToolbarBackgroundVisibilityModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            visibility: fields.required("visibility")?,
            bar: fields.required("bar")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("visibility", &self.visibility)?;
        writer.put("bar", &self.bar)
    }
}

/// Forces a color scheme on a bar; `None` follows the system.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolbarColorSchemeModifier {
    pub color_scheme: Option<ColorScheme>,
    pub bar: ToolbarPlacement,
}

impl KindCodec for ToolbarColorSchemeModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            color_scheme: fields.optional("colorScheme")?,
            bar: fields.required("bar")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("colorScheme", &self.color_scheme)?;
        writer.put("bar", &self.bar)
    }
}

/// How a toolbar item presents itself.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarItemLabel<'a> {
    Title(String),
    Icon(&'a ImageReference),
    TitleAndIcon(String, &'a ImageReference),
}

/// A tappable toolbar item with a title, an icon or both.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolbarItemModifier {
    pub placement: ToolbarItemPlacement,
    pub title: Option<Variable<String>>,
    pub icon: Option<ImageReference>,
    pub actions: Vec<Action>,
}

impl ToolbarItemModifier {
    /// `None` when the item has neither a title nor an icon.
    pub fn label(&self, context: &ResolutionContext<'_>) -> Option<ToolbarItemLabel<'_>> {
        let title = self.title.as_ref().map(|title| title.resolve(context));
        match (title, self.icon.as_ref()) {
            (Some(title), Some(icon)) => Some(ToolbarItemLabel::TitleAndIcon(title, icon)),
            (Some(title), None) => Some(ToolbarItemLabel::Title(title)),
            (None, Some(icon)) => Some(ToolbarItemLabel::Icon(icon)),
            (None, None) => None,
        }
    }

    pub fn resolve_actions(&self, context: &ResolutionContext<'_>) -> Vec<ResolvedAction> {
        self.actions
            .iter()
            .filter_map(|action| action.resolve(context))
            .collect()
    }
}

impl KindCodec for ToolbarItemModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            placement: fields.required("placement")?,
            title: fields.optional_variable("title")?,
            icon: fields.optional("icon")?,
            actions: decode_actions(fields, "actions")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("placement", &self.placement)?;
        writer.put("title", &self.title)?;
        writer.put("icon", &self.icon)?;
        writer.put_raw("actions", encode_actions(&self.actions)?);
        Ok(())
    }
}
