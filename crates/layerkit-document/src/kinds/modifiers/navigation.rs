//! Navigation bar and tab view modifiers.

use layerkit_model::{ImageReference, Variable};

use crate::codec::{FieldWriter, Fields, KindCodec};
use crate::error::{DecodeError, EncodeError};
use crate::style::{IndexDisplayMode, TabViewStyle, TitleDisplayMode};

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationBarBackButtonHiddenModifier {
    pub is_hidden: Variable<bool>,
}

impl KindCodec for NavigationBarBackButtonHiddenModifier {
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
pub struct NavigationBarHiddenModifier {
    pub is_hidden: Variable<bool>,
}

impl KindCodec for NavigationBarHiddenModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            is_hidden: fields.variable("isHidden")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("isHidden", &self.is_hidden)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationBarTitleDisplayModeModifier {
    pub display_mode: TitleDisplayMode,
}

impl KindCodec for NavigationBarTitleDisplayModeModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            display_mode: fields.required("displayMode")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("displayMode", &self.display_mode)
    }
}

/// Title shown in the navigation bar. Legacy documents stored plain text,
/// which reads back as a literal.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationTitleModifier {
    pub title: Variable<String>,
}

impl KindCodec for NavigationTitleModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            title: fields.variable("title")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("title", &self.title)
    }
}

/// Tab bar entry for a tab view page.
#[derive(Debug, Clone, PartialEq)]
pub struct TabItemModifier {
    pub label: Variable<String>,
    pub icon: Option<ImageReference>,
}

impl KindCodec for TabItemModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            label: fields.variable("label")?,
            icon: fields.optional("icon")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("label", &self.label)?;
        writer.put("icon", &self.icon)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabViewStyleModifier {
    pub style: TabViewStyle,
}

impl KindCodec for TabViewStyleModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            style: fields.required("style")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("style", &self.style)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndexViewStyleModifier {
    pub display_mode: IndexDisplayMode,
}

impl KindCodec for IndexViewStyleModifier {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            display_mode: fields.required("displayMode")?,
        })
    }

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        writer.put("displayMode", &self.display_mode)
    }
}
