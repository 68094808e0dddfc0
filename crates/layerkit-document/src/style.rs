//! Style, text and navigation configuration stored on nodes.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn to_radians(self, size: f64) -> f64 {
        match self {
            AngleUnit::Degrees => size * PI / 180.0,
            AngleUnit::Radians => size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    SoftLight,
    HardLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
    SourceAtop,
    DestinationOver,
    DestinationOut,
    PlusDarker,
    PlusLighter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonStyle {
    #[default]
    Automatic,
    Plain,
    Borderless,
    Bordered,
    BorderedProminent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonRole {
    Cancel,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextCase {
    Uppercase,
    Lowercase,
}

impl TextCase {
    pub fn apply(self, text: &str) -> String {
        match self {
            TextCase::Uppercase => text.to_uppercase(),
            TextCase::Lowercase => text.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextStyle {
    LargeTitle,
    Title,
    Title2,
    Title3,
    Headline,
    Subheadline,
    #[default]
    Body,
    Callout,
    Footnote,
    Caption,
    Caption2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontDesign {
    #[default]
    Default,
    Serif,
    Rounded,
    Monospaced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

/// A font: a platform text style, a fixed-size system font or a custom face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Font {
    #[serde(rename_all = "camelCase")]
    Dynamic {
        text_style: TextStyle,
        #[serde(default)]
        design: FontDesign,
        #[serde(default)]
        weight: Option<FontWeight>,
    },
    #[serde(rename_all = "camelCase")]
    Fixed {
        size: f64,
        #[serde(default)]
        weight: Option<FontWeight>,
        #[serde(default)]
        design: FontDesign,
    },
    #[serde(rename_all = "camelCase")]
    Custom { font_name: String, size: f64 },
}

impl Default for Font {
    fn default() -> Self {
        Font::Dynamic {
            text_style: TextStyle::Body,
            design: FontDesign::Default,
            weight: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    #[default]
    Automatic,
    Visible,
    Hidden,
}

/// Bar a toolbar modifier applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolbarPlacement {
    #[default]
    NavigationBar,
    TabBar,
    BottomBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolbarItemPlacement {
    Leading,
    Cancellation,
    Navigation,
    Principal,
    #[default]
    Automatic,
    Trailing,
    Primary,
    Confirmation,
    Destruction,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TitleDisplayMode {
    #[default]
    Automatic,
    Inline,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TabViewStyle {
    #[default]
    Automatic,
    Page,
}

/// When a paged tab view shows its index dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndexDisplayMode {
    #[default]
    Automatic,
    Always,
    Interactive,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentMode {
    #[default]
    Fit,
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageResizing {
    #[default]
    None,
    ScaleToFit,
    ScaleToFill,
    Stretch,
    Tile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderingMode {
    #[default]
    Original,
    Template,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CornerStyle {
    #[default]
    Circular,
    Continuous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessibilityTrait {
    IsButton,
    IsHeader,
    IsLink,
    IsImage,
    IsSelected,
    IsSearchField,
    IsStaticText,
    IsSummaryElement,
    IsModal,
    IsKeyboardKey,
    UpdatesFrequently,
    StartsMediaSession,
    AllowsDirectInteraction,
    CausesPageTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessibilityChildBehavior {
    #[default]
    Ignore,
    Contain,
    Combine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// How the design tool previews an artboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSettings {
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default)]
    pub device_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn angle_units() {
        assert!((AngleUnit::Degrees.to_radians(180.0) - PI).abs() < 1e-12);
        assert_eq!(AngleUnit::Radians.to_radians(1.5), 1.5);
    }

    #[test]
    fn font_wire_shape() {
        let font = Font::Custom {
            font_name: "Avenir-Heavy".into(),
            size: 17.0,
        };
        assert_eq!(
            serde_json::to_value(&font).unwrap(),
            json!({"kind": "custom", "fontName": "Avenir-Heavy", "size": 17.0})
        );
        let dynamic: Font =
            serde_json::from_value(json!({"kind": "dynamic", "textStyle": "largeTitle"})).unwrap();
        assert_eq!(
            dynamic,
            Font::Dynamic {
                text_style: TextStyle::LargeTitle,
                design: FontDesign::Default,
                weight: None,
            }
        );
    }

    #[test]
    fn http_method_is_uppercase() {
        assert_eq!(serde_json::to_value(HttpMethod::Post).unwrap(), json!("POST"));
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn text_case() {
        assert_eq!(TextCase::Uppercase.apply("Hello"), "HELLO");
        assert_eq!(TextCase::Lowercase.apply("Hello"), "hello");
    }
}
