//! Kind-specific fields of every registered node, with their codecs.
//!
//! - `canvas.rs` - Artboards, main components and component instances
//! - `layers/` - Layout primitives, controls and data-driven layers
//! - `modifiers/` - Decorators, grouped by concern

mod canvas;
mod layers;
mod modifiers;

pub use canvas::{ArtboardNode, ComponentInstanceNode, ComponentProperty, MainComponentNode};
pub use layers::{
    ButtonLayer, CollectionLayer, ConditionalLayer, DataRequest, DataSourceLayer, HStackLayer,
    HttpHeader, ImageLayer, RoundedRectangleLayer, ScrollViewLayer, SecureFieldLayer,
    SpacerLayer, StepperLayer, TextFieldLayer, TextLayer, ToggleLayer, VStackLayer, ZStackLayer,
};
pub use modifiers::{
    DEFAULT_PADDING,
    AccessibilityAddTraitsModifier, AccessibilityElementModifier, AccessibilityHiddenModifier,
    AccessibilityLabelModifier, AccessibilitySortPriorityModifier, AspectRatioModifier,
    BackgroundModifier, BlendModeModifier, ButtonStyleModifier, FontModifier,
    ForegroundColorModifier, FrameModifier, IndexViewStyleModifier, LayoutPriorityModifier,
    LineLimitModifier, MaskModifier, MultilineTextAlignmentModifier,
    NavigationBarBackButtonHiddenModifier, NavigationBarHiddenModifier,
    NavigationBarTitleDisplayModeModifier, NavigationTitleModifier, OffsetModifier,
    OpacityModifier, OverlayModifier, PaddingModifier, RotationEffectModifier, ShadowModifier,
    TabItemModifier, TabViewStyleModifier, TextCaseModifier, TintModifier,
    ToolbarBackgroundColorModifier, ToolbarBackgroundVisibilityModifier,
    ToolbarColorSchemeModifier, ToolbarItemLabel, ToolbarItemModifier,
};
