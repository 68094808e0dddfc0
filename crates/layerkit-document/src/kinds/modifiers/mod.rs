mod accessibility;
mod effects;
mod layout;
mod navigation;
mod text;
mod toolbar;

pub use accessibility::{
    AccessibilityAddTraitsModifier, AccessibilityElementModifier, AccessibilityHiddenModifier,
    AccessibilityLabelModifier, AccessibilitySortPriorityModifier,
};
pub use effects::{
    BlendModeModifier, ButtonStyleModifier, ForegroundColorModifier, OpacityModifier,
    RotationEffectModifier, ShadowModifier, TintModifier,
};
pub use layout::{
    AspectRatioModifier, BackgroundModifier, FrameModifier, LayoutPriorityModifier,
    DEFAULT_PADDING, MaskModifier, OffsetModifier, OverlayModifier, PaddingModifier,
};
pub use navigation::{
    IndexViewStyleModifier, NavigationBarBackButtonHiddenModifier, NavigationBarHiddenModifier,
    NavigationBarTitleDisplayModeModifier, NavigationTitleModifier, TabItemModifier,
    TabViewStyleModifier,
};
pub use text::{FontModifier, LineLimitModifier, MultilineTextAlignmentModifier, TextCaseModifier};
pub use toolbar::{
    ToolbarBackgroundColorModifier, ToolbarBackgroundVisibilityModifier,
    ToolbarColorSchemeModifier, ToolbarItemLabel, ToolbarItemModifier,
};
