//! The closed registry of node kinds, keyed by wire tag.

use crate::codec::fields::Fields;
use crate::codec::node::decode_kind;
use crate::error::DecodeError;
use crate::kinds::{
    AccessibilityAddTraitsModifier, AccessibilityElementModifier, AccessibilityHiddenModifier,
    AccessibilityLabelModifier, AccessibilitySortPriorityModifier, ArtboardNode,
    AspectRatioModifier, BackgroundModifier, BlendModeModifier, ButtonLayer, ButtonStyleModifier,
    CollectionLayer, ComponentInstanceNode, ConditionalLayer, DataSourceLayer, FontModifier,
    ForegroundColorModifier, FrameModifier, HStackLayer, ImageLayer, IndexViewStyleModifier,
    LayoutPriorityModifier, LineLimitModifier, MainComponentNode, MaskModifier,
    MultilineTextAlignmentModifier, NavigationBarBackButtonHiddenModifier,
    NavigationBarHiddenModifier, NavigationBarTitleDisplayModeModifier, NavigationTitleModifier,
    OffsetModifier, OpacityModifier, OverlayModifier, PaddingModifier, RotationEffectModifier,
    RoundedRectangleLayer, ScrollViewLayer, SecureFieldLayer, ShadowModifier, SpacerLayer,
    StepperLayer, TabItemModifier, TabViewStyleModifier, TextCaseModifier, TextFieldLayer,
    TextLayer, TintModifier, ToggleLayer, ToolbarBackgroundColorModifier,
    ToolbarBackgroundVisibilityModifier, ToolbarColorSchemeModifier, ToolbarItemModifier,
    VStackLayer, ZStackLayer,
};
use crate::node::{NodeCategory, NodeKind};

type DecodeFn = fn(&Fields<'_>) -> Result<NodeKind, DecodeError>;

/// One registered node kind.
pub struct NodeType {
    pub type_name: &'static str,
    pub category: NodeCategory,
    decode: DecodeFn,
}

impl NodeType {
    pub(crate) fn decode(&self, fields: &Fields<'_>) -> Result<NodeKind, DecodeError> {
        (self.decode)(fields)
    }
}

impl std::fmt::Debug for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeType")
            .field("type_name", &self.type_name)
            .field("category", &self.category)
            .finish()
    }
}

const fn canvas(type_name: &'static str, decode: DecodeFn) -> NodeType {
    NodeType {
        type_name,
        category: NodeCategory::Canvas,
        decode,
    }
}

const fn layer(type_name: &'static str, decode: DecodeFn) -> NodeType {
    NodeType {
        type_name,
        category: NodeCategory::Layer,
        decode,
    }
}

const fn modifier(type_name: &'static str, decode: DecodeFn) -> NodeType {
    NodeType {
        type_name,
        category: NodeCategory::Modifier,
        decode,
    }
}

/// Every node kind a document may contain.
pub static NODE_TYPES: &[NodeType] = &[
    // Canvas
    canvas("ArtboardNode", decode_kind::<ArtboardNode>),
    canvas("MainComponentNode", decode_kind::<MainComponentNode>),
    // Container
    NodeType {
        type_name: "ContainerNode",
        category: NodeCategory::Container,
        decode: |_| Ok(NodeKind::Container),
    },
    // Layers
    layer("ButtonLayer", decode_kind::<ButtonLayer>),
    layer("CapsuleLayer", |_| Ok(NodeKind::Capsule)),
    layer("CircleLayer", |_| Ok(NodeKind::Circle)),
    layer("CollectionLayer", decode_kind::<CollectionLayer>),
    layer("ComponentInstanceNode", decode_kind::<ComponentInstanceNode>),
    layer("ConditionalLayer", decode_kind::<ConditionalLayer>),
    layer("DataSourceLayer", decode_kind::<DataSourceLayer>),
    layer("DividerLayer", |_| Ok(NodeKind::Divider)),
    layer("EllipseLayer", |_| Ok(NodeKind::Ellipse)),
    layer("HStackLayer", decode_kind::<HStackLayer>),
    layer("ImageLayer", decode_kind::<ImageLayer>),
    layer("NavigationLinkLayer", |_| Ok(NodeKind::NavigationLink)),
    layer("NavigationStackLayer", |_| Ok(NodeKind::NavigationStack)),
    layer("RectangleLayer", |_| Ok(NodeKind::Rectangle)),
    layer("RoundedRectangleLayer", decode_kind::<RoundedRectangleLayer>),
    layer("ScrollViewLayer", decode_kind::<ScrollViewLayer>),
    layer("SecureFieldLayer", decode_kind::<SecureFieldLayer>),
    layer("SpacerLayer", decode_kind::<SpacerLayer>),
    layer("StepperLayer", decode_kind::<StepperLayer>),
    layer("TabViewLayer", |_| Ok(NodeKind::TabView)),
    layer("TextFieldLayer", decode_kind::<TextFieldLayer>),
    layer("TextLayer", decode_kind::<TextLayer>),
    layer("ToggleLayer", decode_kind::<ToggleLayer>),
    layer("VStackLayer", decode_kind::<VStackLayer>),
    layer("ZStackLayer", decode_kind::<ZStackLayer>),
    // Modifiers
    modifier(
        "AccessibilityAddTraitsModifier",
        decode_kind::<AccessibilityAddTraitsModifier>,
    ),
    modifier(
        "AccessibilityElementModifier",
        decode_kind::<AccessibilityElementModifier>,
    ),
    modifier(
        "AccessibilityHiddenModifier",
        decode_kind::<AccessibilityHiddenModifier>,
    ),
    modifier(
        "AccessibilityLabelModifier",
        decode_kind::<AccessibilityLabelModifier>,
    ),
    modifier(
        "AccessibilitySortPriorityModifier",
        decode_kind::<AccessibilitySortPriorityModifier>,
    ),
    modifier("AspectRatioModifier", decode_kind::<AspectRatioModifier>),
    modifier("BackgroundModifier", decode_kind::<BackgroundModifier>),
    modifier("BlendModeModifier", decode_kind::<BlendModeModifier>),
    modifier("BoldModifier", |_| Ok(NodeKind::Bold)),
    modifier("ButtonStyleModifier", decode_kind::<ButtonStyleModifier>),
    modifier("FontModifier", decode_kind::<FontModifier>),
    modifier("ForegroundColorModifier", decode_kind::<ForegroundColorModifier>),
    modifier("FrameModifier", decode_kind::<FrameModifier>),
    modifier("IndexViewStyleModifier", decode_kind::<IndexViewStyleModifier>),
    modifier("ItalicModifier", |_| Ok(NodeKind::Italic)),
    modifier("LayoutPriorityModifier", decode_kind::<LayoutPriorityModifier>),
    modifier("LineLimitModifier", decode_kind::<LineLimitModifier>),
    modifier("MaskModifier", decode_kind::<MaskModifier>),
    modifier(
        "MultilineTextAlignmentModifier",
        decode_kind::<MultilineTextAlignmentModifier>,
    ),
    modifier(
        "NavigationBarBackButtonHiddenModifier",
        decode_kind::<NavigationBarBackButtonHiddenModifier>,
    ),
    modifier(
        "NavigationBarHiddenModifier",
        decode_kind::<NavigationBarHiddenModifier>,
    ),
    modifier(
        "NavigationBarTitleDisplayModeModifier",
        decode_kind::<NavigationBarTitleDisplayModeModifier>,
    ),
    modifier("NavigationTitleModifier", decode_kind::<NavigationTitleModifier>),
    modifier("OffsetModifier", decode_kind::<OffsetModifier>),
    modifier("OpacityModifier", decode_kind::<OpacityModifier>),
    modifier("OverlayModifier", decode_kind::<OverlayModifier>),
    modifier("PaddingModifier", decode_kind::<PaddingModifier>),
    modifier("RotationEffectModifier", decode_kind::<RotationEffectModifier>),
    modifier("ShadowModifier", decode_kind::<ShadowModifier>),
    modifier("TabItemModifier", decode_kind::<TabItemModifier>),
    modifier("TabViewStyleModifier", decode_kind::<TabViewStyleModifier>),
    modifier("TextCaseModifier", decode_kind::<TextCaseModifier>),
    modifier("TintModifier", decode_kind::<TintModifier>),
    modifier(
        "ToolbarBackgroundColorModifier",
        decode_kind::<ToolbarBackgroundColorModifier>,
    ),
    modifier(
        "ToolbarBackgroundVisibilityModifier",
        decode_kind::<ToolbarBackgroundVisibilityModifier>,
    ),
    modifier(
        "ToolbarColorSchemeModifier",
        decode_kind::<ToolbarColorSchemeModifier>,
    ),
    modifier("ToolbarItemModifier", decode_kind::<ToolbarItemModifier>),
];

/// Look up a node kind by its wire tag.
pub fn lookup(type_name: &str) -> Option<&'static NodeType> {
    NODE_TYPES.iter().find(|node_type| node_type.type_name == type_name)
}

/// Whether `type_name` names a registered node kind.
pub fn is_registered(type_name: &str) -> bool {
    lookup(type_name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tags_are_unique() {
        let mut seen = HashSet::new();
        for node_type in NODE_TYPES {
            assert!(seen.insert(node_type.type_name), "{}", node_type.type_name);
        }
    }

    #[test]
    fn field_less_kinds_decode_from_tag_alone() {
        let context = crate::codec::context::DecodeContext::new(17);
        let empty = serde_json::Map::new();
        let fields = Fields::new("Test", &empty, &context);
        for (tag, expected) in [
            ("ContainerNode", NodeKind::Container),
            ("DividerLayer", NodeKind::Divider),
            ("BoldModifier", NodeKind::Bold),
            ("TabViewLayer", NodeKind::TabView),
        ] {
            let node_type = lookup(tag).unwrap();
            assert_eq!(node_type.decode(&fields).unwrap(), expected);
            assert_eq!(expected.type_name(), tag);
            assert_eq!(expected.category(), node_type.category);
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert!(is_registered("TextLayer"));
        assert!(!is_registered("textlayer"));
        assert!(!is_registered(""));
    }
}
