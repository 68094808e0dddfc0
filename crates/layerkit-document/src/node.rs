//! The node tree.
//!
//! Every element of a document is a [`Node`]: a stable id, an optional
//! display name, an ordered list of owned children and a [`NodeKind`]
//! carrying the kind-specific fields. Modifiers are nodes too; they
//! decorate the subtree in their `children`.

use std::fmt;

use uuid::Uuid;

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

/// Broad role of a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    /// Top-level artboards and main components.
    Canvas,
    /// Plain grouping node.
    Container,
    /// Layout primitives, shapes, controls and data-driven layers.
    Layer,
    /// Decorators applied to the subtree in their children.
    Modifier,
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeCategory::Canvas => "canvas",
            NodeCategory::Container => "container",
            NodeCategory::Layer => "layer",
            NodeCategory::Modifier => "modifier",
        })
    }
}

/// Kind-specific fields of a node. Kinds without fields are unit variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    // Canvas
    Artboard(ArtboardNode),
    MainComponent(MainComponentNode),

    // Container
    Container,

    // Layers
    Button(ButtonLayer),
    Capsule,
    Circle,
    Collection(CollectionLayer),
    ComponentInstance(ComponentInstanceNode),
    Conditional(ConditionalLayer),
    DataSource(DataSourceLayer),
    Divider,
    Ellipse,
    HStack(HStackLayer),
    Image(ImageLayer),
    NavigationLink,
    NavigationStack,
    Rectangle,
    RoundedRectangle(RoundedRectangleLayer),
    ScrollView(ScrollViewLayer),
    SecureField(SecureFieldLayer),
    Spacer(SpacerLayer),
    Stepper(StepperLayer),
    TabView,
    TextField(TextFieldLayer),
    Text(TextLayer),
    Toggle(ToggleLayer),
    VStack(VStackLayer),
    ZStack(ZStackLayer),

    // Modifiers
    AccessibilityAddTraits(AccessibilityAddTraitsModifier),
    AccessibilityElement(AccessibilityElementModifier),
    AccessibilityHidden(AccessibilityHiddenModifier),
    AccessibilityLabel(AccessibilityLabelModifier),
    AccessibilitySortPriority(AccessibilitySortPriorityModifier),
    AspectRatio(AspectRatioModifier),
    Background(BackgroundModifier),
    BlendMode(BlendModeModifier),
    Bold,
    ButtonStyle(ButtonStyleModifier),
    Font(FontModifier),
    ForegroundColor(ForegroundColorModifier),
    Frame(FrameModifier),
    IndexViewStyle(IndexViewStyleModifier),
    Italic,
    LayoutPriority(LayoutPriorityModifier),
    LineLimit(LineLimitModifier),
    Mask(MaskModifier),
    MultilineTextAlignment(MultilineTextAlignmentModifier),
    NavigationBarBackButtonHidden(NavigationBarBackButtonHiddenModifier),
    NavigationBarHidden(NavigationBarHiddenModifier),
    NavigationBarTitleDisplayMode(NavigationBarTitleDisplayModeModifier),
    NavigationTitle(NavigationTitleModifier),
    Offset(OffsetModifier),
    Opacity(OpacityModifier),
    Overlay(OverlayModifier),
    Padding(PaddingModifier),
    RotationEffect(RotationEffectModifier),
    Shadow(ShadowModifier),
    TabItem(TabItemModifier),
    TabViewStyle(TabViewStyleModifier),
    TextCase(TextCaseModifier),
    Tint(TintModifier),
    ToolbarBackgroundColor(ToolbarBackgroundColorModifier),
    ToolbarBackgroundVisibility(ToolbarBackgroundVisibilityModifier),
    ToolbarColorScheme(ToolbarColorSchemeModifier),
    ToolbarItem(ToolbarItemModifier),
}

impl NodeKind {
    /// Wire tag written as `__typeName`.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Artboard(_) => "ArtboardNode",
            NodeKind::MainComponent(_) => "MainComponentNode",
            NodeKind::Container => "ContainerNode",
            NodeKind::Button(_) => "ButtonLayer",
            NodeKind::Capsule => "CapsuleLayer",
            NodeKind::Circle => "CircleLayer",
            NodeKind::Collection(_) => "CollectionLayer",
            NodeKind::ComponentInstance(_) => "ComponentInstanceNode",
            NodeKind::Conditional(_) => "ConditionalLayer",
            NodeKind::DataSource(_) => "DataSourceLayer",
            NodeKind::Divider => "DividerLayer",
            NodeKind::Ellipse => "EllipseLayer",
            NodeKind::HStack(_) => "HStackLayer",
            NodeKind::Image(_) => "ImageLayer",
            NodeKind::NavigationLink => "NavigationLinkLayer",
            NodeKind::NavigationStack => "NavigationStackLayer",
            NodeKind::Rectangle => "RectangleLayer",
            NodeKind::RoundedRectangle(_) => "RoundedRectangleLayer",
            NodeKind::ScrollView(_) => "ScrollViewLayer",
            NodeKind::SecureField(_) => "SecureFieldLayer",
            NodeKind::Spacer(_) => "SpacerLayer",
            NodeKind::Stepper(_) => "StepperLayer",
            NodeKind::TabView => "TabViewLayer",
            NodeKind::TextField(_) => "TextFieldLayer",
            NodeKind::Text(_) => "TextLayer",
            NodeKind::Toggle(_) => "ToggleLayer",
            NodeKind::VStack(_) => "VStackLayer",
            NodeKind::ZStack(_) => "ZStackLayer",
            NodeKind::AccessibilityAddTraits(_) => "AccessibilityAddTraitsModifier",
            NodeKind::AccessibilityElement(_) => "AccessibilityElementModifier",
            NodeKind::AccessibilityHidden(_) => "AccessibilityHiddenModifier",
            NodeKind::AccessibilityLabel(_) => "AccessibilityLabelModifier",
            NodeKind::AccessibilitySortPriority(_) => "AccessibilitySortPriorityModifier",
            NodeKind::AspectRatio(_) => "AspectRatioModifier",
            NodeKind::Background(_) => "BackgroundModifier",
            NodeKind::BlendMode(_) => "BlendModeModifier",
            NodeKind::Bold => "BoldModifier",
            NodeKind::ButtonStyle(_) => "ButtonStyleModifier",
            NodeKind::Font(_) => "FontModifier",
            NodeKind::ForegroundColor(_) => "ForegroundColorModifier",
            NodeKind::Frame(_) => "FrameModifier",
            NodeKind::IndexViewStyle(_) => "IndexViewStyleModifier",
            NodeKind::Italic => "ItalicModifier",
            NodeKind::LayoutPriority(_) => "LayoutPriorityModifier",
            NodeKind::LineLimit(_) => "LineLimitModifier",
            NodeKind::Mask(_) => "MaskModifier",
            NodeKind::MultilineTextAlignment(_) => "MultilineTextAlignmentModifier",
            NodeKind::NavigationBarBackButtonHidden(_) => "NavigationBarBackButtonHiddenModifier",
            NodeKind::NavigationBarHidden(_) => "NavigationBarHiddenModifier",
            NodeKind::NavigationBarTitleDisplayMode(_) => "NavigationBarTitleDisplayModeModifier",
            NodeKind::NavigationTitle(_) => "NavigationTitleModifier",
            NodeKind::Offset(_) => "OffsetModifier",
            NodeKind::Opacity(_) => "OpacityModifier",
            NodeKind::Overlay(_) => "OverlayModifier",
            NodeKind::Padding(_) => "PaddingModifier",
            NodeKind::RotationEffect(_) => "RotationEffectModifier",
            NodeKind::Shadow(_) => "ShadowModifier",
            NodeKind::TabItem(_) => "TabItemModifier",
            NodeKind::TabViewStyle(_) => "TabViewStyleModifier",
            NodeKind::TextCase(_) => "TextCaseModifier",
            NodeKind::Tint(_) => "TintModifier",
            NodeKind::ToolbarBackgroundColor(_) => "ToolbarBackgroundColorModifier",
            NodeKind::ToolbarBackgroundVisibility(_) => "ToolbarBackgroundVisibilityModifier",
            NodeKind::ToolbarColorScheme(_) => "ToolbarColorSchemeModifier",
            NodeKind::ToolbarItem(_) => "ToolbarItemModifier",
        }
    }

    pub fn category(&self) -> NodeCategory {
        match self {
            NodeKind::Artboard(_) | NodeKind::MainComponent(_) => NodeCategory::Canvas,
            NodeKind::Container => NodeCategory::Container,
            NodeKind::Button(_)
            | NodeKind::Capsule
            | NodeKind::Circle
            | NodeKind::Collection(_)
            | NodeKind::ComponentInstance(_)
            | NodeKind::Conditional(_)
            | NodeKind::DataSource(_)
            | NodeKind::Divider
            | NodeKind::Ellipse
            | NodeKind::HStack(_)
            | NodeKind::Image(_)
            | NodeKind::NavigationLink
            | NodeKind::NavigationStack
            | NodeKind::Rectangle
            | NodeKind::RoundedRectangle(_)
            | NodeKind::ScrollView(_)
            | NodeKind::SecureField(_)
            | NodeKind::Spacer(_)
            | NodeKind::Stepper(_)
            | NodeKind::TabView
            | NodeKind::TextField(_)
            | NodeKind::Text(_)
            | NodeKind::Toggle(_)
            | NodeKind::VStack(_)
            | NodeKind::ZStack(_) => NodeCategory::Layer,
            _ => NodeCategory::Modifier,
        }
    }

    pub fn is_modifier(&self) -> bool {
        self.category() == NodeCategory::Modifier
    }
}

macro_rules! node_kind_from {
    ($($variant:ident($kind:ty)),* $(,)?) => {
        $(
            impl From<$kind> for NodeKind {
                fn from(kind: $kind) -> Self {
                    NodeKind::$variant(kind)
                }
            }
        )*
    };
}

node_kind_from!(
    Artboard(ArtboardNode),
    MainComponent(MainComponentNode),
    Button(ButtonLayer),
    Collection(CollectionLayer),
    ComponentInstance(ComponentInstanceNode),
    Conditional(ConditionalLayer),
    DataSource(DataSourceLayer),
    HStack(HStackLayer),
    Image(ImageLayer),
    RoundedRectangle(RoundedRectangleLayer),
    ScrollView(ScrollViewLayer),
    SecureField(SecureFieldLayer),
    Spacer(SpacerLayer),
    Stepper(StepperLayer),
    TextField(TextFieldLayer),
    Text(TextLayer),
    Toggle(ToggleLayer),
    VStack(VStackLayer),
    ZStack(ZStackLayer),
    AccessibilityAddTraits(AccessibilityAddTraitsModifier),
    AccessibilityElement(AccessibilityElementModifier),
    AccessibilityHidden(AccessibilityHiddenModifier),
    AccessibilityLabel(AccessibilityLabelModifier),
    AccessibilitySortPriority(AccessibilitySortPriorityModifier),
    AspectRatio(AspectRatioModifier),
    Background(BackgroundModifier),
    BlendMode(BlendModeModifier),
    ButtonStyle(ButtonStyleModifier),
    Font(FontModifier),
    ForegroundColor(ForegroundColorModifier),
    Frame(FrameModifier),
    IndexViewStyle(IndexViewStyleModifier),
    LayoutPriority(LayoutPriorityModifier),
    LineLimit(LineLimitModifier),
    Mask(MaskModifier),
    MultilineTextAlignment(MultilineTextAlignmentModifier),
    NavigationBarBackButtonHidden(NavigationBarBackButtonHiddenModifier),
    NavigationBarHidden(NavigationBarHiddenModifier),
    NavigationBarTitleDisplayMode(NavigationBarTitleDisplayModeModifier),
    NavigationTitle(NavigationTitleModifier),
    Offset(OffsetModifier),
    Opacity(OpacityModifier),
    Overlay(OverlayModifier),
    Padding(PaddingModifier),
    RotationEffect(RotationEffectModifier),
    Shadow(ShadowModifier),
    TabItem(TabItemModifier),
    TabViewStyle(TabViewStyleModifier),
    TextCase(TextCaseModifier),
    Tint(TintModifier),
    ToolbarBackgroundColor(ToolbarBackgroundColorModifier),
    ToolbarBackgroundVisibility(ToolbarBackgroundVisibilityModifier),
    ToolbarColorScheme(ToolbarColorSchemeModifier),
    ToolbarItem(ToolbarItemModifier),
);

/// A tree element: identity, optional name, owned children and kind fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: Uuid,
    pub name: Option<String>,
    pub children: Vec<Node>,
    pub kind: NodeKind,
}

impl Node {
    /// Create a node with a fresh random id and no children.
    pub fn new(kind: impl Into<NodeKind>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            children: Vec::new(),
            kind: kind.into(),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    pub fn category(&self) -> NodeCategory {
        self.kind.category()
    }

    /// This node and every node below it, depth-first in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Find a node by id in this subtree.
    pub fn find(&self, id: Uuid) -> Option<&Node> {
        self.descendants().find(|node| node.id == id)
    }

    /// Label and destination of a navigation link.
    ///
    /// A navigation link holds two container children: the label first,
    /// the destination second. Returns `None` for other kinds or when the
    /// containers are missing.
    pub fn navigation_link(&self) -> Option<NavigationLink<'_>> {
        if !matches!(self.kind, NodeKind::NavigationLink) {
            return None;
        }
        let mut containers = self
            .children
            .iter()
            .filter(|child| matches!(child.kind, NodeKind::Container));
        let label = containers.next()?;
        let destination = containers.next()?;
        Some(NavigationLink {
            label: &label.children,
            destination: &destination.children,
        })
    }
}

/// The two halves of a navigation link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationLink<'a> {
    pub label: &'a [Node],
    pub destination: &'a [Node],
}

/// Pre-order iterator returned by [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::TextLayer;
    use layerkit_model::Variable;

    fn text(value: &str) -> Node {
        Node::new(TextLayer {
            value: Variable::from(value),
        })
        .with_name(value)
    }

    #[test]
    fn descendants_are_pre_order() {
        let tree = Node::new(NodeKind::Container)
            .with_name("root")
            .with_child(Node::new(NodeKind::Container).with_name("a").with_child(text("a1")))
            .with_child(text("b"));

        let names: Vec<_> = tree
            .descendants()
            .map(|node| node.name.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(names, ["root", "a", "a1", "b"]);
    }

    #[test]
    fn find_by_id() {
        let leaf = text("leaf");
        let id = leaf.id;
        let tree = Node::new(NodeKind::VStack(VStackLayer::default())).with_child(leaf);
        assert_eq!(tree.find(id).and_then(|n| n.name.as_deref()), Some("leaf"));
        assert!(tree.find(Uuid::nil()).is_none());
    }

    #[test]
    fn navigation_link_halves() {
        let link = Node::new(NodeKind::NavigationLink)
            .with_child(Node::new(NodeKind::Container).with_child(text("label")))
            .with_child(
                Node::new(NodeKind::Container)
                    .with_child(text("destination"))
                    .with_child(text("more")),
            );
        let halves = link.navigation_link().unwrap();
        assert_eq!(halves.label.len(), 1);
        assert_eq!(halves.destination.len(), 2);

        let incomplete = Node::new(NodeKind::NavigationLink)
            .with_child(Node::new(NodeKind::Container));
        assert!(incomplete.navigation_link().is_none());
        assert!(text("x").navigation_link().is_none());
    }

    #[test]
    fn categories() {
        assert_eq!(Node::new(NodeKind::Bold).category(), NodeCategory::Modifier);
        assert_eq!(Node::new(NodeKind::Divider).category(), NodeCategory::Layer);
        assert_eq!(Node::new(NodeKind::Container).category(), NodeCategory::Container);
        assert!(NodeKind::Italic.is_modifier());
    }
}
