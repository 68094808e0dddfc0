//! Node trees, the versioned codec and the document container for layerkit
//! design files.
//!
//! A document is a JSON envelope holding a schema version, a list of
//! top-level artboards and main components, and an asset table. Every node
//! is tagged with `__typeName` and decoded through a closed registry; each
//! node decoder consults the document version to read legacy field shapes
//! and maps them into the current in-memory model. Writing always emits the
//! current schema.
//!
//! # Example
//!
//! ```
//! use layerkit_document::{Document, NodeKind, StartPoint};
//!
//! let bytes = br#"{
//!     "version": 15,
//!     "children": [{
//!         "__typeName": "ArtboardNode",
//!         "id": "6b1d3f0e-2a57-4d8e-9b83-2f6f3c1a9e10",
//!         "name": "Home",
//!         "children": [{
//!             "__typeName": "LineLimitModifier",
//!             "id": "0f4a1c2b-8e3d-4b7a-a6c5-9d2e1f0b3c4d",
//!             "children": [],
//!             "numberOfLines": 3
//!         }],
//!         "position": {"x": 0, "y": 0},
//!         "frame": {"width": 390},
//!         "previewSettings": {}
//!     }]
//! }"#;
//!
//! let document = Document::read(bytes)?;
//! let StartPoint::Artboard(home) = document.start_point(None) else {
//!     panic!("expected an artboard");
//! };
//! assert_eq!(home.name.as_deref(), Some("Home"));
//! assert!(matches!(home.children[0].kind, NodeKind::LineLimit(_)));
//! # Ok::<(), layerkit_document::DecodeError>(())
//! ```
//!
//! # Architecture
//!
//! - `node.rs` - Node tree, kind enum and traversal
//! - `kinds/` - Kind-specific fields and their codecs
//! - `codec/` - Version context, field reader/writer, registry and migrations
//! - `document.rs` - Document container, read/write and entry point selection
//! - `geometry.rs`, `style.rs` - Raw configuration values stored on nodes
//! - `io/` - File I/O operations (save, load, hash)
//! - `cache.rs` - Host-owned cache of decoded documents
//! - `error.rs` - Error types with user-friendly messages

mod cache;
mod codec;
mod document;
mod error;
mod geometry;
mod io;
mod kinds;
mod node;
mod style;

// Re-export main types
pub use cache::DocumentCache;
pub use codec::{
    CURRENT_VERSION, DecodeContext, LINE_LIMIT_RANGE_SINCE, MIN_SUPPORTED_VERSION, NODE_TYPES,
    NodeType, ROTATION_UNITS_SINCE, TYPE_NAME_KEY, VARIABLE_BINDINGS_SINCE, decode_node,
    encode_node, is_registered, lookup,
};
pub use document::{
    Asset, AssetKind, Document, ReadOptions, StartPoint, WriteOptions, read, write,
};
pub use error::{DecodeError, DocumentError, EncodeError, Result};
pub use geometry::{
    Alignment, ArtboardFrame, Axis, Edge, EdgeInsets, HorizontalAlignment, Point, UnitPoint,
    VerticalAlignment,
};
pub use io::{
    compute_file_hash, content_hash, load_document, load_document_with_options, save_document,
    save_document_with_options, verify_file_hash,
};
pub use kinds::{
    AccessibilityAddTraitsModifier, AccessibilityElementModifier, AccessibilityHiddenModifier,
    AccessibilityLabelModifier, AccessibilitySortPriorityModifier, ArtboardNode,
    AspectRatioModifier, BackgroundModifier, BlendModeModifier, ButtonLayer, ButtonStyleModifier,
    CollectionLayer, ComponentInstanceNode, ComponentProperty, ConditionalLayer, DEFAULT_PADDING,
    DataRequest,
    DataSourceLayer, FontModifier, ForegroundColorModifier, FrameModifier, HStackLayer,
    HttpHeader, ImageLayer, IndexViewStyleModifier, LayoutPriorityModifier, LineLimitModifier,
    MainComponentNode, MaskModifier, MultilineTextAlignmentModifier,
    NavigationBarBackButtonHiddenModifier, NavigationBarHiddenModifier,
    NavigationBarTitleDisplayModeModifier, NavigationTitleModifier, OffsetModifier,
    OpacityModifier, OverlayModifier, PaddingModifier, RotationEffectModifier,
    RoundedRectangleLayer, ScrollViewLayer, SecureFieldLayer, ShadowModifier, SpacerLayer,
    StepperLayer, TabItemModifier, TabViewStyleModifier, TextCaseModifier, TextFieldLayer,
    TextLayer, TintModifier, ToggleLayer, ToolbarBackgroundColorModifier,
    ToolbarBackgroundVisibilityModifier, ToolbarColorSchemeModifier, ToolbarItemLabel,
    ToolbarItemModifier, VStackLayer, ZStackLayer,
};
pub use node::{Descendants, NavigationLink, Node, NodeCategory, NodeKind};
pub use style::{
    AccessibilityChildBehavior, AccessibilityTrait, AngleUnit, BlendMode, ButtonRole,
    ButtonStyle, ColorScheme, ContentMode, CornerStyle, Font, FontDesign, FontWeight, HttpMethod,
    ImageResizing, IndexDisplayMode, PreviewSettings, RenderingMode, TabViewStyle, TextAlignment,
    TextCase, TextStyle, TitleDisplayMode, ToolbarItemPlacement, ToolbarPlacement, Visibility,
};
