//! The document container and its read/write entry points.
//!
//! # Wire format
//!
//! ```text
//! {
//!   "version": 17,
//!   "children": [ { "__typeName": "ArtboardNode", ... }, ... ],
//!   "assets": [ { "name": "logo", "kind": "image", "filename": "logo.png" } ]
//! }
//! ```
//!
//! The version is read before any node so every node decoder sees it.
//! Writing always emits [`CURRENT_VERSION`].

use std::collections::HashSet;

use layerkit_model::{PropertyValues, ResolutionContext};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::codec::{
    CURRENT_VERSION, DecodeContext, FieldWriter, Fields, MIN_SUPPORTED_VERSION,
};
use crate::error::{DecodeError, EncodeError};
use crate::kinds::ComponentInstanceNode;
use crate::node::{Node, NodeCategory, NodeKind};

const OWNER: &str = "Document";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetKind {
    Image,
    Font,
}

/// A file bundled with the document, referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub kind: AssetKind,
    pub filename: String,
}

/// Options for [`Document::read_with_options`].
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Reject documents in which two nodes share an id.
    pub verify_unique_ids: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            verify_unique_ids: true,
        }
    }
}

impl ReadOptions {
    pub fn with_verify_unique_ids(mut self, verify: bool) -> Self {
        self.verify_unique_ids = verify;
        self
    }
}

/// Options for [`Document::write_with_options`].
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Indent the output.
    pub pretty: bool,
}

impl WriteOptions {
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Root of a render pass, as chosen by [`Document::start_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartPoint<'a> {
    Artboard(&'a Node),
    Component(&'a Node),
    None,
}

/// A decoded document.
///
/// `version` is the version the document was read at; it does not change
/// what [`Document::write`] emits.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub version: u32,
    pub nodes: Vec<Node>,
    pub assets: Vec<Asset>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Document {
    /// A document at the current version with no assets.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            version: CURRENT_VERSION,
            nodes,
            assets: Vec::new(),
        }
    }

    pub fn with_assets(mut self, assets: Vec<Asset>) -> Self {
        self.assets = assets;
        self
    }

    pub fn read(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::read_with_options(bytes, &ReadOptions::default())
    }

    pub fn read_with_options(bytes: &[u8], options: &ReadOptions) -> Result<Self, DecodeError> {
        let root: Value =
            serde_json::from_slice(bytes).map_err(|source| DecodeError::InvalidJson { source })?;
        let envelope = root
            .as_object()
            .ok_or_else(|| DecodeError::malformed(OWNER, "", "object"))?;

        let version = envelope
            .get("version")
            .and_then(Value::as_u64)
            .and_then(|version| u32::try_from(version).ok())
            .ok_or_else(|| DecodeError::malformed(OWNER, "version", "u32"))?;
        check_version(version)?;

        let context = DecodeContext::new(version);
        let fields = Fields::new(OWNER, envelope, &context);
        let nodes = fields.nodes("children")?;
        if let Some(node) = nodes
            .iter()
            .find(|node| node.category() != NodeCategory::Canvas)
        {
            tracing::debug!(type_name = node.type_name(), "non-canvas node at top level");
            return Err(DecodeError::malformed(
                OWNER,
                "children",
                "ArtboardNode or MainComponentNode",
            ));
        }
        let assets = fields.optional("assets")?.unwrap_or_default();

        let document = Self {
            version,
            nodes,
            assets,
        };
        if options.verify_unique_ids {
            document.check_unique_ids()?;
        }

        tracing::debug!(
            version,
            artboards = document.artboards().count(),
            components = document.main_components().count(),
            nodes = document.node_count(),
            "decoded document"
        );
        Ok(document)
    }

    /// Encode at the current schema version.
    pub fn write(&self) -> Result<Vec<u8>, EncodeError> {
        self.write_with_options(&WriteOptions::default())
    }

    pub fn write_with_options(&self, options: &WriteOptions) -> Result<Vec<u8>, EncodeError> {
        let mut writer = FieldWriter::untagged(OWNER);
        writer.put("version", &CURRENT_VERSION)?;
        writer.put_nodes("children", &self.nodes)?;
        writer.put("assets", &self.assets)?;
        let root = writer.finish();

        let bytes = if options.pretty {
            serde_json::to_vec_pretty(&root)
        } else {
            serde_json::to_vec(&root)
        }
        .map_err(|source| EncodeError::Serialization { source })?;

        if self.version != CURRENT_VERSION {
            tracing::debug!(
                from = self.version,
                to = CURRENT_VERSION,
                "document upgraded on write"
            );
        }
        Ok(bytes)
    }

    pub fn artboards(&self) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(|node| matches!(node.kind, NodeKind::Artboard(_)))
    }

    pub fn main_components(&self) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(|node| matches!(node.kind, NodeKind::MainComponent(_)))
    }

    /// Choose the root of a render pass.
    ///
    /// A `preferred` name picks the first artboard, then the first main
    /// component, carrying that name. Without a match the first artboard is
    /// used, then the first main component. Selection follows declaration
    /// order only.
    pub fn start_point(&self, preferred: Option<&str>) -> StartPoint<'_> {
        if let Some(name) = preferred {
            let named = |node: &&Node| node.name.as_deref() == Some(name);
            if let Some(artboard) = self.artboards().find(named) {
                return StartPoint::Artboard(artboard);
            }
            if let Some(component) = self.main_components().find(named) {
                return StartPoint::Component(component);
            }
            tracing::debug!(name, "no artboard or component with preferred name");
        }
        if let Some(artboard) = self.artboards().next() {
            return StartPoint::Artboard(artboard);
        }
        match self.main_components().next() {
            Some(component) => StartPoint::Component(component),
            None => StartPoint::None,
        }
    }

    /// Every node in the document, depth-first in document order.
    pub fn descendants(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().flat_map(Node::descendants)
    }

    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }

    pub fn find_node(&self, id: Uuid) -> Option<&Node> {
        self.descendants().find(|node| node.id == id)
    }

    /// Top-level main component with `id`.
    pub fn main_component(&self, id: Uuid) -> Option<&Node> {
        self.main_components().find(|node| node.id == id)
    }

    pub fn asset(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.name == name)
    }

    /// Body and property values for rendering a component instance.
    ///
    /// `None` when the instance refers to no main component.
    pub fn instantiate<'d>(
        &'d self,
        instance: &ComponentInstanceNode,
        context: &ResolutionContext<'_>,
    ) -> Option<(&'d Node, PropertyValues)> {
        let node = self.main_component(instance.component_id)?;
        let NodeKind::MainComponent(component) = &node.kind else {
            return None;
        };
        Some((node, instance.property_values(component, context)))
    }

    fn check_unique_ids(&self) -> Result<(), DecodeError> {
        let mut seen = HashSet::new();
        for node in self.descendants() {
            if !seen.insert(node.id) {
                return Err(DecodeError::DuplicateNodeId { id: node.id });
            }
        }
        Ok(())
    }
}

fn check_version(version: u32) -> Result<(), DecodeError> {
    if version < MIN_SUPPORTED_VERSION {
        return Err(DecodeError::UnsupportedVersion {
            found: version,
            min_supported: MIN_SUPPORTED_VERSION,
        });
    }
    if version > CURRENT_VERSION {
        return Err(DecodeError::NewerVersion {
            found: version,
            max_supported: CURRENT_VERSION,
        });
    }
    Ok(())
}

/// Decode a document with default options.
pub fn read(bytes: &[u8]) -> Result<Document, DecodeError> {
    Document::read(bytes)
}

/// Encode a document at the current schema.
pub fn write(document: &Document) -> Result<Vec<u8>, EncodeError> {
    document.write()
}
