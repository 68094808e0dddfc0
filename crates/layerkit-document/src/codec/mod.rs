//! Versioned wire codec.
//!
//! Decoding threads a [`DecodeContext`] carrying the source document's
//! version through every node decoder; each decoder picks the legacy or
//! current shape per field. Encoding always writes the current shape.
//!
//! - `context.rs` - Per-decode version context
//! - `version.rs` - Supported versions and per-field cut-offs
//! - `fields.rs` - Field reader and writer over wire objects
//! - `legacy.rs` - Legacy shapes and version-band migrations
//! - `registry.rs` - Wire tag to node kind dispatch table
//! - `node.rs` - Recursive node decode/encode
//! - `action.rs` - Action codec
//! - `records.rs` - Conditions and headers nested in layers

mod action;
mod context;
mod fields;
mod legacy;
mod node;
mod records;
mod registry;
mod version;

pub(crate) use action::{decode_actions, encode_actions};
pub use context::DecodeContext;
pub(crate) use fields::{FieldWriter, Fields};
pub use fields::TYPE_NAME_KEY;
pub(crate) use legacy::{line_limit_from_number_of_lines, rotation_from_degrees};
pub use node::{decode_node, encode_node};
pub(crate) use node::KindCodec;
pub(crate) use records::{decode_conditions, decode_headers};
pub use registry::{NODE_TYPES, NodeType, is_registered, lookup};
pub use version::{
    CURRENT_VERSION, LINE_LIMIT_RANGE_SINCE, MIN_SUPPORTED_VERSION, ROTATION_UNITS_SINCE,
    VARIABLE_BINDINGS_SINCE,
};
