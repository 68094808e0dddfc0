/// Per-decode state threaded through every node decoder.
///
/// Built from the document's `version` field before any node is decoded.
/// Each decode gets its own context, so concurrent decodes share nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeContext {
    version: u32,
}

impl DecodeContext {
    pub fn new(version: u32) -> Self {
        Self { version }
    }

    /// Version of the document being decoded.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// True when the source document predates `version`.
    pub fn is_before(&self, version: u32) -> bool {
        self.version < version
    }
}
