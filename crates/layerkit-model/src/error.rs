use thiserror::Error;

/// Syntax errors in a data key path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyPathError {
    #[error("empty segment at position {position} in key path '{path}'")]
    EmptySegment { path: String, position: usize },
    #[error("unclosed '[' in key path '{path}'")]
    UnclosedBracket { path: String },
    #[error("invalid index '{index}' in key path '{path}'")]
    InvalidIndex { path: String, index: String },
}
