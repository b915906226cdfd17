//! Error types for capy-desktop

use std::path::PathBuf;

/// Desktop entry parse errors
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("No desktop file path given")]
    EmptyPath,

    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid line {line}: {content}")]
    InvalidLine { line: usize, content: String },

    #[error("Key outside of any group at line {line}: {content}")]
    KeyOutsideGroup { line: usize, content: String },

    #[error("Empty group name at line {line}")]
    EmptyGroupName { line: usize },

    #[error("Empty key at line {line}")]
    EmptyKey { line: usize },

    #[error("No groups found")]
    NoGroups,
}

/// Resolution errors, surfaced by `try_resolve` only
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("No desktop file found for class {0:?}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Missing [Desktop Entry] group in {}", .0.display())]
    MissingGroup(PathBuf),
}
