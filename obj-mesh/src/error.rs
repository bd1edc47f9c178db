//! Error types for OBJ loading

use std::path::PathBuf;

/// Result alias used throughout the crate
pub type ObjResult<T> = Result<T, ObjError>;

/// Which table an out-of-range index points into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Vertex,
    TexCoord,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexKind::Vertex => f.write_str("vertex"),
            IndexKind::TexCoord => f.write_str("texture coordinate"),
        }
    }
}

/// Errors raised while loading or validating an OBJ mesh.
///
/// Line numbers are 1-based. Every variant is fatal: the parse is aborted
/// and no partial mesh is returned.
#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error("Failed to open OBJ {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: invalid number {token:?} in `{directive}` directive")]
    InvalidNumber {
        line: usize,
        directive: &'static str,
        token: String,
    },

    #[error("Line {line}: `{directive}` needs {expected} components, found {found}")]
    MissingComponent {
        line: usize,
        directive: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: face vertex {token:?} has no vertex index")]
    EmptyVertexIndex { line: usize, token: String },

    #[error("Line {line}: face has {count} vertices (only triangles and quads are supported)")]
    UnsupportedFaceArity { line: usize, count: usize },

    #[error("Triangle {triangle} slot {slot}: {kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        triangle: usize,
        slot: usize,
        kind: IndexKind,
        index: i32,
        len: usize,
    },
}

impl ObjError {
    /// Source line the error was raised on, if it came from the parser
    pub fn line(&self) -> Option<usize> {
        match self {
            ObjError::Read { line, .. }
            | ObjError::InvalidNumber { line, .. }
            | ObjError::MissingComponent { line, .. }
            | ObjError::EmptyVertexIndex { line, .. }
            | ObjError::UnsupportedFaceArity { line, .. } => Some(*line),
            ObjError::Open { .. } | ObjError::IndexOutOfRange { .. } => None,
        }
    }
}
