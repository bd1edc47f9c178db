//! Parse options
//!
//! Options can be built in code or loaded from a TOML file:
//!
//! ```toml
//! face_arity = "reject"
//! validate_indices = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// What to do with a face that is neither a triangle nor a quad
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceArityPolicy {
    /// Drop the face, log a warning and count it in `ObjMesh::skipped_faces`
    #[default]
    Skip,
    /// Abort the parse with `ObjError::UnsupportedFaceArity`
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub face_arity: FaceArityPolicy,
    /// Run `ObjMesh::validate` before returning the mesh
    pub validate_indices: bool,
}

impl ParseOptions {
    /// Strict options: reject unsupported faces and out-of-range indices
    pub fn strict() -> Self {
        Self {
            face_arity: FaceArityPolicy::Reject,
            validate_indices: true,
        }
    }

    pub fn with_face_arity(mut self, policy: FaceArityPolicy) -> Self {
        self.face_arity = policy;
        self
    }

    pub fn with_index_validation(mut self, enabled: bool) -> Self {
        self.validate_indices = enabled;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse OBJ parse options")
    }

    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read parse options: {:?}", path))?;
        let options: ParseOptions = toml::from_str(&content)
            .with_context(|| format!("Failed to parse parse options: {:?}", path))?;
        Ok(options)
    }
}
