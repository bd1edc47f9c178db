//! obj-mesh: Wavefront OBJ loader for the renderer
//!
//! Reads `v`, `vt` and `f` directives and produces render-ready tables:
//!
//! | Table | Row | Notes |
//! |-------|-----|-------|
//! | vertices | `[x, y, z, 1, 1, 1]` (f64) | last three columns reserved for colour |
//! | triangles | `[i32; 3]` | 0-based vertex indices |
//! | tex_coords | `[u, 1 - v]` (f64) | empty unless textured |
//! | texture_map | `[i32; 3]` per triangle | `-1` for missing corners, all `-1` unless textured |
//!
//! Quads are split into two triangles by fanning from their first vertex.
//! Normals, materials, groups and relative (negative) indices are not
//! supported; those directives are ignored.
//!
//! Parsing is a pure function of the input and the [`ParseOptions`]: there is
//! no global state, so separate files can be loaded on separate threads.
//!
//! # Usage
//!
//! ```
//! use obj_mesh::parse_obj_str;
//!
//! let mesh = parse_obj_str("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n").unwrap();
//! assert_eq!(mesh.triangles(), &[[0, 1, 2], [0, 2, 3]]);
//! assert!(!mesh.is_textured());
//! ```

mod error;
mod mesh;
mod options;
mod parser;
mod triangulate;

pub use error::{IndexKind, ObjError, ObjResult};
pub use mesh::{
    flip_v, ObjMesh, TexCoordRow, TriangleRow, VertexRow, NO_TEXTURE, VERTEX_ATTRIBUTE_DEFAULT,
};
pub use options::{FaceArityPolicy, ParseOptions};
pub use triangulate::{triangulate_face, TrianglePair};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load an OBJ file with default options
pub fn load_obj(path: &Path) -> ObjResult<ObjMesh> {
    load_obj_with(path, &ParseOptions::default())
}

/// Load an OBJ file.
///
/// The file is closed before this returns, whether or not parsing succeeded.
pub fn load_obj_with(path: &Path, options: &ParseOptions) -> ObjResult<ObjMesh> {
    let file = File::open(path).map_err(|source| ObjError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Loading OBJ {:?}", path);
    parse_obj_with(BufReader::new(file), options)
}

/// Parse OBJ text from any buffered reader with default options
pub fn parse_obj<R: BufRead>(reader: R) -> ObjResult<ObjMesh> {
    parse_obj_with(reader, &ParseOptions::default())
}

pub fn parse_obj_with<R: BufRead>(reader: R, options: &ParseOptions) -> ObjResult<ObjMesh> {
    let mesh = parser::parse_lines(reader, options)?.finalize();

    if options.validate_indices {
        mesh.validate()?;
    }

    tracing::debug!(
        "Parsed OBJ mesh: {} vertices, {} uvs, {} triangles, textured={}, skipped_faces={}",
        mesh.vertex_count(),
        mesh.tex_coord_count(),
        mesh.triangle_count(),
        mesh.is_textured(),
        mesh.skipped_faces()
    );

    Ok(mesh)
}

/// Parse OBJ text held in memory with default options
pub fn parse_obj_str(source: &str) -> ObjResult<ObjMesh> {
    parse_obj(source.as_bytes())
}
