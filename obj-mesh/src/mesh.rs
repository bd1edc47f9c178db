//! Mesh data model and finalization
//!
//! All tables are row-major with a fixed number of columns per row, so they
//! can be viewed as flat slices for upload without copying.

use crate::error::{IndexKind, ObjError, ObjResult};

/// Texture-map sentinel: no texture coordinate for this triangle corner
pub const NO_TEXTURE: i32 = -1;

/// Default value of the three reserved per-vertex attribute columns
pub const VERTEX_ATTRIBUTE_DEFAULT: f64 = 1.0;

/// Vertex row: `[x, y, z, a0, a1, a2]`, the `a*` columns reserved for
/// per-vertex colour data and always initialized to 1
pub type VertexRow = [f64; 6];

/// Texture coordinate row: `[u, v]`
pub type TexCoordRow = [f64; 2];

/// Triangle row: three 0-based indices
pub type TriangleRow = [i32; 3];

/// Raw records collected by the parser, before finalization
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    pub vertices: Vec<VertexRow>,
    pub tex_coords: Vec<TexCoordRow>,
    pub triangles: Vec<TriangleRow>,
    pub texture_map: Vec<TriangleRow>,
    pub skipped_faces: usize,
}

impl Accumulator {
    pub fn push_vertex(&mut self, [x, y, z]: [f64; 3]) {
        let a = VERTEX_ATTRIBUTE_DEFAULT;
        self.vertices.push([x, y, z, a, a, a]);
    }

    pub fn push_tex_coord(&mut self, uv: TexCoordRow) {
        self.tex_coords.push(uv);
    }

    pub fn push_triangle(&mut self, triangle: TriangleRow, textures: TriangleRow) {
        self.triangles.push(triangle);
        self.texture_map.push(textures);
    }

    /// Build the final mesh.
    ///
    /// The mesh counts as textured only if at least one `vt` was declared and
    /// at least one triangle corner references one. Untextured meshes drop
    /// their texture coordinates and keep a texture map of sentinels, so the
    /// map stays aligned with the triangles.
    pub fn finalize(self) -> ObjMesh {
        let Accumulator {
            vertices,
            mut tex_coords,
            triangles,
            texture_map,
            skipped_faces,
        } = self;

        let textured = !tex_coords.is_empty()
            && texture_map.iter().flatten().any(|&t| t != NO_TEXTURE);

        let (tex_coords, texture_map) = if textured {
            for uv in &mut tex_coords {
                uv[1] = flip_v(uv[1]);
            }
            (tex_coords, texture_map)
        } else {
            (Vec::new(), vec![[NO_TEXTURE; 3]; triangles.len()])
        };

        ObjMesh {
            vertices,
            triangles,
            tex_coords,
            texture_map,
            textured,
            skipped_faces,
        }
    }
}

/// Convert an OBJ V coordinate (origin bottom-left) to the top-left origin
/// used by the renderer. Applying it twice returns the input.
#[inline]
pub fn flip_v(v: f64) -> f64 {
    1.0 - v
}

/// A parsed OBJ mesh.
///
/// `triangles` and `texture_map` are always index-aligned. When the mesh is
/// not textured, `tex_coords` is empty and every `texture_map` entry is
/// `NO_TEXTURE`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjMesh {
    vertices: Vec<VertexRow>,
    triangles: Vec<TriangleRow>,
    tex_coords: Vec<TexCoordRow>,
    texture_map: Vec<TriangleRow>,
    textured: bool,
    skipped_faces: usize,
}

impl ObjMesh {
    pub fn vertices(&self) -> &[VertexRow] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[TriangleRow] {
        &self.triangles
    }

    /// Texture coordinates with V already flipped (empty if untextured)
    pub fn tex_coords(&self) -> &[TexCoordRow] {
        &self.tex_coords
    }

    /// Per-triangle texture indices, `NO_TEXTURE` for missing corners
    /// (all `NO_TEXTURE` if untextured)
    pub fn texture_map(&self) -> &[TriangleRow] {
        &self.texture_map
    }

    pub fn is_textured(&self) -> bool {
        self.textured
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn tex_coord_count(&self) -> usize {
        self.tex_coords.len()
    }

    /// Faces dropped because they were neither triangles nor quads
    pub fn skipped_faces(&self) -> usize {
        self.skipped_faces
    }

    /// Vertex table as a flat `numVertices * 6` slice
    pub fn vertex_data(&self) -> &[f64] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Triangle table as a flat `numTriangles * 3` index slice
    pub fn index_data(&self) -> &[i32] {
        bytemuck::cast_slice(&self.triangles)
    }

    pub fn tex_coord_data(&self) -> &[f64] {
        bytemuck::cast_slice(&self.tex_coords)
    }

    pub fn texture_map_data(&self) -> &[i32] {
        bytemuck::cast_slice(&self.texture_map)
    }

    /// Split into `(vertices, triangles, tex_coords, texture_map, textured)`
    #[allow(clippy::type_complexity)]
    pub fn into_parts(
        self,
    ) -> (
        Vec<VertexRow>,
        Vec<TriangleRow>,
        Vec<TexCoordRow>,
        Vec<TriangleRow>,
        bool,
    ) {
        (
            self.vertices,
            self.triangles,
            self.tex_coords,
            self.texture_map,
            self.textured,
        )
    }

    /// Check that every index points into its table.
    ///
    /// The parser keeps indices exactly as written, so a malformed file can
    /// yield negative or too-large indices. Sentinel texture indices are
    /// allowed.
    pub fn validate(&self) -> ObjResult<()> {
        let vertex_count = self.vertices.len();
        let uv_count = self.tex_coords.len();

        for (triangle, (tri, tex)) in self
            .triangles
            .iter()
            .zip(&self.texture_map)
            .enumerate()
        {
            for slot in 0..3 {
                if !in_range(tri[slot], vertex_count) {
                    return Err(ObjError::IndexOutOfRange {
                        triangle,
                        slot,
                        kind: IndexKind::Vertex,
                        index: tri[slot],
                        len: vertex_count,
                    });
                }
                if tex[slot] != NO_TEXTURE && !in_range(tex[slot], uv_count) {
                    return Err(ObjError::IndexOutOfRange {
                        triangle,
                        slot,
                        kind: IndexKind::TexCoord,
                        index: tex[slot],
                        len: uv_count,
                    });
                }
            }
        }
        Ok(())
    }
}

fn in_range(index: i32, len: usize) -> bool {
    usize::try_from(index).is_ok_and(|i| i < len)
}
