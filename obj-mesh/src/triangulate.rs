//! Face triangulation
//!
//! Triangles pass through unchanged. Quads are fanned from their first
//! vertex into `(0, 1, 2)` and `(0, 2, 3)`, which assumes a convex, planar
//! quad. Concave or twisted quads come out wrong; that is a known
//! limitation of the fan split.

use smallvec::SmallVec;

/// One emitted triangle: vertex indices and the matching texture indices
pub type TrianglePair = ([i32; 3], [i32; 3]);

/// Face corner selections for the fan split of a quad
const QUAD_FAN: [[usize; 3]; 2] = [[0, 1, 2], [0, 2, 3]];

/// Split one face into triangles.
///
/// `vertices` and `tex_coords` are the face's index-aligned reference lists.
/// Returns `None` for faces that are neither triangles nor quads.
pub fn triangulate_face(
    vertices: &[i32],
    tex_coords: &[i32],
) -> Option<SmallVec<[TrianglePair; 2]>> {
    debug_assert_eq!(vertices.len(), tex_coords.len());

    let pick = |list: &[i32], corners: [usize; 3]| corners.map(|c| list[c]);

    match vertices.len() {
        3 => {
            let corners = [0, 1, 2];
            Some(smallvec::smallvec![(
                pick(vertices, corners),
                pick(tex_coords, corners)
            )])
        }
        4 => Some(
            QUAD_FAN
                .iter()
                .map(|&corners| (pick(vertices, corners), pick(tex_coords, corners)))
                .collect(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_passthrough() {
        let tris = triangulate_face(&[2, 0, 1], &[5, -1, 4]).unwrap();
        assert_eq!(tris.len(), 1);
        assert_eq!(tris[0], ([2, 0, 1], [5, -1, 4]));
    }

    #[test]
    fn test_quad_fan() {
        let tris = triangulate_face(&[10, 11, 12, 13], &[20, 21, 22, 23]).unwrap();
        assert_eq!(
            tris.as_slice(),
            &[([10, 11, 12], [20, 21, 22]), ([10, 12, 13], [20, 22, 23])]
        );
    }

    #[test]
    fn test_quad_without_texture() {
        let tris = triangulate_face(&[0, 1, 2, 3], &[-1; 4]).unwrap();
        assert_eq!(tris[0].1, [-1, -1, -1]);
        assert_eq!(tris[1].1, [-1, -1, -1]);
    }

    #[test]
    fn test_unsupported_arity() {
        assert!(triangulate_face(&[], &[]).is_none());
        assert!(triangulate_face(&[0, 1], &[-1, -1]).is_none());
        assert!(triangulate_face(&[0, 1, 2, 3, 4], &[-1; 5]).is_none());
    }
}
