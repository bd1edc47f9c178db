//! OBJ line classification
//!
//! Reads the source once, top to bottom. Only `v`, `vt` and `f` are
//! interpreted; every other directive is skipped.

use std::io::BufRead;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::{ObjError, ObjResult};
use crate::mesh::{Accumulator, NO_TEXTURE};
use crate::options::{FaceArityPolicy, ParseOptions};
use crate::triangulate::triangulate_face;

/// Per-face reference lists. Faces are triangles or quads in practice.
type FaceRefs = SmallVec<[i32; 4]>;

/// Parse every line of `reader` into raw mesh records
pub(crate) fn parse_lines<R: BufRead>(
    reader: R,
    options: &ParseOptions,
) -> ObjResult<Accumulator> {
    let mut acc = Accumulator::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| ObjError::Read {
            line: line_no,
            source,
        })?;
        parse_line(&line, line_no, options, &mut acc)?;
    }

    Ok(acc)
}

fn parse_line(
    line: &str,
    line_no: usize,
    options: &ParseOptions,
    acc: &mut Accumulator,
) -> ObjResult<()> {
    let mut tokens = line.split_whitespace();
    let Some(directive) = tokens.next() else {
        return Ok(());
    };

    match directive {
        "v" => {
            let [x, y, z] = parse_components(tokens, line_no, "v")?;
            acc.push_vertex([x, y, z]);
        }
        "vt" => {
            let uv = parse_components(tokens, line_no, "vt")?;
            acc.push_tex_coord(uv);
        }
        "f" => parse_face(tokens, line_no, options, acc)?,
        other => tracing::trace!("Line {}: ignoring `{}`", line_no, other),
    }

    Ok(())
}

/// Parse the first `N` tokens as floats; extra tokens are ignored
fn parse_components<'a, const N: usize>(
    tokens: impl Iterator<Item = &'a str>,
    line_no: usize,
    directive: &'static str,
) -> ObjResult<[f64; N]> {
    let mut out = [0.0; N];
    let mut found = 0;
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = parse_number(token, line_no, directive)?;
        found += 1;
    }

    if found < N {
        return Err(ObjError::MissingComponent {
            line: line_no,
            directive,
            expected: N,
            found,
        });
    }
    Ok(out)
}

fn parse_face<'a>(
    tokens: impl Iterator<Item = &'a str>,
    line_no: usize,
    options: &ParseOptions,
    acc: &mut Accumulator,
) -> ObjResult<()> {
    let mut vertices = FaceRefs::new();
    let mut tex_coords = FaceRefs::new();

    for token in tokens {
        let (vi, vti) = parse_face_vertex(token, line_no)?;
        vertices.push(vi);
        tex_coords.push(vti);
    }

    match triangulate_face(&vertices, &tex_coords) {
        Some(triangles) => {
            for (triangle, textures) in triangles {
                acc.push_triangle(triangle, textures);
            }
        }
        None => match options.face_arity {
            FaceArityPolicy::Reject => {
                return Err(ObjError::UnsupportedFaceArity {
                    line: line_no,
                    count: vertices.len(),
                });
            }
            FaceArityPolicy::Skip => {
                tracing::warn!(
                    "Line {}: skipping face with {} vertices (not a triangle or quad)",
                    line_no,
                    vertices.len()
                );
                acc.skipped_faces += 1;
            }
        },
    }

    Ok(())
}

/// Parse a face vertex reference: "v", "v/vt", "v/vt/vn", or "v//vn".
///
/// Returns 0-based `(vertex, texture)` indices, with `NO_TEXTURE` when the
/// texture field is absent. The normal field is ignored.
fn parse_face_vertex(token: &str, line_no: usize) -> ObjResult<(i32, i32)> {
    let mut fields = token.split('/');

    let vertex = fields.next().unwrap_or_default();
    if vertex.is_empty() {
        return Err(ObjError::EmptyVertexIndex {
            line: line_no,
            token: token.to_string(),
        });
    }
    let vi = parse_index(vertex, line_no)?;

    let vti = match fields.next() {
        Some(field) if !field.is_empty() => parse_index(field, line_no)?,
        _ => NO_TEXTURE,
    };

    Ok((vi, vti))
}

/// OBJ indices are 1-based; no bounds or sign checks here
fn parse_index(field: &str, line_no: usize) -> ObjResult<i32> {
    let one_based: i32 = parse_number(field, line_no, "f")?;
    one_based
        .checked_sub(1)
        .ok_or_else(|| invalid_number(field, line_no, "f"))
}

fn parse_number<T: FromStr>(token: &str, line_no: usize, directive: &'static str) -> ObjResult<T> {
    token
        .parse()
        .map_err(|_| invalid_number(token, line_no, directive))
}

fn invalid_number(token: &str, line_no: usize, directive: &'static str) -> ObjError {
    ObjError::InvalidNumber {
        line: line_no,
        directive,
        token: token.to_string(),
    }
}
