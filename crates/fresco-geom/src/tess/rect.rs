//! Rectangle tessellation (triangle list).

use crate::coords::Rect;
use crate::error::GeomError;
use crate::scene::shapes::rect::RectCmd;

use super::common::{Batch, Pos2, Topology, VertexData};

/// Emits a rectangle as two triangles sharing its diagonal.
///
/// Vertex order with +Y up: (bl, br, tr), (tr, tl, bl) — both
/// counter-clockwise.
pub fn list_vertices(rect: Rect) -> Result<Vec<Pos2>, GeomError> {
    if !rect.is_finite() {
        return Err(GeomError::NonFinite { shape: "rect" });
    }

    let r = rect.normalized();
    if r.is_empty() {
        return Err(GeomError::EmptyRect);
    }

    let lo = r.min();
    let hi = r.max();

    let bl = Pos2 { pos: [lo.x, lo.y] };
    let br = Pos2 { pos: [hi.x, lo.y] };
    let tr = Pos2 { pos: [hi.x, hi.y] };
    let tl = Pos2 { pos: [lo.x, hi.y] };

    Ok(vec![bl, br, tr, tr, tl, bl])
}

/// Tessellates a rectangle command into a `TriangleList` batch.
pub fn tessellate(cmd: &RectCmd) -> Result<Batch, GeomError> {
    let verts = list_vertices(cmd.rect)?;
    Ok(Batch::new("rect", cmd.color, Topology::TriangleList, VertexData::Pos2(verts)))
}
