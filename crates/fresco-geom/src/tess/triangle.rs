//! Raw triangle pass-through.

use crate::coords::Vec2;
use crate::error::GeomError;
use crate::scene::shapes::triangle::TriangleCmd;

use super::common::{Batch, Pos2, Topology, VertexData};

/// A triangle is already its own tessellation; corners are emitted in order.
///
/// Zero-area triangles are allowed — the harness draws nothing visible, which
/// is harmless. Non-finite corners would poison a whole buffer upload and are
/// rejected.
pub fn list_vertices(corners: [Vec2; 3]) -> Result<Vec<Pos2>, GeomError> {
    if corners.iter().any(|c| !c.is_finite()) {
        return Err(GeomError::NonFinite { shape: "triangle" });
    }

    Ok(corners.iter().map(|c| Pos2 { pos: [c.x, c.y] }).collect())
}

/// Tessellates a triangle command into a `TriangleList` batch.
pub fn tessellate(cmd: &TriangleCmd) -> Result<Batch, GeomError> {
    let verts = list_vertices(cmd.corners)?;
    Ok(Batch::new("triangle", cmd.color, Topology::TriangleList, VertexData::Pos2(verts)))
}
