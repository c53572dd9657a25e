//! Circle tessellation (triangle fan).

use std::f32::consts::PI;

use crate::coords::Vec2;
use crate::error::GeomError;
use crate::scene::shapes::circle::CircleCmd;

use super::common::{Batch, Pos2, Topology, VertexData};

/// Fan-orders a circle: the center first, then `segments + 1` perimeter
/// samples at angles evenly spaced over a full turn.
///
/// Perimeter sample `i` sits at `theta = 2*pi*i/segments`. The last sample is
/// a copy of the first, so the fan closes on the exact starting position
/// rather than leaving a trig-rounding gap at the seam.
pub fn fan_vertices(center: Vec2, radius: f32, segments: u32) -> Result<Vec<Pos2>, GeomError> {
    if !center.is_finite() {
        return Err(GeomError::NonFinite { shape: "circle" });
    }
    if !(radius > 0.0 && radius.is_finite()) {
        return Err(GeomError::InvalidRadius { radius });
    }
    if segments < 3 {
        return Err(GeomError::TooFewSegments { segments });
    }

    let mut verts = Vec::with_capacity(segments as usize + 2);
    verts.push(Pos2 { pos: [center.x, center.y] });

    for i in 0..segments {
        let theta = 2.0 * PI * i as f32 / segments as f32;
        verts.push(Pos2 {
            pos: [center.x + radius * theta.cos(), center.y + radius * theta.sin()],
        });
    }

    // Close the fan on the exact starting sample.
    let seam = verts[1];
    verts.push(seam);

    Ok(verts)
}

/// Tessellates a circle command into a `TriangleFan` batch.
pub fn tessellate(cmd: &CircleCmd) -> Result<Batch, GeomError> {
    let verts = fan_vertices(cmd.center, cmd.radius, cmd.segments)?;
    Ok(Batch::new("circle", cmd.color, Topology::TriangleFan, VertexData::Pos2(verts)))
}
