//! Archimedean spiral tessellation (line strip).

use std::f32::consts::PI;

use crate::error::GeomError;
use crate::scene::shapes::spiral::SpiralCmd;

use super::common::{Batch, Pos3, Topology, VertexData};

/// Samples `r(theta) = growth * theta` at `points` angles evenly spaced over
/// `[0, turns * 2*pi)`, ordered from the origin outward.
///
/// The closing angle `turns * 2*pi` is excluded: the strip stops one step
/// short of the final turn boundary, so the curve does not land back on top
/// of the last turn's start. Vertices are 3-component with `z = 0` for
/// harnesses that feed a `vec3` position attribute.
///
/// `points == 0` is a valid empty request and yields no vertices.
pub fn strip_vertices(points: u32, growth: f32, turns: f32) -> Result<Vec<Pos3>, GeomError> {
    if !(growth > 0.0 && growth.is_finite()) {
        return Err(GeomError::InvalidGrowth { growth });
    }
    if !(turns > 0.0 && turns.is_finite()) {
        return Err(GeomError::InvalidTurns { turns });
    }

    let max_angle = turns * 2.0 * PI;
    let mut verts = Vec::with_capacity(points as usize);

    for i in 0..points {
        let theta = max_angle * i as f32 / points as f32;
        let r = growth * theta;
        verts.push(Pos3 {
            pos: [r * theta.cos(), r * theta.sin(), 0.0],
        });
    }

    Ok(verts)
}

/// Tessellates a spiral command into a `LineStrip` batch.
pub fn tessellate(cmd: &SpiralCmd) -> Result<Batch, GeomError> {
    let verts = strip_vertices(cmd.points, cmd.growth, cmd.turns)?;
    Ok(Batch::new("spiral", cmd.color, Topology::LineStrip, VertexData::Pos3(verts)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    const TOLERANCE: f32 = 1e-5;

    fn radius(v: &Pos3) -> f32 {
        (v.pos[0] * v.pos[0] + v.pos[1] * v.pos[1]).sqrt()
    }

    // ── shape of the output ───────────────────────────────────────────────

    #[test]
    fn vertex_count_matches_points() {
        for points in [1, 4, 500] {
            let verts = strip_vertices(points, 0.02, 5.0).unwrap();
            assert_eq!(verts.len(), points as usize);
        }
    }

    #[test]
    fn first_sample_is_the_origin() {
        // r(0) = 0 regardless of growth and turns.
        for (growth, turns) in [(0.02, 5.0), (1.0, 1.0), (3.5, 0.25)] {
            let verts = strip_vertices(10, growth, turns).unwrap();
            assert_eq!(verts[0].pos, [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn radius_is_monotonically_non_decreasing() {
        let verts = strip_vertices(500, 0.02, 5.0).unwrap();
        for pair in verts.windows(2) {
            assert!(radius(&pair[1]) >= radius(&pair[0]));
        }
    }

    #[test]
    fn z_is_always_zero() {
        let verts = strip_vertices(100, 0.02, 5.0).unwrap();
        assert!(verts.iter().all(|v| v.pos[2] == 0.0));
    }

    #[test]
    fn four_points_one_turn_unit_growth() {
        // theta = 0, pi/2, pi, 3*pi/2 with r = theta; the closing angle 2*pi
        // is excluded.
        let verts = strip_vertices(4, 1.0, 1.0).unwrap();
        assert_eq!(verts.len(), 4);

        let half_pi = std::f32::consts::FRAC_PI_2;
        let expected = [
            [0.0, 0.0],
            [0.0, half_pi],
            [-PI, 0.0],
            [0.0, -3.0 * half_pi],
        ];
        for (v, e) in verts.iter().zip(expected) {
            assert!(
                (v.pos[0] - e[0]).abs() < TOLERANCE && (v.pos[1] - e[1]).abs() < TOLERANCE,
                "expected {e:?}, got {:?}",
                v.pos
            );
        }
    }

    #[test]
    fn zero_points_yields_empty_sequence() {
        assert!(strip_vertices(0, 0.02, 5.0).unwrap().is_empty());
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn rejects_non_positive_growth() {
        assert_eq!(
            strip_vertices(10, 0.0, 5.0).unwrap_err(),
            GeomError::InvalidGrowth { growth: 0.0 }
        );
        assert!(strip_vertices(10, -0.02, 5.0).is_err());
    }

    #[test]
    fn rejects_non_positive_turns() {
        assert_eq!(
            strip_vertices(10, 0.02, 0.0).unwrap_err(),
            GeomError::InvalidTurns { turns: 0.0 }
        );
        assert!(strip_vertices(10, 0.02, -1.0).is_err());
    }

    #[test]
    fn rejects_non_finite_parameters() {
        assert!(strip_vertices(10, f32::NAN, 5.0).is_err());
        assert!(strip_vertices(10, 0.02, f32::INFINITY).is_err());
    }

    // ── batch wrapper ─────────────────────────────────────────────────────

    #[test]
    fn batch_is_a_line_strip() {
        let cmd = SpiralCmd::new(500, 0.02, 5.0, Color::new(0.2, 0.8, 1.0));
        let batch = tessellate(&cmd).unwrap();

        assert_eq!(batch.topology(), Topology::LineStrip);
        assert_eq!(batch.vertex_count(), 500);
        // 3 scalars per vertex, 4 bytes per scalar.
        assert_eq!(batch.as_bytes().len(), 500 * 3 * 4);
    }
}
