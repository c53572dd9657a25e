use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Archimedean spiral draw payload.
///
/// The curve is `r(theta) = growth * theta`, wound `turns` times around the
/// viewport center and sampled at `points` positions. It tessellates into a
/// line strip running from the origin outward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpiralCmd {
    pub points: u32,
    pub growth: f32,
    pub turns: f32,
    pub color: Color,
}

impl SpiralCmd {
    #[inline]
    pub fn new(points: u32, growth: f32, turns: f32, color: Color) -> Self {
        Self { points, growth, turns, color }
    }
}

impl DrawList {
    /// Records a flat-color Archimedean spiral.
    #[inline]
    pub fn push_spiral(
        &mut self,
        z: ZIndex,
        points: u32,
        growth: f32,
        turns: f32,
        color: Color,
    ) {
        self.push(z, DrawCmd::Spiral(SpiralCmd::new(points, growth, turns, color)));
    }
}
