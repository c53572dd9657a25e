use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Circle draw payload.
///
/// `segments` is the perimeter resolution of the triangle fan the circle
/// tessellates into; it must be at least 3 by tessellation time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub segments: u32,
    pub color: Color,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, segments: u32, color: Color) -> Self {
        Self { center, radius, segments, color }
    }
}

impl DrawList {
    /// Records a flat-color circle.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        segments: u32,
        color: Color,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, segments, color)));
    }
}
