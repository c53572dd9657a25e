use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Raw triangle draw payload.
///
/// Corner order is preserved through tessellation; counter-clockwise corners
/// give a front-facing triangle under the usual winding convention.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleCmd {
    pub corners: [Vec2; 3],
    pub color: Color,
}

impl TriangleCmd {
    #[inline]
    pub fn new(corners: [Vec2; 3], color: Color) -> Self {
        Self { corners, color }
    }
}

impl DrawList {
    /// Records a flat-color triangle.
    #[inline]
    pub fn push_triangle(&mut self, z: ZIndex, corners: [Vec2; 3], color: Color) {
        self.push(z, DrawCmd::Triangle(TriangleCmd::new(corners, color)));
    }
}
