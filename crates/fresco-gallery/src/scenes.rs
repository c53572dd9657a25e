//! The two gallery scenes, reproduced from the course exercises fresco grew
//! out of: a flat-color house front under a sun, and a single Archimedean
//! spiral.

use fresco_geom::coords::{Rect, Vec2};
use fresco_geom::paint::Color;
use fresco_geom::scene::{DrawList, ZIndex};

// Layer assignments, back to front.
const BACKDROP: ZIndex = ZIndex::new(0);
const BUILDING: ZIndex = ZIndex::new(1);
const DETAIL: ZIndex = ZIndex::new(2);
const TRIM: ZIndex = ZIndex::new(3);

/// Fan resolution used for the sun and the door knob.
const CIRCLE_SEGMENTS: u32 = 100;

// Spiral sampling, tuned for visual effect rather than derived.
const SPIRAL_POINTS: u32 = 500;
const SPIRAL_GROWTH: f32 = 0.02;
const SPIRAL_TURNS: f32 = 5.0;

/// House front under a sun: sky and grass backdrops, the building with roof
/// and door, and two circles (sun, door knob).
pub fn house() -> DrawList {
    let mut list = DrawList::new();

    // Backdrop: sky over grass, split at the horizon (y = 0).
    list.push_rect(
        BACKDROP,
        Rect::from_corners(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 1.0)),
        Color::new(0.0, 0.7, 1.0),
    );
    list.push_rect(
        BACKDROP,
        Rect::from_corners(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 0.0)),
        Color::new(0.7, 1.0, 0.1),
    );

    // Middle layer: building body, roof, and the sun.
    list.push_rect(
        BUILDING,
        Rect::from_corners(Vec2::new(-0.3, -0.3), Vec2::new(0.3, 0.3)),
        Color::new(0.6, 0.2, 0.6),
    );
    list.push_triangle(
        BUILDING,
        [Vec2::new(-0.35, 0.3), Vec2::new(0.35, 0.3), Vec2::new(0.0, 0.6)],
        Color::new(1.0, 0.0, 0.0),
    );
    list.push_circle(
        BUILDING,
        Vec2::new(-0.7, 0.7),
        0.15,
        CIRCLE_SEGMENTS,
        Color::new(1.0, 1.0, 0.0),
    );

    // Door, then its knob on top.
    list.push_rect(
        DETAIL,
        Rect::from_corners(Vec2::new(-0.08, -0.3), Vec2::new(0.08, 0.05)),
        Color::new(0.6, 0.4, 0.2),
    );
    list.push_circle(
        TRIM,
        Vec2::new(0.05, -0.1),
        0.015,
        CIRCLE_SEGMENTS,
        Color::new(1.0, 1.0, 0.3),
    );

    list
}

/// A single Archimedean spiral winding out from the viewport center.
pub fn spiral() -> DrawList {
    let mut list = DrawList::new();
    list.push_spiral(
        BACKDROP,
        SPIRAL_POINTS,
        SPIRAL_GROWTH,
        SPIRAL_TURNS,
        Color::new(0.2, 0.8, 1.0),
    );
    list
}
