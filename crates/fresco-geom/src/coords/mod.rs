//! Coordinate and geometry types shared by the scene and tessellation layers.
//!
//! Canonical space:
//! - Normalized device coordinates, both axes conventionally in [-1, 1]
//! - Origin at the viewport center
//! - +X right, +Y up
//!
//! The range is a convention, not an invariant; a harness is free to
//! transform or scissor output however it likes.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
