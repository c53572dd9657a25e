//! Fill colors for scene shapes.
//!
//! Every supported shape is an opaque flat fill, so paint is just a color.
//! New paint sources (gradients, patterns) would grow into their own types
//! here without touching the scene or tessellation layers.

mod color;

pub use color::Color;
