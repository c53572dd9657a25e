//! Fresco geometry crate.
//!
//! This crate turns declarative 2D scene descriptions into upload-ready
//! vertex batches. It stops at the upload boundary: the rendering harness
//! owns buffers, shaders, and the frame loop.

pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod tess;
