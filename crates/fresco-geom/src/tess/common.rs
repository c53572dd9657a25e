//! Shared vertex, topology, and batch types used by all shape tessellators.

use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

// ── vertices ──────────────────────────────────────────────────────────────

/// 2-component position vertex (8 bytes), matching a `vec2` attribute.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Pos2 {
    pub pos: [f32; 2],
}

/// 3-component position vertex (12 bytes), matching a `vec3` attribute.
///
/// Planar shapes that target a 3-component format (the spiral strip) emit
/// `z = 0`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Pos3 {
    pub pos: [f32; 3],
}

// ── topology ──────────────────────────────────────────────────────────────

/// Draw topology the harness should use for a batch.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Topology {
    /// Every 3 vertices form an independent triangle.
    TriangleList,
    /// The first vertex is the shared pivot; each subsequent pair closes a
    /// triangle against it.
    TriangleFan,
    /// Consecutive vertices are joined by line segments, without a closing
    /// segment back to the start.
    LineStrip,
}

impl Topology {
    /// Short name for logs and batch reports.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Topology::TriangleList => "triangle-list",
            Topology::TriangleFan => "triangle-fan",
            Topology::LineStrip => "line-strip",
        }
    }
}

// ── batch ─────────────────────────────────────────────────────────────────

/// Vertex payload of a batch, one variant per vertex format.
#[derive(Debug, Clone, PartialEq)]
pub enum VertexData {
    Pos2(Vec<Pos2>),
    Pos3(Vec<Pos3>),
}

/// One tessellated draw command: everything the upload step needs.
///
/// The harness is expected to size a GPU buffer from `as_bytes().len()`,
/// upload once, and issue one draw call of `vertex_count()` vertices with
/// `topology()` and the flat `color()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    shape: &'static str,
    color: Color,
    topology: Topology,
    vertices: VertexData,
}

impl Batch {
    pub(super) fn new(
        shape: &'static str,
        color: Color,
        topology: Topology,
        vertices: VertexData,
    ) -> Self {
        Self { shape, color, topology, vertices }
    }

    /// Short name of the shape this batch came from.
    #[inline]
    pub fn shape(&self) -> &'static str {
        self.shape
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn vertices(&self) -> &VertexData {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        match &self.vertices {
            VertexData::Pos2(v) => v.len(),
            VertexData::Pos3(v) => v.len(),
        }
    }

    /// Size in bytes of one vertex.
    pub fn stride(&self) -> usize {
        match &self.vertices {
            VertexData::Pos2(_) => std::mem::size_of::<Pos2>(),
            VertexData::Pos3(_) => std::mem::size_of::<Pos3>(),
        }
    }

    /// Raw byte view of the vertex data, ready for buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.vertices {
            VertexData::Pos2(v) => bytemuck::cast_slice(v),
            VertexData::Pos3(v) => bytemuck::cast_slice(v),
        }
    }
}
