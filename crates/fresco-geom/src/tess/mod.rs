//! Tessellation subsystem.
//!
//! Tessellators consume `scene` draw streams and produce upload-ready vertex
//! batches. Each shape owns its tessellator under `tess::*`; shared vertex,
//! topology, and batch types live in `tess::common`.
//!
//! Convention:
//! - output vertices are in normalized device coordinates
//! - a batch's vertex order encodes its draw topology: fan order for
//!   circles, strip order for the spiral, triangle-list order otherwise

mod common;

pub mod circle;
pub mod rect;
pub mod spiral;
pub mod triangle;

pub use common::{Batch, Pos2, Pos3, Topology, VertexData};

use crate::error::GeomError;
use crate::scene::{DrawCmd, DrawList};

/// Tessellates a single draw command.
pub fn tessellate_cmd(cmd: &DrawCmd) -> Result<Batch, GeomError> {
    match cmd {
        DrawCmd::Rect(c) => rect::tessellate(c),
        DrawCmd::Triangle(c) => triangle::tessellate(c),
        DrawCmd::Circle(c) => circle::tessellate(c),
        DrawCmd::Spiral(c) => spiral::tessellate(c),
    }
}

/// Tessellates every command in `list`, in paint order (back-to-front).
///
/// Fails on the first invalid command: a scene is uploaded whole or not at
/// all, so partial output would only hide the problem.
pub fn tessellate_list(list: &mut DrawList) -> Result<Vec<Batch>, GeomError> {
    let mut batches = Vec::with_capacity(list.len());

    for item in list.iter_in_paint_order() {
        batches.push(tessellate_cmd(&item.cmd)?);
    }

    log::debug!(
        "tessellated {} batches, {} vertices total",
        batches.len(),
        batches.iter().map(Batch::vertex_count).sum::<usize>()
    );

    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;
    use crate::scene::ZIndex;

    #[test]
    fn list_tessellates_in_paint_order() {
        let mut list = DrawList::new();
        list.push_circle(ZIndex::new(1), Vec2::zero(), 0.5, 8, Color::black());
        list.push_rect(ZIndex::new(0), Rect::new(-1.0, -1.0, 2.0, 2.0), Color::black());

        let batches = tessellate_list(&mut list).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].shape(), "rect");
        assert_eq!(batches[1].shape(), "circle");
    }

    #[test]
    fn list_fails_on_first_invalid_command() {
        let mut list = DrawList::new();
        list.push_rect(ZIndex::new(0), Rect::new(-1.0, -1.0, 2.0, 2.0), Color::black());
        list.push_circle(ZIndex::new(1), Vec2::zero(), 0.5, 2, Color::black());

        assert!(tessellate_list(&mut list).is_err());
    }

    #[test]
    fn empty_list_yields_no_batches() {
        let mut list = DrawList::new();
        assert!(tessellate_list(&mut list).unwrap().is_empty());
    }
}
