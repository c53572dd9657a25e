use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a scene.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; the sort only
///   reruns after the list changes
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn triangle_at(x: f32) -> [Vec2; 3] {
        [Vec2::new(x, 0.0), Vec2::new(x + 0.1, 0.0), Vec2::new(x, 0.1)]
    }

    fn paint_order_xs(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Triangle(t) => t.corners[0].x,
                _ => panic!("test list only holds triangles"),
            })
            .collect()
    }

    #[test]
    fn paint_order_sorts_by_z() {
        let mut list = DrawList::new();
        list.push_triangle(ZIndex::new(2), triangle_at(2.0), Color::black());
        list.push_triangle(ZIndex::new(0), triangle_at(0.0), Color::black());
        list.push_triangle(ZIndex::new(1), triangle_at(1.0), Color::black());

        assert_eq!(paint_order_xs(&mut list), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn equal_z_preserves_insertion_order() {
        let mut list = DrawList::new();
        list.push_triangle(ZIndex::new(0), triangle_at(0.0), Color::black());
        list.push_triangle(ZIndex::new(0), triangle_at(1.0), Color::black());
        list.push_triangle(ZIndex::new(0), triangle_at(2.0), Color::black());

        assert_eq!(paint_order_xs(&mut list), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn push_after_iteration_resorts() {
        let mut list = DrawList::new();
        list.push_triangle(ZIndex::new(1), triangle_at(1.0), Color::black());
        assert_eq!(paint_order_xs(&mut list), vec![1.0]);

        list.push_triangle(ZIndex::new(0), triangle_at(0.0), Color::black());
        assert_eq!(paint_order_xs(&mut list), vec![0.0, 1.0]);
    }

    #[test]
    fn clear_resets_insertion_order() {
        let mut list = DrawList::new();
        list.push_triangle(ZIndex::new(0), triangle_at(0.0), Color::black());
        list.clear();
        assert!(list.is_empty());

        list.push_triangle(ZIndex::new(0), triangle_at(5.0), Color::black());
        assert_eq!(list.items()[0].key.order, 0);
    }
}
