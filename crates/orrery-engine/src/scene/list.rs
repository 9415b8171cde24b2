use super::{DrawCmd, SortKey, Transform2D, ZIndex};

/// A single draw item: sort key + command + transform.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Local-to-viewport transform in effect when the item was recorded.
    pub transform: Transform2D,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Transforms
///
/// Use [`push_transform`] / [`pop_transform`] to scope commands under a
/// translate/rotate, the way a canvas `save()` / `restore()` pair would.
/// Transforms compose with the current parent.
///
/// ```ignore
/// draw_list.push_transform(Transform2D::translation(center).rotated(angle));
/// // ... push commands in local coordinates ...
/// draw_list.pop_transform();
/// ```
///
/// [`push_transform`]: DrawList::push_transform
/// [`pop_transform`]: DrawList::pop_transform
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Stack of active transforms, each already composed with all parents.
    transform_stack: Vec<Transform2D>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the transform stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.transform_stack.clear();
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

    /// Current effective transform (identity outside any scope).
    #[inline]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack.last().copied().unwrap_or_default()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current transform from the transform stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            transform: self.current_transform(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a transform scope. All draw commands pushed until [`pop_transform`]
    /// are mapped through `transform` (composed with any parent transform).
    ///
    /// Calls must be balanced with [`pop_transform`].
    ///
    /// [`pop_transform`]: DrawList::pop_transform
    #[inline]
    pub fn push_transform(&mut self, transform: Transform2D) {
        let effective = self.current_transform().then_apply(&transform);
        self.transform_stack.push(effective);
    }

    /// Ends the most recent scope started by [`push_transform`].
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_transform`.
    ///
    /// [`push_transform`]: DrawList::push_transform
    #[inline]
    pub fn pop_transform(&mut self) {
        debug_assert!(
            !self.transform_stack.is_empty(),
            "pop_transform called without matching push_transform"
        );
        self.transform_stack.pop();
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices
            .sort_by(|&a, &b| items[a].key.cmp(&items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;

    fn unit() -> Rect {
        Rect::new(0.0, 0.0, 1.0, 1.0)
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex(2), unit(), Color::black());
        list.push_solid_rect(ZIndex(0), unit(), Color::black());
        list.push_solid_rect(ZIndex(2), unit(), Color::black());
        list.push_solid_rect(ZIndex(1), unit(), Color::black());

        let order: Vec<_> = list.iter_in_paint_order().map(|i| i.key.order).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn items_inherit_scoped_transform() {
        let mut list = DrawList::new();
        list.push_transform(Transform2D::translation(Vec2::new(5.0, 5.0)));
        list.push_solid_rect(ZIndex(0), unit(), Color::black());
        list.pop_transform();
        list.push_solid_rect(ZIndex(0), unit(), Color::black());

        let items = list.items();
        assert_eq!(items[0].transform, Transform2D::translation(Vec2::new(5.0, 5.0)));
        assert!(items[1].transform.is_identity());
    }

    #[test]
    fn nested_transforms_compose() {
        let mut list = DrawList::new();
        list.push_transform(Transform2D::translation(Vec2::new(10.0, 0.0)));
        list.push_transform(Transform2D::translation(Vec2::new(0.0, 3.0)));
        let t = list.current_transform();
        assert_eq!(t.apply(Vec2::zero()), Vec2::new(10.0, 3.0));
    }

    #[test]
    fn clear_resets_stack_and_items() {
        let mut list = DrawList::new();
        list.push_transform(Transform2D::rotation(1.0));
        list.push_solid_rect(ZIndex(0), unit(), Color::black());
        list.clear();
        assert!(list.is_empty());
        assert!(list.current_transform().is_identity());
    }
}
