//! Host list capability
//!
//! The overscroll controller never owns rendering or layout. It talks to the
//! host scrollable list through [`ListControl`], which exposes the visible
//! range, child measurements and a way to reposition the list.

/// Capability implemented by a host scrollable list.
///
/// Positions are adapter positions; slots are indices into the currently
/// attached child views (slot 0 is the topmost visible child).
pub trait ListControl {
    /// Adapter position of the first visible item
    fn first_visible_position(&self) -> usize;

    /// Adapter position of the last visible item
    fn last_visible_position(&self) -> usize;

    /// Total number of adapter items, or `None` when no adapter is attached
    fn item_count(&self) -> Option<usize>;

    /// Number of child views currently laid out
    fn child_count(&self) -> usize;

    /// Rendered height of the child view at `slot`, if one exists
    fn child_height(&self, slot: usize) -> Option<f32>;

    /// Move the list's visual position to `offset` pixels (0 is rest)
    fn scroll_to(&mut self, offset: i32);

    /// Display density used to convert logical units into pixels
    fn density(&self) -> f32 {
        1.0
    }

    /// Check if the first adapter item is on screen
    fn is_at_top(&self) -> bool {
        matches!(self.item_count(), Some(count) if count > 0) && self.first_visible_position() == 0
    }

    /// Check if the last adapter item is on screen
    fn is_at_bottom(&self) -> bool {
        match self.item_count() {
            Some(count) if count > 0 => self.last_visible_position() == count - 1,
            _ => false,
        }
    }

    /// Check if either edge item is on screen, which makes a pull trackable
    fn is_at_edge(&self) -> bool {
        self.is_at_top() || self.is_at_bottom()
    }

    /// Height of the topmost child view
    fn first_child_height(&self) -> Option<f32> {
        self.child_height(0)
    }

    /// Height of the bottommost child view
    fn last_child_height(&self) -> Option<f32> {
        let slot = self.child_count().checked_sub(1)?;
        self.child_height(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Window {
        first: usize,
        last: usize,
        count: Option<usize>,
        heights: Vec<f32>,
        offset: i32,
    }

    impl ListControl for Window {
        fn first_visible_position(&self) -> usize {
            self.first
        }

        fn last_visible_position(&self) -> usize {
            self.last
        }

        fn item_count(&self) -> Option<usize> {
            self.count
        }

        fn child_count(&self) -> usize {
            self.heights.len()
        }

        fn child_height(&self, slot: usize) -> Option<f32> {
            self.heights.get(slot).copied()
        }

        fn scroll_to(&mut self, offset: i32) {
            self.offset = offset;
        }
    }

    fn window(first: usize, last: usize, count: Option<usize>) -> Window {
        Window {
            first,
            last,
            count,
            heights: vec![40.0, 50.0, 60.0],
            offset: 0,
        }
    }

    #[test]
    fn test_edge_detection() {
        assert!(window(0, 2, Some(10)).is_at_top());
        assert!(!window(0, 2, Some(10)).is_at_bottom());
        assert!(window(7, 9, Some(10)).is_at_bottom());
        assert!(!window(3, 5, Some(10)).is_at_edge());
        assert!(window(0, 2, Some(3)).is_at_edge());
    }

    #[test]
    fn test_missing_adapter_is_never_at_edge() {
        assert!(!window(0, 0, None).is_at_edge());
        assert!(!window(0, 0, Some(0)).is_at_edge());
    }

    #[test]
    fn test_edge_child_heights() {
        let mut list = window(0, 2, Some(3));
        assert_eq!(list.first_child_height(), Some(40.0));
        assert_eq!(list.last_child_height(), Some(60.0));

        list.heights.clear();
        assert_eq!(list.first_child_height(), None);
        assert_eq!(list.last_child_height(), None);
    }

    #[test]
    fn test_default_density() {
        let mut list = window(0, 2, Some(3));
        assert_eq!(list.density(), 1.0);
        list.scroll_to(-12);
        assert_eq!(list.offset, -12);
    }
}
