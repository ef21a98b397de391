//! Redraw propagation.
//!
//! Only leaves own a dirty bit. A pane or layout is dirty exactly when one of
//! its children is, so there is never a cached parent flag to fall out of sync
//! with the leaves beneath it. The price is a walk of the tree per frame.
//!
//! `clear_all_dirty_flags` must only run once a draw pass has consumed the
//! current state. Clearing before drawing loses a repaint.

use crate::widget::Widget;

/// Is any child of `w` dirty? Children answer recursively through
/// [`Widget::is_dirty`]. Stops at the first dirty child.
pub fn has_dirty_descendants<W: Widget + ?Sized>(w: &W) -> bool {
    let mut dirty = false;
    w.children(&mut |c| {
        if !dirty {
            dirty = c.is_dirty();
        }
    });
    dirty
}

/// Clear the dirty bit of every widget under `w`.
pub fn clear_all_dirty_flags<W: Widget + ?Sized>(w: &W) {
    w.children(&mut |c| c.clear_dirty_flags());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Layout, Pane, Size, geom::Rect, widgets::Text};

    #[test]
    fn round_trip() {
        let l = Layout::row();
        l.insert(Pane::new(Text::new("a")), Size::Weight(1)).unwrap();
        l.insert(Pane::new(Text::new("b")), Size::Weight(1)).unwrap();
        l.set_rect(Rect::new(0, 0, 20, 5));
        assert!(has_dirty_descendants(&l));

        clear_all_dirty_flags(&l);
        assert!(!has_dirty_descendants(&l));
        assert!(!l.is_dirty());

        l.pane_by_slot(1)
            .unwrap()
            .child()
            .set_rect(Rect::new(0, 0, 1, 1));
        assert!(has_dirty_descendants(&l));
    }

    #[test]
    fn empty_tree_is_clean() {
        let l = Layout::column();
        assert!(!has_dirty_descendants(&l));
        clear_all_dirty_flags(&l);
        assert!(!l.is_dirty());
    }
}
