//! Focus queries over a widget subtree. These are pure reads, cheap enough to
//! run every frame.

use crate::{
    geom::Point,
    state::WidgetId,
    widget::Widget,
};

/// Does `w` or anything beneath it accept focus?
pub fn has_focusable<W: Widget + ?Sized>(w: &W) -> bool {
    if w.accept_focus() {
        return true;
    }
    let mut found = false;
    w.children(&mut |c| {
        if !found {
            found = c.has_focusable_descendant();
        }
    });
    found
}

/// Is `focused` the widget `w` itself, or somewhere in its subtree? `None`
/// never matches.
pub fn contains_focus<W: Widget + ?Sized>(w: &W, focused: Option<WidgetId>) -> bool {
    let Some(id) = focused else {
        return false;
    };
    if w.id() == id {
        return true;
    }
    let mut found = false;
    w.children(&mut |c| {
        if !found {
            found = c.contains_focus(focused);
        }
    });
    found
}

/// Find the focus target for `w`: `w` itself if it accepts focus, otherwise
/// the first target in child order among children with a focusable
/// descendant. Only when no child has one does a last-resort child, such as a
/// pane holding only labels, take it. Hidden panes are never chosen.
pub fn first_focusable(w: &dyn Widget) -> Option<WidgetId> {
    if !w.is_visible() {
        return None;
    }
    if w.accept_focus() {
        return Some(w.id());
    }
    let mut ret = None;
    w.children(&mut |c| {
        if ret.is_none() && c.has_focusable_descendant() {
            ret = first_focusable(c);
        }
    });
    if ret.is_none() {
        w.children(&mut |c| {
            if ret.is_none() && c.accept_focus() {
                ret = Some(c.id());
            }
        });
    }
    ret
}

/// Is the cell at `p` covered by the focused widget?
pub fn focused_at(root: &dyn Widget, p: Point, focused: Option<WidgetId>) -> bool {
    let Some(id) = focused else {
        return false;
    };
    let mut hit = false;
    visit(root, &mut |w| {
        if w.id() == id {
            hit = w.rect().contains_point(p);
            return true;
        }
        false
    });
    hit
}

/// Pre-order walk that stops once `f` returns true. Returns whether it stopped.
fn visit(w: &dyn Widget, f: &mut dyn FnMut(&dyn Widget) -> bool) -> bool {
    if f(w) {
        return true;
    }
    let mut stop = false;
    w.children(&mut |c| {
        if !stop {
            stop = visit(c, f);
        }
    });
    stop
}
