//! Quick-jump navigation indices.
//!
//! The panes directly under the root layout that hold something focusable are
//! numbered 1 to 10 in slot order, so that a single digit key can jump to
//! each. Indices are recomputed when the root's membership changes or when a
//! root is attached, never on pure geometry changes.

use std::sync::Arc;

use tracing::debug;

use crate::{layout::SLOTS, pane::Pane, widget::Widget};

/// The largest navigation index.
pub const MAX_INDEX: usize = SLOTS;

/// Assign navigation indices to a layout's panes, given in slot order.
///
/// On the root layout, each pane that has a focusable descendant receives the
/// next index starting from 1; all others receive 0. Once ten indices are
/// handed out, remaining panes receive 0. On a non-root layout every pane is
/// reset to 0, since indices are only meaningful at the root.
pub fn assign(panes: &[Option<Arc<Pane>>; SLOTS], is_root: bool) {
    let mut next: usize = 1;
    for pane in panes.iter().flatten() {
        let mut idx = 0;
        if is_root && next <= MAX_INDEX && pane.has_focusable_descendant() {
            idx = next;
            next += 1;
        }
        pane.set_nav_index(u8::try_from(idx).unwrap_or(0));
    }
    debug!(is_root, assigned = next - 1, "navigation indices assigned");
}
