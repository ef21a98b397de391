//! The widget trait.

use std::sync::Arc;

use crate::{
    Result, Theme, dirty, focus,
    app::AppHandle,
    geom::Rect,
    state::{WidgetId, WidgetName},
    surface::Surface,
};

/// Per-frame information handed to every widget during a draw pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawContext {
    /// The widget holding input focus, if any.
    pub focused: Option<WidgetId>,
}

impl DrawContext {
    /// Does `id` hold focus in this frame?
    pub fn is_focused(&self, id: WidgetId) -> bool {
        self.focused == Some(id)
    }
}

/// The capability set shared by leaves, panes and layouts. Because panes and
/// layouts implement the same trait as leaves, a layout can sit inside a pane
/// and trees nest to any depth.
///
/// Mutable widget state lives behind interior locks, so every method takes
/// `&self` and widgets may be updated from any thread.
#[allow(unused_variables)]
pub trait Widget: Send + Sync {
    /// The widget's unique ID.
    fn id(&self) -> WidgetId;

    /// A name for debugging and dumps.
    fn name(&self) -> WidgetName;

    /// The rectangle last assigned by the parent.
    fn rect(&self) -> Rect;

    /// Assign a rectangle. Containers push the change down to their children
    /// before returning.
    fn set_rect(&self, rect: Rect);

    /// Draw onto the surface. Implementations should skip non-drawable
    /// rectangles. The default draws nothing.
    fn draw(&self, surface: &mut dyn Surface, ctx: &DrawContext) -> Result<()> {
        Ok(())
    }

    /// Is this widget shown? Hidden widgets draw nothing and nothing inside
    /// them takes focus. The default is `true`.
    fn is_visible(&self) -> bool {
        true
    }

    /// Can this widget itself take input focus? The default is `false`.
    fn accept_focus(&self) -> bool {
        false
    }

    /// Call a closure on each child. The default assumes no children.
    fn children(&self, f: &mut dyn FnMut(&dyn Widget)) {}

    /// Apply a theme to this widget and its subtree.
    fn apply_theme(&self, theme: &Theme) {
        self.children(&mut |c| c.apply_theme(theme));
    }

    /// Attach this subtree to an application context.
    fn attach(&self, app: &AppHandle) {
        self.children(&mut |c| c.attach(app));
    }

    /// Does this subtree contain a widget that accepts focus?
    fn has_focusable_descendant(&self) -> bool {
        focus::has_focusable(self)
    }

    /// Does this subtree contain the focused widget?
    fn contains_focus(&self, focused: Option<WidgetId>) -> bool {
        focus::contains_focus(self, focused)
    }

    /// Does this subtree need a repaint? Leaves report their own dirty bit;
    /// the default derives the answer from the children.
    fn is_dirty(&self) -> bool {
        dirty::has_dirty_descendants(self)
    }

    /// Clear every dirty bit in this subtree.
    fn clear_dirty_flags(&self) {
        dirty::clear_all_dirty_flags(self);
    }
}

/// A shared widget is a widget. This lets a caller keep a handle to a nested
/// layout after handing it to a pane, and keep inserting into it.
impl<W: Widget + ?Sized> Widget for Arc<W> {
    fn id(&self) -> WidgetId {
        (**self).id()
    }

    fn name(&self) -> WidgetName {
        (**self).name()
    }

    fn rect(&self) -> Rect {
        (**self).rect()
    }

    fn set_rect(&self, rect: Rect) {
        (**self).set_rect(rect);
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &DrawContext) -> Result<()> {
        (**self).draw(surface, ctx)
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn accept_focus(&self) -> bool {
        (**self).accept_focus()
    }

    fn children(&self, f: &mut dyn FnMut(&dyn Widget)) {
        (**self).children(f);
    }

    fn apply_theme(&self, theme: &Theme) {
        (**self).apply_theme(theme);
    }

    fn attach(&self, app: &AppHandle) {
        (**self).attach(app);
    }

    fn has_focusable_descendant(&self) -> bool {
        (**self).has_focusable_descendant()
    }

    fn contains_focus(&self, focused: Option<WidgetId>) -> bool {
        (**self).contains_focus(focused)
    }

    fn is_dirty(&self) -> bool {
        (**self).is_dirty()
    }

    fn clear_dirty_flags(&self) {
        (**self).clear_dirty_flags();
    }
}
