//! Panes: single-child containers.

use std::{mem, sync::RwLock};

use tracing::trace;

use crate::{
    Result, Theme,
    app::{AppHandle, Command},
    geom::{Frame, Rect},
    state::{WidgetId, WidgetName, read, write},
    surface::Surface,
    widget::{DrawContext, Widget},
};

/// Mutable pane fields, read and written under one lock.
#[derive(Debug)]
struct PaneState {
    /// The pane's outer rectangle.
    rect: Rect,
    /// Draw a one-cell border around the child?
    border: bool,
    /// Optional title drawn into the top border.
    title: Option<String>,
    /// Hidden panes draw nothing and cannot take focus.
    visible: bool,
    /// Border glyph selection.
    theme: Theme,
    /// Our slot in the parent layout, if we are in one.
    slot: Option<usize>,
    /// Quick-jump index. Zero means not navigable.
    nav_index: u8,
    /// The owning application, once attached.
    app: Option<AppHandle>,
}

/// A single-child box. A pane positions its child, optionally draws a border
/// around it, and carries the slot and navigation indices assigned by its
/// parent [`Layout`](crate::Layout). Deeper nesting comes from making the
/// child another layout.
///
/// A pane is itself a focus target only as a last resort: it accepts focus
/// when it is visible and nothing inside it can.
pub struct Pane {
    /// Unique ID.
    id: WidgetId,
    /// The child, exclusively owned.
    child: Box<dyn Widget>,
    /// Guarded mutable fields.
    state: RwLock<PaneState>,
}

impl Pane {
    /// Wrap a widget in a pane with no border.
    pub fn new(child: impl Widget + 'static) -> Self {
        Self {
            id: WidgetId::next(),
            child: Box::new(child),
            state: RwLock::new(PaneState {
                rect: Rect::zero(),
                border: false,
                title: None,
                visible: true,
                theme: Theme::default(),
                slot: None,
                nav_index: 0,
                app: None,
            }),
        }
    }

    /// Build a pane with a border.
    pub fn with_border(self) -> Self {
        write(&self.state).border = true;
        self
    }

    /// Build a pane with a title. Titles are only drawn on bordered panes.
    pub fn with_title(self, title: &str) -> Self {
        write(&self.state).title = Some(title.to_string());
        self
    }

    /// The child widget.
    pub fn child(&self) -> &dyn Widget {
        self.child.as_ref()
    }

    /// Show or hide the pane. Visibility decides whether the pane counts as
    /// navigable, so a change asks the application to reindex. Hiding a pane
    /// that holds focus drops focus.
    pub fn set_visible(&self, visible: bool) {
        if !self.modify(|s| mem::replace(&mut s.visible, visible) != visible) {
            return;
        }
        trace!(pane = %self.id, visible, "visibility");
        if let Some(app) = self.app() {
            app.post(Command::Reindex);
            if !visible {
                app.release_focus_within(self);
            }
        }
    }

    /// Does the pane draw a border?
    pub fn has_border(&self) -> bool {
        read(&self.state).border
    }

    /// Turn the border on or off. The child is re-fitted immediately.
    pub fn set_border(&self, border: bool) {
        if self.modify(|s| mem::replace(&mut s.border, border) != border) {
            self.set_rect(self.rect());
        }
    }

    /// Set or clear the title.
    pub fn set_title(&self, title: Option<&str>) {
        let title = title.map(str::to_string);
        self.modify(|s| {
            if s.title == title {
                return false;
            }
            s.title = title;
            true
        });
    }

    /// The slot this pane occupies in its layout.
    pub fn slot_index(&self) -> Option<usize> {
        read(&self.state).slot
    }

    /// The quick-jump index, or 0 if the pane is not navigable.
    pub fn nav_index(&self) -> u8 {
        read(&self.state).nav_index
    }

    /// Record our position in a layout.
    pub(crate) fn set_slot(&self, slot: Option<usize>) {
        let mut s = write(&self.state);
        s.slot = slot;
        if slot.is_none() {
            s.nav_index = 0;
        }
    }

    /// Assign a quick-jump index. Only the navigation indexer calls this.
    pub(crate) fn set_nav_index(&self, idx: u8) {
        write(&self.state).nav_index = idx;
    }

    /// The owning application, if attached.
    fn app(&self) -> Option<AppHandle> {
        read(&self.state).app.clone()
    }

    /// Apply a change to the pane state. If `f` reports a change, a redraw is
    /// requested from the owning application. Returns whether anything
    /// changed.
    fn modify(&self, f: impl FnOnce(&mut PaneState) -> bool) -> bool {
        let app = {
            let mut s = write(&self.state);
            if !f(&mut s) {
                return false;
            }
            s.app.clone()
        };
        if let Some(app) = app {
            app.request_redraw();
        }
        true
    }

    /// The rectangle handed to the child for a given outer rectangle.
    fn child_rect(rect: Rect, border: bool) -> Rect {
        if border { Frame::new(rect, 1).inner() } else { rect }
    }

    /// Paint the border and title.
    fn draw_frame(
        surface: &mut dyn Surface,
        frame: &Frame,
        focused: bool,
        theme: &Theme,
        title: Option<&str>,
    ) {
        let g = theme.glyphs(focused);
        let style = if focused { "frame/focused" } else { "frame" };
        surface.fill(frame.topleft, g.topleft, style);
        surface.fill(frame.topright, g.topright, style);
        surface.fill(frame.bottomleft, g.bottomleft, style);
        surface.fill(frame.bottomright, g.bottomright, style);
        surface.fill(frame.top, g.horizontal, style);
        surface.fill(frame.bottom, g.horizontal, style);
        surface.fill(frame.left, g.vertical, style);
        surface.fill(frame.right, g.vertical, style);
        if let Some(t) = title {
            let label = format!(" {t} ");
            surface.text(frame.top, &label, "frame/title");
        }
    }
}

impl Widget for Pane {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn name(&self) -> WidgetName {
        WidgetName::convert("pane")
    }

    fn rect(&self) -> Rect {
        read(&self.state).rect
    }

    fn set_rect(&self, rect: Rect) {
        let border = {
            let mut s = write(&self.state);
            s.rect = rect;
            s.border
        };
        let inner = Self::child_rect(rect, border);
        trace!(pane = %self.id, ?rect, ?inner, "place child");
        self.child.set_rect(inner);
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &DrawContext) -> Result<()> {
        let (rect, border, visible, theme, title) = {
            let s = read(&self.state);
            (s.rect, s.border, s.visible, s.theme, s.title.clone())
        };
        if !visible || !rect.is_drawable() {
            return Ok(());
        }
        if border {
            let frame = Frame::new(rect, 1);
            if !frame.is_zero() {
                let focused = self.contains_focus(ctx.focused);
                Self::draw_frame(surface, &frame, focused, &theme, title.as_deref());
            }
        }
        if self.child.rect().is_drawable() {
            self.child.draw(surface, ctx)?;
        }
        Ok(())
    }

    fn is_visible(&self) -> bool {
        read(&self.state).visible
    }

    fn accept_focus(&self) -> bool {
        self.is_visible() && !self.child.has_focusable_descendant()
    }

    fn children(&self, f: &mut dyn FnMut(&dyn Widget)) {
        f(self.child.as_ref());
    }

    fn apply_theme(&self, theme: &Theme) {
        let theme = *theme;
        self.modify(|s| mem::replace(&mut s.theme, theme) != theme);
        self.child.apply_theme(&theme);
    }

    fn attach(&self, app: &AppHandle) {
        write(&self.state).app = Some(app.clone());
        self.child.attach(app);
    }

    /// Reports on the child subtree only. The pane's own last-resort
    /// focusability exists precisely when this is false, so counting it here
    /// would make every visible pane look navigable.
    fn has_focusable_descendant(&self) -> bool {
        self.is_visible() && self.child.has_focusable_descendant()
    }
}
