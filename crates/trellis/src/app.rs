//! The application context.

use std::sync::{
    Arc, Mutex, PoisonError, RwLock, Weak,
    atomic::{AtomicBool, Ordering},
    mpsc::{self, Receiver, Sender},
};

use tracing::{debug, warn};

use crate::{
    Result, Theme, focus,
    geom::{Expanse, Point},
    layout::Layout,
    state::{WidgetId, read, write},
    surface::Surface,
    widget::{DrawContext, Widget},
};

/// Deferred work posted by widgets to their application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Root-layout membership may have changed: recompute navigation indices.
    Reindex,
}

/// State shared between an [`App`] and the handles held by its widgets.
struct Shared {
    /// The root layout.
    root: RwLock<Option<Arc<Layout>>>,
    /// The focused widget.
    focus: RwLock<Option<WidgetId>>,
    /// Pending redraw request. Any number of requests between frames collapse
    /// into one.
    redraw: AtomicBool,
    /// Command queue sender, cloned into posts.
    tx: Sender<Command>,
    /// Command queue receiver, drained once per frame.
    rx: Mutex<Receiver<Command>>,
}

/// A non-owning handle to an application, held by attached layouts and
/// panes. It can only answer "is this the root?" and carry requests; it
/// never keeps the application alive.
#[derive(Clone, Debug)]
pub struct AppHandle {
    /// The application, if it still exists.
    shared: Weak<Shared>,
}

impl AppHandle {
    /// Is `id` the current root layout?
    pub fn is_root(&self, id: WidgetId) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|s| read(&s.root).as_ref().is_some_and(|r| r.id() == id))
    }

    /// Ask for a full redraw on the next frame.
    pub fn request_redraw(&self) {
        if let Some(s) = self.shared.upgrade() {
            s.redraw.store(true, Ordering::Release);
        }
    }

    /// Drop focus if it rests on `w` or anywhere beneath it. Returns whether
    /// focus was dropped.
    pub fn release_focus_within(&self, w: &dyn Widget) -> bool {
        let Some(s) = self.shared.upgrade() else {
            return false;
        };
        let current = *read(&s.focus);
        if !w.contains_focus(current) {
            return false;
        }
        {
            let mut f = write(&s.focus);
            if *f != current {
                return false;
            }
            *f = None;
        }
        debug!(widget = %w.id(), "focus released");
        s.redraw.store(true, Ordering::Release);
        true
    }

    /// Queue a command for the next frame. Posting to an application that no
    /// longer exists does nothing.
    pub fn post(&self, cmd: Command) {
        if let Some(s) = self.shared.upgrade() {
            if s.tx.send(cmd).is_err() {
                warn!(?cmd, "command dropped");
            }
        }
    }
}

/// The application context: owns the root layout, tracks focus, collects
/// redraw requests and runs deferred commands.
///
/// The outer event loop is expected to call [`App::frame`] once per tick.
pub struct App {
    /// State shared with handles.
    shared: Arc<Shared>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// An application with no root.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            shared: Arc::new(Shared {
                root: RwLock::new(None),
                focus: RwLock::new(None),
                redraw: AtomicBool::new(false),
                tx,
                rx: Mutex::new(rx),
            }),
        }
    }

    /// A handle for widgets.
    pub fn handle(&self) -> AppHandle {
        AppHandle {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Install the root layout, attach its subtree and assign navigation
    /// indices. Any previous root loses its indices. Returns the new root.
    pub fn set_root(&self, layout: Layout) -> Arc<Layout> {
        let layout = Arc::new(layout);
        let prev = write(&self.shared.root).replace(layout.clone());
        layout.attach(&self.handle());
        layout.assign_indices();
        if let Some(prev) = &prev {
            prev.assign_indices();
        }
        debug!(root = %layout.id(), "root attached");
        self.request_redraw();
        layout
    }

    /// The root layout.
    pub fn root(&self) -> Option<Arc<Layout>> {
        read(&self.shared.root).clone()
    }

    /// Resize the root to cover a screen of the given size.
    pub fn resize(&self, size: Expanse) {
        if let Some(root) = self.root() {
            root.set_rect(size.rect());
        }
        self.request_redraw();
    }

    /// Apply a theme to the whole tree.
    pub fn apply_theme(&self, theme: &Theme) {
        if let Some(root) = self.root() {
            root.apply_theme(theme);
        }
    }

    /// Ask for a full redraw on the next frame.
    pub fn request_redraw(&self) {
        self.shared.redraw.store(true, Ordering::Release);
    }

    /// Consume the pending redraw request.
    pub fn take_redraw(&self) -> bool {
        self.shared.redraw.swap(false, Ordering::AcqRel)
    }

    /// Drain the command queue, returning how many commands were consumed.
    /// Repeated reindex requests collapse into one pass over the root.
    pub fn process_commands(&self) -> usize {
        let cmds: Vec<Command> = {
            let rx = self
                .shared
                .rx
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            rx.try_iter().collect()
        };
        if cmds.contains(&Command::Reindex)
            && let Some(root) = self.root()
        {
            root.assign_indices();
        }
        if !cmds.is_empty() {
            debug!(count = cmds.len(), "commands processed");
        }
        cmds.len()
    }

    /// The focused widget.
    pub fn focused(&self) -> Option<WidgetId> {
        *read(&self.shared.focus)
    }

    /// Move focus. Returns `true` if focus changed, in which case a redraw is
    /// requested so focus-styled borders update.
    pub fn set_focus(&self, id: Option<WidgetId>) -> bool {
        let changed = {
            let mut f = write(&self.shared.focus);
            let changed = *f != id;
            *f = id;
            changed
        };
        if changed {
            self.request_redraw();
        }
        changed
    }

    /// Focus the first focusable widget inside the root pane holding
    /// navigation index `idx`. Returns `true` if focus moved.
    pub fn jump(&self, idx: u8) -> bool {
        let Some(pane) = self.root().and_then(|r| r.pane_by_nav_index(idx)) else {
            return false;
        };
        match focus::first_focusable(&*pane) {
            Some(target) => self.set_focus(Some(target)),
            None => false,
        }
    }

    /// Is the cell at `p` covered by the focused widget?
    pub fn focused_at(&self, p: Point) -> bool {
        self.root()
            .is_some_and(|r| focus::focused_at(&*r, p, self.focused()))
    }

    /// Run one frame: drain commands, then draw if the tree is dirty or a
    /// redraw was requested, and only then clear the dirty flags. A requested
    /// redraw blanks the surface first, since vacated areas belong to no
    /// widget. Returns whether anything was drawn.
    pub fn frame(&self, surface: &mut dyn Surface) -> Result<bool> {
        self.process_commands();
        let Some(root) = self.root() else {
            return Ok(false);
        };
        let requested = self.take_redraw();
        if !requested && !root.is_dirty() {
            return Ok(false);
        }
        if requested {
            surface.clear();
        }
        let ctx = DrawContext {
            focused: self.focused(),
        };
        root.draw(surface, &ctx)?;
        root.clear_dirty_flags();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Pane, Size,
        surface::TermBuf,
        widgets::{Button, Text},
    };

    #[test]
    fn root_identity() {
        let app = App::new();
        let first = app.set_root(Layout::row());
        assert!(first.is_root());
        assert!(app.root().is_some_and(|r| r.id() == first.id()));

        let detached = Layout::row();
        assert!(!detached.is_root());

        let second = app.set_root(Layout::column());
        assert!(second.is_root());
        assert!(!first.is_root());
    }

    #[test]
    fn handle_outlives_app() {
        let app = App::new();
        let h = app.handle();
        drop(app);
        h.request_redraw();
        h.post(Command::Reindex);
        assert!(!h.is_root(WidgetId::next()));
    }

    #[test]
    fn commands_coalesce() -> Result<()> {
        let app = App::new();
        let root = app.set_root(Layout::row());
        app.process_commands();

        root.insert(Pane::new(Button::new("a")), Size::Weight(1))?;
        root.insert(Pane::new(Button::new("b")), Size::Weight(1))?;
        assert_eq!(app.process_commands(), 2);
        assert_eq!(app.process_commands(), 0);
        assert_eq!(root.pane_by_slot(1).map(|p| p.nav_index()), Some(2));
        Ok(())
    }

    #[test]
    fn focus_and_jump() -> Result<()> {
        let app = App::new();
        let root = app.set_root(Layout::row());
        root.insert(Pane::new(Text::new("t")), Size::Weight(1))?;
        let b = Button::new("b");
        let bid = b.id();
        root.insert(Pane::new(b), Size::Weight(1))?;
        app.resize(Expanse::new(20, 1));
        app.process_commands();
        app.take_redraw();

        assert!(!app.jump(2));
        assert!(app.jump(1));
        assert_eq!(app.focused(), Some(bid));
        assert!(app.take_redraw());
        assert!(app.focused_at(Point { x: 15, y: 0 }));
        assert!(!app.focused_at(Point { x: 2, y: 0 }));

        // Jumping to where focus already is changes nothing
        assert!(!app.jump(1));
        assert!(!app.take_redraw());
        Ok(())
    }

    #[test]
    fn frame_draws_only_when_needed() -> Result<()> {
        let app = App::new();
        let mut buf = TermBuf::new((4, 1));
        assert!(!app.frame(&mut buf)?);

        let root = app.set_root(Layout::row());
        root.insert(Pane::new(Text::new("ab")), Size::Weight(1))?;
        app.resize(Expanse::new(4, 1));

        assert!(app.frame(&mut buf)?);
        assert_eq!(buf.lines(), vec!["ab  "]);
        assert!(!root.is_dirty());
        assert!(!app.frame(&mut buf)?);
        Ok(())
    }
}
