//! The layout solver widget: a fixed set of ten slots arranged along one
//! axis.

mod solve;

use std::{
    array, mem,
    sync::{Arc, RwLock},
};

use tracing::{debug, trace, warn};

pub use solve::{Align, CrossAlign, Size, SolveInput, allocate, solve};

use crate::{
    Error, Result,
    app::{AppHandle, Command},
    config::LayoutConfig,
    geom::{Axis, Rect},
    navigation,
    pane::Pane,
    state::{WidgetId, WidgetName, read, write},
    surface::Surface,
    widget::{DrawContext, Widget},
};

/// The number of slots in a layout. Navigation keys map one-to-one onto a
/// single decimal digit, so this is a protocol constant rather than a tuning
/// knob.
pub const SLOTS: usize = 10;

/// One position in a layout.
#[derive(Clone, Default)]
struct Slot {
    /// The occupying pane.
    pane: Option<Arc<Pane>>,
    /// The pane's size policy.
    size: Size,
    /// Is the slot occupied?
    active: bool,
}

/// Mutable layout fields, guarded together.
struct LayoutState {
    /// The fixed slot array.
    slots: [Slot; SLOTS],
    /// Our rectangle.
    rect: Rect,
    /// The main axis.
    axis: Axis,
    /// Cells between adjacent active slots.
    gap: u32,
    /// Main-axis alignment.
    main_align: Align,
    /// Cross-axis alignment. Recorded, but only stretch is implemented.
    cross_align: CrossAlign,
}

impl LayoutState {
    /// Snapshot the solver inputs.
    fn solve_input(&self) -> SolveInput {
        let mut sizes = [None; SLOTS];
        for (i, s) in self.slots.iter().enumerate() {
            if s.active {
                sizes[i] = Some(s.size);
            }
        }
        SolveInput {
            rect: self.rect,
            axis: self.axis,
            gap: self.gap,
            align: self.main_align,
            sizes,
        }
    }

    /// The number of occupied slots.
    fn active(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }
}

/// Partitions its rectangle among up to [`SLOTS`] panes along one axis.
///
/// Every mutation that changes a geometry input (the rectangle, gap,
/// alignment, orientation or slot membership) recomputes the rectangles of
/// all child panes before returning, so a draw never reads stale geometry.
/// Membership changes also ask the owning application to reindex navigation
/// on the root layout.
pub struct Layout {
    /// Unique ID.
    id: WidgetId,
    /// Slots and geometry inputs.
    state: RwLock<LayoutState>,
    /// The owning application. Used only to test whether we are the root and
    /// to deliver requests.
    app: RwLock<Option<AppHandle>>,
}

impl Layout {
    /// An empty layout along `axis`.
    pub fn new(axis: Axis) -> Self {
        Self {
            id: WidgetId::next(),
            state: RwLock::new(LayoutState {
                slots: Default::default(),
                rect: Rect::zero(),
                axis,
                gap: 0,
                main_align: Align::Start,
                cross_align: CrossAlign::Stretch,
            }),
            app: RwLock::new(None),
        }
    }

    /// A layout whose panes sit side by side.
    pub fn row() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// A layout whose panes stack top to bottom.
    pub fn column() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Build a layout from configuration.
    pub fn from_config(c: &LayoutConfig) -> Self {
        Self::new(c.orientation.into())
            .with_gap(c.gap)
            .with_main_align(c.main_align)
            .with_cross_align(c.cross_align)
    }

    /// Build with a gap.
    pub fn with_gap(self, gap: i32) -> Self {
        self.set_gap(gap);
        self
    }

    /// Build with a main-axis alignment.
    pub fn with_main_align(self, align: Align) -> Self {
        self.set_main_align(align);
        self
    }

    /// Build with a cross-axis alignment.
    pub fn with_cross_align(self, align: CrossAlign) -> Self {
        self.set_cross_align(align);
        self
    }

    /// The main axis.
    pub fn orientation(&self) -> Axis {
        read(&self.state).axis
    }

    /// The gap between adjacent active slots.
    pub fn gap(&self) -> u32 {
        read(&self.state).gap
    }

    /// Main-axis alignment.
    pub fn main_align(&self) -> Align {
        read(&self.state).main_align
    }

    /// Cross-axis alignment, as configured.
    pub fn cross_align(&self) -> CrossAlign {
        read(&self.state).cross_align
    }

    /// The number of occupied slots.
    pub fn active(&self) -> usize {
        read(&self.state).active()
    }

    /// Insert a pane into the first free slot, returning the slot index.
    /// Fails with [`Error::NoFreeSlot`] when all slots are occupied; the
    /// layout is unchanged in that case.
    pub fn insert(&self, pane: Pane, size: Size) -> Result<usize> {
        let pane = Arc::new(pane);
        let idx = {
            let mut s = write(&self.state);
            let Some(idx) = s.slots.iter().position(|s| !s.active) else {
                warn!(layout = %self.id, "insert declined: all {SLOTS} slots occupied");
                return Err(Error::NoFreeSlot);
            };
            s.slots[idx] = Slot {
                pane: Some(pane.clone()),
                size,
                active: true,
            };
            idx
        };
        pane.set_slot(Some(idx));
        debug!(layout = %self.id, slot = idx, pane = %pane.id(), ?size, "insert");

        let app = self.app();
        if let Some(app) = &app {
            pane.attach(app);
        }
        self.relayout();
        if let Some(app) = app {
            app.post(Command::Reindex);
            app.request_redraw();
        }
        Ok(idx)
    }

    /// Remove the pane in a slot, returning it. Focus held inside the pane is
    /// dropped. Out-of-range or empty slots are ignored.
    pub fn remove(&self, slot: usize) -> Option<Arc<Pane>> {
        let pane = {
            let mut s = write(&self.state);
            let target = s.slots.get_mut(slot)?;
            if !target.active {
                return None;
            }
            mem::take(target).pane?
        };
        pane.set_slot(None);
        debug!(layout = %self.id, slot, pane = %pane.id(), "remove");

        self.relayout();
        if let Some(app) = self.app() {
            app.release_focus_within(&*pane);
            app.post(Command::Reindex);
            app.request_redraw();
        }
        Some(pane)
    }

    /// Change the size policy of an occupied slot. Returns `false` if the
    /// slot is empty or out of range.
    pub fn set_size(&self, slot: usize, size: Size) -> bool {
        {
            let mut s = write(&self.state);
            match s.slots.get_mut(slot) {
                Some(target) if target.active => target.size = size,
                _ => return false,
            }
        }
        self.relayout();
        true
    }

    /// The size policy of an occupied slot.
    pub fn size(&self, slot: usize) -> Option<Size> {
        read(&self.state)
            .slots
            .get(slot)
            .filter(|s| s.active)
            .map(|s| s.size)
    }

    /// Set the gap between adjacent slots. Negative values clamp to zero.
    pub fn set_gap(&self, gap: i32) {
        let gap = gap.max(0).unsigned_abs();
        write(&self.state).gap = gap;
        self.relayout();
    }

    /// Set the main-axis alignment.
    pub fn set_main_align(&self, align: Align) {
        write(&self.state).main_align = align;
        self.relayout();
    }

    /// Set the cross-axis alignment. Values other than
    /// [`CrossAlign::Stretch`] are recorded but lay out as stretch.
    pub fn set_cross_align(&self, align: CrossAlign) {
        if align != CrossAlign::Stretch {
            debug!(layout = %self.id, ?align, "cross-axis alignment degrades to stretch");
        }
        write(&self.state).cross_align = align;
        self.relayout();
    }

    /// Change the main axis.
    pub fn set_orientation(&self, axis: Axis) {
        write(&self.state).axis = axis;
        self.relayout();
    }

    /// The pane in a slot.
    pub fn pane_by_slot(&self, slot: usize) -> Option<Arc<Pane>> {
        read(&self.state)
            .slots
            .get(slot)
            .filter(|s| s.active)
            .and_then(|s| s.pane.clone())
    }

    /// The first pane, in slot order, holding a navigation index. Indices
    /// outside 1..=10 find nothing.
    pub fn pane_by_nav_index(&self, idx: u8) -> Option<Arc<Pane>> {
        if idx == 0 || usize::from(idx) > navigation::MAX_INDEX {
            return None;
        }
        self.panes()
            .into_iter()
            .flatten()
            .find(|p| p.nav_index() == idx)
    }

    /// Snapshot the slot contents in slot order.
    pub fn panes(&self) -> [Option<Arc<Pane>>; SLOTS] {
        let s = read(&self.state);
        array::from_fn(|i| {
            let slot = &s.slots[i];
            if slot.active { slot.pane.clone() } else { None }
        })
    }

    /// Is this layout the root of its application?
    pub fn is_root(&self) -> bool {
        self.app().is_some_and(|a| a.is_root(self.id))
    }

    /// Reassign navigation indices to our direct children. See
    /// [`navigation::assign`].
    pub fn assign_indices(&self) {
        let root = self.is_root();
        navigation::assign(&self.panes(), root);
    }

    /// The owning application, if attached.
    fn app(&self) -> Option<AppHandle> {
        read(&self.app).clone()
    }

    /// Recompute and push down the rectangle of every active pane. When there
    /// is nothing to lay out, prior child geometry is left alone.
    fn relayout(&self) {
        let placements: Vec<(Arc<Pane>, Rect)> = {
            let s = read(&self.state);
            let Some(rects) = solve(&s.solve_input()) else {
                trace!(layout = %self.id, rect = ?s.rect, "relayout skipped");
                return;
            };
            s.slots
                .iter()
                .zip(rects)
                .filter_map(|(slot, r)| Some((slot.pane.clone()?, r?)))
                .collect()
        };
        debug!(layout = %self.id, panes = placements.len(), "relayout");
        for (pane, r) in placements {
            trace!(pane = %pane.id(), rect = ?r, "place");
            pane.set_rect(r);
        }
    }
}

impl Widget for Layout {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn name(&self) -> WidgetName {
        WidgetName::convert("layout")
    }

    fn rect(&self) -> Rect {
        read(&self.state).rect
    }

    fn set_rect(&self, rect: Rect) {
        write(&self.state).rect = rect;
        self.relayout();
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &DrawContext) -> Result<()> {
        for pane in self.panes().into_iter().flatten() {
            if pane.rect().is_drawable() {
                pane.draw(surface, ctx)?;
            }
        }
        Ok(())
    }

    fn children(&self, f: &mut dyn FnMut(&dyn Widget)) {
        for pane in self.panes().into_iter().flatten() {
            f(&*pane);
        }
    }

    fn attach(&self, app: &AppHandle) {
        *write(&self.app) = Some(app.clone());
        self.children(&mut |c| c.attach(app));
    }
}
