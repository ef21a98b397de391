//! Widget identity and leaf state.

use std::{
    fmt,
    sync::{
        PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
        atomic::{AtomicU64, Ordering},
    },
};

use convert_case::{Case, Casing};

use crate::geom::Rect;

/// Source of process-unique widget IDs.
static CURRENT_ID: AtomicU64 = AtomicU64::new(1);

/// Acquire a read guard, recovering the data if a writer panicked. A widget
/// that panicked mid-update must not take the rest of the tree down with it.
pub(crate) fn read<T>(l: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    l.read().unwrap_or_else(PoisonError::into_inner)
}

/// Acquire a write guard, recovering the data if a writer panicked.
pub(crate) fn write<T>(l: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    l.write().unwrap_or_else(PoisonError::into_inner)
}

/// Is `c` allowed in a widget name?
pub fn valid_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// A unique identity for a widget. Focus is tracked by ID, so two widgets
/// compare equal only if they are the same object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocate a fresh ID.
    pub fn next() -> Self {
        Self(CURRENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A widget name, which consists of lowercase ASCII alphanumeric characters,
/// plus underscores. Names are for debugging and dumps only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetName {
    /// The normalised name.
    name: String,
}

impl WidgetName {
    /// Takes a string and munges it into a valid widget name. It does this by
    /// first converting the string to snake case, then removing all invalid
    /// characters.
    pub fn convert(name: &str) -> Self {
        let name = name.to_case(Case::Snake);
        Self {
            name: name.chars().filter(|x| valid_name_char(*x)).collect(),
        }
    }
}

impl fmt::Display for WidgetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl PartialEq<&str> for WidgetName {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

/// The lockable part of a leaf widget: its rectangle, its dirty bit and its
/// own data. All three live under one lock so that a draw never observes a
/// torn update.
#[derive(Debug)]
pub struct Leaf<T> {
    /// The rectangle last assigned by the parent.
    pub rect: Rect,
    /// Has anything observable changed since the last completed draw?
    pub dirty: bool,
    /// Widget-specific state.
    pub data: T,
}

/// Shared state for leaf widgets. A leaf is the only kind of widget that owns
/// a dirty bit: containers derive theirs from their children.
#[derive(Debug)]
pub struct LeafState<T> {
    /// Unique ID.
    id: WidgetId,
    /// Debug name.
    name: WidgetName,
    /// Guarded mutable fields.
    inner: RwLock<Leaf<T>>,
}

impl<T> LeafState<T> {
    /// Create leaf state. New leaves start dirty, since they have never been
    /// drawn.
    pub fn new(name: &str, data: T) -> Self {
        Self {
            id: WidgetId::next(),
            name: WidgetName::convert(name),
            inner: RwLock::new(Leaf {
                rect: Rect::zero(),
                dirty: true,
                data,
            }),
        }
    }

    /// The widget's ID.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The widget's name.
    pub fn name(&self) -> WidgetName {
        self.name.clone()
    }

    /// The current rectangle.
    pub fn rect(&self) -> Rect {
        read(&self.inner).rect
    }

    /// Assign a rectangle. The leaf is tainted only if the rectangle changed.
    pub fn set_rect(&self, rect: Rect) {
        let mut l = write(&self.inner);
        if l.rect != rect {
            l.rect = rect;
            l.dirty = true;
        }
    }

    /// Is the dirty bit set?
    pub fn is_dirty(&self) -> bool {
        read(&self.inner).dirty
    }

    /// Mark this leaf for redraw.
    pub fn taint(&self) {
        write(&self.inner).dirty = true;
    }

    /// Clear the dirty bit. Only the redraw propagator should call this, after
    /// a draw pass.
    pub fn clear_dirty(&self) {
        write(&self.inner).dirty = false;
    }

    /// Read the leaf under one critical section.
    pub fn with<R>(&self, f: impl FnOnce(&Leaf<T>) -> R) -> R {
        f(&read(&self.inner))
    }

    /// Mutate the widget data and taint the leaf.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut l = write(&self.inner);
        l.dirty = true;
        f(&mut l.data)
    }

    /// Mutate the widget data, tainting the leaf only if `f` reports a change.
    pub fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        let mut l = write(&self.inner);
        let changed = f(&mut l.data);
        if changed {
            l.dirty = true;
        }
        changed
    }
}
