//! Trellis: pane layout, focus navigation and redraw tracking for terminal
//! widget trees.
//!
//! A [`Layout`] arranges up to ten [`Pane`]s along one axis. Each pane wraps a
//! single child, optionally inside a border, and a child may itself be a
//! layout. The [`App`] owns the root layout, tracks focus, numbers the root's
//! panes for direct jumps, and redraws only when something changed.

pub mod app;
pub mod config;
pub mod dirty;
pub mod dump;
pub mod error;
pub mod focus;
pub mod layout;
pub mod logging;
pub mod navigation;
pub mod pane;
pub mod state;
mod surface;
pub mod theme;
pub mod widget;
pub mod widgets;

pub use geom;

pub use app::{App, AppHandle, Command};
pub use config::{Config, LayoutConfig, Orientation};
pub use error::{Error, Result};
pub use layout::{Align, CrossAlign, Layout, SLOTS, Size};
pub use pane::Pane;
pub use state::{LeafState, WidgetId, WidgetName};
pub use surface::{Cell, Surface, TermBuf};
pub use theme::{BorderStyle, Theme};
pub use widget::{DrawContext, Widget};

// Commonly used geometry types
pub use geom::{Axis, Expanse, Point, Rect};
