//! Cell-grid geometry primitives used across trellis.

#![warn(missing_docs)]

/// Error types for geometry operations.
mod error;
/// Width/height size type.
mod expanse;
/// Frame and border helpers.
mod frame;
/// Integer partitioning of a length by weight.
mod partition;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;

pub use error::{Error, Result};
pub use expanse::Expanse;
pub use frame::Frame;
pub use partition::partition;
pub use point::Point;
pub use rect::Rect;

/// The two layout axes. A horizontal axis lays children out left to right in a
/// row, a vertical axis top to bottom in a column.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum Axis {
    /// Row: the main axis runs along x.
    #[default]
    Horizontal,
    /// Column: the main axis runs along y.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}
