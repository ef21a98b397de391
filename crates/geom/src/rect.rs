use super::{Axis, Error, Point, Result};

/// A rectangle of cells. Width and height are signed: a rectangle with a zero
/// or negative dimension is valid to hold, but is not drawable.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner
    pub tl: Point,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Construct a rectangle from coordinates and size.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// A zero-sized rectangle at the origin.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build a rectangle from main-axis and cross-axis offsets and extents.
    pub fn from_axes(
        axis: Axis,
        main_off: i32,
        main_len: i32,
        cross_off: i32,
        cross_len: i32,
    ) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main_off, cross_off, main_len, cross_len),
            Axis::Vertical => Self::new(cross_off, main_off, cross_len, main_len),
        }
    }

    /// Does this rectangle cover at least one cell?
    pub fn is_drawable(&self) -> bool {
        self.w > 0 && self.h > 0
    }

    /// The offset of this rectangle along an axis.
    pub fn offset(&self, axis: Axis) -> i32 {
        self.tl.along(axis)
    }

    /// The extent of this rectangle along an axis.
    pub fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.w,
            Axis::Vertical => self.h,
        }
    }

    /// The exclusive right edge.
    pub fn right(&self) -> i32 {
        self.tl.x.saturating_add(self.w)
    }

    /// The exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.tl.y.saturating_add(self.h)
    }

    /// Does this rectangle contain the point?
    pub fn contains_point(&self, p: Point) -> bool {
        self.is_drawable()
            && p.x >= self.tl.x
            && p.x < self.right()
            && p.y >= self.tl.y
            && p.y < self.bottom()
    }

    /// The overlap of two rectangles, if any.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let left = self.tl.x.max(other.tl.x);
        let top = self.tl.y.max(other.tl.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            None
        } else {
            Some(Self::new(left, top, right - left, bottom - top))
        }
    }

    /// Shrink the rectangle by `border` cells on every side. If the border
    /// consumes the whole rectangle the result has a zero dimension, keeping
    /// the shifted origin.
    pub fn inner(&self, border: i32) -> Self {
        let border = border.max(0);
        Self {
            tl: self.tl.scroll(border, border),
            w: self.w.saturating_sub(border.saturating_mul(2)).max(0),
            h: self.h.saturating_sub(border.saturating_mul(2)).max(0),
        }
    }

    /// Extract row `n` of this rectangle as a one-cell-high rectangle.
    pub fn line(&self, n: i32) -> Result<Self> {
        if n < 0 || n >= self.h {
            Err(Error::Geometry(format!("line {n} outside rectangle")))
        } else {
            Ok(Self::new(self.tl.x, self.tl.y + n, self.w, 1))
        }
    }
}
