use super::{Point, Rect};

/// An `Expanse` is a rectangle that has a width and height but no location.
/// Surfaces are sized with an `Expanse`, since they always start at (0, 0).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Expanse {
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

impl Expanse {
    /// Construct an expanse.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// The area of this expanse.
    pub fn area(&self) -> u32 {
        self.w * self.h
    }

    /// Return a `Rect` with the same dimensions as the `Expanse`, but a location at (0, 0).
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::zero(),
            w: i32::try_from(self.w).unwrap_or(i32::MAX),
            h: i32::try_from(self.h).unwrap_or(i32::MAX),
        }
    }
}

/// Negative dimensions collapse to zero.
impl From<Rect> for Expanse {
    fn from(r: Rect) -> Self {
        Self {
            w: r.w.max(0).unsigned_abs(),
            h: r.h.max(0).unsigned_abs(),
        }
    }
}

impl From<(u32, u32)> for Expanse {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}
