use super::Rect;

/// A frame extracted from a rectangle
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Frame {
    /// The top of the frame, not including corners
    pub top: Rect,
    /// The bottom of the frame, not including corners
    pub bottom: Rect,
    /// The left of the frame, not including corners
    pub left: Rect,
    /// The right of the frame, not including corners
    pub right: Rect,
    /// The top left corner
    pub topleft: Rect,
    /// The top right corner
    pub topright: Rect,
    /// The bottom left corner
    pub bottomleft: Rect,
    /// The bottom right corner
    pub bottomright: Rect,
    /// The original outer rect
    outer_rect: Rect,
    /// The border width
    border: i32,
}

impl Frame {
    /// Construct a new frame. If the rect is too small to fit the specified
    /// frame, we return a zero Frame that still remembers the outer rect.
    pub fn new(rect: Rect, border: i32) -> Self {
        let border = border.max(0);
        if border == 0 || rect.w <= border * 2 || rect.h <= border * 2 {
            let mut f = Self::zero();
            f.outer_rect = rect;
            f.border = border;
            return f;
        }
        let (x, y, w, h) = (rect.tl.x, rect.tl.y, rect.w, rect.h);
        Self {
            top: Rect::new(x + border, y, w - 2 * border, border),
            bottom: Rect::new(x + border, y + h - border, w - 2 * border, border),
            left: Rect::new(x, y + border, border, h - 2 * border),
            right: Rect::new(x + w - border, y + border, border, h - 2 * border),
            topleft: Rect::new(x, y, border, border),
            topright: Rect::new(x + w - border, y, border, border),
            bottomleft: Rect::new(x, y + h - border, border, border),
            bottomright: Rect::new(x + w - border, y + h - border, border, border),
            outer_rect: rect,
            border,
        }
    }

    /// Is there anything to draw?
    pub fn is_zero(&self) -> bool {
        !self.top.is_drawable() && !self.topleft.is_drawable()
    }

    /// Get the inner rect of the frame (the space inside the frame). This is
    /// what a bordered container hands to its child.
    pub fn inner(&self) -> Rect {
        self.outer_rect.inner(self.border)
    }

    /// Get the outer rect of the frame (the original rect passed to Frame::new())
    pub fn outer(&self) -> Rect {
        self.outer_rect
    }

    /// A frame with no area.
    pub fn zero() -> Self {
        Self {
            top: Rect::zero(),
            bottom: Rect::zero(),
            left: Rect::zero(),
            right: Rect::zero(),
            topleft: Rect::zero(),
            topright: Rect::zero(),
            bottomleft: Rect::zero(),
            bottomright: Rect::zero(),
            outer_rect: Rect::zero(),
            border: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tframe() {
        let r = Rect::new(10, 10, 10, 10);
        assert_eq!(
            Frame::new(r, 1),
            Frame {
                top: Rect::new(11, 10, 8, 1),
                bottom: Rect::new(11, 19, 8, 1),
                left: Rect::new(10, 11, 1, 8),
                right: Rect::new(19, 11, 1, 8),
                topleft: Rect::new(10, 10, 1, 1),
                topright: Rect::new(19, 10, 1, 1),
                bottomleft: Rect::new(10, 19, 1, 1),
                bottomright: Rect::new(19, 19, 1, 1),
                outer_rect: r,
                border: 1,
            }
        );
    }

    #[test]
    fn inner_outer() {
        let r = Rect::new(10, 10, 10, 10);
        let frame = Frame::new(r, 1);
        assert_eq!(frame.outer(), r);
        assert_eq!(frame.inner(), Rect::new(11, 11, 8, 8));
        assert!(!frame.is_zero());

        let frame = Frame::new(r, 2);
        assert_eq!(frame.inner(), Rect::new(12, 12, 6, 6));

        // Border too large: nothing to draw, and the inner rect is empty
        let frame = Frame::new(r, 5);
        assert_eq!(frame.outer(), r);
        assert!(frame.is_zero());
        assert!(!frame.inner().is_drawable());

        // Negative rectangles never produce a frame
        assert!(Frame::new(Rect::new(0, 0, -4, 10), 1).is_zero());
    }
}
