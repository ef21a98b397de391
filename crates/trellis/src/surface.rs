use crate::geom::{Expanse, Point, Rect};

/// A grid of character cells that widgets draw onto. Style names are opaque
/// strings resolved by the terminal backend; trellis never interprets them.
///
/// Writes outside the surface are clipped silently.
pub trait Surface {
    /// The size of the surface.
    fn size(&self) -> Expanse;

    /// Write one character.
    fn put(&mut self, p: Point, ch: char, style: &str);

    /// Fill a rectangle with a character.
    fn fill(&mut self, r: Rect, ch: char, style: &str) {
        let Some(r) = r.intersect(&self.size().rect()) else {
            return;
        };
        for y in r.tl.y..r.bottom() {
            for x in r.tl.x..r.right() {
                self.put(Point { x, y }, ch, style);
            }
        }
    }

    /// Write text into a one-line rectangle, truncating at its right edge.
    /// One character occupies one cell.
    fn text(&mut self, line: Rect, txt: &str, style: &str) {
        if !line.is_drawable() {
            return;
        }
        for (x, ch) in (line.tl.x..line.right()).zip(txt.chars()) {
            self.put(Point { x, y: line.tl.y }, ch, style);
        }
    }

    /// Blank the whole surface.
    fn clear(&mut self) {
        let r = self.size().rect();
        self.fill(r, ' ', "");
    }
}

/// A single cell in a [`TermBuf`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The character.
    pub ch: char,
    /// The style name it was drawn with.
    pub style: String,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: String::new(),
        }
    }
}

/// An in-memory surface. Backends diff successive buffers to produce terminal
/// output; tests inspect them directly.
#[derive(Clone, Debug)]
pub struct TermBuf {
    /// Dimensions.
    size: Expanse,
    /// Row-major cells.
    cells: Vec<Cell>,
}

impl TermBuf {
    /// Create a blank buffer.
    pub fn new(size: impl Into<Expanse>) -> Self {
        let size = size.into();
        Self {
            size,
            cells: vec![Cell::default(); size.area() as usize],
        }
    }

    /// The offset of a point in the cell vector, if it lies in the buffer.
    fn index(&self, p: Point) -> Option<usize> {
        let x = u32::try_from(p.x).ok()?;
        let y = u32::try_from(p.y).ok()?;
        if x >= self.size.w || y >= self.size.h {
            return None;
        }
        Some((y * self.size.w + x) as usize)
    }

    /// Get the cell at a point.
    pub fn get(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The characters of each row, for assertions and dumps.
    pub fn lines(&self) -> Vec<String> {
        if self.size.w == 0 {
            return vec![String::new(); self.size.h as usize];
        }
        self.cells
            .chunks(self.size.w as usize)
            .map(|row| row.iter().map(|c| c.ch).collect())
            .collect()
    }
}

impl Surface for TermBuf {
    fn size(&self) -> Expanse {
        self.size
    }

    fn put(&mut self, p: Point, ch: char, style: &str) {
        if let Some(i) = self.index(p) {
            let c = &mut self.cells[i];
            c.ch = ch;
            if c.style != style {
                c.style = style.to_string();
            }
        }
    }
}
