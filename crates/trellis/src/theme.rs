//! Border glyphs and themes.

use serde::{Deserialize, Serialize};

/// Defines the set of glyphs used to draw a border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Top left corner.
    pub topleft: char,
    /// Top right corner.
    pub topright: char,
    /// Bottom left corner.
    pub bottomleft: char,
    /// Bottom right corner.
    pub bottomright: char,
    /// Horizontal edge.
    pub horizontal: char,
    /// Vertical edge.
    pub vertical: char,
}

/// Single line thin Unicode box drawing frame set
pub const SINGLE: Glyphs = Glyphs {
    topleft: '┌',
    topright: '┐',
    bottomleft: '└',
    bottomright: '┘',
    horizontal: '─',
    vertical: '│',
};

/// Double line Unicode box drawing frame set
pub const DOUBLE: Glyphs = Glyphs {
    topleft: '╔',
    topright: '╗',
    bottomleft: '╚',
    bottomright: '╝',
    horizontal: '═',
    vertical: '║',
};

/// Single line thick Unicode box drawing frame set
pub const SINGLE_THICK: Glyphs = Glyphs {
    topleft: '┏',
    topright: '┓',
    bottomleft: '┗',
    bottomright: '┛',
    horizontal: '━',
    vertical: '┃',
};

/// Named border glyph sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    /// Thin single line.
    #[default]
    Single,
    /// Double line.
    Double,
    /// Thick single line.
    Thick,
}

impl BorderStyle {
    /// The glyph set for this style.
    pub fn glyphs(self) -> &'static Glyphs {
        match self {
            Self::Single => &SINGLE,
            Self::Double => &DOUBLE,
            Self::Thick => &SINGLE_THICK,
        }
    }
}

/// Presentation choices the core makes itself. Everything else about
/// appearance belongs to the backend's style resolution.
///
/// Style names used when drawing borders:
///     frame           normal border
///     frame/focused   border of a pane containing focus
///     frame/title     pane title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Border glyphs for panes that do not contain focus.
    pub border: BorderStyle,
    /// Border glyphs for the pane containing focus.
    pub border_focused: BorderStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: BorderStyle::Single,
            border_focused: BorderStyle::Thick,
        }
    }
}

impl Theme {
    /// The glyphs for a border, given whether its pane contains focus.
    pub fn glyphs(&self, focused: bool) -> &'static Glyphs {
        if focused {
            self.border_focused.glyphs()
        } else {
            self.border.glyphs()
        }
    }
}
