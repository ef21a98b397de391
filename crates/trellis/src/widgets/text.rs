//! Static text.

use crate::{
    Result,
    geom::Rect,
    state::{LeafState, WidgetId, WidgetName},
    surface::Surface,
    widget::{DrawContext, Widget},
};

/// A block of text, one line per row. Lines are truncated at the right edge
/// and rows past the last line are blanked. Text never takes focus.
pub struct Text {
    /// Leaf state holding the raw content.
    state: LeafState<String>,
}

impl Text {
    /// Construct text with initial content.
    pub fn new(raw: &str) -> Self {
        Self {
            state: LeafState::new("text", raw.to_owned()),
        }
    }

    /// The current content.
    pub fn content(&self) -> String {
        self.state.with(|l| l.data.clone())
    }

    /// Replace the content. Returns `true` and marks the widget dirty only if
    /// the content changed.
    pub fn set_content(&self, raw: &str) -> bool {
        self.state.update_if(|c| {
            if c == raw {
                return false;
            }
            raw.clone_into(c);
            true
        })
    }
}

impl Widget for Text {
    fn id(&self) -> WidgetId {
        self.state.id()
    }

    fn name(&self) -> WidgetName {
        self.state.name()
    }

    fn rect(&self) -> Rect {
        self.state.rect()
    }

    fn set_rect(&self, rect: Rect) {
        self.state.set_rect(rect);
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &DrawContext) -> Result<()> {
        self.state.with(|l| -> Result<()> {
            if !l.rect.is_drawable() {
                return Ok(());
            }
            surface.fill(l.rect, ' ', "text");
            let mut lines = l.data.lines();
            for y in 0..l.rect.h {
                let Some(txt) = lines.next() else {
                    break;
                };
                surface.text(l.rect.line(y)?, txt, "text");
            }
            Ok(())
        })
    }

    fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    fn clear_dirty_flags(&self) {
        self.state.clear_dirty();
    }
}
