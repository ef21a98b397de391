//! Button widget.

use crate::{
    Result,
    geom::Rect,
    state::{LeafState, WidgetId, WidgetName},
    surface::Surface,
    widget::{DrawContext, Widget},
};

/// Button data.
#[derive(Debug)]
struct ButtonState {
    /// Button label.
    label: String,
    /// Is the button held down?
    pressed: bool,
}

/// A focusable, single-line button drawn as `[label]`.
///
/// Style names:
///     button          normal
///     button/focused  the button holds focus
///     button/pressed  the button is held down
pub struct Button {
    /// Leaf state.
    state: LeafState<ButtonState>,
}

impl Button {
    /// Construct a new button with a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            state: LeafState::new(
                "button",
                ButtonState {
                    label: label.into(),
                    pressed: false,
                },
            ),
        }
    }

    /// The button label.
    pub fn label(&self) -> String {
        self.state.with(|l| l.data.label.clone())
    }

    /// Change the label.
    pub fn set_label(&self, label: &str) -> bool {
        self.state.update_if(|b| {
            if b.label == label {
                return false;
            }
            label.clone_into(&mut b.label);
            true
        })
    }

    /// Is the button held down?
    pub fn is_pressed(&self) -> bool {
        self.state.with(|l| l.data.pressed)
    }

    /// Set the pressed state.
    pub fn set_pressed(&self, pressed: bool) -> bool {
        self.state.update_if(|b| {
            let changed = b.pressed != pressed;
            b.pressed = pressed;
            changed
        })
    }

    /// Toggle the pressed state.
    pub fn press(&self) {
        self.state.update(|b| b.pressed = !b.pressed);
    }
}

impl Widget for Button {
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

    fn accept_focus(&self) -> bool {
        true
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &DrawContext) -> Result<()> {
        let focused = ctx.is_focused(self.id());
        self.state.with(|l| -> Result<()> {
            if !l.rect.is_drawable() {
                return Ok(());
            }
            let style = match (l.data.pressed, focused) {
                (true, _) => "button/pressed",
                (false, true) => "button/focused",
                (false, false) => "button",
            };
            surface.fill(l.rect, ' ', style);
            surface.text(l.rect.line(0)?, &format!("[{}]", l.data.label), style);
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
