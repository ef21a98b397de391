//! Debug rendering of widget trees.

use std::io::Write;

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::{Result, state::WidgetId, widget::Widget};

/// Traverses a widget tree and returns a string showing each widget's name,
/// ID, rectangle and dirty state, indented by depth. The widget holding focus
/// is marked. With `colour` set, the output carries ANSI escapes. This is a
/// debug function.
pub fn dump(root: &dyn Widget, focused: Option<WidgetId>, colour: bool) -> Result<String> {
    let mut buffer = if colour {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };
    dump_widget(&mut buffer, root, focused, 0)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Write a coloured marker after a widget's label.
fn marker(buffer: &mut Buffer, colour: Color, txt: &str) -> Result<()> {
    buffer.set_color(ColorSpec::new().set_fg(Some(colour)))?;
    write!(buffer, " {txt}")?;
    buffer.reset()?;
    Ok(())
}

/// Dump one widget and its subtree.
fn dump_widget(
    buffer: &mut Buffer,
    w: &dyn Widget,
    focused: Option<WidgetId>,
    level: usize,
) -> Result<()> {
    let indent = "    ".repeat(level);
    write!(buffer, "{indent}")?;

    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(buffer, "{}#{}", w.name(), w.id())?;
    buffer.reset()?;

    let r = w.rect();
    write!(buffer, " ({}, {}) {}x{}", r.tl.x, r.tl.y, r.w, r.h)?;
    if w.is_dirty() {
        marker(buffer, Color::Yellow, "dirty")?;
    }
    if focused == Some(w.id()) {
        marker(buffer, Color::Green, "focused")?;
    }
    writeln!(buffer)?;

    let mut ret = Ok(());
    w.children(&mut |c| {
        if ret.is_ok() {
            ret = dump_widget(buffer, c, focused, level + 1);
        }
    });
    ret
}
