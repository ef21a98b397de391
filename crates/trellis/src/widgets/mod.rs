//! Reference leaf widgets.

mod button;
mod text;

pub use button::Button;
pub use text::Text;
