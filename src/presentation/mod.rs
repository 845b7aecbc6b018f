mod field;
mod footer;
mod view;

pub use field::{FieldWidget, border_style, cursor_position, field_lines, render_field};
pub use view::{UiContext, draw};
