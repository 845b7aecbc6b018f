mod input;
mod render;
mod validation;
mod view;

pub use render::{Control, FieldRender, FloatingLabel, SelectOption, TEXTAREA_ROWS};
pub use validation::{has_error, is_valid_email};
pub use view::{FieldEvent, FieldView};
