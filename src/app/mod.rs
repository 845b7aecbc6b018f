mod field_ui;
mod input;
mod options;
mod runtime;
mod status;
mod terminal;

pub use field_ui::FieldUI;
pub use options::UiOptions;
