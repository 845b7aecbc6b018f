#![deny(rust_2018_idioms)]
//! A store-bound form field for terminal UIs.
//!
//! A [`FieldView`] renders one [`FieldObject`] as a single-line input, a
//! select or a textarea. It reads its value from a [`FormStore`] and writes
//! changes back through it; the only state it keeps is whether it has been
//! focused.

mod app;
mod domain;
mod field;
mod io;
mod presentation;
mod store;

pub use app::{FieldUI, UiOptions};
pub use domain::{DescriptorError, FieldObject, FieldType, parse_field_object};
pub use field::{
    Control, FieldEvent, FieldRender, FieldView, FloatingLabel, SelectOption, TEXTAREA_ROWS,
    has_error, is_valid_email,
};
pub use io::{
    DocumentFormat, OutputDestination, OutputOptions, emit, field_from_str, parse_document_str,
};
pub use presentation::{
    FieldWidget, UiContext, border_style, cursor_position, draw, field_lines, render_field,
};
pub use store::{FieldUpdate, FormAction, FormSlice, FormStore, MemoryStore, reduce};

pub mod prelude {
    pub use super::{FieldObject, FieldUI, FieldView, FormStore, MemoryStore, UiOptions};
}
