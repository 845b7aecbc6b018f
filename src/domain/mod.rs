mod field;
mod parser;

pub use field::{FieldObject, FieldType};
pub use parser::{DescriptorError, parse_field_object};
