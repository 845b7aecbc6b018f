use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::field::FieldObject;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("field descriptor is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("field descriptor has an empty id")]
    EmptyId,
}

/// Parse a JSON value into a `FieldObject`.
pub fn parse_field_object(value: &Value) -> Result<FieldObject, DescriptorError> {
    let field = FieldObject::deserialize(value)?;
    if field.id.trim().is_empty() {
        return Err(DescriptorError::EmptyId);
    }
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldType;
    use serde_json::json;

    #[test]
    fn accepts_minimal_descriptor() {
        let field = parse_field_object(&json!({"id": "email", "type": "email"})).unwrap();
        assert_eq!(field.id, "email");
        assert_eq!(field.kind, FieldType::Input("email".into()));
    }

    #[test]
    fn select_without_options_is_not_an_error() {
        let field = parse_field_object(&json!({"id": "size", "type": "select"})).unwrap();
        assert!(field.option_list().is_empty());
    }

    #[test]
    fn rejects_blank_id() {
        let err = parse_field_object(&json!({"id": "  ", "type": "text"})).unwrap_err();
        assert!(matches!(err, DescriptorError::EmptyId));
    }

    #[test]
    fn rejects_missing_type() {
        let err = parse_field_object(&json!({"id": "name"})).unwrap_err();
        assert!(matches!(err, DescriptorError::Malformed(_)));
        assert!(err.to_string().contains("malformed"));
    }
}
