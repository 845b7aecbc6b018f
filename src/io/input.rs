use anyhow::{Context, Result};
use serde_json::Value;

use crate::domain::{FieldObject, parse_field_object};

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::from_str::<toml::Table>(contents)
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Parse a field descriptor document.
pub fn field_from_str(contents: &str, format: DocumentFormat) -> Result<FieldObject> {
    let value = parse_document_str(contents, format)?;
    parse_field_object(&value).context("invalid field descriptor")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldType;

    #[test]
    fn parse_json_documents() {
        let raw = "{\"enabled\":true}";
        let parsed = parse_document_str(raw, DocumentFormat::Json).unwrap();
        assert_eq!(parsed["enabled"], Value::Bool(true));
    }

    #[test]
    fn parses_field_descriptor() {
        let raw = r#"{"id": "email", "type": "email", "placeholder": "Email", "required": true}"#;
        let field = field_from_str(raw, DocumentFormat::Json).unwrap();
        assert_eq!(field.kind, FieldType::Input("email".into()));
        assert_eq!(field.placeholder_text(), Some("Email"));
    }

    #[test]
    fn reports_descriptor_problems() {
        let err = field_from_str(r#"{"id": "", "type": "text"}"#, DocumentFormat::Json)
            .unwrap_err();
        assert!(format!("{err:#}").contains("empty id"));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn parse_yaml_descriptor() {
        let raw = "id: size\ntype: select\noptions: [S, M, L]";
        let field = field_from_str(raw, DocumentFormat::Yaml).unwrap();
        assert_eq!(field.option_list(), ["S", "M", "L"]);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parse_toml_descriptor() {
        let raw = "id = \"bio\"\ntype = \"textarea\"\nplaceholder = \"Bio\"";
        let field = field_from_str(raw, DocumentFormat::Toml).unwrap();
        assert_eq!(field.kind, FieldType::TextArea);
    }
}
