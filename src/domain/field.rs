use std::fmt;

use serde::{Deserialize, Serialize};

/// Static description of one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldObject {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl FieldObject {
    pub fn new(id: impl Into<String>, kind: impl Into<FieldType>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            placeholder: None,
            required: None,
            options: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// Options for a select; empty when none were given.
    pub fn option_list(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }

    /// Placeholder text, ignoring an empty string.
    pub fn placeholder_text(&self) -> Option<&str> {
        self.placeholder.as_deref().filter(|text| !text.is_empty())
    }
}

/// Widget kind. Anything other than `select` and `textarea` is a single-line
/// input whose native subtype is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Select,
    TextArea,
    Input(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Select => "select",
            FieldType::TextArea => "textarea",
            FieldType::Input(subtype) => subtype,
        }
    }

    pub fn is_email(&self) -> bool {
        matches!(self, FieldType::Input(subtype) if subtype == "email")
    }

    pub fn is_input(&self) -> bool {
        matches!(self, FieldType::Input(_))
    }
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "select" => FieldType::Select,
            "textarea" => FieldType::TextArea,
            _ => FieldType::Input(value),
        }
    }
}

impl From<&str> for FieldType {
    fn from(value: &str) -> Self {
        FieldType::from(value.to_string())
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        match value {
            FieldType::Input(subtype) => subtype,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
