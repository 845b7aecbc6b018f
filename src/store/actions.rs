use serde::{Deserialize, Serialize};

/// Payload of a value change: set `id` to `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUpdate {
    pub id: String,
    pub value: String,
}

impl FieldUpdate {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    UpdateField(FieldUpdate),
    ResetForm,
}

impl From<FieldUpdate> for FormAction {
    fn from(update: FieldUpdate) -> Self {
        FormAction::UpdateField(update)
    }
}
