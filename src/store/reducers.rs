use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::actions::FormAction;

/// The shared id → value mapping. Ids keep the order of their first write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSlice {
    values: IndexMap<String, String>,
}

impl FormSlice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(id, value)| (id.as_str(), value.as_str()))
    }

    pub fn to_value(&self) -> Value {
        let map = self
            .values
            .iter()
            .map(|(id, value)| (id.clone(), Value::String(value.clone())))
            .collect::<Map<_, _>>();
        Value::Object(map)
    }
}

pub fn reduce(slice: &mut FormSlice, action: FormAction) {
    match action {
        FormAction::UpdateField(update) => {
            slice.values.insert(update.id, update.value);
        }
        FormAction::ResetForm => slice.values.clear(),
    }
}
