use serde_json::Value;
use tracing::debug;

use super::actions::FormAction;
use super::reducers::{FormSlice, reduce};
use super::{FieldUpdate, FormStore};

/// In-process store backed by a `FormSlice`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slice: FormSlice,
    revision: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.apply(FieldUpdate::new(id, value).into());
        self
    }

    pub fn apply(&mut self, action: FormAction) {
        debug!(?action, revision = self.revision + 1, "applying form action");
        reduce(&mut self.slice, action);
        self.revision += 1;
    }

    pub fn slice(&self) -> &FormSlice {
        &self.slice
    }

    /// Number of actions applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> Value {
        self.slice.to_value()
    }
}

impl FormStore for MemoryStore {
    fn get(&self, id: &str) -> String {
        self.slice.value(id).unwrap_or_default().to_string()
    }

    fn dispatch(&mut self, update: FieldUpdate) {
        self.apply(FormAction::UpdateField(update));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_ids_read_as_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nothing"), "");
    }

    #[test]
    fn set_dispatches_one_update() {
        let mut store = MemoryStore::new();
        store.set("name", "Ada");
        assert_eq!(store.get("name"), "Ada");
        assert_eq!(store.revision(), 1);
        assert_eq!(store.snapshot(), json!({"name": "Ada"}));
    }

    #[test]
    fn seeded_values_are_visible() {
        let store = MemoryStore::new().with_value("city", "Utrecht");
        assert_eq!(store.get("city"), "Utrecht");
    }
}
