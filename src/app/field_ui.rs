use anyhow::Result;
use serde_json::Value;

use crate::{
    domain::FieldObject,
    field::FieldView,
    io::{self, OutputOptions},
    store::MemoryStore,
};

use super::{options::UiOptions, runtime::App};

/// Mounts one field in the terminal and returns the store snapshot once the
/// user finishes.
#[derive(Debug)]
pub struct FieldUI {
    field: FieldObject,
    initial_value: Option<String>,
    title: Option<String>,
    options: UiOptions,
    output: Option<OutputOptions>,
}

impl FieldUI {
    pub fn new(field: FieldObject) -> Self {
        Self {
            field,
            initial_value: None,
            title: None,
            options: UiOptions::default(),
            output: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = Some(output);
        self
    }

    pub fn run(self) -> Result<Value> {
        let FieldUI {
            field,
            initial_value,
            title,
            options,
            output,
        } = self;

        let mut store = MemoryStore::new();
        if let Some(value) = initial_value {
            store = store.with_value(field.id.clone(), value);
        }

        let mut app = App::new(FieldView::new(field), store, options, title);
        let value = app.run()?;
        if let Some(output) = output {
            io::emit(&value, &output)?;
        }
        Ok(value)
    }
}
