use crossterm::event::KeyEvent;
use tracing::debug;

use crate::domain::{FieldObject, FieldType};
use crate::store::{FieldUpdate, FormStore};

use super::input::{edit_text, select_delta, step_option};
use super::render::{Control, FieldRender, FloatingLabel, SelectOption, TEXTAREA_ROWS};
use super::validation::has_error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Focus,
    Change(String),
}

/// One mounted field. Holds the descriptor and the touched flag; the value
/// always lives in the store.
#[derive(Debug, Clone)]
pub struct FieldView {
    field: FieldObject,
    touched: bool,
}

impl FieldView {
    pub fn new(field: FieldObject) -> Self {
        Self {
            field,
            touched: false,
        }
    }

    pub fn field(&self) -> &FieldObject {
        &self.field
    }

    pub fn id(&self) -> &str {
        &self.field.id
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Marks the field touched. Returns whether this was the first focus.
    pub fn focus(&mut self) -> bool {
        if self.touched {
            return false;
        }
        debug!(id = %self.field.id, "field touched");
        self.touched = true;
        true
    }

    /// Asks the store to set this field to `value`, untouched by trimming.
    pub fn change<S>(&self, store: &mut S, value: impl Into<String>)
    where
        S: FormStore + ?Sized,
    {
        let update = FieldUpdate::new(self.field.id.clone(), value);
        debug!(id = %update.id, len = update.value.len(), "dispatching field update");
        store.dispatch(update);
    }

    /// Returns whether the event changed anything.
    pub fn handle_event<S>(&mut self, store: &mut S, event: FieldEvent) -> bool
    where
        S: FormStore + ?Sized,
    {
        match event {
            FieldEvent::Focus => self.focus(),
            FieldEvent::Change(value) => {
                self.change(store, value);
                true
            }
        }
    }

    /// Translates a terminal key into field events. A key always focuses the
    /// field first; editing keys then dispatch the resulting value.
    pub fn handle_key<S>(&mut self, store: &mut S, key: &KeyEvent) -> bool
    where
        S: FormStore + ?Sized,
    {
        let focused = self.focus();
        let current = store.get(&self.field.id);
        let next = match &self.field.kind {
            FieldType::Select => select_delta(key)
                .and_then(|delta| step_option(self.field.option_list(), &current, delta)),
            FieldType::TextArea => edit_text(&current, key, true),
            FieldType::Input(_) => edit_text(&current, key, false),
        };
        match next {
            Some(value) => self.handle_event(store, FieldEvent::Change(value)),
            None => focused,
        }
    }

    pub fn render<S>(&self, store: &S) -> FieldRender
    where
        S: FormStore + ?Sized,
    {
        let field = &self.field;
        let value = store.get(&field.id);
        let placeholder = field.placeholder_text();

        let (control, test_id) = match &field.kind {
            FieldType::Select => (
                select_control(field.option_list(), placeholder, &value),
                Some(format!("{}-select", field.id)),
            ),
            FieldType::TextArea => (Control::TextArea { rows: TEXTAREA_ROWS }, None),
            FieldType::Input(subtype) => (
                Control::Input {
                    subtype: subtype.clone(),
                },
                Some(format!("{}-input", field.id)),
            ),
        };

        let label = match field.kind {
            FieldType::Select => None,
            _ => placeholder.map(|text| FloatingLabel {
                text: text.to_string(),
                raised: !value.is_empty(),
                test_id: (field.kind == FieldType::TextArea)
                    .then(|| format!("{}-textarea", field.id)),
            }),
        };

        FieldRender {
            id: field.id.clone(),
            has_error: has_error(field, self.touched, &value),
            required: field.is_required(),
            control,
            value,
            label,
            test_id,
        }
    }
}

fn select_control(options: &[String], placeholder: Option<&str>, value: &str) -> Control {
    let mut entries = Vec::with_capacity(options.len() + 1);
    if let Some(text) = placeholder {
        entries.push(SelectOption::disabled(text));
    }
    let offset = entries.len();
    entries.extend(options.iter().map(SelectOption::enabled));
    let selected = options
        .iter()
        .position(|option| option == value)
        .map(|idx| idx + offset)
        .or_else(|| placeholder.map(|_| 0));
    Control::Select {
        options: entries,
        selected,
    }
}
