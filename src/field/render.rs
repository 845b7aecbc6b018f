/// Rows shown by a textarea control.
pub const TEXTAREA_ROWS: u16 = 4;

/// Everything one frame of a field shows. Rebuilt on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRender {
    pub id: String,
    pub control: Control,
    pub value: String,
    pub required: bool,
    pub has_error: bool,
    pub label: Option<FloatingLabel>,
    /// Identifier external tooling uses to find the control.
    pub test_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Select {
        options: Vec<SelectOption>,
        selected: Option<usize>,
    },
    TextArea {
        rows: u16,
    },
    Input {
        subtype: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn enabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingLabel {
    pub text: String,
    /// Raised above the control once the field holds a value.
    pub raised: bool,
    /// Textarea labels carry `{id}-textarea`; input labels carry none.
    pub test_id: Option<String>,
}

impl FieldRender {
    pub fn is_select(&self) -> bool {
        matches!(self.control, Control::Select { .. })
    }

    pub fn is_textarea(&self) -> bool {
        matches!(self.control, Control::TextArea { .. })
    }

    pub fn is_input(&self) -> bool {
        matches!(self.control, Control::Input { .. })
    }

    pub fn options(&self) -> &[SelectOption] {
        match &self.control {
            Control::Select { options, .. } => options,
            _ => &[],
        }
    }

    pub fn selected_option(&self) -> Option<&SelectOption> {
        match &self.control {
            Control::Select { options, selected } => selected.and_then(|idx| options.get(idx)),
            _ => None,
        }
    }

    /// Rows a host should give this field, borders included.
    pub fn preferred_height(&self) -> u16 {
        let inner = match &self.control {
            Control::Select { options, .. } => options.len().max(1) as u16,
            Control::TextArea { rows } => *rows,
            Control::Input { .. } => 1,
        };
        inner.saturating_add(2)
    }
}
