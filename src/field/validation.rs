use std::sync::LazyLock;

use regex::Regex;

use crate::domain::FieldObject;

/// Loose `local@domain.tld` shape. Advisory only.
const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Whether a field should be shown in its error state.
///
/// Only required fields that have been focused can be in error: an empty
/// value always is, and an email input also is when the value does not look
/// like an address.
pub fn has_error(field: &FieldObject, touched: bool, value: &str) -> bool {
    if !field.is_required() || !touched {
        return false;
    }
    value.is_empty() || (field.kind.is_email() && !is_valid_email(value))
}
