use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Next raw value after a key press in a text control, `None` when the key
/// does not edit.
pub(crate) fn edit_text(current: &str, key: &KeyEvent, multiline: bool) -> Option<String> {
    match key.code {
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return None;
            }
            let mut next = current.to_string();
            next.push(ch);
            Some(next)
        }
        KeyCode::Enter if multiline => {
            let mut next = current.to_string();
            next.push('\n');
            Some(next)
        }
        KeyCode::Backspace => {
            let mut next = current.to_string();
            next.pop()?;
            Some(next)
        }
        KeyCode::Delete => (!current.is_empty()).then(String::new),
        _ => None,
    }
}

/// Option `delta` steps away from `current`, wrapping at both ends. From no
/// selection, forward lands on the first option and backward on the last.
pub(crate) fn step_option(options: &[String], current: &str, delta: i32) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    let len = options.len() as i64;
    let next = match options.iter().position(|option| option == current) {
        Some(idx) => (idx as i64 + delta as i64).rem_euclid(len),
        None if delta >= 0 => 0,
        None => len - 1,
    };
    let candidate = &options[next as usize];
    (candidate != current).then(|| candidate.clone())
}

pub(crate) fn select_delta(key: &KeyEvent) -> Option<i32> {
    match key.code {
        KeyCode::Up | KeyCode::Left => Some(-1),
        KeyCode::Down | KeyCode::Right => Some(1),
        _ => None,
    }
}
