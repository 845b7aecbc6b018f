use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy)]
pub enum KeyCommand {
    Finish,
    Quit,
    ToggleFocus,
    Edit(KeyEvent),
}

/// `multiline` controls use Enter for newlines, so only Ctrl+S finishes them.
pub fn classify(key: &KeyEvent, multiline: bool) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Finish,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            _ => KeyCommand::Edit(*key),
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => KeyCommand::ToggleFocus,
        KeyCode::Esc => KeyCommand::Quit,
        KeyCode::Enter if !multiline => KeyCommand::Finish,
        _ => KeyCommand::Edit(*key),
    }
}
