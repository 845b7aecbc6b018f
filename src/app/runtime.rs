use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use serde_json::Value;
use tracing::info;

use crate::{
    domain::FieldType,
    field::{FieldEvent, FieldView},
    presentation::{self, UiContext},
    store::MemoryStore,
};

use super::{
    input::{KeyCommand, classify},
    options::UiOptions,
    status::StatusLine,
    terminal::TerminalSession,
};

const HELP_TEXT: &str = "Tab focus • type to edit • ↑/↓ choose • Ctrl+S finish • Esc quit";

pub(crate) struct App {
    view: FieldView,
    store: MemoryStore,
    options: UiOptions,
    title: Option<String>,
    status: StatusLine,
    focused: bool,
    should_quit: bool,
    result: Option<Value>,
}

impl App {
    pub fn new(
        view: FieldView,
        store: MemoryStore,
        options: UiOptions,
        title: Option<String>,
    ) -> Self {
        let focus_on_start = options.focus_on_start;
        let mut app = Self {
            view,
            store,
            options,
            title,
            status: StatusLine::new(),
            focused: false,
            should_quit: false,
            result: None,
        };
        if focus_on_start {
            app.set_focus(true);
        }
        app
    }

    pub fn run(&mut self) -> Result<Value> {
        let mut terminal = TerminalSession::enter()?;
        info!(id = %self.view.id(), "field ui started");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(_, _) | Event::Mouse(_) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        drop(terminal);

        let outcome = self.result.take();
        info!(id = %self.view.id(), finished = outcome.is_some(), "field ui closed");
        outcome.ok_or_else(|| anyhow!("user exited without finishing"))
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let render = self.view.render(&self.store);
        let help = self.options.show_help.then_some(HELP_TEXT);
        presentation::draw(
            frame,
            UiContext {
                title: self.title.as_deref(),
                render: &render,
                focused: self.focused,
                status_message: self.status.message(),
                help,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let multiline = self.view.field().kind == FieldType::TextArea;
        match classify(&key, multiline) {
            KeyCommand::Finish => self.on_finish(),
            KeyCommand::Quit => self.on_quit(),
            KeyCommand::ToggleFocus => self.set_focus(!self.focused),
            KeyCommand::Edit(key) => self.on_edit(key),
        }
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
        if focused {
            self.view.handle_event(&mut self.store, FieldEvent::Focus);
            let label = self.label();
            self.status.editing(&label);
        } else {
            self.status.ready();
        }
    }

    fn on_edit(&mut self, key: KeyEvent) {
        if !self.focused {
            self.set_focus(true);
        }
        if self.view.handle_key(&mut self.store, &key) {
            self.status.value_updated();
        }
    }

    fn on_finish(&mut self) {
        if !self.focused {
            self.set_focus(true);
        }
        if self.view.render(&self.store).has_error {
            let label = self.label();
            self.status.needs_attention(&label);
            return;
        }
        let mut snapshot = self.store.snapshot();
        if let Value::Object(map) = &mut snapshot {
            map.entry(self.view.id().to_string())
                .or_insert_with(|| Value::String(String::new()));
        }
        self.result = Some(snapshot);
        self.should_quit = true;
    }

    fn on_quit(&mut self) {
        self.result = None;
        self.should_quit = true;
    }

    fn label(&self) -> String {
        let field = self.view.field();
        field
            .placeholder_text()
            .unwrap_or(field.id.as_str())
            .to_string()
    }
}
