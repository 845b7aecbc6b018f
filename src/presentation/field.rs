use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use textwrap::wrap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::field::{Control, FieldRender, SelectOption};

const PASSWORD_MASK: char = '•';

/// Draws one field: a bordered box whose border reflects focus and error
/// state, with the floating label in the border once it is raised.
pub struct FieldWidget<'a> {
    render: &'a FieldRender,
    focused: bool,
}

impl<'a> FieldWidget<'a> {
    pub fn new(render: &'a FieldRender) -> Self {
        Self {
            render,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for FieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = field_block(self.render, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(field_lines(self.render, inner.width, inner.height)).render(inner, buf);
    }
}

pub fn render_field(frame: &mut Frame<'_>, area: Rect, render: &FieldRender, focused: bool) {
    frame.render_widget(FieldWidget::new(render).focused(focused), area);
    if focused && let Some(position) = cursor_position(render, area) {
        frame.set_cursor_position(position);
    }
}

pub fn border_style(render: &FieldRender, focused: bool) -> Style {
    if render.has_error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(render: &FieldRender, focused: bool) -> Block<'static> {
    let style = border_style(render, focused);
    let mut block = Block::default().borders(Borders::ALL).border_style(style);
    if let Some(label) = render.label.as_ref().filter(|label| label.raised) {
        let label_style = if render.has_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Cyan)
        };
        block = block.title_top(Line::from(Span::styled(
            format!(" {} ", label.text),
            label_style,
        )));
    }
    if render.required {
        block = block.title_top(Line::from(Span::styled(" * ", style)).right_aligned());
    }
    block
}

/// Lines drawn inside the border for a `width` × `height` inner area.
pub fn field_lines(render: &FieldRender, width: u16, height: u16) -> Vec<Line<'static>> {
    match &render.control {
        Control::Select { options, selected } => select_lines(options, *selected, height),
        Control::TextArea { rows } => textarea_lines(render, width, height.min(*rows)),
        Control::Input { subtype } => vec![input_line(render, subtype, width)],
    }
}

fn input_line(render: &FieldRender, subtype: &str, width: u16) -> Line<'static> {
    if render.value.is_empty() {
        return placeholder_line(render);
    }
    let shown = display_text(&render.value, subtype);
    Line::from(Span::styled(
        tail_fit(&shown, width as usize),
        value_style(),
    ))
}

fn textarea_lines(render: &FieldRender, width: u16, rows: u16) -> Vec<Line<'static>> {
    if render.value.is_empty() {
        return vec![placeholder_line(render)];
    }
    let wrapped = wrap_multiline(&render.value, width.max(1) as usize);
    let skip = wrapped.len().saturating_sub(rows as usize);
    wrapped
        .into_iter()
        .skip(skip)
        .map(|line| Line::from(Span::styled(line, value_style())))
        .collect()
}

fn select_lines(options: &[SelectOption], selected: Option<usize>, height: u16) -> Vec<Line<'static>> {
    if options.is_empty() {
        return vec![Line::from(Span::styled(
            "  (no options)",
            Style::default().fg(Color::Gray),
        ))];
    }
    let window = (height as usize).max(1);
    let start = match selected {
        Some(idx) if idx >= window => idx + 1 - window,
        _ => 0,
    };
    options
        .iter()
        .enumerate()
        .skip(start)
        .take(window)
        .map(|(idx, option)| {
            let is_selected = selected == Some(idx);
            let marker = if is_selected { "» " } else { "  " };
            let style = if option.disabled {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(option.label.clone(), style),
            ])
        })
        .collect()
}

fn placeholder_line(render: &FieldRender) -> Line<'static> {
    match &render.label {
        Some(label) if !label.raised => Line::from(Span::styled(
            label.text.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
        _ => Line::default(),
    }
}

fn value_style() -> Style {
    Style::default().fg(Color::White)
}

fn display_text(value: &str, subtype: &str) -> String {
    if subtype == "password" {
        value.chars().map(|_| PASSWORD_MASK).collect()
    } else {
        value.to_string()
    }
}

fn wrap_multiline(value: &str, width: usize) -> Vec<String> {
    value
        .split('\n')
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// Word-wraps one line without losing the spaces typed at its end.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut wrapped: Vec<String> = wrap(line, width)
        .into_iter()
        .map(|segment| segment.into_owned())
        .collect();
    let body = line.trim_end_matches(' ');
    // textwrap drops trailing spaces; they are part of the value, so put them back.
    for ch in line[body.len()..].chars() {
        match wrapped.last_mut() {
            Some(last) if UnicodeWidthStr::width(last.as_str()) < width => last.push(ch),
            _ => wrapped.push(ch.to_string()),
        }
    }
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }
    wrapped
}

/// Longest suffix of `text` that fits in `width` columns.
fn tail_fit(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let mut used = 0usize;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        start = idx;
    }
    text[start..].to_string()
}

/// Terminal cursor for a text control drawn in `area`.
pub fn cursor_position(render: &FieldRender, area: Rect) -> Option<(u16, u16)> {
    let inner_x = area.x.saturating_add(1);
    let inner_y = area.y.saturating_add(1);
    let inner_width = area.width.saturating_sub(2);
    if inner_width == 0 || area.height < 3 {
        return None;
    }
    let max_x = inner_x + inner_width - 1;
    match &render.control {
        Control::Select { .. } => None,
        Control::Input { subtype } => {
            let shown = display_text(&render.value, subtype);
            let width = UnicodeWidthStr::width(tail_fit(&shown, inner_width as usize).as_str());
            Some(((inner_x + width as u16).min(max_x), inner_y))
        }
        Control::TextArea { rows } => {
            if render.value.is_empty() {
                return Some((inner_x, inner_y));
            }
            let visible = (*rows).min(area.height.saturating_sub(2)) as usize;
            let wrapped = wrap_multiline(&render.value, inner_width as usize);
            let line = wrapped.len().min(visible.max(1)) - 1;
            let width = wrapped
                .last()
                .map(|text| UnicodeWidthStr::width(text.as_str()))
                .unwrap_or(0);
            Some(((inner_x + width as u16).min(max_x), inner_y + line as u16))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldObject;
    use crate::field::FieldView;
    use crate::store::{FormStore, MemoryStore};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(render: &FieldRender, focused: bool, width: u16) -> Vec<String> {
        let height = render.preferred_height();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_field(frame, area, render, focused);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn unraised_label_sits_inside_the_box() {
        let store = MemoryStore::new();
        let view = FieldView::new(FieldObject::new("name", "text").with_placeholder("Name"));
        let rows = draw(&view.render(&store), false, 20);
        assert_eq!(rows.len(), 3);
        assert!(!rows[0].contains("Name"));
        assert!(rows[1].contains("Name"));
    }

    #[test]
    fn raised_label_moves_to_the_border() {
        let store = MemoryStore::new().with_value("name", "Ada");
        let view = FieldView::new(FieldObject::new("name", "text").with_placeholder("Name"));
        let rows = draw(&view.render(&store), false, 20);
        assert!(rows[0].contains("Name"));
        assert!(rows[1].contains("Ada"));
    }

    #[test]
    fn error_state_colors_the_border() {
        let mut store = MemoryStore::new();
        let mut view = FieldView::new(FieldObject::new("name", "text").with_required(true));
        assert_eq!(
            border_style(&view.render(&store), false).fg,
            Some(Color::DarkGray)
        );
        assert_eq!(
            border_style(&view.render(&store), true).fg,
            Some(Color::Yellow)
        );
        view.focus();
        assert_eq!(border_style(&view.render(&store), true).fg, Some(Color::Red));
        store.set("name", "x");
        assert_eq!(
            border_style(&view.render(&store), true).fg,
            Some(Color::Yellow)
        );
    }

    #[test]
    fn required_marker_in_border() {
        let store = MemoryStore::new();
        let view = FieldView::new(FieldObject::new("name", "text").with_required(true));
        let rows = draw(&view.render(&store), false, 20);
        assert!(rows[0].contains('*'));
    }

    #[test]
    fn required_marker_stays_beside_a_raised_label() {
        let store = MemoryStore::new().with_value("name", "Ada");
        let view = FieldView::new(
            FieldObject::new("name", "text")
                .with_placeholder("Name")
                .with_required(true),
        );
        let rows = draw(&view.render(&store), false, 20);
        let label = rows[0].find("Name").expect("raised label");
        let marker = rows[0].find('*').expect("required marker");
        assert!(label < marker);
        assert!(rows[0].trim_end_matches('┐').ends_with("* "));

        let optional = FieldView::new(FieldObject::new("name", "text").with_placeholder("Name"));
        assert!(!draw(&optional.render(&store), false, 20)[0].contains('*'));
    }

    #[test]
    fn select_marks_current_option() {
        let store = MemoryStore::new().with_value("size", "B");
        let view = FieldView::new(
            FieldObject::new("size", "select")
                .with_placeholder("Pick one")
                .with_options(["A", "B"]),
        );
        let render = view.render(&store);
        let lines = field_lines(&render, 20, 3);
        let texts: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        assert_eq!(texts, ["  Pick one", "  A", "» B"]);
    }

    #[test]
    fn select_without_placeholder_marks_nothing_until_chosen() {
        let mut store = MemoryStore::new();
        let mut view = FieldView::new(FieldObject::new("size", "select").with_options(["A", "B"]));
        let texts = |render: &FieldRender| -> Vec<String> {
            field_lines(render, 20, 2)
                .iter()
                .map(|line| line.to_string())
                .collect()
        };
        assert_eq!(texts(&view.render(&store)), ["  A", "  B"]);

        let down = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Down,
            crossterm::event::KeyModifiers::NONE,
        );
        assert!(view.handle_key(&mut store, &down));
        assert_eq!(store.get("size"), "A");
        assert_eq!(texts(&view.render(&store)), ["» A", "  B"]);
    }

    #[test]
    fn password_is_masked() {
        let store = MemoryStore::new().with_value("pw", "secret");
        let view = FieldView::new(FieldObject::new("pw", "password"));
        let rows = draw(&view.render(&store), true, 20);
        assert!(!rows[1].contains("secret"));
        assert!(rows[1].contains("••••••"));
    }

    #[test]
    fn long_input_shows_its_tail() {
        assert_eq!(tail_fit("abcdef", 3), "def");
        assert_eq!(tail_fit("abc", 3), "abc");
        assert_eq!(tail_fit("日本語", 3), "語");
    }

    #[test]
    fn textarea_keeps_the_last_rows() {
        let store = MemoryStore::new().with_value("bio", "1\n2\n3\n4\n5\n6");
        let view = FieldView::new(FieldObject::new("bio", "textarea"));
        let render = view.render(&store);
        let texts: Vec<String> = field_lines(&render, 10, 4)
            .iter()
            .map(|line| line.to_string())
            .collect();
        assert_eq!(texts, ["3", "4", "5", "6"]);
    }

    #[test]
    fn textarea_shows_trailing_spaces() {
        let view = FieldView::new(FieldObject::new("bio", "textarea"));
        let area = Rect::new(0, 0, 12, 6);

        let plain = view.render(&MemoryStore::new().with_value("bio", "ab"));
        let spaced = view.render(&MemoryStore::new().with_value("bio", "ab "));
        let texts: Vec<String> = field_lines(&spaced, 10, 4)
            .iter()
            .map(|line| line.to_string())
            .collect();
        assert_eq!(texts, ["ab "]);
        assert_eq!(cursor_position(&plain, area), Some((3, 1)));
        assert_eq!(cursor_position(&spaced, area), Some((4, 1)));

        let wide = view.render(&MemoryStore::new().with_value("bio", "ab  "));
        assert_eq!(cursor_position(&wide, area), Some((5, 1)));
        assert_eq!(wrap_multiline("abcd  ", 5), ["abcd ", " "]);
    }

    #[test]
    fn cursor_follows_input_value() {
        let store = MemoryStore::new().with_value("name", "Ada");
        let view = FieldView::new(FieldObject::new("name", "text"));
        let area = Rect::new(0, 0, 20, 3);
        assert_eq!(cursor_position(&view.render(&store), area), Some((4, 1)));
    }

    #[test]
    fn select_has_no_cursor() {
        let store = MemoryStore::new();
        let view = FieldView::new(FieldObject::new("size", "select").with_options(["A"]));
        let area = Rect::new(0, 0, 20, 3);
        assert_eq!(cursor_position(&view.render(&store), area), None);
    }
}
