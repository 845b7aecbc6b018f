use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::view::UiContext;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let badge = if ctx.render.has_error {
        Span::styled("[invalid]", Style::default().fg(Color::Red))
    } else {
        Span::styled("[ok]", Style::default().fg(Color::Green))
    };
    let status = if ctx.status_message.trim().is_empty() {
        "Ready"
    } else {
        ctx.status_message
    };
    let status_widget = Paragraph::new(Line::from(vec![
        Span::raw("Status: "),
        Span::raw(status.to_string()),
        Span::raw(" "),
        badge,
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(status_widget, rows[0]);

    if let Some(help) = ctx.help {
        let help_widget = Paragraph::new(format!("Keys: {help}"))
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(help_widget, rows[1]);
    }
}
