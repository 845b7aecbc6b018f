use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::field::FieldRender;

use super::{field::render_field, footer::render_footer};

pub struct UiContext<'a> {
    pub title: Option<&'a str>,
    pub render: &'a FieldRender,
    pub focused: bool,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if ctx.title.is_some() { 1 } else { 0 }),
            Constraint::Length(ctx.render.preferred_height()),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(frame.area());

    if let Some(title) = ctx.title {
        let header = Paragraph::new(Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(header, chunks[0]);
    }

    render_field(frame, chunks[1], ctx.render, ctx.focused);
    render_footer(frame, chunks[3], &ctx);
}
