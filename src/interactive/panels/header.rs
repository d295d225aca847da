use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::formatting::truncate;
use crate::interactive::app::{InteractiveApp, View};
use crate::store::StorageBackend;

pub fn draw_header<B: StorageBackend, S>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B, S>) {
    let width = area.width as usize;

    let mut left = vec![Span::styled(
        format!(" 📚 {} ", app.student.display_name()),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    for view in [View::Catalog, View::Library] {
        let style = if view == app.view {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        left.push(Span::styled(format!(" {} ", view.title()), style));
        left.push(Span::raw(" "));
    }

    let mut right = Vec::new();
    if !app.filter.query.is_empty() {
        right.push(Span::styled(
            format!("search:{} ", truncate(&app.filter.query, 16)),
            Style::default().fg(Color::Yellow),
        ));
    }
    let level = app
        .filter
        .level
        .map_or_else(|| "all".to_string(), |l| l.to_string());
    right.push(Span::styled(
        format!("level:{} ", level),
        Style::default().fg(Color::DarkGray),
    ));

    let left_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let right_len: usize = right.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_len + right_len);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(right);

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(20, 22, 30)));
    frame.render_widget(header, area);
}
