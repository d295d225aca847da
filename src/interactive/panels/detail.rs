use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::list::shelf_style;
use crate::interactive::app::InteractiveApp;
use crate::store::StorageBackend;

pub fn draw_detail<B: StorageBackend, S>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B, S>) {
    if area.width == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Book ")
        .border_style(Style::default().fg(Color::DarkGray));

    let Some((shelf, book)) = app.selected_book() else {
        let empty = Paragraph::new("No book selected")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let label = Style::default().fg(Color::Gray);
    let (icon, color) = shelf_style(shelf);
    let mut lines = vec![
        Line::from(Span::styled(
            book.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if !book.author.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Author: ", label),
            Span::styled(book.author.clone(), Style::default().fg(Color::Cyan)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("Level:  ", label),
        Span::styled(book.level.to_string(), Style::default().fg(Color::Magenta)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Status: ", label),
        Span::styled(format!("{} {}", icon, shelf.label()), Style::default().fg(color)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Listen:", label)));
    lines.push(Line::from(Span::styled(
        app.listen_url(&book),
        Style::default().fg(Color::Blue),
    )));

    let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(detail, area);
}
