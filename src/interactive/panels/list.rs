use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::formatting::truncate;
use crate::interactive::app::InteractiveApp;
use crate::library::Shelf;
use crate::store::StorageBackend;

pub fn shelf_style(shelf: Shelf) -> (&'static str, Color) {
    match shelf {
        Shelf::InProgress => ("📖", Color::Yellow),
        Shelf::Completed => ("✅", Color::Green),
        Shelf::Available => ("  ", Color::White),
    }
}

pub fn draw_list<B: StorageBackend, S>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B, S>) {
    let rows = app.rows();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", app.view.title(), rows.len()))
        .border_style(Style::default().fg(Color::Cyan));

    if rows.is_empty() {
        let empty = Paragraph::new("No books match. Press Esc to clear the filters.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let title_width = (area.width as usize).saturating_sub(20);
    let items: Vec<ListItem> = rows
        .iter()
        .map(|(shelf, book)| {
            let (icon, color) = shelf_style(*shelf);
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", icon)),
                Span::styled(
                    format!("{:<width$}", truncate(&book.title, title_width), width = title_width),
                    Style::default().fg(color),
                ),
                Span::styled(format!(" {:>5}", book.level), Style::default().fg(Color::Magenta)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::Rgb(40, 44, 60))
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}
