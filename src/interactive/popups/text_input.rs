use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::{InteractiveApp, Popup, TextInputContext};
use crate::interactive::layout::centered_popup;
use crate::store::StorageBackend;

/// Single-line input for the title search and the dictionary.
pub fn draw<B: StorageBackend, S>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B, S>) {
    let Some(Popup::TextInput(ctx)) = &app.popup else {
        return;
    };

    let (title, hints) = match ctx {
        TextInputContext::Search => ("Search titles", "Enter: Apply  Esc: Cancel"),
        TextInputContext::Dictionary => ("Dictionary", "Enter: Look up  Esc: Cancel"),
    };

    let popup_area = centered_popup(60, 5, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let input = &app.text_input;
    let cursor_pos = app.text_cursor.min(input.len());
    let (before, after) = input.split_at(cursor_pos);
    let cursor_char = after.chars().next().unwrap_or(' ');
    let rest = after.get(cursor_char.len_utf8()..).unwrap_or("");

    let input_line = Line::from(vec![
        Span::styled(before, Style::default().fg(Color::White)),
        Span::styled(
            cursor_char.to_string(),
            Style::default()
                .fg(Color::Rgb(0, 0, 0))
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(rest, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(
        Paragraph::new(input_line),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))),
        hints_area,
    );
}
