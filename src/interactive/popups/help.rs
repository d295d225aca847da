use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::centered_popup;
use crate::store::StorageBackend;

const SHORTCUTS: [(&str, &str, &str, &str); 6] = [
    ("j/k", "Move up/down", "r", "Start reading"),
    ("Tab", "Catalog/Library", "c", "Mark complete"),
    ("/", "Search titles", "x", "Remove from list"),
    ("l", "Cycle level", "w", "Word help"),
    ("Esc", "Clear filters", "d", "Dictionary"),
    ("?", "This help", "q", "Quit"),
];

/// Keyboard shortcuts overlay.
pub fn draw<B: StorageBackend, S>(frame: &mut Frame, area: Rect, _app: &InteractiveApp<B, S>) {
    let popup_area = centered_popup(56, 12, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let header_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<24}", "Browse"), header_style),
            Span::styled("Books", header_style),
        ]),
        Line::from(Span::styled(
            format!("{:<24}{}", "─".repeat(6), "─".repeat(5)),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    lines.extend(SHORTCUTS.iter().map(|(nav_key, nav_desc, act_key, act_desc)| {
        Line::from(vec![
            Span::styled(format!("{:<6}", nav_key), key_style),
            Span::styled(format!("{:<18}", nav_desc), desc_style),
            Span::styled(format!("{:<3}", act_key), key_style),
            Span::styled(*act_desc, desc_style),
        ])
    }));

    let content_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height.saturating_sub(1));
    frame.render_widget(Paragraph::new(lines), content_area);

    let footer_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        ))),
        footer_area,
    );
}
