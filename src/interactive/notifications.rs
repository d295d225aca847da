use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::app::{InteractiveApp, NotificationKind, NOTIFICATION_TTL};
use crate::store::StorageBackend;

/// Newest three notifications with their remaining lifetime.
pub fn draw<B: StorageBackend, S>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B, S>) {
    if app.notifications.is_empty() || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .notifications
        .iter()
        .rev()
        .take(3)
        .map(|n| {
            let (icon, color) = match n.kind {
                NotificationKind::Success => ("✓", Color::Green),
                NotificationKind::Error => ("✗", Color::Red),
                NotificationKind::Info => ("ⓘ", Color::Blue),
            };
            let remaining = NOTIFICATION_TTL
                .as_secs()
                .saturating_sub(n.created_at.elapsed().as_secs());
            Line::from(vec![
                Span::styled(
                    format!(" {} ", icon),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(n.message.clone(), Style::default().fg(color)),
                Span::styled(format!("  [{}s]", remaining), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
