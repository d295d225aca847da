use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::interactive::app::{InteractiveApp, Popup};
use crate::interactive::layout::centered_popup;
use crate::store::StorageBackend;

/// Yes/no dialog in front of a destructive action.
pub fn draw<B: StorageBackend, S>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B, S>) {
    let Some(Popup::Confirmation(action)) = &app.popup else {
        return;
    };

    let popup_area = centered_popup(56, 6, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", action.title()))
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let message_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    let message = Paragraph::new(Line::from(Span::styled(
        action.message(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(message, message_area);

    let options_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let options = Line::from(vec![
        Span::styled("[", Style::default().fg(Color::DarkGray)),
        Span::styled("Y", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::styled("]es  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[", Style::default().fg(Color::DarkGray)),
        Span::styled("N", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled("]o", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(options), options_area);
}
