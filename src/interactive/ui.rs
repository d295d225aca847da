use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::InteractiveApp;
use super::layout::{app_layout, panel_layout};
use super::{notifications, panels, popups};
use crate::store::StorageBackend;

pub fn draw<B: StorageBackend, S>(frame: &mut Frame, app: &InteractiveApp<B, S>) {
    let area = frame.size();
    let layout = app_layout(area, app.notifications.len());

    panels::header::draw_header(frame, layout.header, app);

    let panel = panel_layout(layout.main);
    panels::list::draw_list(frame, panel.list, app);
    panels::detail::draw_detail(frame, panel.detail, app);

    notifications::draw(frame, layout.notifications, app);
    draw_footer(frame, layout.footer);

    popups::draw_popup(frame, area, app);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let desc = Style::default().fg(Color::DarkGray);
    let hints = [
        ("Tab", "views"),
        ("/", "search"),
        ("l", "level"),
        ("r", "read"),
        ("c", "complete"),
        ("x", "remove"),
        ("w", "words"),
        ("d", "dictionary"),
        ("?", "help"),
        ("q", "quit"),
    ];

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(k, d)| {
            [
                Span::styled(format!(" {}", k), key),
                Span::styled(format!(":{} ", d), desc),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
