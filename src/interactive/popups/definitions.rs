use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::client::{DictionaryLookup, WordHelp};
use crate::formatting::dictionary_url;
use crate::interactive::app::{InteractiveApp, ModalBody, Popup};
use crate::interactive::layout::centered_popup;
use crate::store::StorageBackend;

fn error_line(message: String) -> Line<'static> {
    Line::from(Span::styled(message, Style::default().fg(Color::Red)))
}

fn word_lines(word: &str, definition: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                word.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(": "),
            Span::styled(definition.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            format!("  {}", dictionary_url(word)),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn body_lines(body: &ModalBody) -> Vec<Line<'static>> {
    match body {
        ModalBody::Loading => vec![Line::from(Span::styled(
            "⟳ Looking it up...",
            Style::default().fg(Color::Yellow),
        ))],
        ModalBody::WordHelp(WordHelp::NoExcerpt) => vec![error_line(
            "This book has no excerpt yet, so there are no word hints.".to_string(),
        )],
        ModalBody::WordHelp(WordHelp::Failed(e)) => {
            vec![error_line(format!("Could not get the word list: {}", e))]
        }
        ModalBody::WordHelp(WordHelp::Definitions(definitions)) if definitions.is_empty() => {
            vec![Line::from("No hard words found. Looks like you know them all!")]
        }
        ModalBody::WordHelp(WordHelp::Definitions(definitions)) => definitions
            .iter()
            .flat_map(|d| word_lines(&d.word, &d.definition))
            .collect(),
        ModalBody::Dictionary(DictionaryLookup::EmptyInput) => {
            vec![error_line("Type a word to look up.".to_string())]
        }
        ModalBody::Dictionary(DictionaryLookup::Failed(e)) => {
            vec![error_line(format!("Could not look that word up: {}", e))]
        }
        ModalBody::Dictionary(DictionaryLookup::Definition { word, text }) => {
            let mut lines = vec![Line::from(Span::styled(
                word.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))];
            lines.extend(text.lines().map(|l| Line::from(l.to_string())));
            lines.push(Line::from(Span::styled(
                dictionary_url(word),
                Style::default().fg(Color::DarkGray),
            )));
            lines
        }
    }
}

/// Modal for word help and dictionary results.
pub fn draw<B: StorageBackend, S>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B, S>) {
    let Some(Popup::Definitions(modal)) = &app.popup else {
        return;
    };

    let width = area.width.saturating_sub(10).min(80);
    let height = area.height.saturating_sub(4).min(24);
    let popup_area = centered_popup(width, height, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", modal.title))
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height.saturating_sub(1));
    let content = Paragraph::new(body_lines(&modal.body))
        .wrap(Wrap { trim: false })
        .scroll((modal.scroll, 0));
    frame.render_widget(content, content_area);

    let footer_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "j/k: Scroll  Esc: Close",
            Style::default().fg(Color::DarkGray),
        ))),
        footer_area,
    );
}
