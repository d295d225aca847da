pub mod confirm;
pub mod definitions;
pub mod help;
pub mod text_input;

use ratatui::{layout::Rect, Frame};

use crate::interactive::app::{InteractiveApp, Popup};
use crate::store::StorageBackend;

/// Draw the active popup, if any. Draws on top of everything.
pub fn draw_popup<B: StorageBackend, S>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B, S>) {
    let Some(popup) = &app.popup else { return };

    match popup {
        Popup::Confirmation(_) => confirm::draw(frame, area, app),
        Popup::TextInput(_) => text_input::draw(frame, area, app),
        Popup::Definitions(_) => definitions::draw(frame, area, app),
        Popup::Help => help::draw(frame, area, app),
    }
}
