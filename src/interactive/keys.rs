use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interactive::app::Popup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    SwitchView,

    // Catalog filters
    Search,
    CycleLevel,
    ClearFilter,

    // Book actions
    Read,
    Complete,
    Remove,
    WordHelp,
    Dictionary,

    // Popups
    Confirm,
    Cancel,
    TypeChar(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // General
    Help,
    Quit,

    None,
}

pub fn map_key(key: KeyEvent, popup: &Option<Popup>) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    match popup {
        Some(popup) => map_popup_key(key, popup),
        None => map_list_key(key),
    }
}

fn map_list_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Tab | KeyCode::BackTab => Action::SwitchView,
        KeyCode::Char('/') => Action::Search,
        KeyCode::Char('l') => Action::CycleLevel,
        KeyCode::Esc => Action::ClearFilter,
        KeyCode::Char('r') | KeyCode::Enter => Action::Read,
        KeyCode::Char('c') => Action::Complete,
        KeyCode::Char('x') => Action::Remove,
        KeyCode::Char('w') => Action::WordHelp,
        KeyCode::Char('d') => Action::Dictionary,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_popup_key(key: KeyEvent, popup: &Popup) -> Action {
    match popup {
        Popup::Confirmation(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::Confirm,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::Cancel,
            _ => Action::None,
        },
        Popup::TextInput(_) => match key.code {
            KeyCode::Enter => Action::Confirm,
            KeyCode::Esc => Action::Cancel,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Left => Action::CursorLeft,
            KeyCode::Right => Action::CursorRight,
            KeyCode::Char(c) => Action::TypeChar(c),
            _ => Action::None,
        },
        Popup::Definitions(_) => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Action::Cancel,
            KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
            KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
            _ => Action::None,
        },
        Popup::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Action::Cancel,
            _ => Action::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::app::TextInputContext;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_list_keys() {
        assert_eq!(map_key(press(KeyCode::Tab), &None), Action::SwitchView);
        assert_eq!(map_key(press(KeyCode::Char('w')), &None), Action::WordHelp);
        assert_eq!(map_key(press(KeyCode::Char('x')), &None), Action::Remove);
    }

    #[test]
    fn test_text_input_captures_letters() {
        let popup = Some(Popup::TextInput(TextInputContext::Search));
        assert_eq!(map_key(press(KeyCode::Char('q')), &popup), Action::TypeChar('q'));
        assert_eq!(map_key(press(KeyCode::Esc), &popup), Action::Cancel);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let popup = Some(Popup::Help);
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, &popup), Action::Quit);
    }
}
