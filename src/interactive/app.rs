use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use super::keys::Action;
use crate::client::{
    lookup_word, prepare_word_help, validate_word, DefinitionService, DictionaryLookup, WordHelp,
};
use crate::error::{HubError, HubResult};
use crate::library::{listen_url, CatalogFilter, Shelf, Shelves, Transition};
use crate::logging::{log_debug, log_error};
use crate::models::{Book, Student, TitleMap};
use crate::session::Session;
use crate::state::{AppState, ConfirmAction};
use crate::store::{FileBackend, StorageBackend, SubscriptionId};

pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Catalog,
    Library,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Catalog => "Catalog",
            View::Library => "My Library",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputContext {
    Search,
    Dictionary,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalBody {
    Loading,
    WordHelp(WordHelp),
    Dictionary(DictionaryLookup),
}

/// A definition modal. `request_id` ties it to the task filling it in.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionModal {
    pub request_id: u64,
    pub title: String,
    pub body: ModalBody,
    pub scroll: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Popup {
    Confirmation(ConfirmAction),
    TextInput(TextInputContext),
    Definitions(DefinitionModal),
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

#[derive(Debug)]
pub enum LookupResult {
    WordHelp(u64, WordHelp),
    Dictionary(u64, DictionaryLookup),
}

pub struct InteractiveApp<B: StorageBackend = FileBackend, S = crate::client::GeminiClient> {
    state: AppState<B>,
    service: Option<Arc<S>>,
    pub student: Student,
    pub view: View,
    pub shelves: Shelves,
    pub audio_links: TitleMap,
    pub levels: Vec<f64>,
    pub level_index: Option<usize>,
    pub filter: CatalogFilter,
    pub selected_index: usize,
    pub popup: Option<Popup>,
    pub text_input: String,
    pub text_cursor: usize,
    pub notifications: Vec<Notification>,
    pub should_quit: bool,
    dirty: Arc<AtomicBool>,
    subscription: SubscriptionId,
    next_request_id: u64,
    results_tx: mpsc::UnboundedSender<LookupResult>,
    results_rx: mpsc::UnboundedReceiver<LookupResult>,
}

impl<B, S> InteractiveApp<B, S>
where
    B: StorageBackend,
    S: DefinitionService + Send + Sync + 'static,
{
    /// `service` is `None` when no API key is configured; the lookups then
    /// report the missing key instead of running.
    pub fn new(mut state: AppState<B>, session: &Session, service: Option<Arc<S>>) -> HubResult<Self> {
        let student = session.require_student()?.clone();

        let dirty = Arc::new(AtomicBool::new(true));
        let flag = dirty.clone();
        let subscription = state.subscribe(move |key| {
            log_debug(&format!("{} changed, refreshing view", key));
            flag.store(true, Ordering::SeqCst);
        });
        let (results_tx, results_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            state,
            service,
            student,
            view: View::Catalog,
            shelves: Shelves::default(),
            audio_links: TitleMap::default(),
            levels: Vec::new(),
            level_index: None,
            filter: CatalogFilter::default(),
            selected_index: 0,
            popup: None,
            text_input: String::new(),
            text_cursor: 0,
            notifications: Vec::new(),
            should_quit: false,
            dirty,
            subscription,
            next_request_id: 1,
            results_tx,
            results_rx,
        };
        app.refresh_if_dirty();
        Ok(app)
    }

    pub fn state_mut(&mut self) -> &mut AppState<B> {
        &mut self.state
    }

    /// Recompute the shelves after a store write.
    pub fn refresh_if_dirty(&mut self) {
        if !self.dirty.swap(false, Ordering::SeqCst) {
            return;
        }
        self.shelves = self.state.shelves(&self.student);
        self.audio_links = self.state.audio_links();
        self.levels = self.state.levels();
        if self.level_index.is_some_and(|i| i >= self.levels.len()) {
            self.level_index = None;
            self.filter.level = None;
        }
        self.clamp_selection();
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        if kind == NotificationKind::Error {
            log_error(&message);
        }
        self.notifications.push(Notification {
            message,
            kind,
            created_at: Instant::now(),
        });
    }

    pub fn prune_notifications(&mut self) {
        self.notifications
            .retain(|n| n.created_at.elapsed() < NOTIFICATION_TTL);
    }

    pub fn handle_action(&mut self, action: Action) {
        if self.popup.is_some() {
            self.handle_popup_action(action);
        } else {
            self.handle_list_action(action);
        }
    }

    fn handle_list_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveDown => self.move_selection(1),
            Action::MoveUp => self.move_selection(-1),
            Action::SwitchView => {
                self.view = match self.view {
                    View::Catalog => View::Library,
                    View::Library => View::Catalog,
                };
                self.selected_index = 0;
            }
            Action::Search => self.open_text_input(TextInputContext::Search),
            Action::Dictionary => self.open_text_input(TextInputContext::Dictionary),
            Action::CycleLevel => self.cycle_level(),
            Action::ClearFilter => {
                self.filter = CatalogFilter::default();
                self.level_index = None;
                self.clamp_selection();
            }
            Action::Read => self.mark_selected_as_reading(),
            Action::Complete => self.mark_selected_as_complete(),
            Action::Remove => self.request_selected_removal(),
            Action::WordHelp => self.start_word_help(),
            Action::Help => self.popup = Some(Popup::Help),
            _ => {}
        }
    }

    fn handle_popup_action(&mut self, action: Action) {
        let Some(popup) = self.popup.take() else {
            return;
        };

        match popup {
            Popup::Confirmation(confirm) => match action {
                Action::Confirm => {
                    let message = match &confirm {
                        ConfirmAction::RemoveFromLog { title, .. } => {
                            format!("Removed '{}' from your list", title)
                        }
                        other => other.title().to_string(),
                    };
                    self.state.confirm(confirm);
                    self.notify(NotificationKind::Success, message);
                }
                Action::Cancel => {}
                _ => self.popup = Some(Popup::Confirmation(confirm)),
            },
            Popup::TextInput(context) => match action {
                Action::Confirm => self.submit_text_input(context),
                Action::Cancel => self.text_input.clear(),
                other => {
                    self.edit_text_input(other);
                    self.popup = Some(Popup::TextInput(context));
                }
            },
            Popup::Definitions(mut modal) => match action {
                Action::Cancel | Action::Confirm => {}
                Action::MoveDown => {
                    modal.scroll = modal.scroll.saturating_add(1);
                    self.popup = Some(Popup::Definitions(modal));
                }
                Action::MoveUp => {
                    modal.scroll = modal.scroll.saturating_sub(1);
                    self.popup = Some(Popup::Definitions(modal));
                }
                _ => self.popup = Some(Popup::Definitions(modal)),
            },
            Popup::Help => {
                if !matches!(action, Action::Cancel | Action::Confirm | Action::Help) {
                    self.popup = Some(Popup::Help);
                }
            }
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.rows().len();
        if len == 0 {
            self.selected_index = 0;
            return;
        }
        self.selected_index = (self.selected_index as isize + delta).rem_euclid(len as isize) as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.rows().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// All levels, then each catalog level in turn, then back to all.
    fn cycle_level(&mut self) {
        self.level_index = match self.level_index {
            None if !self.levels.is_empty() => Some(0),
            Some(i) if i + 1 < self.levels.len() => Some(i + 1),
            _ => None,
        };
        self.filter.level = self.level_index.map(|i| self.levels[i]);
        self.selected_index = 0;
    }

    fn open_text_input(&mut self, context: TextInputContext) {
        self.text_input = match context {
            TextInputContext::Search => self.filter.query.clone(),
            TextInputContext::Dictionary => String::new(),
        };
        self.text_cursor = self.text_input.len();
        self.popup = Some(Popup::TextInput(context));
    }

    fn edit_text_input(&mut self, action: Action) {
        let before = self.text_input[..self.text_cursor].chars().next_back();
        let after = self.text_input[self.text_cursor..].chars().next();

        match action {
            Action::TypeChar(c) => {
                self.text_input.insert(self.text_cursor, c);
                self.text_cursor += c.len_utf8();
            }
            Action::Backspace => {
                if let Some(c) = before {
                    self.text_cursor -= c.len_utf8();
                    self.text_input.remove(self.text_cursor);
                }
            }
            Action::CursorLeft => {
                if let Some(c) = before {
                    self.text_cursor -= c.len_utf8();
                }
            }
            Action::CursorRight => {
                if let Some(c) = after {
                    self.text_cursor += c.len_utf8();
                }
            }
            _ => {}
        }
    }

    fn submit_text_input(&mut self, context: TextInputContext) {
        let input = std::mem::take(&mut self.text_input);
        self.text_cursor = 0;
        match context {
            TextInputContext::Search => {
                self.filter.query = input.trim().to_string();
                self.selected_index = 0;
            }
            TextInputContext::Dictionary => self.start_dictionary_lookup(&input),
        }
    }

    fn mark_selected_as_reading(&mut self) {
        let Some((_, book)) = self.selected_book() else {
            return;
        };
        match self.state.mark_as_reading(&self.student, &book.id) {
            Ok(Transition::Changed) => {
                self.notify(NotificationKind::Success, format!("Started reading '{}'", book.title))
            }
            Ok(Transition::Unchanged) => {
                self.notify(NotificationKind::Info, format!("'{}' is already on your list", book.title))
            }
            Err(e) => self.notify(NotificationKind::Error, e.to_string()),
        }
    }

    fn mark_selected_as_complete(&mut self) {
        let Some((_, book)) = self.selected_book() else {
            return;
        };
        match self.state.mark_as_complete(&self.student, &book.id) {
            Ok(Transition::Changed) => {
                self.notify(NotificationKind::Success, format!("Finished '{}'. Great job!", book.title))
            }
            Ok(Transition::Unchanged) => {
                self.notify(NotificationKind::Info, format!("'{}' is already finished", book.title))
            }
            Err(e) => self.notify(NotificationKind::Error, e.to_string()),
        }
    }

    fn request_selected_removal(&mut self) {
        let Some((shelf, book)) = self.selected_book() else {
            return;
        };
        if shelf == Shelf::Available {
            self.notify(NotificationKind::Info, format!("'{}' is not on your list", book.title));
            return;
        }
        match self.state.request_removal(&self.student, &book.id) {
            Ok(action) => self.popup = Some(Popup::Confirmation(action)),
            Err(e) => self.notify(NotificationKind::Error, e.to_string()),
        }
    }

    fn take_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    fn open_modal(&mut self, title: String, body: ModalBody) -> u64 {
        let request_id = self.take_request_id();
        self.popup = Some(Popup::Definitions(DefinitionModal {
            request_id,
            title,
            body,
            scroll: 0,
        }));
        request_id
    }

    fn start_word_help(&mut self) {
        let Some((_, book)) = self.selected_book() else {
            return;
        };
        let title = format!("Word help: {}", book.title);

        let request = match prepare_word_help(&mut self.state, &self.student, &book) {
            Ok(request) => request,
            Err(outcome) => {
                self.open_modal(title, ModalBody::WordHelp(outcome));
                return;
            }
        };
        let Some(service) = self.service.clone() else {
            self.notify(NotificationKind::Error, HubError::ApiKeyNotFound.to_string());
            return;
        };

        let request_id = self.open_modal(title, ModalBody::Loading);
        let tx = self.results_tx.clone();
        tokio::spawn(async move {
            let outcome = request.send(service.as_ref()).await;
            let _ = tx.send(LookupResult::WordHelp(request_id, outcome));
        });
    }

    fn start_dictionary_lookup(&mut self, raw: &str) {
        let word = match validate_word(raw) {
            Ok(word) => word,
            Err(_) => {
                self.open_modal("Dictionary".to_string(), ModalBody::Dictionary(DictionaryLookup::EmptyInput));
                return;
            }
        };
        let Some(service) = self.service.clone() else {
            self.notify(NotificationKind::Error, HubError::ApiKeyNotFound.to_string());
            return;
        };

        let request_id = self.open_modal(format!("Dictionary: {}", word), ModalBody::Loading);
        let tx = self.results_tx.clone();
        tokio::spawn(async move {
            let outcome = lookup_word(service.as_ref(), &word).await;
            let _ = tx.send(LookupResult::Dictionary(request_id, outcome));
        });
    }

    fn apply_result(&mut self, result: LookupResult) {
        let (request_id, body) = match result {
            LookupResult::WordHelp(id, outcome) => (id, ModalBody::WordHelp(outcome)),
            LookupResult::Dictionary(id, outcome) => (id, ModalBody::Dictionary(outcome)),
        };

        match &mut self.popup {
            Some(Popup::Definitions(modal)) if modal.request_id == request_id => modal.body = body,
            _ => log_debug(&format!("Dropping result for closed request {}", request_id)),
        }
    }

    /// Apply finished lookups without blocking.
    pub fn drain_results(&mut self) {
        while let Ok(result) = self.results_rx.try_recv() {
            self.apply_result(result);
        }
    }

    /// Wait for the next finished lookup and apply it.
    pub async fn wait_for_result(&mut self) {
        if let Some(result) = self.results_rx.recv().await {
            self.apply_result(result);
        }
    }
}

impl<B: StorageBackend, S> InteractiveApp<B, S> {
    /// The rows of the current view, in display order. The catalog lists
    /// every book in progress above the filtered books to start.
    pub fn rows(&self) -> Vec<(Shelf, &Book)> {
        let sections = match self.view {
            View::Catalog => [
                (Shelf::InProgress, &self.shelves.in_progress, false),
                (Shelf::Available, &self.shelves.available, true),
            ],
            View::Library => [
                (Shelf::InProgress, &self.shelves.in_progress, true),
                (Shelf::Completed, &self.shelves.completed, true),
            ],
        };

        let filter = &self.filter;
        sections
            .into_iter()
            .flat_map(move |(shelf, books, filtered)| {
                books
                    .iter()
                    .filter(move |b| !filtered || filter.matches(b))
                    .map(move |b| (shelf, b))
            })
            .collect()
    }

    pub fn selected_book(&self) -> Option<(Shelf, Book)> {
        self.rows()
            .get(self.selected_index)
            .map(|(shelf, book)| (*shelf, (*book).clone()))
    }

    pub fn listen_url(&self, book: &Book) -> String {
        listen_url(book, self.audio_links.get(&book.title))
    }
}

impl<B: StorageBackend, S> Drop for InteractiveApp<B, S> {
    fn drop(&mut self) {
        self.state.unsubscribe(self.subscription);
    }
}
