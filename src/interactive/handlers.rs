use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::InteractiveApp;
use super::event::{Event, EventHandler};
use super::keys::map_key;
use crate::cli_context::CliContext;
use crate::error::{HubError, HubResult};
use crate::logging::{log_debug, log_error, log_info, log_warn};

type HubTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub async fn run_interactive_mode(context: &mut CliContext) -> Result<(), Box<dyn std::error::Error>> {
    log_info("Starting interactive mode");

    let (state, session) = context.open_session()?;
    let service = match context.verified_client() {
        Ok(client) => Some(client),
        Err(e) => {
            log_warn(&format!("Word lookups disabled: {}", e));
            None
        }
    };
    let mut app = InteractiveApp::new(state, &session, service)?;

    let mut terminal = setup_terminal()?;
    log_debug("Terminal initialized");

    // The loop blocks on terminal input; lookups keep running on the other workers
    let result = tokio::task::block_in_place(|| run_loop(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;
    log_info("Exiting interactive mode");

    result.map_err(Into::into)
}

fn run_loop(terminal: &mut HubTerminal, app: &mut InteractiveApp) -> HubResult<()> {
    let events = EventHandler::new(Duration::from_millis(100));

    loop {
        app.refresh_if_dirty();
        app.drain_results();
        app.prune_notifications();

        if let Err(e) = terminal.draw(|f| super::ui::draw(f, app)) {
            log_error(&format!("Error drawing UI: {}", e));
            return Err(HubError::TerminalError(e.to_string()));
        }

        match events.recv() {
            Ok(Event::Key(key)) => {
                let action = map_key(key, &app.popup);
                log_debug(&format!("Key {:?} -> {:?}", key.code, action));
                app.handle_action(action);
            }
            Ok(Event::Resize) | Ok(Event::Tick) => {}
            Err(_) => {
                return Err(HubError::TerminalError("Input thread stopped".to_string()));
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn setup_terminal() -> HubResult<HubTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut HubTerminal) -> HubResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
