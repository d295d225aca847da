use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::logging::{log_error, log_warn};

/// Consecutive poll failures after which the input thread gives up.
const MAX_POLL_FAILURES: u32 = 5;

pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Terminal input on a background thread. A tick is sent after every poll
/// so finished lookups and expired notifications show up without a key press.
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || pump_events(tick_rate, &sender, event::poll, event::read));

        Self { receiver }
    }

    pub fn recv(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

/// Forward terminal events until the receiver hangs up or polling keeps
/// failing. A failed poll waits a full tick before the next try.
fn pump_events<P, R>(tick_rate: Duration, sender: &mpsc::Sender<Event>, mut poll: P, mut read: R)
where
    P: FnMut(Duration) -> io::Result<bool>,
    R: FnMut() -> io::Result<CrosstermEvent>,
{
    let mut failures = 0;
    loop {
        match poll(tick_rate) {
            Ok(true) => {
                failures = 0;
                let forwarded = match read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(Event::Key(key))
                    }
                    Ok(CrosstermEvent::Resize(_, _)) => Some(Event::Resize),
                    Ok(_) => None,
                    Err(e) => {
                        log_warn(&format!("Failed to read terminal event: {}", e));
                        None
                    }
                };
                if let Some(event) = forwarded {
                    if sender.send(event).is_err() {
                        return;
                    }
                }
            }
            Ok(false) => failures = 0,
            Err(e) => {
                failures += 1;
                if failures >= MAX_POLL_FAILURES {
                    log_error(&format!("Giving up on terminal input: {}", e));
                    return;
                }
                log_warn(&format!("Failed to poll terminal events: {}", e));
                thread::sleep(tick_rate);
            }
        }
        if sender.send(Event::Tick).is_err() {
            return;
        }
    }
}
