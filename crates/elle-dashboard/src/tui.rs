use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;

use elle_models::Advisory;

use crate::chat::ChatOutcome;

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Enter the alternate screen and raw mode. Undone again on failure.
pub fn init() -> io::Result<Tui> {
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    enable_raw_mode()
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())))
        .inspect_err(|_| {
            if let Err(e) = restore() {
                tracing::warn!(error = %e, "failed to restore terminal after init error");
            }
        })
}

/// Leave the alternate screen and raw mode. Both steps are always attempted.
pub fn restore() -> io::Result<()> {
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    disable_raw_mode()?;
    screen
}

/// Everything the UI loop reacts to.
#[derive(Debug)]
pub enum Action {
    /// Telemetry refresh.
    Tick,
    Quit,
    Resize(u16, u16),
    Key(event::KeyEvent),
    /// A chat request finished, successfully or not.
    ChatResolved(ChatOutcome),
    /// A generated advisory is ready.
    AdvisoryResolved(Advisory),
}

pub struct EventHandler {
    sender: mpsc::UnboundedSender<Action>,
    receiver: mpsc::UnboundedReceiver<Action>,
}

impl EventHandler {
    /// Channel only, no terminal input. Used headless and in tests.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Channel fed by a blocking crossterm input thread.
    pub fn with_terminal_input() -> Self {
        let handler = Self::new();

        let event_sender = handler.sender.clone();
        std::thread::spawn(move || {
            loop {
                // Blocks until event available
                match event::read() {
                    Ok(Event::Key(key)) => {
                        if key.kind == KeyEventKind::Press && event_sender.send(Action::Key(key)).is_err() {
                            break;
                        }
                    }
                    Ok(Event::Resize(w, h)) => {
                        if event_sender.send(Action::Resize(w, h)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "terminal input closed");
                        break;
                    }
                    _ => {}
                }
            }
        });

        handler
    }

    pub async fn next_async(&mut self) -> Option<Action> {
        self.receiver.recv().await
    }

    pub fn get_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.sender.clone()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
