//! The dashboard controller.
//!
//! [`Dashboard`] owns the [`SessionState`], the display [`Surface`] and the
//! [`TelemetrySource`]. Every public transition that changes what is shown
//! ends with exactly one call to [`render`], so the surface never lags
//! behind the state.
//!
//! Network work is split in two so the wait does not hold the controller:
//! transitions hand back a [`Request`], and the caller later feeds the
//! result to [`Dashboard::resolve_chat`] or [`Dashboard::resolve_advisory`].
//! Telemetry ticks that arrive in between are applied and rendered
//! immediately.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use elle_models::{Advisory, Readings, TurbineStatus};
use elle_sdk::ChatClient;
use tracing::{debug, info, warn};

use crate::advisory::{self, AdvisoryMode};
use crate::chat::{self, ChatOutcome};
use crate::render::render;
use crate::state::SessionState;
use crate::surface::Surface;
use crate::telemetry::{TelemetryError, TelemetryFrame, TelemetrySource};
use crate::tui::Action;

/// Network work a transition asks the caller to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Send this prompt to the chat endpoint.
    Chat(String),
    /// Generate an advisory for these readings.
    Advisory(Option<Readings>),
}

pub struct Dashboard<S, T> {
    state: SessionState,
    surface: S,
    source: T,
    advisory_mode: AdvisoryMode,
    advisory_pending: bool,
    should_quit: bool,
}

impl<S: Surface, T: TelemetrySource> Dashboard<S, T> {
    /// Build a dashboard and paint its initial state.
    pub fn new(surface: S, source: T, footer_year: i32) -> Self {
        let mut dashboard = Self {
            state: SessionState::new(footer_year),
            surface,
            source,
            advisory_mode: AdvisoryMode::default(),
            advisory_pending: false,
            should_quit: false,
        };
        dashboard.render();
        dashboard
    }

    #[must_use]
    pub fn with_advisory_mode(mut self, mode: AdvisoryMode) -> Self {
        self.advisory_mode = mode;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn advisory_mode(&self) -> AdvisoryMode {
        self.advisory_mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Re-project the current state.
    pub fn render(&mut self) {
        render(&self.state, &mut self.surface);
    }

    // ------------------------------------------------------------------
    // Telemetry
    // ------------------------------------------------------------------

    /// One tick: acquire a frame and apply it.
    pub fn refresh(&mut self) -> Option<Request> {
        let result = self.source.acquire();
        self.apply_telemetry(result)
    }

    /// Apply an acquisition result. Renders on every path.
    ///
    /// With generated advisories, asks for a new one unless a request is
    /// already outstanding.
    pub fn apply_telemetry(&mut self, result: Result<TelemetryFrame, TelemetryError>) -> Option<Request> {
        match result {
            Ok(frame) => {
                debug!(status = %frame.snapshot.status, "telemetry refreshed");
                self.state.readings = Some(frame.snapshot.readings);
                self.state.status = frame.snapshot.status;
                if self.advisory_mode == AdvisoryMode::Simulated {
                    self.state.advisory = frame.advisory;
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch turbine data");
                self.state.status = TurbineStatus::Error;
            }
        }
        self.render();

        if self.advisory_mode == AdvisoryMode::Generated && !self.advisory_pending {
            self.advisory_pending = true;
            return Some(Request::Advisory(self.state.readings));
        }
        None
    }

    /// Accept a generated advisory. Renders only when the text changed.
    pub fn resolve_advisory(&mut self, advisory: Advisory) {
        self.advisory_pending = false;
        if advisory == self.state.advisory {
            debug!("advisory unchanged");
            return;
        }
        info!(advisory = %advisory, "advisory updated");
        self.state.advisory = advisory;
        self.render();
    }

    /// Refresh and, with generated advisories, wait for the new advisory.
    pub async fn refresh_with<C: ChatClient>(&mut self, advisor: &C) {
        if let Some(Request::Advisory(readings)) = self.refresh() {
            let advisory = advisory::generate_advisory(advisor, readings.as_ref()).await;
            self.resolve_advisory(advisory);
        }
    }

    // ------------------------------------------------------------------
    // Chat
    // ------------------------------------------------------------------

    /// Start an exchange from the current input. See [`chat::begin_submit`].
    pub fn submit(&mut self) -> Option<String> {
        let prompt = chat::begin_submit(&mut self.state)?;
        self.render();
        Some(prompt)
    }

    /// Finish an exchange. Ignored when no exchange is outstanding.
    pub fn resolve_chat(&mut self, outcome: &ChatOutcome) {
        if !self.state.is_loading() {
            warn!("chat outcome arrived with no request outstanding");
            return;
        }
        chat::complete_exchange(&mut self.state, outcome);
        self.render();
    }

    /// Submit and wait for the reply in one go.
    ///
    /// Returns `false` without touching the network when the submission was
    /// ignored.
    pub async fn exchange<C: ChatClient>(&mut self, client: &C) -> bool {
        let Some(prompt) = self.submit() else {
            return false;
        };
        let outcome = client.generate(&prompt).await;
        self.resolve_chat(&outcome);
        true
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Replace the input buffer, e.g. when pasting. Ignored while disabled.
    pub fn set_input(&mut self, text: &str) {
        if self.state.input_enabled() {
            text.clone_into(&mut self.state.input);
            self.render();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Request> {
        let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter => return self.submit().map(Request::Chat),
            KeyCode::Backspace if self.state.input_enabled() => {
                self.state.input.pop();
                self.render();
            }
            KeyCode::Char(c) if plain && self.state.input_enabled() => {
                self.state.input.push(c);
                self.render();
            }
            _ => {}
        }
        None
    }

    /// Dispatch one action. Returns the network work it calls for, if any.
    pub fn update(&mut self, action: Action) -> Option<Request> {
        match action {
            Action::Tick => return self.refresh(),
            Action::Quit => self.should_quit = true,
            Action::Resize(_, _) => {}
            Action::Key(key) => return self.handle_key(key),
            Action::ChatResolved(outcome) => self.resolve_chat(&outcome),
            Action::AdvisoryResolved(advisory) => self.resolve_advisory(advisory),
        }
        None
    }
}
