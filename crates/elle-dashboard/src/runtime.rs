//! The UI loop.
//!
//! [`drive`] is the only place that mutates the dashboard once it runs. It
//! consumes actions in arrival order, redraws after each one and hands
//! network work to spawned tasks that post their result back as
//! [`Action::ChatResolved`] or [`Action::AdvisoryResolved`].

use std::io;
use std::sync::Arc;

use elle_sdk::ChatClient;
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, error, info};

use crate::advisory::generate_advisory;
use crate::app::{Dashboard, Request};
use crate::error::DashboardError;
use crate::surface::ViewSurface;
use crate::telemetry::TelemetrySource;
use crate::tui::{Action, EventHandler};
use crate::ui;

fn redraw<B: Backend>(
    terminal: &mut Terminal<B>,
    view: &ViewSurface,
) -> Result<(), DashboardError> {
    terminal
        .draw(|f| ui::draw(f, view))
        .map_err(|e| DashboardError::Terminal(e.to_string()))?;
    Ok(())
}

/// Perform `request` on a background task.
fn spawn_request<C, A>(request: Request, chat: &Arc<C>, advisor: &Arc<A>, events: &EventHandler)
where
    C: ChatClient + 'static,
    A: ChatClient + 'static,
{
    let tx = events.get_sender();
    match request {
        Request::Chat(prompt) => {
            let chat = Arc::clone(chat);
            tokio::spawn(async move {
                let outcome = chat.generate(&prompt).await;
                if tx.send(Action::ChatResolved(outcome)).is_err() {
                    debug!("UI loop gone, dropping chat outcome");
                }
            });
        }
        Request::Advisory(readings) => {
            let advisor = Arc::clone(advisor);
            tokio::spawn(async move {
                let advisory = generate_advisory(advisor.as_ref(), readings.as_ref()).await;
                if tx.send(Action::AdvisoryResolved(advisory)).is_err() {
                    debug!("UI loop gone, dropping advisory");
                }
            });
        }
    }
}

/// Run until the user quits.
///
/// `advisor` is only called when the dashboard generates its advisories.
pub async fn drive<B, T, C, A>(
    terminal: &mut Terminal<B>,
    dashboard: &mut Dashboard<ViewSurface, T>,
    chat: Arc<C>,
    advisor: Arc<A>,
    events: &mut EventHandler,
) -> Result<(), DashboardError>
where
    B: Backend,
    T: TelemetrySource,
    C: ChatClient + 'static,
    A: ChatClient + 'static,
{
    redraw(terminal, dashboard.surface())?;

    while let Some(action) = events.next_async().await {
        if let Some(request) = dashboard.update(action) {
            spawn_request(request, &chat, &advisor, events);
        }
        if dashboard.should_quit() {
            info!("quit requested");
            break;
        }
        redraw(terminal, dashboard.surface())?;
    }

    Ok(())
}

/// Combine the loop result with terminal restoration.
///
/// A loop error wins over a restore error, which is then only logged.
pub fn settle(result: Result<(), DashboardError>, restored: io::Result<()>) -> Result<(), DashboardError> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            error!(error = %restore_err, "failed to restore terminal");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => Ok(restored?),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use elle_models::ChatMessage;
    use elle_sdk::ChatReply;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::advisory::AdvisoryMode;
    use crate::chat::ChatOutcome;
    use crate::render::TYPING_INDICATOR;
    use crate::telemetry::SimulatedSource;

    /// Never answers.
    struct SilentClient;

    impl ChatClient for SilentClient {
        async fn generate(&self, _prompt: &str) -> ChatOutcome {
            std::future::pending().await
        }
    }

    /// Echoes the prompt back.
    struct EchoClient;

    impl ChatClient for EchoClient {
        async fn generate(&self, prompt: &str) -> ChatOutcome {
            Ok(ChatReply::Text(format!("echo: {prompt}")))
        }
    }

    fn queue_typing(events: &EventHandler, text: &str) {
        let tx = events.get_sender();
        for c in text.chars() {
            tx.send(Action::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
                .unwrap();
        }
        tx.send(Action::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
            .unwrap();
    }

    fn setup() -> (Terminal<TestBackend>, Dashboard<ViewSurface, SimulatedSource>, EventHandler) {
        let terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        let dashboard = Dashboard::new(ViewSurface::default(), SimulatedSource::seeded(11), 2026);
        (terminal, dashboard, EventHandler::new())
    }

    #[tokio::test]
    async fn outstanding_chat_keeps_input_locked() {
        let (mut terminal, mut dashboard, mut events) = setup();
        events.get_sender().send(Action::Tick).unwrap();
        queue_typing(&events, "Hello");
        events.get_sender().send(Action::Tick).unwrap();
        events.get_sender().send(Action::Quit).unwrap();

        drive(&mut terminal, &mut dashboard, Arc::new(SilentClient), Arc::new(SilentClient), &mut events)
            .await
            .unwrap();

        assert!(dashboard.state().is_loading());
        assert!(!dashboard.surface().controls_enabled);
        assert_eq!(
            dashboard.surface().chat_lines.last().map(|l| l.text.as_str()),
            Some(TYPING_INDICATOR)
        );
        assert_ne!(dashboard.surface().wind_speed, "N/A");
    }

    #[tokio::test(start_paused = true)]
    async fn chat_outcome_returns_through_the_loop() {
        let (mut terminal, mut dashboard, mut events) = setup();
        queue_typing(&events, "Hello");

        let tx = events.get_sender();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            tx.send(Action::Quit).unwrap();
        });

        drive(&mut terminal, &mut dashboard, Arc::new(EchoClient), Arc::new(SilentClient), &mut events)
            .await
            .unwrap();

        assert_eq!(
            dashboard.state().chat(),
            [ChatMessage::user("Hello"), ChatMessage::bot("echo: Hello")]
        );
        assert!(!dashboard.state().is_loading());
        assert!(dashboard.surface().controls_enabled);
    }

    #[tokio::test(start_paused = true)]
    async fn generated_advisory_returns_through_the_loop() {
        let (mut terminal, dashboard, mut events) = setup();
        let mut dashboard = dashboard.with_advisory_mode(AdvisoryMode::Generated);
        events.get_sender().send(Action::Tick).unwrap();

        let tx = events.get_sender();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            tx.send(Action::Quit).unwrap();
        });

        drive(&mut terminal, &mut dashboard, Arc::new(SilentClient), Arc::new(EchoClient), &mut events)
            .await
            .unwrap();

        assert!(dashboard.surface().advisory.starts_with("echo: You are an energy assistant"));
        assert!(dashboard.state().chat().is_empty());
    }

    #[test]
    fn settle_keeps_loop_error_over_restore_error() {
        let err = settle(
            Err(DashboardError::Terminal("draw failed".into())),
            Err(io::Error::other("tty gone")),
        )
        .unwrap_err();
        assert!(matches!(err, DashboardError::Terminal(ref m) if m == "draw failed"));
    }

    #[test]
    fn settle_reports_restore_error_after_clean_loop() {
        let err = settle(Ok(()), Err(io::Error::other("tty gone"))).unwrap_err();
        assert!(matches!(err, DashboardError::Io(_)));
        assert!(settle(Ok(()), Ok(())).is_ok());
    }
}
