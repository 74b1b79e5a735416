//! Periodic telemetry refresh.
//!
//! [`RefreshScheduler`] is a cancellable repeating task: it emits
//! [`Action::Tick`] once immediately and then every `period`. Dropping the
//! scheduler cancels it.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::tui::Action;

/// Default refresh period.
pub const DEFAULT_REFRESH: Duration = Duration::from_millis(5_000);

pub struct RefreshScheduler {
    period: Duration,
    handle: JoinHandle<()>,
}

impl RefreshScheduler {
    /// Start ticking into `sender`. Must be called inside a tokio runtime.
    ///
    /// The task stops on its own once the receiving side is gone.
    pub fn spawn(period: Duration, sender: UnboundedSender<Action>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(Action::Tick).is_err() {
                    break;
                }
            }
        });

        Self { period, handle }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
