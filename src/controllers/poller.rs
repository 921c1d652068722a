//! Periodic background refresh.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

const MIN_PERIOD: Duration = Duration::from_secs(1);

/// Runs a refresh closure every `period` until stopped or dropped.
///
/// The first run happens one period after spawning; the view is expected
/// to have loaded once already. A zero period is raised to one second.
pub struct Poller {
    task: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn spawn<F, Fut>(period: Duration, mut refresh: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let period = if period.is_zero() {
            tracing::warn!("Zero poll period, using 1s");
            MIN_PERIOD
        } else {
            period
        };

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval() fires immediately once
            interval.tick().await;

            loop {
                interval.tick().await;
                tracing::trace!(?period, "Poll tick");
                refresh().await;
            }
        });

        Self { task: Some(task) }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("Poller stopped");
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}
