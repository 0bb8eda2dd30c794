use crate::api::ApiClient;
use crate::error::Result;
use crate::models::RideStatus;
use std::time::Duration;
use tokio::sync::watch;

/// Baseline cadence of the status poll while the server is healthy.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Ceiling for the error backoff.
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(60);

/// How the poll ended when it did not fail.
#[derive(Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// A driver accepted the request.
    Accepted,
    /// The caller cancelled, or dropped its cancel handle.
    Cancelled,
}

/// Creates the cancellation pair for a poller. Send `true` (or simply drop
/// the sender) to stop the poll; tying the sender to the owning scope means
/// no poll can outlive the screen that started it.
pub fn cancel_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

/// Watches one ride request until a driver accepts it.
///
/// Polls at a fixed interval while healthy. Transient failures (network,
/// 5xx) back the interval off exponentially up to a cap and keep going;
/// permanent failures (404, rejected request) stop the poll with the error
/// instead of hammering an endpoint that will never answer differently.
#[derive(Debug)]
pub struct StatusPoller {
    api: ApiClient,
    request_id: i32,
    interval: Duration,
    max_backoff: Duration,
}

impl StatusPoller {
    pub fn new(api: ApiClient, request_id: i32) -> Self {
        StatusPoller {
            api,
            request_id,
            interval: DEFAULT_POLL_INTERVAL,
            max_backoff: DEFAULT_MAX_BACKOFF,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }

    pub async fn run(self, mut cancelled: watch::Receiver<bool>) -> Result<PollOutcome> {
        let mut consecutive_failures: u32 = 0;

        loop {
            match self.api.request_status(self.request_id).await {
                Ok(RideStatus::Accepted) => return Ok(PollOutcome::Accepted),
                Ok(status) => {
                    consecutive_failures = 0;
                    tracing::debug!(request_id = self.request_id, %status, "still waiting");
                }
                Err(e) if e.is_permanent() => return Err(e),
                Err(e) => {
                    consecutive_failures += 1;
                    tracing::warn!(
                        request_id = self.request_id,
                        consecutive_failures,
                        "status poll failed: {}",
                        e
                    );
                }
            }

            let delay = backoff_delay(self.interval, self.max_backoff, consecutive_failures);
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                changed = cancelled.changed() => {
                    // Err means the sender side is gone; treat that the same
                    // as an explicit cancel.
                    if changed.is_err() || *cancelled.borrow() {
                        return Ok(PollOutcome::Cancelled);
                    }
                }
            }
        }
    }
}

/// Base interval while healthy, doubling per consecutive failure, capped.
pub fn backoff_delay(base: Duration, cap: Duration, consecutive_failures: u32) -> Duration {
    if consecutive_failures == 0 {
        return base;
    }
    let multiplier = 1u32.checked_shl(consecutive_failures).unwrap_or(u32::MAX);
    base.saturating_mul(multiplier).min(cap)
}
