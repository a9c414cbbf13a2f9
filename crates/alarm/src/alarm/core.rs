use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{info, warn};

use clockwatch_core::{ClockTime, HostClock, LocalClock};

use super::runner::{Runner, StopSignal};

/// Smallest period the ticker accepts; zero is clamped up to this.
const MIN_SAMPLING_INTERVAL: Duration = Duration::from_millis(1);

/// Longest period the ticker accepts. Larger ones would overflow the
/// deadline arithmetic and are clamped down to this.
const MAX_SAMPLING_INTERVAL: Duration = Duration::from_secs(365 * 86_400);

/// A running alarm. Sounds by sending matched targets on its channel.
///
/// Created running; [`Alarm::stop`] halts future ticks. The channel has room
/// for one pending notification. Once the background task has exited the
/// channel closes: buffered values can still be received, after which
/// [`Alarm::recv`] returns `None`.
///
/// A send that is waiting for room when `stop` is called still completes
/// once the caller receives again. Dropping the `Alarm` drops the receiver,
/// which releases such a send and ends the task.
pub struct Alarm {
    rx: mpsc::Receiver<ClockTime>,
    targets: Arc<[ClockTime]>,
    sampling_interval: Duration,
    stop: Arc<StopSignal>,
    task: Option<JoinHandle<()>>,
}

impl Alarm {
    /// Start an alarm that samples the host's local time.
    ///
    /// Must be called within a Tokio runtime.
    pub fn new(sampling_interval: Duration, targets: impl IntoIterator<Item = ClockTime>) -> Self {
        Self::with_clock(sampling_interval, targets, LocalClock)
    }

    /// Start an alarm that samples `clock` on every tick.
    ///
    /// Targets keep their order and duplicates; each duplicate sends
    /// separately on a match.
    pub fn with_clock<C: HostClock>(
        sampling_interval: Duration,
        targets: impl IntoIterator<Item = ClockTime>,
        clock: C,
    ) -> Self {
        let targets: Arc<[ClockTime]> = targets.into_iter().collect();
        if targets.is_empty() {
            warn!("alarm created without targets, it will never sound");
        }

        let period = if sampling_interval.is_zero() {
            warn!(
                clamped_to_ms = MIN_SAMPLING_INTERVAL.as_millis() as u64,
                "zero sampling interval"
            );
            MIN_SAMPLING_INTERVAL
        } else if sampling_interval > MAX_SAMPLING_INTERVAL {
            warn!(
                requested_secs = sampling_interval.as_secs(),
                clamped_to_secs = MAX_SAMPLING_INTERVAL.as_secs(),
                "sampling interval too large"
            );
            MAX_SAMPLING_INTERVAL
        } else {
            sampling_interval
        };

        // First tick one full period after creation, like a plain ticker.
        let now = Instant::now();
        let start = now.checked_add(period).unwrap_or(now);

        let (tx, rx) = mpsc::channel(1);
        let stop = Arc::new(StopSignal::default());
        let runner = Runner {
            clock,
            targets: Arc::clone(&targets),
            start,
            period,
            tx,
            stop: Arc::clone(&stop),
        };
        let task = tokio::spawn(runner.run());

        info!(
            interval_ms = period.as_millis() as u64,
            targets = targets.len(),
            "alarm started"
        );

        Self {
            rx,
            targets,
            sampling_interval: period,
            stop,
            task: Some(task),
        }
    }

    /// Halt the ticker. No tick after this call is evaluated.
    ///
    /// Safe to call more than once. Does not close the channel directly;
    /// it closes when the task exits.
    pub fn stop(&self) {
        if self.stop.trigger() {
            info!("alarm stopped");
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_set()
    }

    /// Wait for the next match. `None` once the task has exited and the
    /// buffer is drained.
    pub async fn recv(&mut self) -> Option<ClockTime> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Result<ClockTime, TryRecvError> {
        self.rx.try_recv()
    }

    /// Direct access to the notification channel.
    pub fn receiver_mut(&mut self) -> &mut mpsc::Receiver<ClockTime> {
        &mut self.rx
    }

    /// Configured targets, in creation order.
    pub fn targets(&self) -> &[ClockTime] {
        &self.targets
    }

    pub fn sampling_interval(&self) -> Duration {
        self.sampling_interval
    }

    /// Wait for the background task to exit.
    ///
    /// Only returns after [`Alarm::stop`], and only once any send that was
    /// waiting for room has been received.
    pub async fn join(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "alarm task ended abnormally");
            }
        }
    }
}

impl Drop for Alarm {
    fn drop(&mut self) {
        self.stop.trigger();
    }
}

impl std::fmt::Debug for Alarm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alarm")
            .field("targets", &self.targets)
            .field("sampling_interval", &self.sampling_interval)
            .field("stopped", &self.is_stopped())
            .finish()
    }
}
