//! Background comparison loop and its stop signal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Notify};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, trace, warn};

use clockwatch_core::{ClockTime, HostClock};

/// One-shot stop flag shared between an [`Alarm`](super::Alarm) and its task.
#[derive(Debug, Default)]
pub(super) struct StopSignal {
    stopped: AtomicBool,
    notify: Notify,
}

impl StopSignal {
    /// Raise the flag. Returns `false` if it was already raised.
    pub(super) fn trigger(&self) -> bool {
        if self.stopped.swap(true, Ordering::AcqRel) {
            return false;
        }
        // notify_one stores a permit, so a task that is not parked on the
        // signal right now still observes it on its next wait.
        self.notify.notify_one();
        true
    }

    pub(super) fn is_set(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    async fn wait(&self) {
        self.notify.notified().await;
    }
}

pub(super) struct Runner<C> {
    pub(super) clock: C,
    pub(super) targets: Arc<[ClockTime]>,
    /// Deadline of the first tick.
    pub(super) start: Instant,
    pub(super) period: Duration,
    pub(super) tx: mpsc::Sender<ClockTime>,
    pub(super) stop: Arc<StopSignal>,
}

impl<C: HostClock> Runner<C> {
    /// Tick until stopped or until the receiver goes away.
    ///
    /// Ticks missed while a send waits for capacity are skipped, not replayed.
    pub(super) async fn run(self) {
        let mut ticker = interval_at(self.start, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = self.stop.wait() => break,
                _ = ticker.tick() => {}
            }

            let now = self.clock.now();
            trace!(now = %ClockTime::from_host(&now), "alarm tick");

            for target in self.targets.iter() {
                if !target.matches(&now) {
                    continue;
                }
                // A send already waiting for capacity is never preempted;
                // this check only keeps later targets of the same tick quiet.
                if self.stop.is_set() {
                    debug!("alarm stopped mid-tick, remaining matches dropped");
                    return;
                }
                debug!(alarm_time = %target, "alarm matched");
                if self.tx.send(*target).await.is_err() {
                    warn!(alarm_time = %target, "alarm receiver dropped, stopping task");
                    return;
                }
            }
        }

        debug!("alarm task exiting");
    }
}
