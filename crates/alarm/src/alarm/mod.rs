//! Periodic time-of-day matching with a single-slot notification channel.
//!
//! An [`Alarm`] owns one background task. Every sampling interval the task
//! reads the host clock once and sends each target that equals the reading,
//! in target order, on a channel of capacity one. A full channel makes the
//! task wait, so a slow consumer throttles delivery instead of losing or
//! queueing notifications.
//!
//! Matching is only evaluated on tick boundaries. An interval coarser than a
//! second can skip a target entirely; a finer one reports the same target on
//! several consecutive ticks. Callers that need at-most-once delivery per
//! second de-duplicate downstream.

mod core;
mod runner;


pub use self::core::Alarm;
