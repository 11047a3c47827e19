//! Fixed-period notification tick.
//!
//! The run loop polls faster than the period; the scheduler compares
//! elapsed time and fires at most once per poll.  Jitter equal to the
//! polling granularity is expected.

use super::filter::PressureFilter;
use crate::error::Error;

/// Size of the encoded pressure value on the wire.
pub const VALUE_SIZE: usize = 4;

/// Encode the emitted value as a little-endian IEEE-754 `f32`.
pub fn encode_value(value: f32) -> [u8; VALUE_SIZE] {
    value.to_le_bytes()
}

/// The notify channel as seen by the core.
pub trait ValueSink {
    /// Update the readable value (served on GATT reads).
    fn store(&mut self, value: f32) -> Result<(), Error>;

    /// Push the value to subscribed clients.
    fn notify(&mut self, value: f32) -> Result<(), Error>;
}

/// Elapsed-time timer polled from the run loop.
#[derive(Clone, Copy, Debug)]
pub struct Periodic {
    period_ms: u64,
    last_ms: u64,
}

impl Periodic {
    /// First fire happens once `now >= period_ms`.
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            last_ms: 0,
        }
    }

    /// True when a full period has elapsed since the last fire.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_ms) >= self.period_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Start a fresh period at `now_ms`.
    pub fn restart(&mut self, now_ms: u64) {
        self.last_ms = now_ms;
    }
}

/// Outcome of one scheduler fire.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Emitted value after the filter step.
    pub value: f32,
    /// Result of storing the readable value.
    pub stored: Result<(), Error>,
    /// `None` when no subscriber was present, otherwise the notify result.
    pub notified: Option<Result<(), Error>>,
}

#[derive(Clone, Copy, Debug)]
pub struct NotificationScheduler {
    period: Periodic,
}

impl NotificationScheduler {
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period: Periodic::new(period_ms),
        }
    }

    /// Advance the filter if the period elapsed, publishing only when a
    /// subscriber is present.  The filter keeps moving while nobody listens
    /// so a late subscriber gets the current value, not a stale one.
    pub fn poll<S: ValueSink>(
        &mut self,
        now_ms: u64,
        filter: &mut PressureFilter,
        target: f32,
        subscribed: bool,
        sink: &mut S,
    ) -> Option<Tick> {
        if !self.period.poll(now_ms) {
            return None;
        }

        let value = filter.tick(target);
        let stored = sink.store(value);
        let notified = subscribed.then(|| sink.notify(value));

        Some(Tick {
            value,
            stored,
            notified,
        })
    }
}
