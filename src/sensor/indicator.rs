//! Indicator LEDs.
//!
//! - Status: blinks at `BLINK_HALF_PERIOD_MS` while advertising, off while
//!   connected.
//! - Link: on while connected.
//! - Raise / Lower: follow the sign of the target, both off at zero.

use super::scheduler::Periodic;
use super::ConnectionState;

/// Logical indicator outputs (`true` = lit).  Pin polarity is the board's
/// concern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Indicators {
    pub status: bool,
    pub link: bool,
    pub raise: bool,
    pub lower: bool,
}

/// Indicator outputs for a given state, target and blink phase.
pub fn indicators_for(state: ConnectionState, target: f32, blink_on: bool) -> Indicators {
    let connected = state == ConnectionState::Connected;
    Indicators {
        status: !connected && blink_on,
        link: connected,
        raise: target > 0.0,
        lower: target < 0.0,
    }
}

/// Owns the blink phase timer.  Independent of the notification tick.
#[derive(Clone, Copy, Debug)]
pub struct IndicatorDriver {
    blink: Periodic,
    blink_on: bool,
    last_state: ConnectionState,
}

impl IndicatorDriver {
    pub const fn new(blink_half_period_ms: u64) -> Self {
        Self {
            blink: Periodic::new(blink_half_period_ms),
            blink_on: true,
            last_state: ConnectionState::Advertising,
        }
    }

    pub fn update(&mut self, now_ms: u64, state: ConnectionState, target: f32) -> Indicators {
        if state != self.last_state {
            self.last_state = state;
            if state == ConnectionState::Advertising {
                // Blink restarts lit when advertising resumes.
                self.blink_on = true;
                self.blink.restart(now_ms);
            }
        } else if state == ConnectionState::Advertising && self.blink.poll(now_ms) {
            self.blink_on = !self.blink_on;
        }

        indicators_for(state, target, self.blink_on)
    }
}
