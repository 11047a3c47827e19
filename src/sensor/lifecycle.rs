//! Connection / advertising lifecycle.
//!
//! ```text
//!              connect (reset target + value)
//!  Advertising ─────────────────────────────▶ Connected
//!       ▲                                        │
//!       └────────── disconnect ──────────────────┘
//!            (ResumeAdvertising directive)
//! ```
//!
//! No terminal state; the device cycles for as long as it is powered.

use super::arbiter::TargetArbiter;
use super::filter::PressureFilter;
use super::ConnectionState;

/// Request from the core to the transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Directive {
    /// Start connectable advertising again.
    ResumeAdvertising,
}

#[derive(Clone, Copy, Debug)]
pub struct ConnectionLifecycle {
    state: ConnectionState,
    notifications_enabled: bool,
}

impl ConnectionLifecycle {
    pub const fn new() -> Self {
        Self {
            state: ConnectionState::Advertising,
            notifications_enabled: false,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// A central connected.  Every new link starts from zero pressure.
    pub fn on_connect(&mut self, arbiter: &mut TargetArbiter, filter: &mut PressureFilter) {
        self.state = ConnectionState::Connected;
        self.notifications_enabled = false;
        arbiter.reset();
        filter.reset();
    }

    /// The central went away.  Returns the directive for the transport, or
    /// `None` when we were not connected in the first place.
    pub fn on_disconnect(&mut self) -> Option<Directive> {
        self.notifications_enabled = false;
        match self.state {
            ConnectionState::Connected => {
                self.state = ConnectionState::Advertising;
                Some(Directive::ResumeAdvertising)
            }
            ConnectionState::Advertising => None,
        }
    }

    /// Client wrote the CCCD.  Ignored while not connected.
    pub fn on_subscription(&mut self, enabled: bool) {
        if self.state == ConnectionState::Connected {
            self.notifications_enabled = enabled;
        }
    }

    /// At least one client is listening for notifications.
    pub fn subscriber_present(&self) -> bool {
        self.state == ConnectionState::Connected && self.notifications_enabled
    }
}

impl Default for ConnectionLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
