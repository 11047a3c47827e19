//! Pressure sensor emulation core - target arbitration, smoothing and
//! connection lifecycle.
//!
//! Everything in here is pure logic driven by millisecond timestamps, so
//! it runs unchanged on the host for tests and on the nRF52840 under Embassy.
//!
//! ## Components
//!
//! - **Edge detection**: raw button levels → debounced press/release edges
//! - **Arbiter**: button edges + remote commands → target pressure
//! - **Filter**: single-pole low-pass from emitted value toward target
//! - **Scheduler**: 50 ms notification tick with subscriber gating
//! - **Lifecycle**: Advertising ⇄ Connected, resets on every new link
//! - **Indicators**: status blink / link / direction LEDs
//! - **Inbox**: ordered link changes, latest-wins client writes
//!
//! [`emulator::PressureEmulator`] owns all of them and is the only thing
//! the run loop talks to.

pub mod arbiter;
pub mod command;
pub mod edge;
pub mod emulator;
pub mod filter;
pub mod inbox;
pub mod indicator;
pub mod lifecycle;
pub mod scheduler;


/// The two physical buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Button A - drives the target to +`BUTTON_TARGET`.
    Raise,
    /// Button B - drives the target to -`BUTTON_TARGET`.
    Lower,
}

impl Channel {
    /// The button on the other side of the pair.
    pub const fn other(self) -> Self {
        match self {
            Channel::Raise => Channel::Lower,
            Channel::Lower => Channel::Raise,
        }
    }
}

/// Debounced level transition of one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Pressed,
    Released,
    None,
}

/// Link state, owned by [`lifecycle::ConnectionLifecycle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionState {
    /// No central connected; the transport is advertising.
    Advertising,
    /// A central is connected.
    Connected,
}
