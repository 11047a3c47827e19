//! Run-loop coordinator.
//!
//! [`PressureEmulator`] is the single owner of the target, the emitted
//! value and the connection state.  Transport callbacks never touch it
//! directly: they post to a [`TransportInbox`](super::inbox::TransportInbox)
//! which the run loop drains through [`PressureEmulator::handle_event`], so
//! the last input to arrive always wins.

use super::arbiter::TargetArbiter;
use super::command::RemoteCommand;
use super::edge::InputChannel;
use super::filter::PressureFilter;
use super::indicator::{IndicatorDriver, Indicators};
use super::lifecycle::{ConnectionLifecycle, Directive};
use super::scheduler::{NotificationScheduler, Tick, ValueSink};
use super::{Channel, ConnectionState, Edge};
use crate::config;
use crate::error::{ConfigField, Error};

/// Tunables for the emulator.  Defaults come from [`crate::config`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmulatorConfig {
    pub button_target: f32,
    pub remote_target: f32,
    pub filter_alpha: f32,
    pub snap_epsilon: f32,
    pub notify_period_ms: u64,
    pub blink_half_period_ms: u64,
    pub button_dwell_ms: u64,
    pub buttons_active_low: bool,
}

impl EmulatorConfig {
    /// Reject tunables that would break the filter or stall a timer.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.filter_alpha > 0.0 && self.filter_alpha < 1.0) {
            return Err(ConfigField::FilterAlpha.into());
        }
        if !(self.snap_epsilon > 0.0) {
            return Err(ConfigField::SnapEpsilon.into());
        }
        if self.notify_period_ms == 0 {
            return Err(ConfigField::NotifyPeriod.into());
        }
        if self.blink_half_period_ms == 0 {
            return Err(ConfigField::BlinkPeriod.into());
        }
        Ok(())
    }
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            button_target: config::BUTTON_TARGET,
            remote_target: config::REMOTE_TARGET,
            filter_alpha: config::FILTER_ALPHA,
            snap_epsilon: config::SNAP_EPSILON,
            notify_period_ms: config::NOTIFY_PERIOD_MS,
            blink_half_period_ms: config::BLINK_HALF_PERIOD_MS,
            button_dwell_ms: config::BUTTON_DWELL_MS,
            buttons_active_low: config::BUTTONS_ACTIVE_LOW,
        }
    }
}

/// Events raised by the transport, delivered through the inbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportEvent {
    Connected,
    Disconnected,
    /// A client wrote a non-empty payload to the pressure characteristic.
    Command(RemoteCommand),
    /// A client enabled or disabled notifications.
    SubscriptionChanged(bool),
}

/// Raw electrical levels of the two button pins (`true` = high).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Levels {
    pub raise: bool,
    pub lower: bool,
}

impl Levels {
    /// Both lines released, given the wiring polarity.
    pub const fn idle(active_low: bool) -> Self {
        Self {
            raise: active_low,
            lower: active_low,
        }
    }
}

/// What one run-loop iteration produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Poll {
    /// Button edges seen this iteration, in processing order.
    pub edges: [(Channel, Edge); 2],
    /// Present when the notification period elapsed.
    pub tick: Option<Tick>,
    pub indicators: Indicators,
}

pub struct PressureEmulator {
    raise: InputChannel,
    lower: InputChannel,
    arbiter: TargetArbiter,
    filter: PressureFilter,
    scheduler: NotificationScheduler,
    lifecycle: ConnectionLifecycle,
    indicators: IndicatorDriver,
}

impl PressureEmulator {
    pub fn new(cfg: EmulatorConfig) -> Self {
        Self {
            raise: InputChannel::new(cfg.buttons_active_low, cfg.button_dwell_ms),
            lower: InputChannel::new(cfg.buttons_active_low, cfg.button_dwell_ms),
            arbiter: TargetArbiter::new(cfg.button_target, cfg.remote_target),
            filter: PressureFilter::new(cfg.filter_alpha, cfg.snap_epsilon),
            scheduler: NotificationScheduler::new(cfg.notify_period_ms),
            lifecycle: ConnectionLifecycle::new(),
            indicators: IndicatorDriver::new(cfg.blink_half_period_ms),
        }
    }

    /// Apply one transport event.
    pub fn handle_event(&mut self, event: TransportEvent) -> Option<Directive> {
        match event {
            TransportEvent::Connected => {
                self.lifecycle.on_connect(&mut self.arbiter, &mut self.filter);
                None
            }
            TransportEvent::Disconnected => self.lifecycle.on_disconnect(),
            TransportEvent::Command(cmd) => {
                self.arbiter.apply_remote_command(cmd);
                None
            }
            TransportEvent::SubscriptionChanged(enabled) => {
                self.lifecycle.on_subscription(enabled);
                None
            }
        }
    }

    /// One run-loop iteration: sample buttons, tick the filter when due and
    /// refresh the indicators.
    pub fn poll<S: ValueSink>(&mut self, now_ms: u64, levels: Levels, sink: &mut S) -> Poll {
        let raise_edge = self.raise.sample_level(levels.raise, now_ms);
        let lower_edge = self.lower.sample_level(levels.lower, now_ms);
        self.arbiter.apply_button_event(Channel::Raise, raise_edge);
        self.arbiter.apply_button_event(Channel::Lower, lower_edge);

        let tick = self.scheduler.poll(
            now_ms,
            &mut self.filter,
            self.arbiter.target(),
            self.lifecycle.subscriber_present(),
            sink,
        );

        let indicators = self
            .indicators
            .update(now_ms, self.lifecycle.state(), self.arbiter.target());

        Poll {
            edges: [(Channel::Raise, raise_edge), (Channel::Lower, lower_edge)],
            tick,
            indicators,
        }
    }

    pub fn target(&self) -> f32 {
        self.arbiter.target()
    }

    pub fn value(&self) -> f32 {
        self.filter.value()
    }

    pub fn state(&self) -> ConnectionState {
        self.lifecycle.state()
    }

    pub fn subscriber_present(&self) -> bool {
        self.lifecycle.subscriber_present()
    }
}

impl Default for PressureEmulator {
    fn default() -> Self {
        Self::new(EmulatorConfig::default())
    }
}
