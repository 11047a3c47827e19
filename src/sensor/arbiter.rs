//! Target arbitration between the two buttons and remote commands.
//!
//! Last write wins: a press, a release or a remote command each replace
//! the target outright.  Two held buttons are never summed - the most
//! recent press decides the sign, and releasing one falls back to the
//! button that is still held.

use super::command::RemoteCommand;
use super::{Channel, Edge};

/// Owner of the authoritative target pressure.
#[derive(Clone, Copy, Debug)]
pub struct TargetArbiter {
    target: f32,
    button_target: f32,
    remote_target: f32,
    raise_held: bool,
    lower_held: bool,
}

impl TargetArbiter {
    pub const fn new(button_target: f32, remote_target: f32) -> Self {
        Self {
            target: 0.0,
            button_target,
            remote_target,
            raise_held: false,
            lower_held: false,
        }
    }

    /// Current setpoint.
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn apply_button_event(&mut self, channel: Channel, edge: Edge) {
        match edge {
            Edge::Pressed => {
                self.set_held(channel, true);
                self.target = self.button_target_for(channel);
            }
            Edge::Released => {
                self.set_held(channel, false);
                let other = channel.other();
                self.target = if self.is_held(other) {
                    self.button_target_for(other)
                } else {
                    0.0
                };
            }
            Edge::None => {}
        }
    }

    pub fn apply_remote_command(&mut self, cmd: RemoteCommand) {
        self.target = match cmd {
            RemoteCommand::Raise => self.remote_target,
            RemoteCommand::Lower => -self.remote_target,
            RemoteCommand::Neutral => 0.0,
        };
    }

    /// Force the target back to zero.  Held-button bookkeeping mirrors the
    /// physical switches and is left alone.
    pub fn reset(&mut self) {
        self.target = 0.0;
    }

    pub fn is_held(&self, channel: Channel) -> bool {
        match channel {
            Channel::Raise => self.raise_held,
            Channel::Lower => self.lower_held,
        }
    }

    fn set_held(&mut self, channel: Channel, held: bool) {
        match channel {
            Channel::Raise => self.raise_held = held,
            Channel::Lower => self.lower_held = held,
        }
    }

    fn button_target_for(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Raise => self.button_target,
            Channel::Lower => -self.button_target,
        }
    }
}
