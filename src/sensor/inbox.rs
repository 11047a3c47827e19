//! Transport → run-loop inbox.
//!
//! Link changes are queued in arrival order and never dropped: the sender
//! waits for room.  Commands and subscription changes come from GATT
//! callbacks that must not block, so each kind keeps only its latest value
//! and a burst of writes can never crowd out the newest one.
//!
//! [`TransportInbox::try_next`] hands out queued link changes first, then
//! the pending command, then the pending subscription state.  Queuing
//! `Connected` discards writes still pending from the previous link; the
//! connect reset would overwrite them anyway.

use super::command::RemoteCommand;
use super::emulator::TransportEvent;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

pub struct TransportInbox<M: RawMutex, const N: usize> {
    links: Channel<M, TransportEvent, N>,
    command: Signal<M, RemoteCommand>,
    subscription: Signal<M, bool>,
}

impl<M: RawMutex, const N: usize> TransportInbox<M, N> {
    pub const fn new() -> Self {
        Self {
            links: Channel::new(),
            command: Signal::new(),
            subscription: Signal::new(),
        }
    }

    /// A central connected.  Waits while the link queue is full.
    pub async fn link_up(&self) {
        self.command.reset();
        self.subscription.reset();
        self.links.send(TransportEvent::Connected).await;
    }

    /// The central went away.  Waits while the link queue is full.
    pub async fn link_down(&self) {
        self.links.send(TransportEvent::Disconnected).await;
    }

    /// Record a client write.  Replaces any command not yet taken.
    pub fn command(&self, cmd: RemoteCommand) {
        self.command.signal(cmd);
    }

    /// Record a CCCD write.  Replaces any state not yet taken.
    pub fn subscription(&self, enabled: bool) {
        self.subscription.signal(enabled);
    }

    /// Next event for the run loop, or `None` once everything is drained.
    pub fn try_next(&self) -> Option<TransportEvent> {
        if let Ok(event) = self.links.try_receive() {
            return Some(event);
        }
        if let Some(cmd) = self.command.try_take() {
            return Some(TransportEvent::Command(cmd));
        }
        self.subscription
            .try_take()
            .map(TransportEvent::SubscriptionChanged)
    }
}

impl<M: RawMutex, const N: usize> Default for TransportInbox<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    type Inbox = TransportInbox<NoopRawMutex, 2>;

    fn drain(inbox: &Inbox) -> std::vec::Vec<TransportEvent> {
        core::iter::from_fn(|| inbox.try_next()).collect()
    }

    #[test]
    fn empty_inbox_yields_nothing() {
        let inbox = Inbox::new();
        assert_eq!(inbox.try_next(), None);
    }

    #[test]
    fn later_command_replaces_pending_one() {
        let inbox = Inbox::new();
        inbox.command(RemoteCommand::Raise);
        inbox.command(RemoteCommand::Lower);
        assert_eq!(drain(&inbox), [TransportEvent::Command(RemoteCommand::Lower)]);
    }

    #[test]
    fn link_changes_come_out_in_order_before_writes() {
        let inbox = Inbox::new();
        block_on(inbox.link_up());
        inbox.subscription(true);
        inbox.command(RemoteCommand::Raise);
        block_on(inbox.link_down());
        assert_eq!(
            drain(&inbox),
            [
                TransportEvent::Connected,
                TransportEvent::Disconnected,
                TransportEvent::Command(RemoteCommand::Raise),
                TransportEvent::SubscriptionChanged(true),
            ]
        );
    }

    #[test]
    fn connect_discards_writes_from_previous_link() {
        let inbox = Inbox::new();
        inbox.command(RemoteCommand::Lower);
        inbox.subscription(true);
        block_on(inbox.link_up());
        assert_eq!(drain(&inbox), [TransportEvent::Connected]);
    }
}
