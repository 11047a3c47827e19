//! Bluetooth Low Energy subsystem.
//!
//! This module drives the Nordic SoftDevice S140 in **Peripheral** role:
//!
//! 1. **GATT server** - the pressure service with its single
//!    read / write / notify characteristic.
//! 2. **Peripheral task** - advertises, accepts one central at a time,
//!    turns GATT callbacks into [`TransportEvent`]s and forwards
//!    notifications for the duration of the link.
//!
//! The BLE task never touches emulator state.  It talks to the run loop
//! through the inbox and signals below.

pub mod gatt;
pub mod peripheral;

pub use c1_emulator::ble::adv_data;

use c1_emulator::config::EVENT_QUEUE_DEPTH;
use c1_emulator::sensor::scheduler::VALUE_SIZE;
use c1_emulator::TransportInbox;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Transport → run loop.  Link changes in order, latest write of each kind.
pub static EVENTS: TransportInbox<CriticalSectionRawMutex, EVENT_QUEUE_DEPTH> =
    TransportInbox::new();

/// Run loop → BLE task: start (or restart) connectable advertising.
pub static ADVERTISE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Run loop → BLE task: latest encoded value to notify.  A newer value
/// replaces one that has not been sent yet.
pub static NOTIFY: Signal<CriticalSectionRawMutex, [u8; VALUE_SIZE]> = Signal::new();
