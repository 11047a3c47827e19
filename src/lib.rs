//! Host-testable library interface for c1-emulator.
//!
//! This module exposes the pure logic that can be tested on the host
//! (no embedded hardware required): the emulator state machine, the
//! advertising payload builder and the shared configuration.
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and links against this library for everything that is not hardware.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod sensor;

// ═══════════════════════════════════════════════════════════════════════════
// BLE Module Re-exports
// ═══════════════════════════════════════════════════════════════════════════

// The SoftDevice-bound parts of `ble` only build for the target; the
// payload helpers are plain byte wrangling and live here as well.
#[path = "ble/adv_data.rs"]
mod ble_adv_data_impl;

pub mod ble {
    pub mod adv_data {
        pub use crate::ble_adv_data_impl::*;
    }
}

pub use sensor::emulator::{EmulatorConfig, Levels, PressureEmulator, TransportEvent};
pub use sensor::inbox::TransportInbox;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
