//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// BLE

/// GAP device name, advertised in the scan response.
pub const DEVICE_NAME: &str = "C1-Emulator";

/// Pressure service UUID `12345678-1234-1234-1234-123456789abc`.
///
/// Must match the literal in `ble::gatt::PressureService`.
pub const PRESSURE_SERVICE_UUID: u128 = 0x12345678_1234_1234_1234_123456789abc;

/// ATT MTU. Remote clients expect the default 23-byte MTU.
pub const BLE_ATT_MTU: u16 = 23;

/// Advertising interval (in 0.625 ms units). 160 = 100 ms.
pub const BLE_ADV_INTERVAL: u32 = 160;

/// Back-off before asking the SoftDevice to advertise again after a failure (ms).
pub const BLE_ADV_RETRY_MS: u64 = 500;

/// Capacity of the connect / disconnect queue between the BLE task and the run loop.
pub const EVENT_QUEUE_DEPTH: usize = 8;

// Pressure model

/// Target reached while a button is held.
pub const BUTTON_TARGET: f32 = 50.0;

/// Target set by the remote Raise / Lower commands.
pub const REMOTE_TARGET: f32 = 40.0;

/// Low-pass coefficient. Update period is 50 ms, rise time to 95% is ~1.25 s:
/// 3*tau = 1.25 s => tau = 417 ms, alpha = T/tau = 50/417 ~= 0.12.
pub const FILTER_ALPHA: f32 = 0.12;

/// The emitted value snaps to the target once closer than this.
pub const SNAP_EPSILON: f32 = 0.01;

// Timing

/// Notification tick period (ms).
pub const NOTIFY_PERIOD_MS: u64 = 50;

/// Status LED blink half-period while advertising (ms).
pub const BLINK_HALF_PERIOD_MS: u64 = 300;

/// Run-loop polling interval (ms). Must stay well below `NOTIFY_PERIOD_MS`.
pub const LOOP_POLL_MS: u64 = 5;

/// Minimum time a button level must be stable before an edge is reported (ms).
pub const BUTTON_DWELL_MS: u64 = 20;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button RAISE   → P0.11  (active-low, pull-up)
//   Button LOWER   → P0.12  (active-low, pull-up)
//   Status LED     → P0.13  (LED1)
//   Link LED       → P0.14  (LED2)
//   Raise LED      → P0.15  (LED3)
//   Lower LED      → P0.16  (LED4)

/// Buttons pull the line low when pressed.
pub const BUTTONS_ACTIVE_LOW: bool = true;

/// DK LEDs are wired to VDD and light when the pin is driven low.
pub const LEDS_ACTIVE_LOW: bool = true;
