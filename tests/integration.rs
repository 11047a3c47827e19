//! Integration tests for c1-emulator host-testable logic.

use c1_emulator::error::Error;
use c1_emulator::sensor::command::RemoteCommand;
use c1_emulator::sensor::lifecycle::Directive;
use c1_emulator::sensor::scheduler::{encode_value, ValueSink};
use c1_emulator::sensor::ConnectionState;
use c1_emulator::{EmulatorConfig, Levels, PressureEmulator, TransportEvent};

/// Stands in for the GATT attribute: keeps the readable bytes and every
/// notified payload.
#[derive(Default)]
struct FakeCharacteristic {
    attribute: [u8; 4],
    notifications: Vec<[u8; 4]>,
}

impl ValueSink for FakeCharacteristic {
    fn store(&mut self, value: f32) -> Result<(), Error> {
        self.attribute = encode_value(value);
        Ok(())
    }

    fn notify(&mut self, value: f32) -> Result<(), Error> {
        self.notifications.push(encode_value(value));
        Ok(())
    }
}

const IDLE: Levels = Levels {
    raise: true,
    lower: true,
};

/// Run the loop every 5 ms from `from` (inclusive) to `to` (exclusive).
fn run(
    emu: &mut PressureEmulator,
    sink: &mut FakeCharacteristic,
    levels: Levels,
    from: u64,
    to: u64,
) {
    let mut now = from;
    while now < to {
        emu.poll(now, levels, sink);
        now += 5;
    }
}

fn write(emu: &mut PressureEmulator, payload: &[u8]) -> Option<Directive> {
    match RemoteCommand::from_payload(payload) {
        Some(cmd) => emu.handle_event(TransportEvent::Command(cmd)),
        None => None,
    }
}

#[test]
fn remote_session_reaches_target_and_notifies_encoded_values() {
    let mut emu = PressureEmulator::default();
    let mut chr = FakeCharacteristic::default();

    emu.handle_event(TransportEvent::Connected);
    emu.handle_event(TransportEvent::SubscriptionChanged(true));
    write(&mut emu, &[0x01]);
    assert_eq!(emu.target(), 40.0);

    // Five seconds is far past the ~1.25 s rise time.
    run(&mut emu, &mut chr, IDLE, 0, 5_000);
    assert_eq!(emu.value(), 40.0);
    assert_eq!(f32::from_le_bytes(chr.attribute), 40.0);

    let values: Vec<f32> = chr
        .notifications
        .iter()
        .map(|b| f32::from_le_bytes(*b))
        .collect();
    assert!(values.len() >= 99);
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*values.last().unwrap(), 40.0);
}

#[test]
fn command_bytes_map_to_targets() {
    let mut emu = PressureEmulator::default();
    emu.handle_event(TransportEvent::Connected);

    write(&mut emu, &[0x01]);
    assert_eq!(emu.target(), 40.0);
    write(&mut emu, &[0x02]);
    assert_eq!(emu.target(), -40.0);
    write(&mut emu, &[0x05]);
    assert_eq!(emu.target(), 0.0);

    write(&mut emu, &[0x02]);
    // Empty writes leave the target alone.
    write(&mut emu, &[]);
    assert_eq!(emu.target(), -40.0);
    write(&mut emu, &[0x03]);
    assert_eq!(emu.target(), 0.0);
}

#[test]
fn button_held_through_debounce_then_released() {
    let mut emu = PressureEmulator::default();
    let mut chr = FakeCharacteristic::default();
    let raise_down = Levels {
        raise: false,
        lower: true,
    };

    run(&mut emu, &mut chr, IDLE, 0, 100);
    // A 10 ms contact glitch is shorter than the dwell time.
    run(&mut emu, &mut chr, raise_down, 100, 110);
    run(&mut emu, &mut chr, IDLE, 110, 200);
    assert_eq!(emu.target(), 0.0);

    run(&mut emu, &mut chr, raise_down, 200, 400);
    assert_eq!(emu.target(), 50.0);
    assert!(emu.value() > 0.0);

    run(&mut emu, &mut chr, IDLE, 400, 500);
    assert_eq!(emu.target(), 0.0);

    // Not connected: the readable value moves, nothing is notified.
    assert!(chr.notifications.is_empty());
    assert!(f32::from_le_bytes(chr.attribute) > 0.0);
}

#[test]
fn reconnect_starts_from_zero() {
    let mut emu = PressureEmulator::default();
    let mut chr = FakeCharacteristic::default();

    emu.handle_event(TransportEvent::Connected);
    emu.handle_event(TransportEvent::SubscriptionChanged(true));
    write(&mut emu, &[0x02]);
    run(&mut emu, &mut chr, IDLE, 0, 1_000);
    assert!(emu.value() < -30.0);

    assert_eq!(
        emu.handle_event(TransportEvent::Disconnected),
        Some(Directive::ResumeAdvertising)
    );
    assert_eq!(emu.state(), ConnectionState::Advertising);
    assert!(!emu.subscriber_present());

    let before = chr.notifications.len();
    run(&mut emu, &mut chr, IDLE, 1_000, 1_500);
    assert_eq!(chr.notifications.len(), before);

    emu.handle_event(TransportEvent::Connected);
    assert_eq!(emu.target(), 0.0);
    assert_eq!(emu.value(), 0.0);
}

#[test]
fn status_led_blinks_only_while_advertising() {
    let mut emu = PressureEmulator::new(EmulatorConfig::default());
    let mut chr = FakeCharacteristic::default();

    let mut toggles = 0;
    let mut last = emu.poll(0, IDLE, &mut chr).indicators.status;
    for now in (5..1_000).step_by(5) {
        let status = emu.poll(now, IDLE, &mut chr).indicators.status;
        if status != last {
            toggles += 1;
        }
        last = status;
    }
    // 300 ms half-period: toggles at 300, 600 and 900 ms.
    assert_eq!(toggles, 3);

    emu.handle_event(TransportEvent::Connected);
    for now in (1_000..2_000).step_by(5) {
        let ind = emu.poll(now, IDLE, &mut chr).indicators;
        assert!(!ind.status);
        assert!(ind.link);
    }
}
