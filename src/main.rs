//! c1-emulator firmware - BLE pressure sensor emulator on nRF52840.
//!
//! Tasks:
//! - `softdevice_task`: SoftDevice event pump.
//! - `ble_task`: advertising + GATT server for one central at a time.
//! - `emulator_task`: the run loop.  Drains transport events, samples the
//!   buttons, ticks the pressure filter and drives the LEDs.

#![no_std]
#![no_main]

mod ble;
mod board;

use core::mem;

use ble::gatt::{GattSink, Server};
use ble::peripheral::Advertisement;
use ble::{adv_data, ADVERTISE, EVENTS};
use board::Board;
use c1_emulator::config;
use c1_emulator::sensor::lifecycle::Directive;
use c1_emulator::sensor::scheduler::ValueSink;
use c1_emulator::sensor::Edge;
use c1_emulator::{EmulatorConfig, PressureEmulator};
use defmt::{debug, info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::interrupt::Priority;
use embassy_time::{Duration, Instant, Ticker};
use nrf_softdevice::{raw, Softdevice};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

type NrfBoard = Board<Input<'static>, Output<'static>>;

static SERVER: StaticCell<Server> = StaticCell::new();
static ADVERTISEMENT: StaticCell<Advertisement> = StaticCell::new();

#[embassy_executor::task]
async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}

#[embassy_executor::task]
async fn ble_task(
    sd: &'static Softdevice,
    server: &'static Server,
    advertisement: &'static Advertisement,
) -> ! {
    ble::peripheral::run(sd, server, advertisement).await
}

#[embassy_executor::task]
async fn emulator_task(mut board: NrfBoard, server: &'static Server, cfg: EmulatorConfig) -> ! {
    let mut emulator = PressureEmulator::new(cfg);
    let mut sink = GattSink::new(server);
    if let Err(e) = sink.store(emulator.value()) {
        warn!("initial value not stored: {:?}", e);
    }

    ADVERTISE.signal(());

    let mut ticker = Ticker::every(Duration::from_millis(config::LOOP_POLL_MS));
    loop {
        while let Some(event) = EVENTS.try_next() {
            debug!("transport event: {:?}", event);
            if let Some(Directive::ResumeAdvertising) = emulator.handle_event(event) {
                info!("BLE client disconnected, restarting advertising");
                ADVERTISE.signal(());
            }
        }

        let now_ms = Instant::now().as_millis();
        let poll = emulator.poll(now_ms, board.levels(), &mut sink);

        for (channel, edge) in poll.edges {
            if edge != Edge::None {
                info!("button {:?}: {:?} -> target {}", channel, edge, emulator.target());
            }
        }

        if let Some(tick) = poll.tick {
            if let Err(e) = tick.stored {
                warn!("pressure value not stored: {:?}", e);
            }
            if let Some(Err(e)) = tick.notified {
                warn!("Notification failed: {:?}", e);
            }
        }

        board.show(poll.indicators);
        ticker.next().await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("=== nRF52840 BLE Pressure Service Emulator ===");

    // The SoftDevice reserves interrupt priorities 0, 1 and 4.
    let mut nrf_config = embassy_nrf::config::Config::default();
    nrf_config.gpiote_interrupt_priority = Priority::P2;
    nrf_config.time_interrupt_priority = Priority::P2;
    let p = embassy_nrf::init(nrf_config);

    let cfg = EmulatorConfig::default();
    unwrap!(cfg.validate());

    let sd_config = nrf_softdevice::Config {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_RC as u8,
            rc_ctiv: 16,
            rc_temp_ctiv: 2,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_500_PPM as u8,
        }),
        conn_gap: Some(raw::ble_gap_conn_cfg_t {
            conn_count: 1,
            event_length: 24,
        }),
        conn_gatt: Some(raw::ble_gatt_conn_cfg_t {
            att_mtu: config::BLE_ATT_MTU,
        }),
        gatts_attr_tab_size: Some(raw::ble_gatts_cfg_attr_tab_size_t {
            attr_tab_size: raw::BLE_GATTS_ATTR_TAB_SIZE_DEFAULT,
        }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: 1,
            central_role_count: 0,
            central_sec_count: 0,
            _bitfield_1: raw::ble_gap_cfg_role_count_t::new_bitfield_1(0),
        }),
        gap_device_name: Some(raw::ble_gap_cfg_device_name_t {
            p_value: config::DEVICE_NAME.as_ptr() as _,
            current_len: config::DEVICE_NAME.len() as u16,
            max_len: config::DEVICE_NAME.len() as u16,
            write_perm: unsafe { mem::zeroed() },
            _bitfield_1: raw::ble_gap_cfg_device_name_t::new_bitfield_1(
                raw::BLE_GATTS_VLOC_STACK as u8,
            ),
        }),
        ..Default::default()
    };

    let sd = Softdevice::enable(&sd_config);
    let server: &'static Server = SERVER.init(unwrap!(Server::new(sd)));
    let sd: &'static Softdevice = sd;
    unwrap!(spawner.spawn(softdevice_task(sd)));

    let advertisement = ADVERTISEMENT.init(Advertisement {
        adv_data: adv_data::advertising_data(config::PRESSURE_SERVICE_UUID),
        scan_data: adv_data::scan_response_data(config::DEVICE_NAME),
    });
    unwrap!(spawner.spawn(ble_task(sd, server, advertisement)));

    // Pin mapping: see `config.rs`.
    let idle_led = if config::LEDS_ACTIVE_LOW {
        Level::High
    } else {
        Level::Low
    };
    let board = Board::new(
        Input::new(p.P0_11, Pull::Up),
        Input::new(p.P0_12, Pull::Up),
        Output::new(p.P0_13, idle_led, OutputDrive::Standard),
        Output::new(p.P0_14, idle_led, OutputDrive::Standard),
        Output::new(p.P0_15, idle_led, OutputDrive::Standard),
        Output::new(p.P0_16, idle_led, OutputDrive::Standard),
        config::LEDS_ACTIVE_LOW,
    );
    unwrap!(spawner.spawn(emulator_task(board, server, cfg)));

    info!("BLE Pressure service started! Connect and write to the characteristic.");
}
