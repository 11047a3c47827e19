//! Peripheral connection task.
//!
//! Waits for the run loop to request advertising, advertises until a
//! central connects, then serves GATT for the lifetime of the link while
//! forwarding notifications.  Connect / disconnect / write / CCCD activity
//! is posted to the run loop's inbox.

use crate::ble::adv_data::AdPayload;
use crate::ble::gatt::{PressureServiceEvent, Server, ServerEvent};
use crate::ble::{ADVERTISE, EVENTS, NOTIFY};
use c1_emulator::config::{BLE_ADV_INTERVAL, BLE_ADV_RETRY_MS};
use c1_emulator::sensor::command::RemoteCommand;
use defmt::{debug, info, warn};
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Timer};
use heapless::Vec;
use nrf_softdevice::ble::{gatt_server, peripheral, Connection};
use nrf_softdevice::Softdevice;

/// Advertising payloads, built once at startup.
pub struct Advertisement {
    pub adv_data: AdPayload,
    pub scan_data: AdPayload,
}

pub async fn run(
    sd: &'static Softdevice,
    server: &'static Server,
    advertisement: &'static Advertisement,
) -> ! {
    loop {
        ADVERTISE.wait().await;

        let adv = peripheral::ConnectableAdvertisement::ScannableUndirected {
            adv_data: &advertisement.adv_data,
            scan_data: &advertisement.scan_data,
        };
        let config = peripheral::Config {
            interval: BLE_ADV_INTERVAL,
            ..Default::default()
        };

        info!("BLE advertising");
        let conn = match peripheral::advertise_connectable(sd, adv, &config).await {
            Ok(conn) => conn,
            Err(e) => {
                // Retry after a pause.
                warn!("advertising failed: {:?}", e);
                Timer::after(Duration::from_millis(BLE_ADV_RETRY_MS)).await;
                ADVERTISE.signal(());
                continue;
            }
        };

        info!("BLE central connected");
        // Drop anything queued for the previous link.
        NOTIFY.reset();
        EVENTS.link_up().await;

        let gatt = gatt_server::run(&conn, server, on_server_event);
        match select(gatt, notification_loop(&conn, server)).await {
            Either::First(e) => info!("BLE central disconnected: {:?}", e),
            Either::Second(()) => {}
        }

        EVENTS.link_down().await;
    }
}

/// Hand one GATT callback to the run loop.
///
/// Runs inside the SoftDevice event dispatch, so it must not block.  A
/// write that the run loop has not picked up yet is replaced by this one.
fn on_server_event(event: ServerEvent) {
    match event {
        ServerEvent::Pressure(PressureServiceEvent::PressureWrite(payload)) => {
            match RemoteCommand::from_payload(&payload) {
                Some(cmd) => {
                    info!("Received command via BLE write: {}", cmd.code());
                    EVENTS.command(cmd);
                }
                None => debug!("empty write ignored"),
            }
        }
        ServerEvent::Pressure(PressureServiceEvent::PressureCccdWrite { notifications }) => {
            info!("notifications enabled: {}", notifications);
            EVENTS.subscription(notifications);
        }
    }
}

/// Push every value the run loop publishes until the link drops.
///
/// Send failures are logged only; the next tick supersedes the value.
async fn notification_loop(conn: &Connection, server: &Server) {
    loop {
        let bytes = NOTIFY.wait().await;
        let Ok(value) = Vec::from_slice(&bytes) else {
            continue;
        };
        if let Err(e) = server.pressure.pressure_notify(conn, &value) {
            warn!("Notification failed: {:?}", e);
        }
    }
}
