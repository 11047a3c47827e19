//! GATT server - the pressure service.
//!
//! One characteristic carries everything:
//! - **Write / Write Without Response**: command byte (see
//!   `sensor::command`).
//! - **Read**: current pressure, 4-byte little-endian `f32`.
//! - **Notify**: same encoding, pushed every notification tick while a
//!   client is subscribed.

use crate::ble::NOTIFY;
use c1_emulator::error::{BleError, Error};
use c1_emulator::sensor::scheduler::{encode_value, ValueSink, VALUE_SIZE};
use heapless::Vec;

/// Attribute value.  Variable length so a 1-byte command write is accepted
/// by the same characteristic that serves the 4-byte reading.
pub type PressureValue = Vec<u8, VALUE_SIZE>;

/// The service UUID must match `config::PRESSURE_SERVICE_UUID`.
#[nrf_softdevice::gatt_service(uuid = "12345678-1234-1234-1234-123456789abc")]
pub struct PressureService {
    #[characteristic(
        uuid = "abcdefab-1234-5678-9abc-abcdefabcdef",
        read,
        write,
        write_without_response,
        notify
    )]
    pub pressure: PressureValue,
}

#[nrf_softdevice::gatt_server]
pub struct Server {
    pub pressure: PressureService,
}

/// Encode a reading into the attribute representation.
pub fn pressure_value(value: f32) -> Result<PressureValue, Error> {
    Vec::from_slice(&encode_value(value)).map_err(|_| Error::BufferOverflow)
}

/// [`ValueSink`] backed by the GATT server.
///
/// Reads are served from the attribute table, so `store` updates it in
/// place.  Notifications need the live connection, which only the BLE task
/// holds; `notify` hands the value over through [`NOTIFY`].
pub struct GattSink {
    server: &'static Server,
}

impl GattSink {
    pub fn new(server: &'static Server) -> Self {
        Self { server }
    }
}

impl ValueSink for GattSink {
    fn store(&mut self, value: f32) -> Result<(), Error> {
        let attr = pressure_value(value)?;
        self.server
            .pressure
            .pressure_set(&attr)
            .map_err(|_| BleError::SetValueFailed.into())
    }

    fn notify(&mut self, value: f32) -> Result<(), Error> {
        NOTIFY.signal(encode_value(value));
        Ok(())
    }
}
