//! Advertising and scan-response payloads.
//!
//! Both are sequences of AD structures `[len][type][data...]`, at most
//! 31 bytes each for legacy advertising.

use heapless::Vec;

/// Legacy advertising payload capacity.
pub const AD_MAX_LEN: usize = 31;

/// Flags.
pub const AD_TYPE_FLAGS: u8 = 0x01;
/// Complete List of 128-bit Service UUIDs.
pub const AD_TYPE_UUID128_COMPLETE: u8 = 0x07;
/// Shortened Local Name.
pub const AD_TYPE_NAME_SHORT: u8 = 0x08;
/// Complete Local Name.
pub const AD_TYPE_NAME_COMPLETE: u8 = 0x09;

/// LE General Discoverable Mode | BR/EDR Not Supported.
const FLAGS_GENERAL_LE_ONLY: u8 = 0x06;

pub type AdPayload = Vec<u8, AD_MAX_LEN>;

/// Flags + the 128-bit service UUID (little-endian on air).
pub fn advertising_data(service_uuid: u128) -> AdPayload {
    let mut out = AdPayload::new();
    push_structure(&mut out, AD_TYPE_FLAGS, &[FLAGS_GENERAL_LE_ONLY]);
    push_structure(&mut out, AD_TYPE_UUID128_COMPLETE, &service_uuid.to_le_bytes());
    out
}

/// Local name for the scan response.  Names that do not fit are cut and
/// sent as a shortened name.
pub fn scan_response_data(name: &str) -> AdPayload {
    let room = AD_MAX_LEN - 2;
    let mut out = AdPayload::new();
    if name.len() <= room {
        push_structure(&mut out, AD_TYPE_NAME_COMPLETE, name.as_bytes());
    } else {
        let mut cut = room;
        while !name.is_char_boundary(cut) {
            cut -= 1;
        }
        push_structure(&mut out, AD_TYPE_NAME_SHORT, &name.as_bytes()[..cut]);
    }
    out
}

fn push_structure(out: &mut AdPayload, ad_type: u8, data: &[u8]) {
    // Callers size `data` to fit, so the pushes cannot overflow.
    out.push(data.len() as u8 + 1).ok();
    out.push(ad_type).ok();
    out.extend_from_slice(data).ok();
}
