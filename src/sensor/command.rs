//! Remote commands written to the pressure characteristic.
//!
//! Byte 0 of the write payload selects the command:
//! ```text
//! 0x01        Raise    (target +REMOTE_TARGET)
//! 0x02        Lower    (target -REMOTE_TARGET)
//! 0x00, 0x03  Neutral  (target 0)
//! other       Neutral
//! ```
//! The codes are part of the client contract and must not change.

/// Command code for [`RemoteCommand::Raise`].
pub const CMD_RAISE: u8 = 0x01;
/// Command code for [`RemoteCommand::Lower`].
pub const CMD_LOWER: u8 = 0x02;
/// Canonical command code for [`RemoteCommand::Neutral`].
pub const CMD_NEUTRAL: u8 = 0x00;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RemoteCommand {
    Raise,
    Lower,
    /// Return to zero. Also the fallback for unrecognised codes.
    Neutral,
}

impl RemoteCommand {
    /// Decode a write payload.  An empty payload carries no command.
    pub fn from_payload(data: &[u8]) -> Option<Self> {
        data.first().map(|&code| Self::from(code))
    }

    /// Canonical wire code.
    pub const fn code(self) -> u8 {
        match self {
            RemoteCommand::Raise => CMD_RAISE,
            RemoteCommand::Lower => CMD_LOWER,
            RemoteCommand::Neutral => CMD_NEUTRAL,
        }
    }
}

impl From<u8> for RemoteCommand {
    fn from(code: u8) -> Self {
        match code {
            CMD_RAISE => RemoteCommand::Raise,
            CMD_LOWER => RemoteCommand::Lower,
            _ => RemoteCommand::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(RemoteCommand::from(0x01), RemoteCommand::Raise);
        assert_eq!(RemoteCommand::from(0x02), RemoteCommand::Lower);
        assert_eq!(RemoteCommand::from(0x00), RemoteCommand::Neutral);
        assert_eq!(RemoteCommand::from(0x03), RemoteCommand::Neutral);
    }

    #[test]
    fn unknown_codes_fall_back_to_neutral() {
        for code in [0x04, 0x05, 0x7F, 0xFF] {
            assert_eq!(RemoteCommand::from(code), RemoteCommand::Neutral);
        }
    }

    #[test]
    fn payload_uses_first_byte_only() {
        assert_eq!(
            RemoteCommand::from_payload(&[0x02, 0x01, 0x01]),
            Some(RemoteCommand::Lower)
        );
    }

    #[test]
    fn empty_payload_is_no_command() {
        assert_eq!(RemoteCommand::from_payload(&[]), None);
    }

    #[test]
    fn code_matches_decoding() {
        for cmd in [
            RemoteCommand::Raise,
            RemoteCommand::Lower,
            RemoteCommand::Neutral,
        ] {
            assert_eq!(RemoteCommand::from(cmd.code()), cmd);
        }
    }
}
