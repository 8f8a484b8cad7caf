use thiserror::Error;

use crate::record::Crosshair;

/// The input is not a `CSGO-XXXXX-XXXXX-XXXXX-XXXXX-XXXXX` share code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareCodeError {
    #[error("share code must start with \"CSGO\"")]
    MissingPrefix,
    #[error("share code must carry 25 symbols, found {found}")]
    InvalidLength { found: usize },
    #[error("unexpected separator at position {position}")]
    MisplacedSeparator { position: usize },
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Embedded checksum disagrees with the payload. Decoding still succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumMismatch {
    /// Checksum recomputed from bytes 1..17.
    pub expected: u8,
    /// Checksum byte carried by the share code.
    pub found: u8,
}

impl std::fmt::Display for ChecksumMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "checksum mismatch: expected {:#04x}, found {:#04x}",
            self.expected, self.found
        )
    }
}

/// Result of decoding a share code.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub crosshair: Crosshair,
    pub checksum_mismatch: Option<ChecksumMismatch>,
}

impl Decoded {
    pub fn checksum_ok(&self) -> bool {
        self.checksum_mismatch.is_none()
    }

    pub fn into_crosshair(self) -> Crosshair {
        self.crosshair
    }
}
