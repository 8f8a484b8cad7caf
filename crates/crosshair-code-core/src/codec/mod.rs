//! Share-code codec: 18-byte record layout, checksum and base-57 text form.

mod decode;
mod encode;
pub mod layout;
mod share_code;
mod types;

pub use decode::{bytes_to_crosshair, decode_crosshair_share_code, decode_share_code};
pub use encode::{crosshair_to_bytes, encode_crosshair};
pub use layout::{checksum, RECORD_SIZE};
pub use share_code::{bytes_to_share_code, share_code_to_bytes};
pub use types::{ChecksumMismatch, Decoded, ShareCodeError};
