//! Crosshair share codes.
//!
//! A share code (`CSGO-XXXXX-XXXXX-XXXXX-XXXXX-XXXXX`) packs a crosshair
//! configuration into an 18-byte record, written as 25 base-57 symbols.
//!
//! - [`codec`] - record layout, checksum, [`encode_crosshair`] and [`decode_share_code`]
//! - [`adapter`] - mapping between the [`Crosshair`] record and the UI-facing [`UiConfig`]
//! - [`console`] - `cl_crosshair*` console commands for a record
//!
//! # Example
//!
//! ```
//! use crosshair_code_core::{decode_share_code, encode_crosshair, to_ui_config};
//!
//! let decoded = decode_share_code("CSGO-ANFqt-s6dDk-cZGKb-dMXSu-wzUrC").unwrap();
//! assert!(decoded.checksum_ok());
//! let config = to_ui_config(&decoded.crosshair);
//! assert!(config.size >= 0.0);
//!
//! let code = encode_crosshair(&decoded.crosshair);
//! assert!(code.starts_with("CSGO-"));
//! ```

pub mod adapter;
pub mod codec;
pub mod console;
mod record;

pub use adapter::{
    from_ui_config, from_ui_config_with, to_ui_config, AdapterError, HiddenFields, Rgb, Shape,
    UiConfig,
};
pub use codec::{
    bytes_to_crosshair, bytes_to_share_code, checksum, crosshair_to_bytes,
    decode_crosshair_share_code, decode_share_code, encode_crosshair, share_code_to_bytes,
    ChecksumMismatch, Decoded, ShareCodeError, RECORD_SIZE,
};
pub use console::{console_command_list, console_commands, console_script, ConsoleCommand};
pub use record::{
    Crosshair, PresetColor, Style, CUSTOM_COLOR_INDEX, FALLBACK_COLOR, PRESET_COLORS,
};

/// Decodes a share code straight into a UI configuration.
pub fn parse_share_code(code: &str) -> Result<UiConfig, ShareCodeError> {
    decode_crosshair_share_code(code).map(|crosshair| to_ui_config(&crosshair))
}

/// Encodes a UI configuration with the default hidden fields.
pub fn encode_ui_config(config: &UiConfig) -> String {
    encode_crosshair(&from_ui_config(config))
}
