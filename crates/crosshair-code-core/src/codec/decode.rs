use tracing::{debug, warn};

use crate::record::{Crosshair, PresetColor, CUSTOM_COLOR_INDEX, FALLBACK_COLOR};

use super::layout::*;
use super::share_code::share_code_to_bytes;
use super::types::{ChecksumMismatch, Decoded, ShareCodeError};

/// Decodes a share code.
///
/// A checksum mismatch is reported in [`Decoded::checksum_mismatch`] (and logged)
/// but does not fail the decode.
pub fn decode_share_code(code: &str) -> Result<Decoded, ShareCodeError> {
    let bytes = share_code_to_bytes(code)?;
    let decoded = bytes_to_crosshair(&bytes);

    if let Some(mismatch) = decoded.checksum_mismatch {
        warn!(
            expected = mismatch.expected,
            found = mismatch.found,
            "share code checksum mismatch, decoding anyway"
        );
    }
    let c = &decoded.crosshair;
    debug!(
        gap = c.gap,
        fixed_crosshair_gap = c.fixed_crosshair_gap,
        size = c.size,
        thickness = c.thickness,
        style = c.style,
        center_dot = c.center_dot_enabled,
        "decoded crosshair"
    );

    Ok(decoded)
}

/// Decodes a share code, discarding any checksum warning.
pub fn decode_crosshair_share_code(code: &str) -> Result<Crosshair, ShareCodeError> {
    decode_share_code(code).map(Decoded::into_crosshair)
}

/// Unpacks an 18-byte record buffer.
pub fn bytes_to_crosshair(bytes: &[u8; RECORD_SIZE]) -> Decoded {
    let expected = checksum(bytes);
    let checksum_mismatch = (bytes[CHECKSUM] != expected).then_some(ChecksumMismatch {
        expected,
        found: bytes[CHECKSUM],
    });

    let color_index = bytes[COLOR_FLAGS] & COLOR_INDEX_MASK;
    let [red, green, blue] = if color_index == CUSTOM_COLOR_INDEX {
        [bytes[RED], bytes[GREEN], bytes[BLUE]]
    } else {
        PresetColor::from_index(color_index)
            .map(PresetColor::rgb)
            .unwrap_or(FALLBACK_COLOR)
    };

    let style_flags = bytes[STYLE_FLAGS];
    let size_raw = (u16::from(bytes[SIZE_HIGH] & SIZE_HIGH_MASK) << 8) | u16::from(bytes[SIZE_LOW]);

    let crosshair = Crosshair {
        gap: signed_tenths(bytes[GAP]),
        outline_thickness: f64::from(bytes[OUTLINE_THICKNESS]) / 2.0,
        red,
        green,
        blue,
        alpha: bytes[ALPHA],
        split_distance: bytes[SPLIT_DISTANCE] & SPLIT_DISTANCE_MASK,
        follow_recoil: bytes[SPLIT_DISTANCE] & FOLLOW_RECOIL_BIT != 0,
        fixed_crosshair_gap: signed_tenths(bytes[FIXED_GAP]),
        color_index,
        outline_enabled: bytes[COLOR_FLAGS] & OUTLINE_BIT != 0,
        inner_split_alpha: tenths(bytes[COLOR_FLAGS] >> 4),
        outer_split_alpha: tenths(bytes[SPLIT_ALPHA] & NIBBLE_MASK),
        split_size_ratio: tenths(bytes[SPLIT_ALPHA] >> 4),
        thickness: tenths(bytes[THICKNESS] & THICKNESS_MASK),
        style: (style_flags & STYLE_MASK) >> 1,
        center_dot_enabled: style_flags & CENTER_DOT_BIT != 0,
        deployed_weapon_gap_enabled: style_flags & DEPLOYED_WEAPON_GAP_BIT != 0,
        alpha_enabled: style_flags & ALPHA_ENABLED_BIT != 0,
        t_style_enabled: style_flags & T_STYLE_BIT != 0,
        size: f64::from(size_raw) / 10.0,
        min_distance: 0.0,
    };

    Decoded {
        crosshair,
        checksum_mismatch,
    }
}

fn tenths(raw: u8) -> f64 {
    f64::from(raw) / 10.0
}

fn signed_tenths(raw: u8) -> f64 {
    f64::from(raw as i8) / 10.0
}
