use crate::record::{Crosshair, PresetColor, CUSTOM_COLOR_INDEX};

use super::layout::*;
use super::share_code::bytes_to_share_code;

/// Encodes a crosshair record as a share code.
///
/// Values outside a field's bit width are masked, not rejected: `thickness = 6.4`
/// encodes as `0.0`, `gap = -30.0` wraps within its signed byte.
pub fn encode_crosshair(crosshair: &Crosshair) -> String {
    bytes_to_share_code(&crosshair_to_bytes(crosshair))
}

/// Packs a record into its 18-byte buffer with a freshly computed checksum.
pub fn crosshair_to_bytes(crosshair: &Crosshair) -> [u8; RECORD_SIZE] {
    let mut bytes = [0u8; RECORD_SIZE];

    bytes[VERSION] = RECORD_VERSION;
    bytes[GAP] = signed_tenths(crosshair.gap);
    bytes[OUTLINE_THICKNESS] = (crosshair.outline_thickness * 2.0).floor() as i64 as u8;
    bytes[RED] = crosshair.red;
    bytes[GREEN] = crosshair.green;
    bytes[BLUE] = crosshair.blue;
    bytes[ALPHA] = crosshair.alpha;
    bytes[SPLIT_DISTANCE] = (crosshair.split_distance & SPLIT_DISTANCE_MASK)
        | flag(crosshair.follow_recoil, FOLLOW_RECOIL_BIT);
    bytes[FIXED_GAP] = signed_tenths(crosshair.fixed_crosshair_gap);
    bytes[COLOR_FLAGS] = (color_index(crosshair) & COLOR_INDEX_MASK)
        | flag(crosshair.outline_enabled, OUTLINE_BIT)
        | (nibble(crosshair.inner_split_alpha) << 4);
    bytes[SPLIT_ALPHA] =
        nibble(crosshair.outer_split_alpha) | (nibble(crosshair.split_size_ratio) << 4);
    bytes[THICKNESS] = (tenths(crosshair.thickness) as u8) & THICKNESS_MASK;
    bytes[STYLE_FLAGS] = ((crosshair.style << 1) & STYLE_MASK)
        | flag(crosshair.center_dot_enabled, CENTER_DOT_BIT)
        | flag(crosshair.deployed_weapon_gap_enabled, DEPLOYED_WEAPON_GAP_BIT)
        | flag(crosshair.alpha_enabled, ALPHA_ENABLED_BIT)
        | flag(crosshair.t_style_enabled, T_STYLE_BIT);

    let size = tenths(crosshair.size);
    bytes[SIZE_LOW] = (size & 0xff) as u8;
    bytes[SIZE_HIGH] = ((size >> 8) as u8) & SIZE_HIGH_MASK;

    bytes[CHECKSUM] = checksum(&bytes);
    bytes
}

/// A custom colour that equals a preset triple is stored as that preset.
fn color_index(crosshair: &Crosshair) -> u8 {
    if crosshair.color_index == CUSTOM_COLOR_INDEX {
        if let Some(preset) = PresetColor::matching(crosshair.rgb()) {
            return preset.index();
        }
    }
    crosshair.color_index
}

/// Value times ten, rounded half up.
fn tenths(value: f64) -> i64 {
    (value * 10.0 + 0.5).floor() as i64
}

fn signed_tenths(value: f64) -> u8 {
    tenths(value) as u8
}

fn nibble(value: f64) -> u8 {
    (tenths(value) as u8) & NIBBLE_MASK
}

fn flag(set: bool, bit: u8) -> u8 {
    if set {
        bit
    } else {
        0
    }
}
