//! Byte positions and masks of the 18-byte crosshair record.

pub const RECORD_SIZE: usize = 18;
pub const RECORD_VERSION: u8 = 1;

pub const CHECKSUM: usize = 0;
pub const VERSION: usize = 1;
pub const GAP: usize = 2;
pub const OUTLINE_THICKNESS: usize = 3;
pub const RED: usize = 4;
pub const GREEN: usize = 5;
pub const BLUE: usize = 6;
pub const ALPHA: usize = 7;
/// bits 0-6 split distance, bit 7 follow recoil
pub const SPLIT_DISTANCE: usize = 8;
pub const FIXED_GAP: usize = 9;
/// bits 0-2 colour index, bit 3 outline, bits 4-7 inner split alpha
pub const COLOR_FLAGS: usize = 10;
/// bits 0-3 outer split alpha, bits 4-7 split size ratio
pub const SPLIT_ALPHA: usize = 11;
pub const THICKNESS: usize = 12;
/// bit 0 unused, bits 1-3 style, bits 4-7 flags
pub const STYLE_FLAGS: usize = 13;
pub const SIZE_LOW: usize = 14;
pub const SIZE_HIGH: usize = 15;

pub const SPLIT_DISTANCE_MASK: u8 = 0x7f;
pub const FOLLOW_RECOIL_BIT: u8 = 0x80;
pub const COLOR_INDEX_MASK: u8 = 0x07;
pub const OUTLINE_BIT: u8 = 0x08;
pub const NIBBLE_MASK: u8 = 0x0f;
pub const THICKNESS_MASK: u8 = 0x3f;
pub const STYLE_MASK: u8 = 0x0e;
pub const CENTER_DOT_BIT: u8 = 0x10;
pub const DEPLOYED_WEAPON_GAP_BIT: u8 = 0x20;
pub const ALPHA_ENABLED_BIT: u8 = 0x40;
pub const T_STYLE_BIT: u8 = 0x80;
pub const SIZE_HIGH_MASK: u8 = 0x1f;

/// Symbols in a share code, excluding the prefix and separators.
pub const SHARE_CODE_SYMBOLS: usize = 25;
pub const SHARE_CODE_GROUPS: usize = 5;
pub const SHARE_CODE_GROUP_LEN: usize = 5;
pub const SHARE_CODE_PREFIX: &str = "CSGO";
pub const SHARE_CODE_SEPARATOR: char = '-';

/// Sum of every byte after the checksum byte, modulo 256.
pub fn checksum(bytes: &[u8; RECORD_SIZE]) -> u8 {
    bytes[VERSION..]
        .iter()
        .fold(0u8, |acc, &b| acc.wrapping_add(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_ignores_byte_zero() {
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[0] = 0xaa;
        bytes[1] = 1;
        bytes[17] = 2;
        assert_eq!(checksum(&bytes), 3);
    }

    #[test]
    fn checksum_wraps() {
        let mut bytes = [0xffu8; RECORD_SIZE];
        bytes[0] = 0;
        // 17 * 255 = 4335 = 16 * 256 + 239
        assert_eq!(checksum(&bytes), 239);
    }
}
