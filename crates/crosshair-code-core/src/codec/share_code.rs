//! Share-code text <-> 18-byte record buffer.

use crosshair_code_base57::{from_base57, symbol_value, to_base57, Base57Error};

use super::layout::{
    RECORD_SIZE, SHARE_CODE_GROUPS, SHARE_CODE_GROUP_LEN, SHARE_CODE_PREFIX,
    SHARE_CODE_SEPARATOR, SHARE_CODE_SYMBOLS,
};
use super::types::ShareCodeError;

/// Renders a record buffer as `CSGO-XXXXX-XXXXX-XXXXX-XXXXX-XXXXX`.
pub fn bytes_to_share_code(bytes: &[u8; RECORD_SIZE]) -> String {
    let digits = to_base57(bytes, SHARE_CODE_SYMBOLS);
    let mut out = String::with_capacity(SHARE_CODE_PREFIX.len() + SHARE_CODE_SYMBOLS + SHARE_CODE_GROUPS);
    out.push_str(SHARE_CODE_PREFIX);
    for (idx, symbol) in digits.chars().enumerate() {
        if idx % SHARE_CODE_GROUP_LEN == 0 {
            out.push(SHARE_CODE_SEPARATOR);
        }
        out.push(symbol);
    }
    out
}

/// Parses a share code into its record buffer.
///
/// Separators before each group are optional, so `CSGOAAAAABBBBB...` is accepted
/// as well as the dashed form. No checksum validation happens here.
pub fn share_code_to_bytes(code: &str) -> Result<[u8; RECORD_SIZE], ShareCodeError> {
    let symbols = collect_symbols(code)?;
    // Digits are emitted least significant first; flip them for big-endian accumulation.
    let msd_first: String = symbols.chars().rev().collect();
    let bytes = from_base57(&msd_first, RECORD_SIZE).map_err(|e| match e {
        Base57Error::InvalidSymbol { symbol, position } => ShareCodeError::InvalidSymbol {
            symbol,
            position: SHARE_CODE_PREFIX.len() + position,
        },
    })?;

    let mut out = [0u8; RECORD_SIZE];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Validates the share-code shape and returns the 25 symbols without prefix or
/// separators. Positions in errors index the original string.
fn collect_symbols(code: &str) -> Result<String, ShareCodeError> {
    let body = code
        .strip_prefix(SHARE_CODE_PREFIX)
        .ok_or(ShareCodeError::MissingPrefix)?;

    let found = body.chars().filter(|&c| c != SHARE_CODE_SEPARATOR).count();
    if found != SHARE_CODE_SYMBOLS {
        return Err(ShareCodeError::InvalidLength { found });
    }

    let offset = SHARE_CODE_PREFIX.len();
    let mut chars = body.char_indices().peekable();
    let mut symbols = String::with_capacity(SHARE_CODE_SYMBOLS);

    for _ in 0..SHARE_CODE_GROUPS {
        if let Some(&(_, SHARE_CODE_SEPARATOR)) = chars.peek() {
            chars.next();
        }
        for _ in 0..SHARE_CODE_GROUP_LEN {
            match chars.next() {
                Some((position, SHARE_CODE_SEPARATOR)) => {
                    return Err(ShareCodeError::MisplacedSeparator {
                        position: offset + position,
                    });
                }
                Some((position, symbol)) => {
                    if symbol_value(symbol).is_none() {
                        return Err(ShareCodeError::InvalidSymbol {
                            symbol,
                            position: offset + position,
                        });
                    }
                    symbols.push(symbol);
                }
                // unreachable: the symbol count was checked above
                None => return Err(ShareCodeError::InvalidLength { found }),
            }
        }
    }

    if let Some((position, _)) = chars.next() {
        return Err(ShareCodeError::MisplacedSeparator {
            position: offset + position,
        });
    }

    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_buffer_renders_all_a() {
        assert_eq!(
            bytes_to_share_code(&[0; RECORD_SIZE]),
            "CSGO-AAAAA-AAAAA-AAAAA-AAAAA-AAAAA"
        );
    }

    #[test]
    fn separators_are_optional() {
        let dashed = share_code_to_bytes("CSGO-ANFqt-s6dDk-cZGKb-dMXSu-wzUrC").unwrap();
        let bare = share_code_to_bytes("CSGOANFqts6dDkcZGKbdMXSuwzUrC").unwrap();
        let mixed = share_code_to_bytes("CSGOANFqt-s6dDkcZGKb-dMXSuwzUrC").unwrap();
        assert_eq!(dashed, bare);
        assert_eq!(dashed, mixed);
    }

    #[test]
    fn double_separator_is_rejected() {
        assert_eq!(
            share_code_to_bytes("CSGO--ANFqt-s6dDk-cZGKb-dMXSu-wzUrC"),
            Err(ShareCodeError::MisplacedSeparator { position: 5 })
        );
    }

    #[test]
    fn trailing_separator_is_rejected() {
        assert_eq!(
            share_code_to_bytes("CSGO-ANFqt-s6dDk-cZGKb-dMXSu-wzUrC-"),
            Err(ShareCodeError::MisplacedSeparator { position: 34 })
        );
    }

    #[test]
    fn separator_inside_group_is_rejected() {
        assert_eq!(
            share_code_to_bytes("CSGO-AN-Fqts6dDk-cZGKb-dMXSu-wzUrC"),
            Err(ShareCodeError::MisplacedSeparator { position: 7 })
        );
    }
}
