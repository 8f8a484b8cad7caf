//! Base-57 digits to big-endian bytes.

use crate::constants::{ALPHABET, BASE};
use crate::Base57Error;

/// Returns the digit value of `symbol`, or `None` if it is not in the alphabet.
pub fn symbol_value(symbol: char) -> Option<u8> {
    ALPHABET.find(symbol).map(|idx| idx as u8)
}

/// Decodes most-significant-first base-57 `symbols` into exactly `width`
/// big-endian bytes.
///
/// Bits above `width * 8` are discarded, so the result is the value modulo
/// `256^width`.
///
/// # Example
///
/// ```
/// use crosshair_code_base57::from_base57;
///
/// assert_eq!(from_base57("BA", 2).unwrap(), vec![0, 57]);
/// assert!(from_base57("B0", 2).is_err());
/// ```
pub fn from_base57(symbols: &str, width: usize) -> Result<Vec<u8>, Base57Error> {
    let mut out = vec![0u8; width];

    for (position, symbol) in symbols.chars().enumerate() {
        let digit = symbol_value(symbol).ok_or(Base57Error::InvalidSymbol { symbol, position })?;
        mul_add_in_place(&mut out, BASE, u32::from(digit));
    }

    Ok(out)
}

/// Computes `num = num * factor + addend` on a big-endian buffer, dropping any
/// carry out of the most significant byte.
fn mul_add_in_place(num: &mut [u8], factor: u32, addend: u32) {
    let mut carry = addend;
    for byte in num.iter_mut().rev() {
        let cur = u32::from(*byte) * factor + carry;
        *byte = (cur & 0xff) as u8;
        carry = cur >> 8;
    }
}
