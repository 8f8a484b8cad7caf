//! Big-endian bytes to base-57 digits.

use crate::constants::{ALPHABET, BASE};

/// Encodes `bytes` (a big-endian unsigned integer) as exactly `digits` symbols.
///
/// Digits are emitted least significant first: the first symbol of the result is
/// the remainder of the first division. Once the number is exhausted the
/// remaining positions are filled with the zero symbol (`A`); if the number needs
/// more than `digits` symbols the high digits are dropped.
///
/// # Example
///
/// ```
/// use crosshair_code_base57::to_base57;
///
/// assert_eq!(to_base57(&[56], 2), "9A");
/// assert_eq!(to_base57(&[57], 2), "AB");
/// ```
pub fn to_base57(bytes: &[u8], digits: usize) -> String {
    let table: Vec<char> = ALPHABET.chars().collect();
    let mut num = bytes.to_vec();
    let mut out = String::with_capacity(digits);

    for _ in 0..digits {
        let rem = div_rem_in_place(&mut num, BASE);
        out.push(table[rem as usize]);
    }

    out
}

/// Divides the big-endian number in `num` by `divisor`, leaving the quotient in
/// place and returning the remainder.
fn div_rem_in_place(num: &mut [u8], divisor: u32) -> u32 {
    let mut rem: u32 = 0;
    for byte in num.iter_mut() {
        let cur = (rem << 8) | u32::from(*byte);
        *byte = (cur / divisor) as u8;
        rem = cur % divisor;
    }
    rem
}
