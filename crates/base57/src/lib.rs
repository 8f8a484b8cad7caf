//! Base-57 digit conversion for crosshair share codes.
//!
//! A share code carries an 18-byte record as 25 symbols drawn from [`ALPHABET`].
//! The record is a 144-bit number, so both directions work on the byte buffer
//! directly (schoolbook long division and multiply-accumulate) instead of a
//! fixed-width integer.
//!
//! # Example
//!
//! ```
//! use crosshair_code_base57::{from_base57, to_base57};
//!
//! let digits = to_base57(&[0x01, 0x00], 3);
//! assert_eq!(digits, "dEA");
//! let msd_first: String = digits.chars().rev().collect();
//! assert_eq!(from_base57(&msd_first, 2).unwrap(), vec![0x01, 0x00]);
//! ```

mod constants;
mod from_base57;
mod to_base57;

pub use constants::{ALPHABET, BASE};
pub use from_base57::{from_base57, symbol_value};
pub use to_base57::to_base57;

use thiserror::Error;

/// Error type for base-57 decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base57Error {
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}
