//! Crosshair share codes.
//!
//! Re-exports [`crosshair_code_core`] and hosts the `crosshair-code`
//! command-line tool ([`cli`]).

pub mod cli;

pub use crosshair_code_core::*;
