/// Share-code alphabet. Visually ambiguous symbols (`I`, `g`, `l`, `0`, `1`) are absent.
pub const ALPHABET: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZabcdefhijkmnopqrstuvwxyz23456789";

/// Radix of the share-code digits (the length of [`ALPHABET`]).
pub const BASE: u32 = ALPHABET.len() as u32;
