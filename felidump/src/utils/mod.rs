// felidump/src/utils/mod.rs
//! Small shared helpers.

mod hex;

pub use hex::{bytes_to_hex, parse_hex};
