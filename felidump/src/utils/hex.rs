//! Hexadecimal helpers used by snapshot serialization and display code.

use crate::{Error, Result};

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// Accepts upper or lower case. Fails with [`Error::InvalidFormat`] on odd
/// length or non-hex characters.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    if s.len() % 2 != 0 {
        return Err(Error::InvalidFormat(format!(
            "hex string has odd length: {:?}",
            s
        )));
    }

    let mut out = Vec::with_capacity(s.len() / 2);
    let bytes = s.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        let pair = std::str::from_utf8(&bytes[i..i + 2])
            .map_err(|_| Error::InvalidFormat(format!("invalid hex string: {:?}", s)))?;
        let byte = u8::from_str_radix(pair, 16)
            .map_err(|_| Error::InvalidFormat(format!("invalid hex pair {:?} in {:?}", pair, s)))?;
        out.push(byte);
        i += 2;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let bytes = [0xde, 0xad, 0xbe, 0xef];
        let s = bytes_to_hex(&bytes);
        assert_eq!(s, "deadbeef");
        assert_eq!(parse_hex(&s).unwrap(), bytes.to_vec());
    }

    #[test]
    fn parse_hex_accepts_uppercase() {
        assert_eq!(parse_hex("DEAD").unwrap(), vec![0xde, 0xad]);
    }

    #[test]
    fn parse_hex_rejects_odd_length() {
        assert!(matches!(parse_hex("abc"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn parse_hex_rejects_non_hex() {
        assert!(matches!(parse_hex("zzzz"), Err(Error::InvalidFormat(_))));
    }
}
