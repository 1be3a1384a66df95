// felidump/src/types.rs

use crate::constants::BLOCK_LEN;
use crate::Error;
use std::convert::TryFrom;

/// IDm - the card's 8-byte manufacture ID (Newtype Pattern)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idm([u8; 8]);

impl Idm {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

/// SystemCode (u16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemCode(u16);

impl SystemCode {
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }
}

/// ServiceCode (u16)
///
/// Ordered so it can key the snapshot's key-version map deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceCode(u16);

impl ServiceCode {
    /// Reserved code that queries the system key version.
    pub const SYSTEM_KEY: Self = Self(crate::constants::SYSTEM_KEY_SERVICE);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }

    /// Big-endian u32 from the first four bytes, used by purse decoders.
    pub fn be_u32_at_start(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != BLOCK_LEN {
            return Err(Error::InvalidLength {
                expected: BLOCK_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes[..BLOCK_LEN]);
        Ok(Self(arr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idm_try_from_ok() {
        let b: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let idm = Idm::try_from(&b[..]).unwrap();
        assert_eq!(idm.as_bytes(), &b);
    }

    #[test]
    fn idm_try_from_err() {
        let b: [u8; 4] = [0, 1, 2, 3];
        assert!(Idm::try_from(&b[..]).is_err());
    }

    #[test]
    fn idm_to_hex() {
        let b: [u8; 8] = [0xde, 0xad, 0xbe, 0xef, 0x00, 0x11, 0x22, 0x33];
        let idm = Idm::from_bytes(b);
        assert_eq!(idm.to_hex(), "deadbeef00112233");
    }

    #[test]
    fn system_and_service_code_roundtrip() {
        let sc = SystemCode::new(0x8008);
        assert_eq!(sc.as_u16(), 0x8008);
        assert_eq!(SystemCode::from_le_bytes(sc.to_le_bytes()).as_u16(), 0x8008);

        let svc = ServiceCode::new(0x0117);
        assert_eq!(svc.as_u16(), 0x0117);
        assert_eq!(svc.to_le_bytes(), 0x0117_u16.to_le_bytes());
    }

    #[test]
    fn service_code_orders_by_value() {
        assert!(ServiceCode::new(0x0117) < ServiceCode::new(0x1017));
        assert!(ServiceCode::new(0x0117) < ServiceCode::SYSTEM_KEY);
    }

    #[test]
    fn block_data_try_from_rejects_short_reads() {
        let short = [0u8; 15];
        match BlockData::try_from(&short[..]) {
            Err(Error::InvalidLength {
                expected: 16,
                actual: 15,
            }) => {}
            other => panic!("expected InvalidLength, got {:?}", other),
        }
    }

    #[test]
    fn block_data_be_u32() {
        let mut bytes = [0u8; 16];
        bytes[2] = 0x03;
        bytes[3] = 0xBC;
        let block = BlockData::from_bytes(bytes);
        assert_eq!(block.be_u32_at_start(), 0x03BC);
    }
}
