// felidump/src/constants.rs
//! Common protocol constants used across the crate

/// FeliCa RequestService command code
pub const CMD_REQUEST_SERVICE: u8 = 0x02;

/// FeliCa RequestResponse command code
pub const CMD_REQUEST_RESPONSE: u8 = 0x04;

/// FeliCa ReadWithoutEncryption command code
pub const CMD_READ_WITHOUT_ENCRYPTION: u8 = 0x06;

/// Length of a FeliCa data block in bytes
pub const BLOCK_LEN: usize = 16;

/// Maximum number of service codes in a single RequestService command
pub const MAX_SERVICES_PER_REQUEST: usize = 32;

/// Reserved service code that queries the system key version
pub const SYSTEM_KEY_SERVICE: u16 = 0xFFFF;

/// Wire value meaning "no such service" in a RequestService response
pub const KEY_VERSION_ABSENT: u16 = 0xFFFF;
