// felidump/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
///
/// The session and codec layers never recover from any of these: a failed
/// exchange aborts the whole dump and the in-progress snapshot is discarded.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("invalid response length: expected at least {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("card rejected read: status flag 2 = {status_flag2:#04x}")]
    ReadWrite { status_flag2: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
