// felidump/src/protocol/responses.rs

//! Response payload decoders.
//!
//! Each decoder takes the payload with the leading length byte already
//! stripped by the transceive framing, validates the shape the card is
//! required to produce, and extracts the interesting bytes. Offsets match
//! the FeliCa unencrypted command set.

use crate::constants::{
    CMD_READ_WITHOUT_ENCRYPTION, CMD_REQUEST_RESPONSE, CMD_REQUEST_SERVICE, KEY_VERSION_ABSENT,
};
use crate::protocol::parser;
use crate::types::BlockData;
use crate::{Error, Result};

/// Decode a RequestResponse reply.
/// Layout: response_code(1) + idm(8) + mode(1)
pub fn decode_request_response(data: &[u8]) -> Result<u8> {
    parser::ensure_len(data, 10)?;
    parser::expect_response_to(data, CMD_REQUEST_RESPONSE)?;
    parser::byte_at(data, 9)
}

/// Decode a RequestService reply for `count` requested services.
/// Layout: response_code(1) + idm(8) + node_count(1) + key_versions(2*N, LE)
///
/// Returns one entry per requested service in request order; `None` means
/// the card reported no such service (wire value `0xffff`).
pub fn decode_request_service(data: &[u8], count: usize) -> Result<Vec<Option<u16>>> {
    parser::ensure_len(data, 10 + 2 * count)?;
    parser::expect_response_to(data, CMD_REQUEST_SERVICE)?;

    let mut versions = Vec::with_capacity(count);
    for i in 0..count {
        let version = parser::le_u16_at(data, 10 + 2 * i)?;
        if version == KEY_VERSION_ABSENT {
            versions.push(None);
        } else {
            versions.push(Some(version));
        }
    }
    Ok(versions)
}

/// Decode a single-block ReadWithoutEncryption reply.
/// Layout: response_code(1) + idm(8) + status1(1) + status2(1)
///         + block_count(1) + block(16)
///
/// A non-zero status pair means the card rejected the read and carries the
/// card-reported failure code in status flag 2.
pub fn decode_read_without_encryption(data: &[u8]) -> Result<BlockData> {
    parser::ensure_len(data, 11)?;
    parser::expect_response_to(data, CMD_READ_WITHOUT_ENCRYPTION)?;

    let status1 = parser::byte_at(data, 9)?;
    let status2 = parser::byte_at(data, 10)?;
    if status1 != 0 || status2 != 0 {
        return Err(Error::ReadWrite {
            status_flag2: status2,
        });
    }

    parser::ensure_len(data, 28)?;
    let block_count = parser::byte_at(data, 11)?;
    if block_count != 1 {
        return Err(Error::Protocol(format!(
            "expected one block in response, got {}",
            block_count
        )));
    }

    BlockData::try_from(parser::slice_at(data, 12, 16)?)
}
