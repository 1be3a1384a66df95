// felidump/src/protocol/commands.rs

//! Request payload encoders for the three unencrypted-read commands.

use crate::address::BlockAddress;
use crate::constants::{CMD_READ_WITHOUT_ENCRYPTION, CMD_REQUEST_RESPONSE, CMD_REQUEST_SERVICE};
use crate::types::{Idm, ServiceCode};

/// Encode RequestResponse (command code 0x04).
/// Layout: command_code(1) + idm(8)
pub fn encode_request_response(idm: Idm) -> Vec<u8> {
    let mut buf = Vec::with_capacity(9);
    buf.push(CMD_REQUEST_RESPONSE);
    buf.extend_from_slice(idm.as_bytes());
    buf
}

/// Encode RequestService (command code 0x02).
/// Layout: command_code(1) + idm(8) + node_count(1) + node_code_list(2*N, LE)
pub fn encode_request_service(idm: Idm, services: &[ServiceCode]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(10 + 2 * services.len());
    buf.push(CMD_REQUEST_SERVICE);
    buf.extend_from_slice(idm.as_bytes());
    buf.push(services.len() as u8);
    for svc in services {
        buf.extend_from_slice(&svc.to_le_bytes());
    }
    buf
}

/// Encode ReadWithoutEncryption (command code 0x06) for a single block.
/// Layout: command_code(1) + idm(8) + service_count(1) + service_code(2, LE)
///         + block_count(1) + block_list_element(2..3)
pub fn encode_read_without_encryption(idm: Idm, address: BlockAddress) -> Vec<u8> {
    let element = address.to_wire_bytes();
    let mut buf = Vec::with_capacity(13 + element.len());
    buf.push(CMD_READ_WITHOUT_ENCRYPTION);
    buf.extend_from_slice(idm.as_bytes());
    buf.push(1);
    buf.extend_from_slice(&address.service_code().to_le_bytes());
    buf.push(1);
    buf.extend_from_slice(&element);
    buf
}
