// common/mod.rs — shared payload builders for integration tests
#![allow(dead_code)]

use felidump::transport::MockTransport;
use std::sync::Once;

static INIT: Once = Once::new();

/// Wire up the log facade once per test binary; run with RUST_LOG=debug
/// to see the codec's frame traces.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub fn sample_idm_bytes() -> [u8; 8] {
    hex::decode("0102030405060708")
        .unwrap()
        .try_into()
        .unwrap()
}

/// A transport announcing an Octopus card with the sample IDm.
pub fn octopus_transport() -> MockTransport {
    MockTransport::new(sample_idm_bytes(), 0x8008)
}

/// RequestResponse reply payload (mode byte 0).
pub fn presence_payload(idm: &[u8; 8]) -> Vec<u8> {
    let mut p = vec![0x05];
    p.extend_from_slice(idm);
    p.push(0x00);
    p
}

/// RequestService reply payload with one little-endian version per entry.
pub fn key_version_payload(idm: &[u8; 8], versions: &[u16]) -> Vec<u8> {
    let mut p = vec![0x03];
    p.extend_from_slice(idm);
    p.push(versions.len() as u8);
    for v in versions {
        p.extend_from_slice(&v.to_le_bytes());
    }
    p
}

/// Successful single-block ReadWithoutEncryption reply payload.
pub fn read_payload(idm: &[u8; 8], block: &[u8; 16]) -> Vec<u8> {
    let mut p = vec![0x07];
    p.extend_from_slice(idm);
    p.extend_from_slice(&[0, 0, 1]);
    p.extend_from_slice(block);
    p
}

/// Failed ReadWithoutEncryption reply payload with the given status pair.
pub fn read_status_payload(idm: &[u8; 8], status1: u8, status2: u8) -> Vec<u8> {
    let mut p = vec![0x07];
    p.extend_from_slice(idm);
    p.push(status1);
    p.push(status2);
    p
}

/// A purse block whose first four bytes hold `counter` big-endian.
pub fn purse_block(counter: u32) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[..4].copy_from_slice(&counter.to_be_bytes());
    block
}
