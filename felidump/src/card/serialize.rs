// felidump/src/card/serialize.rs

//! Snapshot interchange records.
//!
//! [`SnapshotRecord`] is the persisted form carried by an external document
//! serializer: every field is a string with a fixed encoding (decimal
//! system/service codes, canonical block-address strings, hex block
//! payloads). [`TransientRecord`] is the process-local handoff form with
//! raw bytes. Both round-trip back to an equivalent [`CardSnapshot`];
//! ordering is re-sorted by address/service-code order on decode.

use crate::address::BlockAddress;
use crate::card::CardSnapshot;
use crate::constants::BLOCK_LEN;
use crate::types::{BlockData, Idm, ServiceCode, SystemCode};
use crate::utils::parse_hex;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One block in the persisted form: canonical address string plus the
/// 16 data bytes as 32 hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub code: String,
    pub value: String,
}

/// One key-version entry in the persisted form, both fields decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub code: String,
    #[serde(rename = "key-version")]
    pub key_version: String,
}

/// Persisted snapshot form. Tag id and scan time live in the enclosing
/// document; this record carries only the card-family payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    #[serde(rename = "system-code")]
    pub system_code: String,
    pub data: Vec<BlockRecord>,
    pub services: Vec<ServiceRecord>,
}

/// Process-local handoff form with raw byte payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransientRecord {
    pub tag_id: Vec<u8>,
    pub scanned_at: i64,
    pub system_code: u16,
    pub blocks: BTreeMap<String, Vec<u8>>,
    pub key_versions: BTreeMap<String, u16>,
}

impl CardSnapshot {
    /// Emit the persisted record, entries in canonical map order.
    pub fn to_record(&self) -> SnapshotRecord {
        SnapshotRecord {
            system_code: self.system_code().as_u16().to_string(),
            data: self
                .blocks()
                .iter()
                .map(|(addr, data)| BlockRecord {
                    code: addr.to_string(),
                    value: data.to_hex(),
                })
                .collect(),
            services: self
                .key_versions()
                .iter()
                .map(|(svc, version)| ServiceRecord {
                    code: svc.as_u16().to_string(),
                    key_version: version.to_string(),
                })
                .collect(),
        }
    }

    /// Rebuild a snapshot from a persisted record. The tag id and scan
    /// time come from the enclosing document.
    pub fn from_record(tag_id: Idm, scanned_at: i64, record: &SnapshotRecord) -> Result<Self> {
        let system_code = parse_decimal_u16(&record.system_code, "system-code")?;

        let mut blocks = BTreeMap::new();
        for block in &record.data {
            let address: BlockAddress = block.code.parse()?;
            let bytes = parse_hex(&block.value)?;
            if bytes.len() != BLOCK_LEN {
                return Err(Error::InvalidFormat(format!(
                    "block {} payload has {} bytes, expected {}",
                    block.code,
                    bytes.len(),
                    BLOCK_LEN
                )));
            }
            blocks.insert(address, BlockData::try_from(&bytes[..])?);
        }

        let mut key_versions = BTreeMap::new();
        for service in &record.services {
            let code = parse_decimal_u16(&service.code, "service code")?;
            let version = parse_decimal_u16(&service.key_version, "key-version")?;
            key_versions.insert(ServiceCode::new(code), version);
        }

        Ok(CardSnapshot::new(
            tag_id,
            scanned_at,
            SystemCode::new(system_code),
            blocks,
            key_versions,
        ))
    }

    /// Emit the transient record.
    pub fn to_transient(&self) -> TransientRecord {
        TransientRecord {
            tag_id: self.tag_id().as_bytes().to_vec(),
            scanned_at: self.scanned_at(),
            system_code: self.system_code().as_u16(),
            blocks: self
                .blocks()
                .iter()
                .map(|(addr, data)| (addr.to_string(), data.as_bytes().to_vec()))
                .collect(),
            key_versions: self
                .key_versions()
                .iter()
                .map(|(svc, version)| (svc.as_u16().to_string(), *version))
                .collect(),
        }
    }

    /// Rebuild a snapshot from a transient record. A block entry with an
    /// empty or wrong-sized payload is an [`Error::InvalidArgument`].
    pub fn from_transient(record: &TransientRecord) -> Result<Self> {
        let tag_id = Idm::try_from(&record.tag_id[..])?;

        let mut blocks = BTreeMap::new();
        for (code, payload) in &record.blocks {
            let address: BlockAddress = code.parse()?;
            if payload.is_empty() {
                return Err(Error::InvalidArgument(format!(
                    "block {} has no payload",
                    code
                )));
            }
            if payload.len() != BLOCK_LEN {
                return Err(Error::InvalidArgument(format!(
                    "block {} payload has {} bytes, expected {}",
                    code,
                    payload.len(),
                    BLOCK_LEN
                )));
            }
            blocks.insert(address, BlockData::try_from(&payload[..])?);
        }

        let mut key_versions = BTreeMap::new();
        for (code, version) in &record.key_versions {
            let code = parse_decimal_u16(code, "service code")?;
            key_versions.insert(ServiceCode::new(code), *version);
        }

        Ok(CardSnapshot::new(
            tag_id,
            record.scanned_at,
            SystemCode::new(record.system_code),
            blocks,
            key_versions,
        ))
    }
}

fn parse_decimal_u16(s: &str, what: &str) -> Result<u16> {
    s.parse::<u16>()
        .map_err(|_| Error::InvalidFormat(format!("bad {}: {:?}", what, s)))
}
