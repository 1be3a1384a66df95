// felidump/src/card/mod.rs

//! Card snapshots and the dump session that produces them.

use crate::address::BlockAddress;
use crate::types::{BlockData, Idm, ServiceCode, SystemCode};
use std::collections::BTreeMap;

pub mod dump;
pub mod serialize;

pub use dump::{builtin_extensions, DumpCapability, DumpExtension, DumpSession};
pub use serialize::{SnapshotRecord, TransientRecord};

/// Everything read from one card in one dump: identity, system code, and
/// the ordered block and key-version maps.
///
/// Built once from a successful, fully-validated read sequence and never
/// mutated afterward. Map iteration follows [`BlockAddress`]'s total order
/// (and service-code order for key versions), which is the canonical
/// serialization order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSnapshot {
    tag_id: Idm,
    scanned_at: i64,
    system_code: SystemCode,
    blocks: BTreeMap<BlockAddress, BlockData>,
    key_versions: BTreeMap<ServiceCode, u16>,
}

impl CardSnapshot {
    pub fn new(
        tag_id: Idm,
        scanned_at: i64,
        system_code: SystemCode,
        blocks: BTreeMap<BlockAddress, BlockData>,
        key_versions: BTreeMap<ServiceCode, u16>,
    ) -> Self {
        Self {
            tag_id,
            scanned_at,
            system_code,
            blocks,
            key_versions,
        }
    }

    pub fn tag_id(&self) -> Idm {
        self.tag_id
    }

    /// When the card was scanned, as milliseconds since the Unix epoch.
    pub fn scanned_at(&self) -> i64 {
        self.scanned_at
    }

    pub fn system_code(&self) -> SystemCode {
        self.system_code
    }

    pub fn blocks(&self) -> &BTreeMap<BlockAddress, BlockData> {
        &self.blocks
    }

    pub fn key_versions(&self) -> &BTreeMap<ServiceCode, u16> {
        &self.key_versions
    }

    /// Look up one block; interpreters degrade to "unknown" when this is
    /// `None` rather than erroring.
    pub fn block(&self, address: &BlockAddress) -> Option<&BlockData> {
        self.blocks.get(address)
    }

    /// Key version for a service, if the dump recorded one. An absent
    /// entry means "queried but not present" or "never queried"; the two
    /// are indistinguishable.
    pub fn key_version(&self, service: ServiceCode) -> Option<u16> {
        self.key_versions.get(&service).copied()
    }
}
