// felidump/src/card/dump.rs

//! One full card read, from connect to [`CardSnapshot`].

use crate::address::BlockAddress;
use crate::card::CardSnapshot;
use crate::protocol::Codec;
use crate::transport::Transport;
use crate::types::{BlockData, ServiceCode, SystemCode};
use crate::Result;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Narrow interface handed to per-family dump extensions.
///
/// Extensions pull additional key versions and blocks through this instead
/// of seeing the codec; everything they read lands in the snapshot maps.
pub trait DumpCapability {
    /// Query one service's key version and record the result. `None` means
    /// the card reports no such service (and any previously recorded entry
    /// is dropped).
    fn read_key_version(&mut self, service: ServiceCode) -> Result<Option<u16>>;

    /// Read one block and record it under its address.
    fn read_block(&mut self, address: BlockAddress) -> Result<BlockData>;
}

/// A per-family dump extension: `matches` decides from the system code
/// whether this family applies, `dump` pulls the family's blocks through
/// the capability. Errors inside `dump` abort the whole session.
#[derive(Clone, Copy)]
pub struct DumpExtension {
    pub matches: fn(SystemCode) -> bool,
    pub dump: fn(&mut dyn DumpCapability) -> Result<()>,
}

/// The built-in extension table, tried in order; at most one runs per dump.
pub fn builtin_extensions() -> &'static [DumpExtension] {
    const EXTENSIONS: &[DumpExtension] = &[DumpExtension {
        matches: crate::transit::octopus::check,
        dump: crate::transit::octopus::dump,
    }];
    EXTENSIONS
}

struct SessionCapability<'a, T: Transport> {
    codec: &'a mut Codec<T>,
    blocks: &'a mut BTreeMap<BlockAddress, BlockData>,
    key_versions: &'a mut BTreeMap<ServiceCode, u16>,
}

impl<T: Transport> DumpCapability for SessionCapability<'_, T> {
    fn read_key_version(&mut self, service: ServiceCode) -> Result<Option<u16>> {
        let results = self.codec.request_service(&[service])?;
        let version = results
            .into_iter()
            .next()
            .and_then(|(_, version)| version);
        match version {
            Some(v) => {
                self.key_versions.insert(service, v);
            }
            None => {
                self.key_versions.remove(&service);
            }
        }
        Ok(version)
    }

    fn read_block(&mut self, address: BlockAddress) -> Result<BlockData> {
        let data = self.codec.read_block(address)?;
        self.blocks.insert(address, data);
        Ok(data)
    }
}

/// Orchestrates one full card read.
///
/// Linear state machine with no back edges: connect, confirm presence,
/// read the system key version, apply at most one matching extension,
/// close, assemble the snapshot. Any error on the way aborts the whole
/// session; partial snapshots are never returned. The transport is closed
/// on every exit path; a close failure is logged and never promoted over
/// an already-captured error.
pub struct DumpSession<T: Transport> {
    codec: Codec<T>,
    extensions: &'static [DumpExtension],
}

impl<T: Transport> DumpSession<T> {
    pub fn new(transport: T) -> Self {
        Self::with_extensions(transport, builtin_extensions())
    }

    pub fn with_extensions(transport: T, extensions: &'static [DumpExtension]) -> Self {
        Self {
            codec: Codec::new(transport),
            extensions,
        }
    }

    /// Run the dump to completion and return the snapshot.
    pub fn dump(mut self) -> Result<CardSnapshot> {
        let mut blocks = BTreeMap::new();
        let mut key_versions = BTreeMap::new();

        let result = self.run(&mut blocks, &mut key_versions);
        if let Err(err) = self.codec.close() {
            log::warn!("failed to close transport: {}", err);
        }
        let system_code = result?;

        Ok(CardSnapshot::new(
            self.codec.idm(),
            now_millis(),
            system_code,
            blocks,
            key_versions,
        ))
    }

    fn run(
        &mut self,
        blocks: &mut BTreeMap<BlockAddress, BlockData>,
        key_versions: &mut BTreeMap<ServiceCode, u16>,
    ) -> Result<SystemCode> {
        self.codec.connect()?;
        let system_code = self.codec.system_code();
        log::debug!(
            "dumping card {} (system code {:#06x})",
            self.codec.idm().to_hex(),
            system_code.as_u16()
        );

        // Confirm the card is actually there; the mode byte is unused.
        self.codec.request_presence()?;

        let mut capability = SessionCapability {
            codec: &mut self.codec,
            blocks,
            key_versions,
        };
        capability.read_key_version(ServiceCode::SYSTEM_KEY)?;

        if let Some(extension) = self
            .extensions
            .iter()
            .find(|ext| (ext.matches)(system_code))
        {
            (extension.dump)(&mut capability)?;
        }

        Ok(system_code)
    }
}

fn now_millis() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as i64,
        Err(err) => {
            log::warn!("system clock is before the unix epoch: {}", err);
            0
        }
    }
}
