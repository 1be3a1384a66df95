// felidump/src/transit/octopus.rs

//! Octopus stored-value cards (Hong Kong).
//!
//! The purse balance lives in block 0 of service 0x0117: a big-endian
//! 32-bit counter offset by 350, in tenths of a Hong Kong dollar.

use crate::address::BlockAddress;
use crate::card::dump::DumpCapability;
use crate::card::CardSnapshot;
use crate::transit::TransitData;
use crate::types::{ServiceCode, SystemCode};
use crate::Result;

/// System code announced by Octopus cards.
pub const OCTOPUS_SYSTEM_CODE: SystemCode = SystemCode::new(0x8008);

/// Publicly readable purse service.
pub const PURSE_SERVICE: ServiceCode = ServiceCode::new(0x0117);

/// Raw counter value corresponding to a zero balance.
const BALANCE_OFFSET: i64 = 350;

/// Address of the purse counter block.
pub fn purse_address() -> BlockAddress {
    BlockAddress::new(PURSE_SERVICE, 0, false)
}

/// Dump-extension predicate: does this system code belong to Octopus?
pub fn check(system_code: SystemCode) -> bool {
    system_code == OCTOPUS_SYSTEM_CODE
}

/// Dump-extension body: pull the single purse block.
pub fn dump(capability: &mut dyn DumpCapability) -> Result<()> {
    capability.read_block(purse_address())?;
    Ok(())
}

/// Interpreted Octopus data. Holds only derived fields; the snapshot is
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctopusData {
    balance_tenths: Option<i64>,
}

impl OctopusData {
    pub fn new(snapshot: &CardSnapshot) -> Self {
        let balance_tenths = snapshot
            .block(&purse_address())
            .map(|block| block.be_u32_at_start() as i64 - BALANCE_OFFSET);
        Self { balance_tenths }
    }

    /// Balance in tenths of a Hong Kong dollar, if the purse block was read.
    pub fn balance_tenths(&self) -> Option<i64> {
        self.balance_tenths
    }
}

impl TransitData for OctopusData {
    fn card_name(&self) -> &'static str {
        "Octopus"
    }

    fn balance_string(&self) -> String {
        match self.balance_tenths {
            Some(tenths) => format_hkd(tenths),
            None => "???".to_string(),
        }
    }

    fn serial_number(&self) -> Option<String> {
        // Not derivable from the publicly readable blocks.
        None
    }
}

pub(crate) fn matches(snapshot: &CardSnapshot) -> bool {
    check(snapshot.system_code())
}

pub(crate) fn build(snapshot: &CardSnapshot) -> Box<dyn TransitData> {
    Box::new(OctopusData::new(snapshot))
}

fn format_hkd(tenths: i64) -> String {
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.abs();
    format!("{}HK${}.{:02}", sign, abs / 10, (abs % 10) * 10)
}
