// felidump/src/transit/mod.rs

//! Per-family interpreters over [`CardSnapshot`].
//!
//! Interpreters are read-only: they look up the blocks their family cares
//! about and degrade to an explicit "unknown" value when a block is
//! missing, never an error. New families register a `(predicate,
//! constructor)` pair in [`identify`]'s table; entries are tried in order.

use crate::card::CardSnapshot;

pub mod octopus;

/// Human-meaningful fields a card family derives from a snapshot.
pub trait TransitData {
    /// Display name of the card family.
    fn card_name(&self) -> &'static str;

    /// Rendered balance, or `"???"` when the purse block was not read.
    fn balance_string(&self) -> String;

    /// Printed serial number, when the family exposes one.
    fn serial_number(&self) -> Option<String>;
}

type Predicate = fn(&CardSnapshot) -> bool;
type Constructor = fn(&CardSnapshot) -> Box<dyn TransitData>;

/// Find the interpreter for a snapshot, if any family claims it.
pub fn identify(snapshot: &CardSnapshot) -> Option<Box<dyn TransitData>> {
    const TABLE: &[(Predicate, Constructor)] = &[(octopus::matches, octopus::build)];

    TABLE
        .iter()
        .find(|(matches, _)| matches(snapshot))
        .map(|(_, build)| build(snapshot))
}
