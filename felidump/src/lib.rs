// felidump/src/lib.rs

//! felidump
//!
//! Pure Rust toolkit for dumping FeliCa contactless cards into structured,
//! serializable snapshots, plus per-family interpreters over those snapshots.
#![warn(missing_docs)]

pub mod address;
pub mod card;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod transit;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::address::BlockAddress;
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
