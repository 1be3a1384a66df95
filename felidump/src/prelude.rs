// felidump/src/prelude.rs

pub use crate::address::BlockAddress;
pub use crate::card::{
    builtin_extensions, CardSnapshot, DumpCapability, DumpExtension, DumpSession, SnapshotRecord,
    TransientRecord,
};
pub use crate::protocol::Codec;
pub use crate::transit::TransitData;
pub use crate::transport::Transport;
pub use crate::{BlockData, Error, Idm, Result, ServiceCode, SystemCode};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, parse_hex};
