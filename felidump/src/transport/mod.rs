// felidump/src/transport/mod.rs

//! Transport abstraction over the physical contactless link.

pub mod mock;
pub mod traits;

pub use mock::MockTransport;
pub use traits::Transport;
