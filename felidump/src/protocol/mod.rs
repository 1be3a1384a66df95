// felidump/src/protocol/mod.rs

//! FeliCa command/response codec.
//!
//! `commands` builds raw request payloads, `responses` validates and
//! extracts the matching response payloads, and [`codec::Codec`] ties both
//! to a [`Transport`](crate::transport::Transport) with the shared
//! length-prefixed transceive framing.

pub mod codec;
pub mod commands;
pub mod parser;
pub mod responses;

pub use codec::Codec;
