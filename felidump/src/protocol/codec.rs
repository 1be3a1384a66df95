// felidump/src/protocol/codec.rs

use crate::address::BlockAddress;
use crate::constants::MAX_SERVICES_PER_REQUEST;
use crate::protocol::{commands, responses};
use crate::transport::Transport;
use crate::types::{BlockData, Idm, ServiceCode, SystemCode};
use crate::{Error, Result};

/// Drives the three unencrypted FeliCa commands over a [`Transport`].
///
/// Owns the transport for the duration of a card session; the card's IDm
/// and system code are taken from the transport (the discovery layer knows
/// both before the first command).
pub struct Codec<T: Transport> {
    transport: T,
}

impl<T: Transport> Codec<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn idm(&self) -> Idm {
        self.transport.idm()
    }

    pub fn system_code(&self) -> SystemCode {
        self.transport.system_code()
    }

    pub fn connect(&mut self) -> Result<()> {
        self.transport.connect()
    }

    pub fn close(&mut self) -> Result<()> {
        self.transport.close()
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    /// Give back the transport, ending the session.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Check that the card is still in the field; returns its mode byte.
    pub fn request_presence(&mut self) -> Result<u8> {
        let request = commands::encode_request_response(self.idm());
        let response = self.transceive(&request)?;
        responses::decode_request_response(&response)
    }

    /// Query key versions for up to 32 services in one round trip.
    ///
    /// Returns `(service, Some(version))` for services the card knows and
    /// `(service, None)` for services it reports as absent, in request
    /// order. More than 32 services is refused before anything is sent.
    pub fn request_service(
        &mut self,
        services: &[ServiceCode],
    ) -> Result<Vec<(ServiceCode, Option<u16>)>> {
        if services.len() > MAX_SERVICES_PER_REQUEST {
            return Err(Error::InvalidArgument(format!(
                "too many services requested: {} (max {})",
                services.len(),
                MAX_SERVICES_PER_REQUEST
            )));
        }

        let request = commands::encode_request_service(self.idm(), services);
        let response = self.transceive(&request)?;
        let versions = responses::decode_request_service(&response, services.len())?;
        Ok(services.iter().copied().zip(versions).collect())
    }

    /// Read one 16-byte block from an unencrypted service.
    pub fn read_block(&mut self, address: BlockAddress) -> Result<BlockData> {
        let request = commands::encode_read_without_encryption(self.idm(), address);
        let response = self.transceive(&request)?;
        responses::decode_read_without_encryption(&response)
    }

    /// One request/response round trip with the shared length framing: the
    /// payload goes out prefixed with its own total length, and the reply's
    /// first byte must equal the reply's total length. The length byte is
    /// stripped before opcode-specific parsing.
    fn transceive(&mut self, payload: &[u8]) -> Result<Vec<u8>> {
        let mut request = Vec::with_capacity(payload.len() + 1);
        request.push((payload.len() + 1) as u8);
        request.extend_from_slice(payload);

        log::debug!("-> {}", crate::utils::bytes_to_hex(&request));
        let response = self.transport.exchange(&request)?;
        log::debug!("<- {}", crate::utils::bytes_to_hex(&response));

        if response.is_empty() || response[0] != response.len() as u8 {
            return Err(Error::Protocol("response length mismatch".to_string()));
        }
        Ok(response[1..].to_vec())
    }
}
