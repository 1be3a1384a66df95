// felidump/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::types::{Idm, SystemCode};
use crate::{Error, Result};

/// Mock transport for unit tests. It records exchanged requests and returns
/// queued raw responses in order.
#[derive(Debug)]
pub struct MockTransport {
    pub idm: Idm,
    pub system_code: SystemCode,
    pub exchanged: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    pub connected: bool,
    pub close_calls: usize,
    /// Testing hook: make connect fail.
    pub fail_connect: bool,
    /// Testing hook: make close fail (the session must tolerate this).
    pub fail_close: bool,
}

impl MockTransport {
    pub fn new(idm: [u8; 8], system_code: u16) -> Self {
        Self {
            idm: Idm::from_bytes(idm),
            system_code: SystemCode::new(system_code),
            exchanged: Vec::new(),
            responses: Vec::new(),
            connected: false,
            close_calls: 0,
            fail_connect: false,
            fail_close: false,
        }
    }

    /// Queue a raw response, including its leading length byte.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Queue a payload, prepending the length byte the framing expects.
    pub fn push_framed(&mut self, payload: &[u8]) {
        let mut resp = Vec::with_capacity(payload.len() + 1);
        resp.push((payload.len() + 1) as u8);
        resp.extend_from_slice(payload);
        self.responses.push(resp);
    }
}

impl Transport for MockTransport {
    fn connect(&mut self) -> Result<()> {
        if self.fail_connect {
            return Err(Error::Transport("connect failed".to_string()));
        }
        self.connected = true;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.close_calls += 1;
        self.connected = false;
        if self.fail_close {
            return Err(Error::Transport("close failed".to_string()));
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn exchange(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        self.exchanged.push(data.to_vec());
        if self.responses.is_empty() {
            Err(Error::Transport("card left the field".to_string()))
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn system_code(&self) -> SystemCode {
        self.system_code
    }

    fn idm(&self) -> Idm {
        self.idm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_exchanges_and_pops_responses() {
        let mut m = MockTransport::new([0; 8], 0x0003);
        m.push_response(vec![0x02, 0x01]);
        m.push_response(vec![0x02, 0x02]);

        assert_eq!(m.exchange(&[0xaa]).unwrap(), vec![0x02, 0x01]);
        assert_eq!(m.exchange(&[0xbb]).unwrap(), vec![0x02, 0x02]);
        assert_eq!(m.exchanged.len(), 2);
        // No more responses -> transport failure
        assert!(matches!(m.exchange(&[0xcc]), Err(Error::Transport(_))));
    }

    #[test]
    fn push_framed_prepends_length() {
        let mut m = MockTransport::new([0; 8], 0x0003);
        m.push_framed(&[0x05, 0x01]);
        assert_eq!(m.responses[0], vec![3, 0x05, 0x01]);
    }

    #[test]
    fn close_failure_hook() {
        let mut m = MockTransport::new([0; 8], 0x0003);
        m.fail_close = true;
        m.connect().unwrap();
        assert!(m.close().is_err());
        assert_eq!(m.close_calls, 1);
        assert!(!m.is_connected());
    }
}
