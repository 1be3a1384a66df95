// felidump/src/transport/traits.rs

use crate::types::{Idm, SystemCode};
use crate::Result;

/// Transport trait abstracts the contactless I/O stack away from the codec
/// and session logic.
///
/// One physical link, one card, one session at a time: `exchange` is a
/// synchronous request/response round trip returning the exact bytes the
/// card produced. Blocking-call deadlines belong to the implementation;
/// no timeout is modeled here.
pub trait Transport {
    /// Open the link to the card.
    fn connect(&mut self) -> Result<()>;

    /// Close the link. Safe to call on an already-closed transport.
    fn close(&mut self) -> Result<()>;

    /// Whether the link is currently open.
    fn is_connected(&self) -> bool;

    /// Send one raw frame and return the card's raw reply.
    fn exchange(&mut self, data: &[u8]) -> Result<Vec<u8>>;

    /// The system code the card announced at discovery time.
    fn system_code(&self) -> SystemCode;

    /// The card's 8-byte manufacture ID, known from discovery.
    fn idm(&self) -> Idm;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[test]
    fn trait_object_exchange() {
        let mut m = MockTransport::new([1, 2, 3, 4, 5, 6, 7, 8], 0x8008);
        m.push_response(vec![0x02, 0x01]);
        let t: &mut dyn Transport = &mut m;
        t.connect().unwrap();
        let r = t.exchange(&[0x10]).unwrap();
        assert_eq!(r, vec![0x02, 0x01]);
        assert_eq!(t.system_code().as_u16(), 0x8008);
    }
}
