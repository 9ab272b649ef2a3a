//! Bit-count prediction for stuffed frames.

use crate::fcs::Checksum;
use crate::stuffing::{BitCounter, StuffRun};

/// Number of bits the payload and its FCS occupy on the stuffed path.
///
/// Runs the emitter's [`StuffRun`] in counting mode, starting from an empty
/// run as the leading raw flags leave it. The result equals what
/// [`HdlcEncoder::encode_frame`](crate::HdlcEncoder::encode_frame) returns
/// minus the flag bits. Nothing is emitted and no channel state is touched.
pub fn predict_bits<C: Checksum + ?Sized>(checksum: &C, payload: &[u8]) -> usize {
    let fcs = checksum.checksum(payload).to_le_bytes();

    let mut run = StuffRun::new();
    let mut counter = BitCounter::new();
    for &byte in payload.iter().chain(fcs.iter()) {
        let Ok(()) = run.stuff_byte(byte, &mut counter);
    }
    counter.bits()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fcs::Fcs16;

    #[test]
    fn empty_payload_counts_only_fcs() {
        let zero = |_: &[u8]| 0x0000u16;
        assert_eq!(predict_bits(&zero, &[]), 16);
    }

    #[test]
    fn all_ones_fcs_is_stuffed() {
        // Sixteen 1s: stuffed after the 5th, 10th and 15th.
        let ones = |_: &[u8]| 0xFFFFu16;
        assert_eq!(predict_bits(&ones, &[]), 19);
    }

    #[test]
    fn run_continues_from_payload_into_fcs() {
        // Payload ends on four 1s; the FCS starts with a 1.
        let low_one = |_: &[u8]| 0x0001u16;
        assert_eq!(predict_bits(&low_one, &[0xF0]), 8 + 1 + 16);
    }

    #[test]
    fn uses_the_real_fcs() {
        let payload = b"CQ CQ DE N0CALL";
        let bits = predict_bits(&Fcs16, payload);
        assert!(bits >= (payload.len() + 2) * 8);
    }
}
