//! Preamble, sync and length field of the header framing mode.
//!
//! The header is sent unstuffed, unscrambled and direct-mapped:
//!
//! ```text
//! ┌────────────────┬──────────────┬─────────────────────────────┐
//! │ Preamble (8B)  │ Sync (2B)    │ Length (2B, high then low)  │
//! │ 0xAA × 8       │ !0x7C !0x56  │ !reverse(byte)              │
//! └────────────────┴──────────────┴─────────────────────────────┘
//! ```

/// Training pattern byte.
pub const PREAMBLE: u8 = 0xAA;

/// Number of preamble bytes.
pub const PREAMBLE_BYTES: usize = 8;

/// Sync word, sent as the complement of these bytes.
pub const SYNC: [u8; 2] = [0x7C, 0x56];

/// Bits in a complete header: preamble, sync and the two length bytes.
pub const HEADER_BITS: usize = (PREAMBLE_BYTES + SYNC.len() + 2) * 8;

// The three additive terms below have not been checked against the
// link-layer definition. Their sum and the final shift must stay as is.

/// Rounds the bit total up to a whole byte.
pub const BYTE_ROUNDING_BITS: usize = 7;

/// Width of the FCS field.
pub const CHECKSUM_FIELD_BITS: usize = 16;

/// Flag and framing overhead.
pub const FRAME_OVERHEAD_BITS: usize = 24;

/// Frame length in bytes as announced by the header, from the predicted
/// stuffed bit count of payload plus FCS.
pub fn frame_len(total_bits: usize) -> usize {
    (total_bits + BYTE_ROUNDING_BITS + CHECKSUM_FIELD_BITS + FRAME_OVERHEAD_BITS) >> 3
}

/// The two length-field bytes in transmission order: high byte then low
/// byte, each bit-reversed and then complemented.
pub fn length_field(frame_len: usize) -> [u8; 2] {
    let hi = ((frame_len >> 8) & 0xFF) as u8;
    let lo = (frame_len & 0xFF) as u8;
    [!hi.reverse_bits(), !lo.reverse_bits()]
}

/// Sync bytes in transmission order.
pub fn sync_bytes() -> [u8; 2] {
    [!SYNC[0], !SYNC[1]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_96_bits() {
        assert_eq!(HEADER_BITS, 96);
    }

    #[test]
    fn sync_is_complemented() {
        assert_eq!(sync_bytes(), [0x83, 0xA9]);
    }

    #[test]
    fn frame_len_arithmetic() {
        // (total + 47) >> 3
        assert_eq!(frame_len(0), 5);
        assert_eq!(frame_len(1), 6);
        assert_eq!(frame_len(24), 8);
        assert_eq!(frame_len(25), 9);
        assert_eq!(frame_len(33), 10);
    }

    #[test]
    fn length_field_reversed_and_complemented() {
        // 0x0001: hi 0x00 -> rev 0x00 -> !0xFF; lo 0x01 -> rev 0x80 -> !0x7F
        assert_eq!(length_field(0x0001), [0xFF, 0x7F]);
        // 0x0130: hi 0x01 -> 0x80 -> 0x7F; lo 0x30 -> 0x0C -> 0xF3
        assert_eq!(length_field(0x0130), [0x7F, 0xF3]);
    }
}
