//! Frame check sequence.

/// CRC-16/CCITT polynomial, reflected.
const CRC16_CCITT_POLY: u16 = 0x8408;

/// Computes the 16-bit check value appended to every HDLC frame.
///
/// The low byte is transmitted first.
pub trait Checksum {
    fn checksum(&self, payload: &[u8]) -> u16;
}

impl<F> Checksum for F
where
    F: Fn(&[u8]) -> u16,
{
    fn checksum(&self, payload: &[u8]) -> u16 {
        self(payload)
    }
}

/// AX.25 / HDLC FCS (CRC-16/X.25: reflected 0x1021, init and xor-out 0xFFFF).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Fcs16;

impl Fcs16 {
    pub fn compute(data: &[u8]) -> u16 {
        let mut crc: u16 = 0xFFFF;
        for &byte in data {
            crc ^= u16::from(byte);
            for _ in 0..8 {
                if crc & 1 != 0 {
                    crc = (crc >> 1) ^ CRC16_CCITT_POLY;
                } else {
                    crc >>= 1;
                }
            }
        }
        crc ^ 0xFFFF
    }
}

impl Checksum for Fcs16 {
    fn checksum(&self, payload: &[u8]) -> u16 {
        Self::compute(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_value() {
        assert_eq!(Fcs16::compute(b"123456789"), 0x906E);
    }

    #[test]
    fn empty_payload() {
        assert_eq!(Fcs16::compute(&[]), 0x0000);
    }

    #[test]
    fn single_bit_change_alters_fcs() {
        assert_ne!(Fcs16::compute(&[0x00]), Fcs16::compute(&[0x01]));
    }

    #[test]
    fn closures_are_checksums() {
        let fixed = |_: &[u8]| 0xBEEFu16;
        assert_eq!(fixed.checksum(b"anything"), 0xBEEF);
        assert_eq!(Fcs16.checksum(b"123456789"), 0x906E);
    }
}
