//! HDLC zero-insertion shared by the emitter and the length predictor.
//!
//! Both paths drive the same [`StuffRun`] state machine through the
//! [`BitTarget`] seam: the emitter puts bits on the line, [`BitCounter`] only
//! counts them. The two can therefore never disagree about where a stuffed
//! zero goes.

use std::convert::Infallible;

/// Consecutive 1-bits after which a 0 is inserted.
pub const STUFF_LIMIT: u8 = 5;

/// Destination for the bits of a stuffed byte.
pub trait BitTarget {
    type Error;

    fn put_bit(&mut self, bit: bool) -> Result<(), Self::Error>;
}

/// Counts bits without producing them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitCounter {
    bits: usize,
}

impl BitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bits(&self) -> usize {
        self.bits
    }
}

impl BitTarget for BitCounter {
    type Error = Infallible;

    fn put_bit(&mut self, _bit: bool) -> Result<(), Infallible> {
        self.bits += 1;
        Ok(())
    }
}

impl BitTarget for Vec<bool> {
    type Error = Infallible;

    fn put_bit(&mut self, bit: bool) -> Result<(), Infallible> {
        self.push(bit);
        Ok(())
    }
}

/// Run of consecutive 1-bits sent on the stuffed path (always `< STUFF_LIMIT`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StuffRun(u8);

impl StuffRun {
    pub fn new() -> Self {
        Self(0)
    }

    /// Current number of consecutive 1-bits.
    pub fn ones(self) -> u8 {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// Account for one data bit. Returns true when a stuffed 0 must follow it.
    fn advance(&mut self, bit: bool) -> bool {
        if !bit {
            self.0 = 0;
            return false;
        }
        self.0 += 1;
        if self.0 == STUFF_LIMIT {
            self.0 = 0;
            return true;
        }
        false
    }

    /// Send `value` LSB-first into `target`, inserting a 0 after every fifth
    /// consecutive 1. The run carries over from previous bytes.
    pub fn stuff_byte<T: BitTarget + ?Sized>(
        &mut self,
        value: u8,
        target: &mut T,
    ) -> Result<(), T::Error> {
        for bit in lsb_first(value) {
            target.put_bit(bit)?;
            if self.advance(bit) {
                target.put_bit(false)?;
            }
        }
        Ok(())
    }
}

/// Bits of `value`, least significant first.
pub fn lsb_first(value: u8) -> impl Iterator<Item = bool> {
    (0..8).map(move |i| (value >> i) & 1 != 0)
}
