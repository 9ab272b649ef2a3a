//! Per-bit events handed from the encoder to the sink.

/// How a logical bit maps onto the line level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCoding {
    /// The line level is the bit itself (preamble, sync and length field).
    Direct,
    /// NRZI: a 0 bit toggles the line level, a 1 bit holds it.
    Nrzi,
}

/// Whether the downstream scrambler should be applied to a bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scrambling {
    Scrambled,
    Unscrambled,
}

impl Scrambling {
    pub fn is_scrambled(self) -> bool {
        matches!(self, Scrambling::Scrambled)
    }
}

/// One emitted bit, after line coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitEvent {
    /// Radio channel the bit belongs to.
    pub channel: usize,
    /// Line level after NRZI or direct mapping.
    pub level: bool,
    pub scrambling: Scrambling,
    pub coding: LineCoding,
}

impl BitEvent {
    pub fn new(channel: usize, level: bool, scrambling: Scrambling, coding: LineCoding) -> Self {
        Self {
            channel,
            level,
            scrambling,
            coding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrambling_flag() {
        assert!(Scrambling::Scrambled.is_scrambled());
        assert!(!Scrambling::Unscrambled.is_scrambled());
    }

    #[test]
    fn event_fields() {
        let ev = BitEvent::new(3, true, Scrambling::Unscrambled, LineCoding::Direct);
        assert_eq!(ev.channel, 3);
        assert!(ev.level);
        assert_eq!(ev.coding, LineCoding::Direct);
    }
}
