//! Per-channel encoder state.
//!
//! Every radio channel owns one [`ChannelState`], stored by index in a
//! [`ChannelRegistry`]. State never leaks between channels.

use crate::error::{EncodeError, Result};
use crate::stuffing::StuffRun;

/// Carried state of one channel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChannelState {
    /// Current line level. Persists across operations for NRZI continuity.
    pub output_level: bool,
    /// Consecutive 1-bits sent on the stuffed path.
    pub stuff_run: StuffRun,
    /// Bits emitted by the current top-level operation.
    pub bits_sent: usize,
}

impl ChannelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new top-level operation.
    pub fn begin(&mut self) {
        self.bits_sent = 0;
    }

    /// Return every field to its power-on value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Arena of channel states keyed by channel index.
#[derive(Debug, Clone)]
pub struct ChannelRegistry {
    states: Vec<ChannelState>,
}

impl ChannelRegistry {
    /// Create a registry for channels `0..max_channels`.
    pub fn new(max_channels: usize) -> Self {
        Self {
            states: vec![ChannelState::default(); max_channels],
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, channel: usize) -> Result<&ChannelState> {
        let max_channels = self.states.len();
        self.states
            .get(channel)
            .ok_or(EncodeError::Configuration {
                channel,
                max_channels,
            })
    }

    pub fn get_mut(&mut self, channel: usize) -> Result<&mut ChannelState> {
        let max_channels = self.states.len();
        self.states
            .get_mut(channel)
            .ok_or(EncodeError::Configuration {
                channel,
                max_channels,
            })
    }

    /// Disjoint mutable borrows of every channel, paired with its index.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut ChannelState)> {
        self.states.iter_mut().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_is_configuration_error() {
        let mut registry = ChannelRegistry::new(2);
        assert!(registry.get(1).is_ok());

        let err = registry.get_mut(2).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::Configuration {
                channel: 2,
                max_channels: 2
            }
        ));
    }

    #[test]
    fn channels_are_independent() {
        let mut registry = ChannelRegistry::new(3);
        registry.get_mut(1).unwrap().output_level = true;
        registry.get_mut(1).unwrap().bits_sent = 12;

        assert_eq!(*registry.get(0).unwrap(), ChannelState::default());
        assert_eq!(*registry.get(2).unwrap(), ChannelState::default());
        assert!(registry.get(1).unwrap().output_level);
    }

    #[test]
    fn begin_keeps_level_and_reset_clears_all() {
        let mut state = ChannelState {
            output_level: true,
            bits_sent: 40,
            ..ChannelState::default()
        };
        state.begin();
        assert_eq!(state.bits_sent, 0);
        assert!(state.output_level);

        state.bits_sent = 3;
        state.reset();
        assert_eq!(state, ChannelState::default());
    }

    #[test]
    fn iter_mut_yields_every_channel() {
        let mut registry = ChannelRegistry::new(4);
        for (idx, state) in registry.iter_mut() {
            state.bits_sent = idx;
        }
        assert_eq!(registry.get(3).unwrap().bits_sent, 3);
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());
    }
}
