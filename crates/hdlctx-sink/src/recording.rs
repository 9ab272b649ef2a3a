use crate::error::{Result, SinkError};
use crate::event::BitEvent;
use crate::traits::WaveformSink;

/// Keeps every event and every flush request in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<BitEvent>,
    flushes: Vec<usize>,
    devices: Option<usize>,
}

impl RecordingSink {
    /// Create a recording sink that accepts flushes for any device.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording sink that only knows devices `0..devices`.
    pub fn with_devices(devices: usize) -> Self {
        Self {
            devices: Some(devices),
            ..Self::default()
        }
    }

    /// Every event received so far, in emission order.
    pub fn events(&self) -> &[BitEvent] {
        &self.events
    }

    /// Devices flushed so far, in request order.
    pub fn flushes(&self) -> &[usize] {
        &self.flushes
    }

    /// Line levels for one channel, in emission order.
    pub fn levels(&self, channel: usize) -> Vec<bool> {
        self.events
            .iter()
            .filter(|ev| ev.channel == channel)
            .map(|ev| ev.level)
            .collect()
    }

    /// Drain recorded events, keeping flush history.
    pub fn take_events(&mut self) -> Vec<BitEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.flushes.clear();
    }
}

impl WaveformSink for RecordingSink {
    fn put_bit(&mut self, event: BitEvent) -> Result<()> {
        self.events.push(event);
        Ok(())
    }

    fn flush(&mut self, device: usize) -> Result<()> {
        if let Some(devices) = self.devices {
            if device >= devices {
                return Err(SinkError::UnknownDevice { device, devices });
            }
        }
        self.flushes.push(device);
        Ok(())
    }
}

/// Counts bits and flushes, discards everything else.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink {
    bits: usize,
    flushes: usize,
}

impl NullSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl WaveformSink for NullSink {
    fn put_bit(&mut self, _event: BitEvent) -> Result<()> {
        self.bits += 1;
        Ok(())
    }

    fn flush(&mut self, _device: usize) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
