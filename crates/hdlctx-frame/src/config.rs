/// Default number of radio channels.
pub const DEFAULT_MAX_CHANNELS: usize = 6;

/// Default channels per audio device (left and right of one stereo device).
pub const DEFAULT_CHANNELS_PER_DEVICE: usize = 2;

/// Configuration for an [`HdlcEncoder`](crate::HdlcEncoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Number of channels in the registry. Valid indices are `0..max_channels`.
    pub max_channels: usize,
    /// Channels sharing one audio device. Used to pick the device to flush.
    pub channels_per_device: usize,
}

impl EncoderConfig {
    /// Audio device that carries `channel`.
    pub fn device_for(&self, channel: usize) -> usize {
        channel / self.channels_per_device.max(1)
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_channels: DEFAULT_MAX_CHANNELS,
            channels_per_device: DEFAULT_CHANNELS_PER_DEVICE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stereo_device_mapping() {
        let cfg = EncoderConfig::default();
        assert_eq!(cfg.device_for(0), 0);
        assert_eq!(cfg.device_for(1), 0);
        assert_eq!(cfg.device_for(2), 1);
        assert_eq!(cfg.device_for(5), 2);
    }

    #[test]
    fn zero_channels_per_device_treated_as_one() {
        let cfg = EncoderConfig {
            channels_per_device: 0,
            ..EncoderConfig::default()
        };
        assert_eq!(cfg.device_for(3), 3);
    }
}
