use hdlctx_sink::SinkError;

/// Errors that can occur while encoding onto a channel.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The channel index is outside the configured registry.
    #[error("configuration error: channel {channel} out of range (max {max_channels} channels)")]
    Configuration { channel: usize, max_channels: usize },

    /// The waveform sink failed; the channel state has been reset.
    #[error("waveform sink error: {0}")]
    Sink(#[from] SinkError),
}

pub type Result<T> = std::result::Result<T, EncodeError>;
