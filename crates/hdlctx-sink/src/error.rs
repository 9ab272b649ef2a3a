/// Errors reported by a waveform sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// An I/O error occurred while writing line levels.
    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The output stream accepted zero bytes.
    #[error("sink output closed")]
    Closed,

    /// A flush was requested for a device the sink does not drive.
    #[error("unknown output device {device} (sink drives {devices})")]
    UnknownDevice { device: usize, devices: usize },
}

pub type Result<T> = std::result::Result<T, SinkError>;
