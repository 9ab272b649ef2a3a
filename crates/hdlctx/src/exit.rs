use std::fmt;
use std::io;

use hdlctx_frame::EncodeError;
use hdlctx_sink::SinkError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => FAILURE,
        io::ErrorKind::InvalidData => DATA_INVALID,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn sink_error(context: &str, err: SinkError) -> CliError {
    match err {
        SinkError::Io(source) => io_error(context, source),
        SinkError::Closed => CliError::new(FAILURE, format!("{context}: {err}")),
        other => CliError::new(INTERNAL, format!("{context}: {other}")),
    }
}

pub fn encode_error(context: &str, err: EncodeError) -> CliError {
    match err {
        EncodeError::Configuration { .. } => CliError::new(USAGE, format!("{context}: {err}")),
        EncodeError::Sink(source) => sink_error(context, source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_maps_to_usage() {
        let err = encode_error(
            "frame failed",
            EncodeError::Configuration {
                channel: 9,
                max_channels: 6,
            },
        );
        assert_eq!(err.code, USAGE);
        assert!(err.message.starts_with("frame failed: configuration error"));
    }

    #[test]
    fn closed_sink_maps_to_failure() {
        let err = encode_error("flags failed", EncodeError::Sink(SinkError::Closed));
        assert_eq!(err.code, FAILURE);
    }

    #[test]
    fn unknown_device_is_internal() {
        let err = sink_error(
            "flush failed",
            SinkError::UnknownDevice {
                device: 3,
                devices: 1,
            },
        );
        assert_eq!(err.code, INTERNAL);
    }
}
