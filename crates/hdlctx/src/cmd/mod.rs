use clap::{Args, Subcommand};
use std::fs;
use std::path::PathBuf;

use hdlctx_frame::{EncoderConfig, HdlcEncoder};
use hdlctx_sink::RecordingSink;

use crate::exit::{io_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod flags;
pub mod frame;
pub mod header;
pub mod predict;
pub mod version;

/// Default transmit rate for airtime reporting (AFSK 1200).
pub const DEFAULT_BAUD: u32 = 1200;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode one HDLC frame.
    Frame(FrameArgs),
    /// Send a run of idle flags.
    Flags(FlagsArgs),
    /// Encode the preamble, sync and length header for a payload.
    Header(HeaderArgs),
    /// Predict the stuffed bit count of a payload and its FCS.
    Predict(PredictArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, config: EncoderConfig, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Frame(args) => frame::run(args, config, format),
        Command::Flags(args) => flags::run(args, config, format),
        Command::Header(args) => header::run(args, config, format),
        Command::Predict(args) => predict::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Raw string payload.
    #[arg(long, conflicts_with_all = ["hex", "file"])]
    pub data: Option<String>,
    /// Hex payload (e.g. "82a0a4a6").
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub hex: Option<String>,
    /// Read payload from file.
    #[arg(long, conflicts_with_all = ["data", "hex"])]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TransmitArgs {
    /// Channel to encode on.
    #[arg(long, short = 'c', default_value = "0")]
    pub channel: usize,
    /// Transmit rate used for airtime reporting.
    #[arg(long, default_value_t = DEFAULT_BAUD)]
    pub baud: u32,
    /// Include the line-level stream in the output.
    #[arg(long)]
    pub levels: bool,
}

#[derive(Args, Debug)]
pub struct FrameArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,
    #[command(flatten)]
    pub transmit: TransmitArgs,
    /// Send the complement of the FCS (receiver error-detection testing).
    #[arg(long)]
    pub corrupt_fcs: bool,
}

#[derive(Args, Debug)]
pub struct FlagsArgs {
    #[command(flatten)]
    pub transmit: TransmitArgs,
    /// Number of flags to send.
    #[arg(long, default_value = "1")]
    pub count: usize,
    /// End of transmission: flush the channel's audio device.
    #[arg(long)]
    pub finish: bool,
}

#[derive(Args, Debug)]
pub struct HeaderArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,
    #[command(flatten)]
    pub transmit: TransmitArgs,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,
    /// Transmit rate used for airtime reporting.
    #[arg(long, default_value_t = DEFAULT_BAUD)]
    pub baud: u32,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

pub(crate) fn encoder(config: EncoderConfig) -> HdlcEncoder<RecordingSink> {
    HdlcEncoder::with_config(RecordingSink::new(), config)
}

pub(crate) fn resolve_payload(args: &PayloadArgs) -> CliResult<Vec<u8>> {
    if let Some(data) = &args.data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(hex) = &args.hex {
        return parse_hex(hex);
    }
    if let Some(path) = &args.file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Ok(Vec::new())
}

fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let digits: Vec<u8> = input
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':')
        .collect();
    if digits.len() % 2 != 0 {
        return Err(CliError::new(USAGE, "--hex needs an even number of digits"));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).unwrap_or("??");
            u8::from_str_radix(text, 16)
                .map_err(|_| CliError::new(USAGE, format!("--hex has invalid digits: {text}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_accepts_separators() {
        assert_eq!(parse_hex("82a0 a4:A6").unwrap(), vec![0x82, 0xA0, 0xA4, 0xA6]);
        assert!(parse_hex("").unwrap().is_empty());
    }

    #[test]
    fn parse_hex_rejects_bad_input() {
        assert_eq!(parse_hex("abc").unwrap_err().code, USAGE);
        assert_eq!(parse_hex("zz").unwrap_err().code, USAGE);
    }

    #[test]
    fn payload_defaults_to_empty() {
        let args = PayloadArgs {
            data: None,
            hex: None,
            file: None,
        };
        assert!(resolve_payload(&args).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_reported() {
        let args = PayloadArgs {
            data: None,
            hex: None,
            file: Some(PathBuf::from("/nonexistent/hdlctx/payload.bin")),
        };
        let err = resolve_payload(&args).unwrap_err();
        assert!(err.message.contains("failed reading"));
    }
}
