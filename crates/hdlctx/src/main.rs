mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;
use hdlctx_frame::{EncoderConfig, DEFAULT_CHANNELS_PER_DEVICE, DEFAULT_MAX_CHANNELS};

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "hdlctx", version, about = "HDLC frame-to-bitstream encoder CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "info",
        env = "HDLCTX_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    /// Number of radio channels.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_CHANNELS, global = true)]
    channels: usize,

    /// Channels carried by each audio device.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_CHANNELS_PER_DEVICE, global = true)]
    channels_per_device: usize,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn encoder_config(&self) -> EncoderConfig {
        EncoderConfig {
            max_channels: self.channels,
            channels_per_device: self.channels_per_device,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let config = cli.encoder_config();
    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, config, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
