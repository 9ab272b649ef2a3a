use hdlctx_frame::EncoderConfig;
use tracing::info;

use crate::cmd::{encoder, FlagsArgs};
use crate::exit::{encode_error, CliResult, SUCCESS};
use crate::output::{level_string, print_report, EncodeReport, OutputFormat};

pub fn run(args: FlagsArgs, config: EncoderConfig, format: OutputFormat) -> CliResult<i32> {
    let mut enc = encoder(config);
    let bits = enc
        .encode_flags(args.transmit.channel, args.count, args.finish)
        .map_err(|err| encode_error("flags failed", err))?;
    info!(channel = args.transmit.channel, count = args.count, bits, "flags encoded");

    let mut report = EncodeReport::new("flags", 0, bits, args.transmit.baud);
    report.channel = Some(args.transmit.channel);
    report.flushed_devices = enc.sink().flushes().to_vec();
    let events = enc.sink().events();
    if args.transmit.levels {
        report.levels = Some(level_string(events));
    }

    print_report(&report, events, format)?;
    Ok(SUCCESS)
}
