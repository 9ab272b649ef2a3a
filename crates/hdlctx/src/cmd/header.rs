use hdlctx_frame::EncoderConfig;
use tracing::info;

use crate::cmd::{encoder, resolve_payload, HeaderArgs};
use crate::exit::{encode_error, CliResult, SUCCESS};
use crate::output::{level_string, print_report, EncodeReport, OutputFormat};

pub fn run(args: HeaderArgs, config: EncoderConfig, format: OutputFormat) -> CliResult<i32> {
    let payload = resolve_payload(&args.payload)?;

    let mut enc = encoder(config);
    let bits = enc
        .encode_header(args.transmit.channel, &payload)
        .map_err(|err| encode_error("header failed", err))?;
    info!(channel = args.transmit.channel, bits, "header encoded");

    let mut report = EncodeReport::new("header", payload.len(), bits, args.transmit.baud);
    report.channel = Some(args.transmit.channel);
    let events = enc.sink().events();
    if args.transmit.levels {
        report.levels = Some(level_string(events));
    }

    print_report(&report, events, format)?;
    Ok(SUCCESS)
}
