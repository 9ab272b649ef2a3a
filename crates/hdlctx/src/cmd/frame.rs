use hdlctx_frame::{EncoderConfig, FcsMode};
use tracing::info;

use crate::cmd::{encoder, resolve_payload, FrameArgs};
use crate::exit::{encode_error, CliResult, SUCCESS};
use crate::output::{level_string, print_report, EncodeReport, OutputFormat};

pub fn run(args: FrameArgs, config: EncoderConfig, format: OutputFormat) -> CliResult<i32> {
    let payload = resolve_payload(&args.payload)?;
    let fcs_mode = if args.corrupt_fcs {
        FcsMode::Corrupted
    } else {
        FcsMode::Valid
    };

    let mut enc = encoder(config);
    let bits = enc
        .encode_frame(args.transmit.channel, &payload, fcs_mode)
        .map_err(|err| encode_error("frame failed", err))?;
    info!(channel = args.transmit.channel, bits, "frame encoded");

    let mut report = EncodeReport::new("frame", payload.len(), bits, args.transmit.baud);
    report.channel = Some(args.transmit.channel);
    let events = enc.sink().events();
    if args.transmit.levels {
        report.levels = Some(level_string(events));
    }

    print_report(&report, events, format)?;
    Ok(SUCCESS)
}
