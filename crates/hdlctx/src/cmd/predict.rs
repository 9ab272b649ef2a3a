use hdlctx_frame::{predict_bits, Fcs16};

use crate::cmd::{resolve_payload, PredictArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_report, EncodeReport, OutputFormat};

pub fn run(args: PredictArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = resolve_payload(&args.payload)?;
    let bits = predict_bits(&Fcs16, &payload);

    let report = EncodeReport::new("predict", payload.len(), bits, args.baud);
    // Nothing is emitted, so raw output is empty.
    print_report(&report, &[], format)?;
    Ok(SUCCESS)
}
