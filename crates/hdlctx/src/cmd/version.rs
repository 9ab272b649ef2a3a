use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("hdlctx {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: hdlctx");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "build_target: {}",
        option_env!("HDLCTX_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!(
        "frame: start_flags={}, end_flags={}, header_bits={}",
        hdlctx_frame::FRAME_START_FLAGS,
        hdlctx_frame::FRAME_END_FLAGS,
        hdlctx_frame::HEADER_BITS
    );

    Ok(SUCCESS)
}
