//! Encode a keyed-up beacon transmission and write the packed line levels to a file.
//!
//! Run with: cargo run --example beacon -- /tmp/beacon.bits

use std::fs::File;
use std::io::BufWriter;

use hdlctx::frame::{airtime, FcsMode, HdlcEncoder};
use hdlctx::sink::LevelWriter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "beacon.bits".to_string());
    let writer = LevelWriter::new(BufWriter::new(File::create(&path)?));
    let mut enc = HdlcEncoder::new(writer);

    let payload = b"N0CALL>APRS:>hdlctx beacon";
    let mut bits = enc.encode_flags(0, 32, false)?;
    bits += enc.encode_frame(0, payload, FcsMode::Valid)?;
    bits += enc.encode_flags(0, 4, true)?;

    println!(
        "wrote {bits} bits to {path} ({:?} at 1200 bd)",
        airtime(bits, 1200)
    );
    Ok(())
}
