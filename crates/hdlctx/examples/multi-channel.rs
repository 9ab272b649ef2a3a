//! Encode on several channels at once, one thread per channel.
//!
//! Each thread borrows its own `ChannelState` from the registry, so no
//! channel's state is ever touched by another channel's thread.

use hdlctx::frame::{BitEmitter, ByteMode, ChannelRegistry, Checksum, Fcs16, FLAG, FRAME_LINE};
use hdlctx::sink::RecordingSink;

fn main() {
    let mut registry = ChannelRegistry::new(4);

    let counts: Vec<(usize, usize)> = std::thread::scope(|scope| {
        let handles: Vec<_> = registry
            .iter_mut()
            .map(|(channel, state)| {
                scope.spawn(move || {
                    let mut sink = RecordingSink::new();
                    let payload = format!("hello from channel {channel}").into_bytes();
                    let fcs = Fcs16.checksum(&payload).to_le_bytes();

                    state.begin();
                    let mut emitter = BitEmitter::new(channel, state, &mut sink);
                    let result = (|| {
                        emitter.send_byte(FLAG, ByteMode::Raw, FRAME_LINE)?;
                        for &byte in payload.iter().chain(fcs.iter()) {
                            emitter.send_byte(byte, ByteMode::Stuffed, FRAME_LINE)?;
                        }
                        emitter.send_byte(FLAG, ByteMode::Raw, FRAME_LINE)
                    })();
                    if let Err(err) = result {
                        eprintln!("channel {channel}: {err}");
                    }
                    (channel, emitter.bits_sent())
                })
            })
            .collect();

        handles
            .into_iter()
            .filter_map(|handle| handle.join().ok())
            .collect()
    });

    for (channel, bits) in counts {
        println!("channel {channel}: {bits} bits");
    }
}
