//! Bit and byte transmission onto one channel.

use hdlctx_sink::{BitEvent, LineCoding, Scrambling, SinkError, WaveformSink};
use tracing::trace;

use crate::channel::ChannelState;
use crate::stuffing::{lsb_first, BitTarget};

/// How a byte is put on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteMode {
    /// Payload and FCS: zero insertion after five 1s, run carried across bytes.
    Stuffed,
    /// Flags, preamble, sync and length: never stuffed, clears the run.
    Raw,
}

/// Line treatment applied to every bit of a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMode {
    pub scrambling: Scrambling,
    pub coding: LineCoding,
}

/// HDLC flags, payload and FCS.
pub const FRAME_LINE: LineMode = LineMode {
    scrambling: Scrambling::Scrambled,
    coding: LineCoding::Nrzi,
};

/// Preamble, sync and length field of the header mode.
pub const HEADER_LINE: LineMode = LineMode {
    scrambling: Scrambling::Unscrambled,
    coding: LineCoding::Direct,
};

/// Writes bits for one channel, updating that channel's state only.
pub struct BitEmitter<'a, S: ?Sized> {
    channel: usize,
    state: &'a mut ChannelState,
    sink: &'a mut S,
}

impl<'a, S: WaveformSink + ?Sized> BitEmitter<'a, S> {
    pub fn new(channel: usize, state: &'a mut ChannelState, sink: &'a mut S) -> Self {
        Self {
            channel,
            state,
            sink,
        }
    }

    pub fn channel(&self) -> usize {
        self.channel
    }

    /// Bits emitted since the channel's current operation began.
    pub fn bits_sent(&self) -> usize {
        self.state.bits_sent
    }

    /// Line-code one bit and forward the resulting level to the sink.
    pub fn emit(&mut self, bit: bool, line: LineMode) -> hdlctx_sink::Result<()> {
        match line.coding {
            LineCoding::Nrzi => {
                if !bit {
                    self.state.output_level = !self.state.output_level;
                }
            }
            LineCoding::Direct => self.state.output_level = bit,
        }
        self.state.bits_sent += 1;

        self.sink.put_bit(BitEvent::new(
            self.channel,
            self.state.output_level,
            line.scrambling,
            line.coding,
        ))
    }

    /// Ask the sink to push out its buffer for `device`.
    pub fn flush(&mut self, device: usize) -> hdlctx_sink::Result<()> {
        self.sink.flush(device)
    }

    /// Send the 8 bits of `value`, LSB first.
    pub fn send_byte(
        &mut self,
        value: u8,
        mode: ByteMode,
        line: LineMode,
    ) -> hdlctx_sink::Result<()> {
        trace!(channel = self.channel, value, ?mode, "send byte");
        match mode {
            ByteMode::Stuffed => {
                let mut run = self.state.stuff_run;
                let result = run.stuff_byte(
                    value,
                    &mut LineTarget {
                        emitter: &mut *self,
                        line,
                    },
                );
                self.state.stuff_run = run;
                result
            }
            ByteMode::Raw => {
                for bit in lsb_first(value) {
                    self.emit(bit, line)?;
                }
                self.state.stuff_run.reset();
                Ok(())
            }
        }
    }
}

struct LineTarget<'e, 'a, S: ?Sized> {
    emitter: &'e mut BitEmitter<'a, S>,
    line: LineMode,
}

impl<S: WaveformSink + ?Sized> BitTarget for LineTarget<'_, '_, S> {
    type Error = SinkError;

    fn put_bit(&mut self, bit: bool) -> Result<(), SinkError> {
        self.emitter.emit(bit, self.line)
    }
}
