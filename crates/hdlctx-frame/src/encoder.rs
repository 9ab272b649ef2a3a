use std::time::Duration;

use hdlctx_sink::WaveformSink;
use tracing::{debug, warn};

use crate::channel::{ChannelRegistry, ChannelState};
use crate::config::EncoderConfig;
use crate::emitter::{BitEmitter, ByteMode, FRAME_LINE, HEADER_LINE};
use crate::error::Result;
use crate::fcs::{Checksum, Fcs16};
use crate::header::{frame_len, length_field, sync_bytes, PREAMBLE, PREAMBLE_BYTES};
use crate::predict::predict_bits;

/// HDLC flag byte.
pub const FLAG: u8 = 0x7E;

/// Flags opening a frame.
pub const FRAME_START_FLAGS: usize = 4;

/// Flags closing a frame.
pub const FRAME_END_FLAGS: usize = 2;

/// Which FCS a frame carries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FcsMode {
    /// The computed FCS.
    #[default]
    Valid,
    /// The complement of the computed FCS, to exercise receiver error detection.
    Corrupted,
}

/// Encodes frames, flag runs and headers onto per-channel bitstreams.
///
/// Every operation borrows the encoder mutably and runs to completion, so at
/// most one operation is ever active on a channel. Channel state (line level
/// and stuffing run) carries over from one call to the next.
pub struct HdlcEncoder<S, C = Fcs16> {
    sink: S,
    checksum: C,
    channels: ChannelRegistry,
    config: EncoderConfig,
}

impl<S: WaveformSink> HdlcEncoder<S> {
    /// Create an encoder with the AX.25 FCS and default configuration.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, EncoderConfig::default())
    }

    /// Create an encoder with the AX.25 FCS and explicit configuration.
    pub fn with_config(sink: S, config: EncoderConfig) -> Self {
        Self::with_checksum(sink, Fcs16, config)
    }
}

impl<S: WaveformSink, C: Checksum> HdlcEncoder<S, C> {
    /// Create an encoder with a caller-supplied checksum.
    pub fn with_checksum(sink: S, checksum: C, config: EncoderConfig) -> Self {
        Self {
            sink,
            checksum,
            channels: ChannelRegistry::new(config.max_channels),
            config,
        }
    }

    /// Encode a complete frame: start flags, stuffed payload, FCS, end flags.
    ///
    /// Returns the number of bits sent, including stuffed bits and flags.
    pub fn encode_frame(
        &mut self,
        channel: usize,
        payload: &[u8],
        fcs_mode: FcsMode,
    ) -> Result<usize> {
        debug!(channel, len = payload.len(), ?fcs_mode, "encode frame");

        self.run(channel, |emitter, checksum| {
            for _ in 0..FRAME_START_FLAGS {
                emitter.send_byte(FLAG, ByteMode::Raw, FRAME_LINE)?;
            }

            for &byte in payload {
                emitter.send_byte(byte, ByteMode::Stuffed, FRAME_LINE)?;
            }

            let fcs = match fcs_mode {
                FcsMode::Valid => checksum.checksum(payload),
                FcsMode::Corrupted => !checksum.checksum(payload),
            };
            for byte in fcs.to_le_bytes() {
                emitter.send_byte(byte, ByteMode::Stuffed, FRAME_LINE)?;
            }

            for _ in 0..FRAME_END_FLAGS {
                emitter.send_byte(FLAG, ByteMode::Raw, FRAME_LINE)?;
            }
            Ok(())
        })
    }

    /// Send `count` flags to keep the channel keyed between frames.
    ///
    /// With `finish` set, the audio device carrying the channel is flushed
    /// afterwards. Flags are never stuffed, so the result is `8 * count`.
    pub fn encode_flags(
        &mut self,
        channel: usize,
        count: usize,
        finish: bool,
    ) -> Result<usize> {
        debug!(channel, count, finish, "encode flags");
        let device = self.config.device_for(channel);

        self.run(channel, |emitter, _| {
            for _ in 0..count {
                emitter.send_byte(FLAG, ByteMode::Raw, FRAME_LINE)?;
            }
            if finish {
                emitter.flush(device)?;
            }
            Ok(())
        })
    }

    /// Send the preamble, sync word and length field announcing `payload`.
    ///
    /// Always returns 96.
    pub fn encode_header(&mut self, channel: usize, payload: &[u8]) -> Result<usize> {
        debug!(channel, len = payload.len(), "encode header");

        self.run(channel, |emitter, checksum| {
            for _ in 0..PREAMBLE_BYTES {
                emitter.send_byte(PREAMBLE, ByteMode::Raw, HEADER_LINE)?;
            }
            for byte in sync_bytes() {
                emitter.send_byte(byte, ByteMode::Raw, HEADER_LINE)?;
            }

            let len = frame_len(predict_bits(checksum, payload));
            for byte in length_field(len) {
                emitter.send_byte(byte, ByteMode::Raw, HEADER_LINE)?;
            }
            Ok(())
        })
    }

    /// Bits the stuffed payload and FCS of `payload` will occupy, flags excluded.
    pub fn predict_bits(&self, payload: &[u8]) -> usize {
        predict_bits(&self.checksum, payload)
    }

    /// Return a channel to its power-on state (line level, run and count).
    pub fn reset_channel(&mut self, channel: usize) -> Result<()> {
        self.channels.get_mut(channel)?.reset();
        Ok(())
    }

    pub fn channel_state(&self, channel: usize) -> Result<&ChannelState> {
        self.channels.get(channel)
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Run one top-level operation on `channel`.
    ///
    /// A sink failure resets the whole channel state before the error is returned.
    fn run<F>(&mut self, channel: usize, op: F) -> Result<usize>
    where
        F: FnOnce(&mut BitEmitter<'_, S>, &C) -> hdlctx_sink::Result<()>,
    {
        let state = self.channels.get_mut(channel)?;
        state.begin();

        let mut emitter = BitEmitter::new(channel, state, &mut self.sink);
        if let Err(err) = op(&mut emitter, &self.checksum) {
            warn!(channel, error = %err, "sink failed mid-operation, resetting channel");
            self.channels.get_mut(channel)?.reset();
            return Err(err.into());
        }

        Ok(self.channels.get(channel)?.bits_sent)
    }
}

/// Time needed to transmit `bits` at `bits_per_second`.
pub fn airtime(bits: usize, bits_per_second: u32) -> Duration {
    if bits_per_second == 0 {
        return Duration::ZERO;
    }
    let nanos = (bits as u128 * 1_000_000_000) / u128::from(bits_per_second);
    Duration::from_nanos(nanos.min(u128::from(u64::MAX)) as u64)
}
