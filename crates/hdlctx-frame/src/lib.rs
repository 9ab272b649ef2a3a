//! HDLC frame-to-bitstream encoding for packet-radio modems.
//!
//! Turns finished link-layer frames into the ordered physical-layer bits that
//! drive a waveform synthesizer. Two framing modes share the same primitives:
//! - HDLC: 0x7E flags, bit-stuffed payload and FCS, NRZI line coding, scrambled
//! - Header: 0xAA preamble, sync word and a length field, direct line coding
//!
//! Per-channel state (NRZI output level, stuffing run, bit count) lives in a
//! [`ChannelRegistry`] and is carried across calls.

pub mod channel;
pub mod config;
pub mod emitter;
pub mod encoder;
pub mod error;
pub mod fcs;
pub mod header;
pub mod predict;
pub mod stuffing;

pub use channel::{ChannelRegistry, ChannelState};
pub use config::{EncoderConfig, DEFAULT_CHANNELS_PER_DEVICE, DEFAULT_MAX_CHANNELS};
pub use emitter::{BitEmitter, ByteMode, LineMode, FRAME_LINE, HEADER_LINE};
pub use encoder::{airtime, FcsMode, HdlcEncoder, FLAG, FRAME_END_FLAGS, FRAME_START_FLAGS};
pub use error::{EncodeError, Result};
pub use fcs::{Checksum, Fcs16};
pub use header::{HEADER_BITS, PREAMBLE, PREAMBLE_BYTES, SYNC};
pub use predict::predict_bits;
pub use stuffing::{BitCounter, BitTarget, StuffRun, STUFF_LIMIT};

pub use hdlctx_sink::{BitEvent, LineCoding, Scrambling, SinkError, WaveformSink};
