//! HDLC frame-to-bitstream encoding for packet-radio software modems.
//!
//! hdlctx turns finished link-layer frames into the physical-layer bits that
//! drive a waveform synthesizer: flags, bit stuffing, FCS, NRZI, and the
//! preamble/sync/length header mode.
//!
//! # Crate Structure
//!
//! - [`sink`]: Waveform sink abstraction and reference sinks
//! - [`frame`]: Channel state, stuffing, length prediction and the encoder

/// Re-export sink types.
pub mod sink {
    pub use hdlctx_sink::*;
}

/// Re-export frame encoder types.
pub mod frame {
    pub use hdlctx_frame::*;
}
