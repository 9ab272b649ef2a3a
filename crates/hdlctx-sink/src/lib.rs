//! Waveform sink abstraction for HDLC bitstream encoders.
//!
//! The encoder produces one [`BitEvent`] per physical-layer bit and hands it
//! to a [`WaveformSink`]. What happens next (tone generation, audio buffering,
//! a file on disk) is the sink's business:
//! - [`RecordingSink`] keeps every event in memory
//! - [`NullSink`] counts and discards
//! - [`LevelWriter`] packs line levels into bytes for any `Write` stream
//!
//! This is the lowest layer of hdlctx. Everything else builds on top of
//! the [`WaveformSink`] trait provided here.

pub mod error;
pub mod event;
pub mod recording;
pub mod traits;
pub mod writer;

pub use error::{Result, SinkError};
pub use event::{BitEvent, LineCoding, Scrambling};
pub use recording::{NullSink, RecordingSink};
pub use traits::WaveformSink;
pub use writer::LevelWriter;
