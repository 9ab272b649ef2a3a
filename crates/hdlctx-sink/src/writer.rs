use std::io::{ErrorKind, Write};

use bytes::{BufMut, BytesMut};
use tracing::trace;

use crate::error::{Result, SinkError};
use crate::event::BitEvent;
use crate::traits::WaveformSink;

const INITIAL_BUFFER_CAPACITY: usize = 1024;

/// Default number of packed bytes buffered before they are written out.
pub const DEFAULT_CHUNK_SIZE: usize = 512;

/// Packs line levels MSB-first into bytes and writes them to any `Write` stream.
///
/// Complete bytes are written whenever `chunk_size` of them are buffered.
/// [`flush`](WaveformSink::flush) pads the final partial byte with zeros and
/// pushes everything out. Channel and device numbers are not recorded; one
/// writer carries one stream.
pub struct LevelWriter<W> {
    inner: W,
    buf: BytesMut,
    acc: u8,
    acc_bits: u8,
    chunk_size: usize,
    bits_written: u64,
}

impl<W: Write> LevelWriter<W> {
    /// Create a level writer with the default chunk size.
    pub fn new(inner: W) -> Self {
        Self::with_chunk_size(inner, DEFAULT_CHUNK_SIZE)
    }

    /// Create a level writer that writes every `chunk_size` packed bytes.
    pub fn with_chunk_size(inner: W, chunk_size: usize) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            acc: 0,
            acc_bits: 0,
            chunk_size: chunk_size.max(1),
            bits_written: 0,
        }
    }

    /// Number of line levels accepted so far.
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consume the writer and return the inner stream.
    ///
    /// Bits not yet flushed are dropped.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_buffered(&mut self) -> Result<()> {
        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(SinkError::Closed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(SinkError::Io(err)),
            }
        }
        trace!(bytes = offset, "wrote packed levels");
        self.buf.clear();
        Ok(())
    }

    fn flush_inner(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(SinkError::Io(err)),
            }
        }
    }
}

impl<W: Write> WaveformSink for LevelWriter<W> {
    fn put_bit(&mut self, event: BitEvent) -> Result<()> {
        self.acc = (self.acc << 1) | u8::from(event.level);
        self.acc_bits += 1;
        self.bits_written += 1;

        if self.acc_bits == 8 {
            self.buf.put_u8(self.acc);
            self.acc = 0;
            self.acc_bits = 0;
            if self.buf.len() >= self.chunk_size {
                self.write_buffered()?;
            }
        }
        Ok(())
    }

    fn flush(&mut self, _device: usize) -> Result<()> {
        if self.acc_bits > 0 {
            self.buf.put_u8(self.acc << (8 - self.acc_bits));
            self.acc = 0;
            self.acc_bits = 0;
        }
        self.write_buffered()?;
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::event::{LineCoding, Scrambling};

    fn put_levels<W: Write>(writer: &mut LevelWriter<W>, levels: &[u8]) {
        for &level in levels {
            writer
                .put_bit(BitEvent::new(
                    0,
                    level == 1,
                    Scrambling::Scrambled,
                    LineCoding::Nrzi,
                ))
                .unwrap();
        }
    }

    #[test]
    fn packs_msb_first() {
        let mut writer = LevelWriter::new(Cursor::new(Vec::<u8>::new()));
        put_levels(&mut writer, &[1, 0, 1, 0, 0, 0, 0, 1]);
        writer.flush(0).unwrap();

        assert_eq!(writer.bits_written(), 8);
        assert_eq!(writer.into_inner().into_inner(), vec![0xA1]);
    }

    #[test]
    fn flush_pads_partial_byte() {
        let mut writer = LevelWriter::new(Cursor::new(Vec::<u8>::new()));
        put_levels(&mut writer, &[1, 1, 1]);
        assert!(writer.get_ref().get_ref().is_empty());

        writer.flush(0).unwrap();
        assert_eq!(writer.into_inner().into_inner(), vec![0xE0]);
    }

    #[test]
    fn writes_when_chunk_fills() {
        let mut writer = LevelWriter::with_chunk_size(Cursor::new(Vec::<u8>::new()), 1);
        put_levels(&mut writer, &[0, 0, 0, 0, 1, 1, 1, 1]);

        assert_eq!(writer.get_ref().get_ref(), &vec![0x0F]);
    }

    #[test]
    fn flush_propagates() {
        let sink = FlushTrackingWriter::default();
        let flag = Arc::clone(&sink.flushed);
        let mut writer = LevelWriter::new(sink);

        put_levels(&mut writer, &[1]);
        writer.flush(0).unwrap();

        assert!(flag.load(Ordering::SeqCst));
    }

    #[test]
    fn handles_interrupted_write_and_flush() {
        let inner = InterruptedWriteThenFlush {
            wrote_once: false,
            flush_interrupted: false,
            data: Vec::new(),
        };
        let mut writer = LevelWriter::new(inner);
        put_levels(&mut writer, &[1, 1, 0, 0, 1, 1, 0, 0]);
        writer.flush(0).unwrap();

        assert_eq!(writer.into_inner().data, vec![0xCC]);
    }

    #[test]
    fn closed_when_write_returns_zero() {
        let mut writer = LevelWriter::new(ZeroWriter);
        put_levels(&mut writer, &[1]);
        let err = writer.flush(0).unwrap_err();
        assert!(matches!(err, SinkError::Closed));
    }

    #[derive(Default)]
    struct FlushTrackingWriter {
        flushed: Arc<AtomicBool>,
        data: Vec<u8>,
    }

    impl Write for FlushTrackingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushed.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    struct InterruptedWriteThenFlush {
        wrote_once: bool,
        flush_interrupted: bool,
        data: Vec<u8>,
    }

    impl Write for InterruptedWriteThenFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if !self.wrote_once {
                self.wrote_once = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            if !self.flush_interrupted {
                self.flush_interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            Ok(())
        }
    }

    struct ZeroWriter;

    impl Write for ZeroWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
