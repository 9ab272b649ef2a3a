use crate::error::Result;
use crate::event::BitEvent;

/// Consumer of the encoded bitstream.
///
/// Events arrive one per emitted bit, in emission order. Implementations may
/// block in [`put_bit`](WaveformSink::put_bit) when their buffer is full; the
/// encoder treats that as an ordinary synchronous call.
pub trait WaveformSink {
    /// Accept the next bit.
    fn put_bit(&mut self, event: BitEvent) -> Result<()>;

    /// Push out any partially filled buffer for `device` immediately.
    fn flush(&mut self, device: usize) -> Result<()>;
}

impl<S: WaveformSink + ?Sized> WaveformSink for &mut S {
    fn put_bit(&mut self, event: BitEvent) -> Result<()> {
        (**self).put_bit(event)
    }

    fn flush(&mut self, device: usize) -> Result<()> {
        (**self).flush(device)
    }
}

impl<S: WaveformSink + ?Sized> WaveformSink for Box<S> {
    fn put_bit(&mut self, event: BitEvent) -> Result<()> {
        (**self).put_bit(event)
    }

    fn flush(&mut self, device: usize) -> Result<()> {
        (**self).flush(device)
    }
}
