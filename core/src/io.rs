//! io.rs
//! Octet sources and sinks the endpoint codec reads from and writes to.
//!
//! Design notes:
//! - The codec never names a concrete stream type. It needs sequential reads,
//!   sequential writes and a way to tell "ran out" apart from "failed".
//! - Buffer-backed streams know how much is left, so truncation and capacity
//!   are checked before anything is consumed or written.
//! - `Option<S>` models an absent stream: `None` is never usable.
//! - `IoStream` adapts any `std::io::Read`/`Write` (sockets, files, pipes).

use std::io::{self, Cursor, Read, Write};

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::types::{EndpointError, Field};

macro_rules! io_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace-io")]
        eprintln!("[IO:ENDPOINT] {}", format_args!($($arg)*));
    };
}

/// Sequential byte reader.
pub trait OctetSource {
    /// Whether the stream can be read at all.
    fn is_usable(&self) -> bool {
        true
    }

    /// Octets left before the end of data, if the stream knows.
    fn available(&self) -> Option<usize>;

    /// Fill `dst` completely or fail. `field` labels the error.
    fn read_octets(&mut self, field: Field, dst: &mut [u8]) -> Result<(), EndpointError>;
}

/// Sequential byte writer.
pub trait OctetSink {
    /// Whether the stream can be written at all.
    fn is_usable(&self) -> bool {
        true
    }

    /// Writable octets left. `None` means the sink grows on demand.
    fn remaining_capacity(&self) -> Option<usize>;

    /// Write all of `src` or fail. `field` labels the error.
    fn write_octets(&mut self, field: Field, src: &[u8]) -> Result<(), EndpointError>;
}

#[inline]
fn truncated(field: Field, need: usize, have: usize) -> EndpointError {
    EndpointError::UnexpectedEndOfStream { field, need, have }
}

#[inline]
fn ensure_room(field: Field, need: usize, have: usize) -> Result<(), EndpointError> {
    if have < need {
        return Err(EndpointError::InsufficientCapacity { field, need, have });
    }
    Ok(())
}

fn read_from_buf<B: Buf>(buf: &mut B, field: Field, dst: &mut [u8]) -> Result<(), EndpointError> {
    if buf.remaining() < dst.len() {
        return Err(truncated(field, dst.len(), buf.remaining()));
    }
    buf.copy_to_slice(dst);
    Ok(())
}

fn cursor_tail<T: AsRef<[u8]>>(cursor: &Cursor<T>) -> &[u8] {
    let inner = cursor.get_ref().as_ref();
    let pos = usize::try_from(cursor.position())
        .unwrap_or(usize::MAX)
        .min(inner.len());
    &inner[pos..]
}

// -----------------------------------------------------------------------------
// Sources
// -----------------------------------------------------------------------------

impl OctetSource for &[u8] {
    fn available(&self) -> Option<usize> {
        Some(self.len())
    }

    fn read_octets(&mut self, field: Field, dst: &mut [u8]) -> Result<(), EndpointError> {
        if self.len() < dst.len() {
            return Err(truncated(field, dst.len(), self.len()));
        }
        let (head, rest) = self.split_at(dst.len());
        dst.copy_from_slice(head);
        *self = rest;
        Ok(())
    }
}

impl<T: AsRef<[u8]>> OctetSource for Cursor<T> {
    fn available(&self) -> Option<usize> {
        Some(cursor_tail(self).len())
    }

    fn read_octets(&mut self, field: Field, dst: &mut [u8]) -> Result<(), EndpointError> {
        let tail = cursor_tail(self);
        if tail.len() < dst.len() {
            return Err(truncated(field, dst.len(), tail.len()));
        }
        dst.copy_from_slice(&tail[..dst.len()]);
        self.set_position(self.position() + dst.len() as u64);
        Ok(())
    }
}

impl OctetSource for Bytes {
    fn available(&self) -> Option<usize> {
        Some(self.remaining())
    }

    fn read_octets(&mut self, field: Field, dst: &mut [u8]) -> Result<(), EndpointError> {
        read_from_buf(self, field, dst)
    }
}

impl OctetSource for BytesMut {
    fn available(&self) -> Option<usize> {
        Some(self.remaining())
    }

    fn read_octets(&mut self, field: Field, dst: &mut [u8]) -> Result<(), EndpointError> {
        read_from_buf(self, field, dst)
    }
}

impl<S: OctetSource> OctetSource for Option<S> {
    fn is_usable(&self) -> bool {
        self.as_ref().map_or(false, S::is_usable)
    }

    fn available(&self) -> Option<usize> {
        self.as_ref().and_then(S::available)
    }

    fn read_octets(&mut self, field: Field, dst: &mut [u8]) -> Result<(), EndpointError> {
        match self {
            Some(inner) => inner.read_octets(field, dst),
            None => Err(EndpointError::InvalidStream),
        }
    }
}

// -----------------------------------------------------------------------------
// Sinks
// -----------------------------------------------------------------------------

impl OctetSink for Vec<u8> {
    fn remaining_capacity(&self) -> Option<usize> {
        None
    }

    fn write_octets(&mut self, _field: Field, src: &[u8]) -> Result<(), EndpointError> {
        self.extend_from_slice(src);
        Ok(())
    }
}

impl OctetSink for BytesMut {
    fn remaining_capacity(&self) -> Option<usize> {
        None
    }

    fn write_octets(&mut self, _field: Field, src: &[u8]) -> Result<(), EndpointError> {
        self.put_slice(src);
        Ok(())
    }
}

/// Fixed-capacity sink. The slice shrinks from the front as octets land.
impl OctetSink for &mut [u8] {
    fn remaining_capacity(&self) -> Option<usize> {
        Some(self.len())
    }

    fn write_octets(&mut self, field: Field, src: &[u8]) -> Result<(), EndpointError> {
        ensure_room(field, src.len(), self.len())?;
        let (head, rest) = std::mem::take(self).split_at_mut(src.len());
        head.copy_from_slice(src);
        *self = rest;
        Ok(())
    }
}

impl OctetSink for Cursor<&mut [u8]> {
    fn remaining_capacity(&self) -> Option<usize> {
        Some(cursor_tail(self).len())
    }

    fn write_octets(&mut self, field: Field, src: &[u8]) -> Result<(), EndpointError> {
        ensure_room(field, src.len(), cursor_tail(self).len())?;
        self.write_all(src)?;
        Ok(())
    }
}

impl OctetSink for Cursor<Vec<u8>> {
    fn remaining_capacity(&self) -> Option<usize> {
        None
    }

    fn write_octets(&mut self, _field: Field, src: &[u8]) -> Result<(), EndpointError> {
        self.write_all(src)?;
        Ok(())
    }
}

impl<S: OctetSink> OctetSink for Option<S> {
    fn is_usable(&self) -> bool {
        self.as_ref().map_or(false, S::is_usable)
    }

    fn remaining_capacity(&self) -> Option<usize> {
        self.as_ref().and_then(S::remaining_capacity)
    }

    fn write_octets(&mut self, field: Field, src: &[u8]) -> Result<(), EndpointError> {
        match self {
            Some(inner) => inner.write_octets(field, src),
            None => Err(EndpointError::InvalidStream),
        }
    }
}

// -----------------------------------------------------------------------------
// std::io adapter
// -----------------------------------------------------------------------------

/// Adapter over a `std::io` reader or writer.
///
/// - Reads loop over short reads until the field is complete.
/// - Each field is handed to the writer as one `write_all`.
/// - After `close()` the stream is unusable and every operation fails with
///   `InvalidStream`.
#[derive(Debug)]
pub struct IoStream<T> {
    inner: Option<T>,
}

impl<T> IoStream<T> {
    pub fn new(inner: T) -> Self {
        Self { inner: Some(inner) }
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    /// Detach the underlying stream, leaving this adapter unusable.
    pub fn close(&mut self) -> Option<T> {
        io_trace!("closing stream (open={})", self.inner.is_some());
        self.inner.take()
    }

    pub fn get_ref(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.inner.as_mut()
    }

    pub fn into_inner(self) -> Option<T> {
        self.inner
    }
}

impl<T: Read> OctetSource for IoStream<T> {
    fn is_usable(&self) -> bool {
        self.is_open()
    }

    fn available(&self) -> Option<usize> {
        None
    }

    fn read_octets(&mut self, field: Field, dst: &mut [u8]) -> Result<(), EndpointError> {
        let inner = self.inner.as_mut().ok_or(EndpointError::InvalidStream)?;

        let mut filled = 0usize;
        while filled < dst.len() {
            match inner.read(&mut dst[filled..]) {
                Ok(0) => {
                    io_trace!("end of data reading {}: {} of {} octets", field, filled, dst.len());
                    return Err(truncated(field, dst.len(), filled));
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    io_trace!("read failed on {}: {}", field, e);
                    return Err(e.into());
                }
            }
        }
        Ok(())
    }
}

/// A plain `Write` exposes no capacity, so a `WriteZero` is reported with
/// `have: 0` and the writer's content is undefined after the failure.
impl<T: Write> OctetSink for IoStream<T> {
    fn is_usable(&self) -> bool {
        self.is_open()
    }

    fn remaining_capacity(&self) -> Option<usize> {
        None
    }

    fn write_octets(&mut self, field: Field, src: &[u8]) -> Result<(), EndpointError> {
        let inner = self.inner.as_mut().ok_or(EndpointError::InvalidStream)?;

        match inner.write_all(src) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::WriteZero => {
                io_trace!("writer full on {}", field);
                Err(EndpointError::InsufficientCapacity { field, need: src.len(), have: 0 })
            }
            Err(e) => {
                io_trace!("write failed on {}: {}", field, e);
                Err(e.into())
            }
        }
    }
}
