//! Append typed values to a growing byte sequence.

use crate::{packing::Packing, size, Error, Write};
use bytes::{BufMut, Bytes, BytesMut};
use paste::paste;
use tracing::trace;

/// Accumulates typed writes into a byte sequence.
///
/// Every write returns the encoder itself so calls can be chained. Writes that
/// can fail (those emitting a size header) return a `Result` instead.
///
/// # Example
///
/// ```
/// use bitsparrow::{Decoder, Encoder};
///
/// let data = Encoder::new()
///     .uint8(200)
///     .string("hi")?
///     .bool(true)
///     .end();
///
/// let mut decoder = Decoder::new(data);
/// assert_eq!(decoder.uint8()?, 200);
/// assert_eq!(decoder.string()?, "hi");
/// assert!(decoder.bool()?);
/// assert!(decoder.end());
/// # Ok::<(), bitsparrow::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Encoder {
    buf: BytesMut,
    packing: Packing,
}

// Fixed-width numeric writes, big-endian.
macro_rules! impl_write_numeric {
    ($($name:ident: $type:ident),* $(,)?) => {
        $(
            #[doc = concat!("Writes a `", stringify!($type), "` in big-endian byte order.")]
            #[inline]
            pub fn $name(&mut self, value: $type) -> &mut Self {
                self.packing = Packing::Closed;
                paste! { self.buf.[<put_ $type>](value) };
                self
            }
        )*
    };
}

impl Encoder {
    /// Creates an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty encoder with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            packing: Packing::Closed,
        }
    }

    /// Returns the number of bytes written since the last [Encoder::end].
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing was written since the last [Encoder::end].
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    impl_write_numeric!(
        uint8: u8,
        uint16: u16,
        uint32: u32,
        uint64: u64,
        int8: i8,
        int16: i16,
        int32: i32,
        int64: i64,
        float32: f32,
        float64: f64,
    );

    /// Writes a `bool`.
    ///
    /// Consecutive calls (with no other write in between) are packed into the
    /// same byte, 8 to a byte, starting at bit 0.
    pub fn bool(&mut self, value: bool) -> &mut Self {
        if let Some((index, shift)) = self.packing.next_bit() {
            self.buf[index] |= (value as u8) << shift;
            self.packing = Packing::Open { index, shift };
            return self;
        }

        let index = self.buf.len();
        self.buf.put_u8(value as u8);
        self.packing = Packing::Open { index, shift: 0 };
        self
    }

    /// Writes a variable-length size.
    ///
    /// Fails if `value` exceeds [crate::MAX_SAFE_INTEGER].
    pub fn size(&mut self, value: u64) -> Result<&mut Self, Error> {
        self.packing = Packing::Closed;
        size::write(value, &mut self.buf)?;
        Ok(self)
    }

    /// Writes the length of `value` as a size followed by its raw bytes.
    pub fn bytes(&mut self, value: &[u8]) -> Result<&mut Self, Error> {
        self.size(value.len() as u64)?;
        self.buf.put_slice(value);
        Ok(self)
    }

    /// Writes `value` as UTF-8 [Encoder::bytes].
    pub fn string(&mut self, value: &str) -> Result<&mut Self, Error> {
        self.bytes(value.as_bytes())
    }

    /// Writes any value implementing [Write].
    pub fn put<T: Write + ?Sized>(&mut self, value: &T) -> Result<&mut Self, Error> {
        value.write(self)?;
        Ok(self)
    }

    /// Returns the bytes written so far and resets the encoder for reuse.
    pub fn end(&mut self) -> Bytes {
        self.packing = Packing::Closed;
        let data = self.buf.split().freeze();
        trace!(len = data.len(), "finalized encoder");
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endianness() {
        let data = Encoder::new()
            .uint16(0x0102)
            .uint32(0x01020304)
            .float32(1.0)
            .end();
        assert_eq!(
            data,
            Bytes::from_static(&[0x01, 0x02, 0x01, 0x02, 0x03, 0x04, 0x3F, 0x80, 0x00, 0x00])
        );
    }

    #[test]
    fn test_int64_halves() {
        // High 32 bits first, then low 32 bits, two's complement.
        let data = Encoder::new().int64(-2).end();
        assert_eq!(data, &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE][..]);

        let data = Encoder::new().uint64(0x0000_0001_0000_0002).end();
        assert_eq!(data, &[0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02][..]);
    }

    #[test]
    fn test_bool_packing() {
        let data = Encoder::new()
            .bool(true)
            .bool(false)
            .bool(true)
            .bool(true)
            .bool(false)
            .bool(false)
            .bool(true)
            .bool(false)
            .end();
        assert_eq!(data, &[0b0100_1101][..]);
    }

    #[test]
    fn test_bool_ninth_opens_new_byte() {
        let mut encoder = Encoder::new();
        for _ in 0..9 {
            encoder.bool(true);
        }
        assert_eq!(encoder.end(), &[0xFF, 0x01][..]);
    }

    #[test]
    fn test_bool_interrupted() {
        let data = Encoder::new()
            .bool(true)
            .uint8(7)
            .bool(true)
            .bool(true)
            .end();
        assert_eq!(data, &[0x01, 0x07, 0x03][..]);
    }

    #[test]
    fn test_end_resets() {
        let mut encoder = Encoder::new();
        encoder.bool(true);
        assert_eq!(encoder.len(), 1);
        assert_eq!(encoder.end(), &[0x01][..]);
        assert!(encoder.is_empty());

        // Packing must not reach into the previous session.
        encoder.bool(true);
        assert_eq!(encoder.end(), &[0x01][..]);
        assert!(encoder.end().is_empty());
    }

    #[test]
    fn test_bytes_and_string() {
        let data = Encoder::new()
            .bytes(&[1, 2, 3])
            .unwrap()
            .string("hi")
            .unwrap()
            .end();
        assert_eq!(data, &[0x03, 1, 2, 3, 0x02, b'h', b'i'][..]);
    }

    #[test]
    fn test_size_too_large() {
        let mut encoder = Encoder::new();
        assert!(matches!(
            encoder.size(crate::MAX_SAFE_INTEGER + 1),
            Err(Error::SizeTooLarge(_))
        ));
        assert!(encoder.is_empty());
    }
}
