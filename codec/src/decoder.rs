//! Read typed values back from a byte sequence.

use crate::{
    packing::{self, Packing},
    size, Config, Error, Read,
};
use bytes::Bytes;
use tracing::{debug, trace};

/// Reads values from a byte sequence in the order they were written by an
/// [crate::Encoder].
///
/// Reads that fail leave the cursor where it was before the call. The
/// sequence of reads is not recoverable after a failure however, so the
/// decoder should be discarded.
#[derive(Clone, Debug)]
pub struct Decoder {
    data: Bytes,
    index: usize,
    packing: Packing,
    cfg: Config,
}

// Fixed-width numeric reads, big-endian.
macro_rules! impl_read_numeric {
    ($($name:ident: $type:ty),* $(,)?) => {
        $(
            #[doc = concat!("Reads a big-endian `", stringify!($type), "`.")]
            #[inline]
            pub fn $name(&mut self) -> Result<$type, Error> {
                const LEN: usize = std::mem::size_of::<$type>();
                let raw = self.take(LEN)?;
                let mut array = [0u8; LEN];
                array.copy_from_slice(raw);
                Ok(<$type>::from_be_bytes(array))
            }
        )*
    };
}

impl Decoder {
    /// Creates a decoder over `data` with no limit on payload lengths.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self::with_cfg(data, Config::default())
    }

    /// Creates a decoder over `data` using `cfg`.
    pub fn with_cfg(data: impl Into<Bytes>, cfg: Config) -> Self {
        let data = data.into();
        trace!(len = data.len(), "created decoder");
        Self {
            data,
            index: 0,
            packing: Packing::Closed,
            cfg,
        }
    }

    /// Returns the length of the underlying byte sequence.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the underlying byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the cursor position.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Returns the number of bytes after the cursor.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.index
    }

    /// Consumes `len` bytes, failing without moving the cursor if fewer remain.
    fn take(&mut self, len: usize) -> Result<&[u8], Error> {
        self.packing = Packing::Closed;
        if len > self.remaining() {
            return Err(Error::EndOfBuffer);
        }
        let start = self.index;
        self.index += len;
        Ok(&self.data[start..self.index])
    }

    impl_read_numeric!(
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

    /// Reads a `bool`.
    ///
    /// Mirrors [crate::Encoder::bool]: consecutive calls read successive bits
    /// of the same byte.
    pub fn bool(&mut self) -> Result<bool, Error> {
        if let Some((index, shift)) = self.packing.next_bit() {
            self.packing = Packing::Open { index, shift };
            return Ok(packing::bit(self.data[index], shift));
        }

        let byte = self.uint8()?;
        let index = self.index - 1;
        self.packing = Packing::Open { index, shift: 0 };
        Ok(packing::bit(byte, 0))
    }

    /// Reads a variable-length size.
    pub fn size(&mut self) -> Result<u64, Error> {
        self.packing = Packing::Closed;
        let mut rest = &self.data[self.index..];
        let value = size::read(&mut rest)?;
        self.index = self.data.len() - rest.len();
        Ok(value)
    }

    /// Reads a size and checks it against the configured length range.
    pub(crate) fn len_prefix(&mut self) -> Result<usize, Error> {
        let start = self.index;
        let len = self.size()?;
        let len = usize::try_from(len).map_err(|_| Error::SizeTooLarge(len))?;
        if !self.cfg.max_len.contains(len) {
            debug!(len, "rejected length outside configured range");
            self.index = start;
            return Err(Error::InvalidLength(len));
        }
        Ok(len)
    }

    /// Reads a size-prefixed byte payload.
    ///
    /// The returned [Bytes] shares memory with the decoder's sequence.
    pub fn bytes(&mut self) -> Result<Bytes, Error> {
        let start = self.index;
        let len = self.len_prefix()?;
        if len > self.remaining() {
            self.index = start;
            return Err(Error::EndOfBuffer);
        }
        let payload = self.data.slice(self.index..self.index + len);
        self.index += len;
        Ok(payload)
    }

    /// Reads a size-prefixed UTF-8 payload.
    ///
    /// Malformed sequences are replaced with `U+FFFD` rather than failing.
    pub fn string(&mut self) -> Result<String, Error> {
        let payload = self.bytes()?;
        Ok(String::from_utf8_lossy(&payload).into_owned())
    }

    /// Reads any value implementing [Read].
    pub fn get<T: Read>(&mut self) -> Result<T, Error> {
        T::read(self)
    }

    /// Returns true once the cursor has consumed the whole sequence.
    pub fn end(&self) -> bool {
        self.index >= self.data.len()
    }
}
