//! Traits for composite values

use crate::{Config, Decoder, Encoder, Error};
use bytes::Bytes;

/// Trait for types that can be written to an [Encoder].
pub trait Write {
    /// Writes this value as a sequence of encoder calls.
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error>;
}

/// Trait for types that can be read from a [Decoder].
///
/// Implementations must issue the same sequence of calls as the matching
/// [Write] implementation.
pub trait Read: Sized {
    /// Reads a value, advancing the decoder's cursor.
    fn read(decoder: &mut Decoder) -> Result<Self, Error>;
}

/// Extension trait for encoding a single value.
pub trait Encode: Write {
    /// Encodes this value into a standalone byte sequence.
    ///
    /// (Provided method).
    fn encode(&self) -> Result<Bytes, Error> {
        let mut encoder = Encoder::new();
        self.write(&mut encoder)?;
        Ok(encoder.end())
    }
}

// Automatically implement `Encode` for types that implement `Write`.
impl<T: Write + ?Sized> Encode for T {}

/// Extension trait for decoding a single value, ensuring the whole sequence is consumed.
pub trait Decode: Read {
    /// Decodes a value using the default [Config].
    ///
    /// (Provided method).
    fn decode(data: impl Into<Bytes>) -> Result<Self, Error> {
        Self::decode_cfg(data, Config::default())
    }

    /// Decodes a value using `cfg`, failing if any bytes remain unread.
    ///
    /// (Provided method).
    fn decode_cfg(data: impl Into<Bytes>, cfg: Config) -> Result<Self, Error> {
        let mut decoder = Decoder::with_cfg(data, cfg);
        let result = Self::read(&mut decoder)?;

        // Check that the sequence is fully consumed.
        let remaining = decoder.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(result)
    }
}

// Automatically implement `Decode` for types that implement `Read`.
impl<T: Read> Decode for T {}

/// Trait for types that can be encoded and decoded.
pub trait Codec: Encode + Decode {}

// Automatically implement `Codec` for types that implement `Encode` and `Decode`.
impl<T: Encode + Decode> Codec for T {}
