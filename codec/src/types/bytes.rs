//! Implementations for byte and text payloads.
//!
//! Both are written as a size header followed by the raw bytes. Text is
//! UTF-8; malformed input is replaced with `U+FFFD` when read.

use crate::{Decoder, Encoder, Error, Read, Write};
use bytes::Bytes;

impl Write for Bytes {
    #[inline]
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        encoder.bytes(self)?;
        Ok(())
    }
}

impl Read for Bytes {
    #[inline]
    fn read(decoder: &mut Decoder) -> Result<Self, Error> {
        decoder.bytes()
    }
}

impl Write for str {
    #[inline]
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        encoder.string(self)?;
        Ok(())
    }
}

impl Write for String {
    #[inline]
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        self.as_str().write(encoder)
    }
}

impl Read for String {
    #[inline]
    fn read(decoder: &mut Decoder) -> Result<Self, Error> {
        decoder.string()
    }
}

#[cfg(test)]
mod tests {
    use crate::{size, Config, Decode, Encode, Error};
    use bytes::Bytes;

    #[test]
    fn test_bytes() {
        let values = [
            Bytes::new(),
            Bytes::from_static(&[1, 2, 3]),
            Bytes::from(vec![0; 300]),
        ];
        for value in values {
            let encoded = value.encode().unwrap();
            let len = value.len();
            assert_eq!(encoded.len(), size::size(len as u64) + len);

            // Valid decoding
            let decoded = Bytes::decode_cfg(encoded.clone(), Config::with_max_len(len..=len));
            assert_eq!(decoded.unwrap(), value);

            // Failure for too long
            assert_eq!(
                Bytes::decode_cfg(encoded, Config::with_max_len(..len)),
                Err(Error::InvalidLength(len))
            );
        }
    }

    #[test]
    fn test_string() {
        let value = "héllo".to_string();
        let encoded = value.encode().unwrap();
        assert_eq!(encoded[0] as usize, value.len());
        assert_eq!(String::decode(encoded).unwrap(), value);

        assert_eq!("".encode().unwrap(), &[0x00][..]);
    }
}
