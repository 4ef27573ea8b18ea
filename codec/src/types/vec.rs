//! Implementation for `Vec<T>`.
//!
//! A vector is written as a size header holding the element count, followed by
//! each element. A `Vec<u8>` therefore has the same layout as a byte payload.

use crate::{Decoder, Encoder, Error, Read, Write};

impl<T: Write> Write for Vec<T> {
    #[inline]
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        encoder.size(self.len() as u64)?;
        for item in self {
            item.write(encoder)?;
        }
        Ok(())
    }
}

impl<T: Read> Read for Vec<T> {
    #[inline]
    fn read(decoder: &mut Decoder) -> Result<Self, Error> {
        let len = decoder.len_prefix()?;

        // Every element occupies at least one byte, so don't trust `len` beyond that.
        let mut vec = Vec::with_capacity(len.min(decoder.remaining()));
        for _ in 0..len {
            vec.push(T::read(decoder)?);
        }
        Ok(vec)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, Decode, Decoder, Encode, Encoder, Error};
    use bytes::Bytes;

    #[test]
    fn test_vec() {
        let values = [vec![], vec![1u32], vec![1u32, 2, 3]];
        for value in values {
            let encoded = value.encode().unwrap();
            assert_eq!(encoded.len(), 1 + value.len() * 4);
            assert_eq!(Vec::<u32>::decode(encoded).unwrap(), value);
        }
    }

    #[test]
    fn test_vec_u8_matches_bytes() {
        let value = vec![7u8; 300];
        let as_vec = value.encode().unwrap();
        let as_bytes = Encoder::new().bytes(&value).unwrap().end();
        assert_eq!(as_vec, as_bytes);
        assert_eq!(Decoder::new(as_vec).bytes().unwrap(), Bytes::from(value));
    }

    #[test]
    fn test_vec_of_bools_packs() {
        let value = vec![true; 10];
        let encoded = value.encode().unwrap();
        assert_eq!(encoded, &[0x0A, 0xFF, 0x03][..]);
        assert_eq!(Vec::<bool>::decode(encoded).unwrap(), value);
    }

    #[test]
    fn test_vec_length_limit() {
        let encoded = vec![1u8, 2, 3].encode().unwrap();
        assert_eq!(
            Vec::<u8>::decode_cfg(encoded, Config::with_max_len(..3)),
            Err(Error::InvalidLength(3))
        );
    }

    #[test]
    fn test_vec_truncated() {
        // Claims 5 elements but carries 2.
        let encoded = Bytes::from_static(&[0x05, 0x01, 0x02]);
        assert_eq!(Vec::<u8>::decode(encoded), Err(Error::EndOfBuffer));
    }
}
