//! Codec implementations for Rust primitive types.
//!
//! Integers and floats map onto the fixed-width encoder calls and are written
//! big-endian. `bool` maps onto [Encoder::bool], so adjacent booleans inside a
//! composite value (including `Option` presence flags) share a packing byte.

use crate::{Decoder, Encoder, Error, Read, Write};

// Numeric types implementation
macro_rules! impl_numeric {
    ($($type:ty => $method:ident),* $(,)?) => {
        $(
            impl Write for $type {
                #[inline]
                fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
                    encoder.$method(*self);
                    Ok(())
                }
            }

            impl Read for $type {
                #[inline]
                fn read(decoder: &mut Decoder) -> Result<Self, Error> {
                    decoder.$method()
                }
            }
        )*
    };
}

impl_numeric!(
    u8 => uint8,
    u16 => uint16,
    u32 => uint32,
    u64 => uint64,
    i8 => int8,
    i16 => int16,
    i32 => int32,
    i64 => int64,
    f32 => float32,
    f64 => float64,
    bool => bool,
);

// Option implementation
impl<T: Write> Write for Option<T> {
    #[inline]
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        encoder.bool(self.is_some());
        if let Some(inner) = self {
            inner.write(encoder)?;
        }
        Ok(())
    }
}

impl<T: Read> Read for Option<T> {
    #[inline]
    fn read(decoder: &mut Decoder) -> Result<Self, Error> {
        if decoder.bool()? {
            Ok(Some(T::read(decoder)?))
        } else {
            Ok(None)
        }
    }
}
