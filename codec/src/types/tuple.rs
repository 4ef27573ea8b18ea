//! Implementations for tuples.

use crate::{Decoder, Encoder, Error, Read, Write};
use paste::paste;

// Each element is written in order, with no framing between them.
macro_rules! impl_codec_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Write ),*> Write for ( $( [<T $index>], )* ) {
                #[inline]
                fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
                    $( self.$index.write(encoder)?; )*
                    Ok(())
                }
            }

            impl<$( [<T $index>]: Read ),*> Read for ( $( [<T $index>], )* ) {
                #[inline]
                fn read(decoder: &mut Decoder) -> Result<Self, Error> {
                    Ok(( $( [<T $index>]::read(decoder)?, )* ))
                }
            }
        }
    };
}

impl_codec_for_tuple!(0);
impl_codec_for_tuple!(0, 1);
impl_codec_for_tuple!(0, 1, 2);
impl_codec_for_tuple!(0, 1, 2, 3);
impl_codec_for_tuple!(0, 1, 2, 3, 4);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5);
