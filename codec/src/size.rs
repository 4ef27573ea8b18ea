//! Variable-length size encoding and decoding
//!
//! A size is a non-negative integer written in 1 to 8 bytes. The number of
//! leading set bits in the first byte tells how many continuation bytes follow
//! (a unary length prefix, as in UTF-8):
//!
//! | Bytes | Leading byte | Value bits |
//! |-------|--------------|------------|
//! | 1     | `0xxxxxxx`   | 7          |
//! | 2     | `10xxxxxx`   | 14         |
//! | 3     | `110xxxxx`   | 21         |
//! | 4     | `1110xxxx`   | 28         |
//! | 5     | `11110xxx`   | 35         |
//! | 6     | `111110xx`   | 42         |
//! | 7     | `1111110x`   | 49         |
//! | 8     | `11111110`   | 56         |
//!
//! The bits left over in the leading byte hold the most-significant bits of the
//! value and each continuation byte holds the next 8 bits, big-endian.
//!
//! Sizes are limited to [MAX_SAFE_INTEGER] so that any implementation whose
//! integers are IEEE-754 doubles can represent them exactly.

use crate::Error;
use bytes::{Buf, BufMut};
use tracing::debug;

/// Largest integer that is exactly representable as a 64-bit float (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Largest number of bytes a size may take.
pub const MAX_SIZE_LEN: usize = 8;

const DATA_BITS_PER_BYTE: usize = 7;
const MARKER_BIT: u8 = 0x80;
const DATA_MASK: u8 = 0x7F;

/// Encodes `value` as a size.
///
/// Fails with [Error::SizeTooLarge] if `value` exceeds [MAX_SAFE_INTEGER].
pub fn write(value: u64, buf: &mut impl BufMut) -> Result<(), Error> {
    if value > MAX_SAFE_INTEGER {
        return Err(Error::SizeTooLarge(value));
    }

    let len = size(value);
    if len == 1 {
        // Fast path for small values (common case for lengths).
        buf.put_u8(value as u8);
        return Ok(());
    }

    // `len` bytes hold `7 * len` bits, so the most-significant byte never
    // collides with the `len` marker bits placed on top of it.
    let marker = 0xFFu8 << (MAX_SIZE_LEN + 1 - len);
    let be = value.to_be_bytes();
    let tail = &be[be.len() - len..];
    buf.put_u8(tail[0] | marker);
    buf.put_slice(&tail[1..]);
    Ok(())
}

/// Decodes a size.
pub fn read(buf: &mut impl Buf) -> Result<u64, Error> {
    if !buf.has_remaining() {
        return Err(Error::EndOfBuffer);
    }
    let leading = buf.get_u8();
    if leading & MARKER_BIT == 0 {
        return Ok(leading as u64);
    }

    // Each leading set bit accounts for one continuation byte.
    let continuation = leading.leading_ones() as usize;
    if continuation >= MAX_SIZE_LEN {
        debug!(leading, "rejected size header");
        return Err(Error::InvalidSizeHeader(leading));
    }
    if buf.remaining() < continuation {
        return Err(Error::EndOfBuffer);
    }

    let mut value = (leading & (DATA_MASK >> continuation)) as u64;
    for _ in 0..continuation {
        value = (value << 8) | buf.get_u8() as u64;
    }
    if value > MAX_SAFE_INTEGER {
        debug!(value, "rejected size above safe integer range");
        return Err(Error::SizeTooLarge(value));
    }
    Ok(value)
}

/// Calculates the number of bytes needed to encode `value` as a size.
///
/// `value` must not exceed [MAX_SAFE_INTEGER].
pub fn size(value: u64) -> usize {
    let data_bits = (u64::BITS - value.leading_zeros()) as usize;
    usize::max(1, data_bits.div_ceil(DATA_BITS_PER_BYTE))
}
