//! Bit-packing state shared by [crate::Encoder] and [crate::Decoder].
//!
//! Consecutive `bool` calls share a single byte (up to 8 per byte). The state
//! is transitioned on every operation: a `bool` opens or advances it, while
//! any other operation closes it.

/// Number of booleans that fit in one packing byte.
pub const BOOLS_PER_BYTE: u8 = 8;

/// Whether the last operation left a packing byte open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Packing {
    /// No packing byte is open. The next `bool` starts a new byte.
    #[default]
    Closed,

    /// The byte at `index` holds booleans in bits `0..=shift`.
    Open { index: usize, shift: u8 },
}

impl Packing {
    /// Returns the byte index and bit position for the next `bool`, if it
    /// can be stored in the currently open byte.
    #[inline]
    pub fn next_bit(&self) -> Option<(usize, u8)> {
        match *self {
            Self::Open { index, shift } if shift + 1 < BOOLS_PER_BYTE => Some((index, shift + 1)),
            _ => None,
        }
    }
}

/// Returns whether bit `shift` of `byte` is set.
#[inline]
pub fn bit(byte: u8, shift: u8) -> bool {
    byte & (1 << shift) != 0
}
