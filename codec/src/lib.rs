//! Compact binary serialization.
//!
//! # Overview
//!
//! An [Encoder] appends typed values to a growing byte sequence and a [Decoder]
//! reads them back in the same order. No schema or type information is
//! written: the writer and reader must agree on the sequence of calls.
//!
//! # Format
//!
//! - Integers and floats are fixed-width and big-endian. 64-bit integers are
//!   laid out as their high 32 bits followed by their low 32 bits. Other
//!   implementations of the format may only carry them exactly up to
//!   [MAX_SAFE_INTEGER] in magnitude.
//! - Sizes use a variable-length encoding of 1 to 8 bytes (see [size]).
//! - Byte and string payloads are a size followed by the raw (UTF-8) bytes.
//! - Consecutive booleans are bit-packed, up to 8 per byte.
//!
//! # Example
//!
//! ```
//! use bitsparrow::{Decoder, Encoder};
//!
//! let mut encoder = Encoder::new();
//! encoder
//!     .uint16(1024)
//!     .bool(true)
//!     .bool(false)
//!     .bool(true)
//!     .bytes(&[1, 2, 3])?
//!     .float64(0.5);
//! let data = encoder.end();
//! assert_eq!(data.len(), 2 + 1 + 4 + 8);
//!
//! let mut decoder = Decoder::new(data);
//! assert_eq!(decoder.uint16()?, 1024);
//! assert!(decoder.bool()?);
//! assert!(!decoder.bool()?);
//! assert!(decoder.bool()?);
//! assert_eq!(decoder.bytes()?, &[1, 2, 3][..]);
//! assert_eq!(decoder.float64()?, 0.5);
//! assert!(decoder.end());
//! # Ok::<(), bitsparrow::Error>(())
//! ```
//!
//! # Composite Values
//!
//! User-defined types can implement [Write] and [Read] to be used with
//! [Encode::encode], [Decode::decode], [Encoder::put] and [Decoder::get].
//!
//! ```
//! use bitsparrow::{Decode, Decoder, Encode, Encoder, Error, Read, Write};
//!
//! #[derive(Debug, PartialEq)]
//! struct Player {
//!     name: String,
//!     score: i32,
//!     online: bool,
//! }
//!
//! impl Write for Player {
//!     fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
//!         encoder.string(&self.name)?.int32(self.score).bool(self.online);
//!         Ok(())
//!     }
//! }
//!
//! impl Read for Player {
//!     fn read(decoder: &mut Decoder) -> Result<Self, Error> {
//!         Ok(Self {
//!             name: decoder.string()?,
//!             score: decoder.int32()?,
//!             online: decoder.bool()?,
//!         })
//!     }
//! }
//!
//! let player = Player { name: "ann".into(), score: -3, online: true };
//! let encoded = player.encode()?;
//! assert_eq!(Player::decode(encoded)?, player);
//! # Ok::<(), Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
mod packing;
pub mod size;
pub mod types;

// Re-export main types and traits
pub use codec::{Codec, Decode, Encode, Read, Write};
pub use config::{Config, RangeCfg};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::Error;
pub use size::MAX_SAFE_INTEGER;
