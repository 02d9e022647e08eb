//! `telepack` — minimum-width packed-value codec for a sensor-telemetry
//! test fixture.
//!
//! The emulated device serializes a heterogeneous ordered list of scalar
//! readings into one contiguous buffer with no length prefixes and no type
//! tags. Each value takes the *smallest* binary representation that holds
//! it losslessly; the decoder must already know the sequence's types and
//! order out-of-band (see [`Schema`]), because a single mis-sized field
//! desynchronizes everything after it.
//!
//! # Wire rules
//!
//! All multi-byte layouts are little-endian. Per value, first match wins:
//!
//! | Value | Layout | Width |
//! |-------|--------|-------|
//! | finite float | IEEE-754 single | 4 |
//! | boolean | 0x00 / 0x01 | 1 |
//! | int in [0, 255] | unsigned | 1 |
//! | int in [256, 65535] | unsigned | 2 |
//! | int in [-32768, -1] | signed | 2 |
//! | int in [65536, 2^32-1] | unsigned | 4 |
//! | int in [-2^31, -32769] | signed | 4 |
//! | int in [2^32, 2^64-1] | unsigned | 8 |
//! | int in [-2^63, -2^31-1] | signed | 8 |
//!
//! Anything else is an error. Note the asymmetry: there is no signed
//! 1-byte class, so every negative value costs at least two bytes.
//!
//! # Example
//!
//! ```
//! use telepack::{PackDecoder, PackEncoder, Scalar, Schema};
//!
//! let readings = [Scalar::Float(3.14), Scalar::Int(25), Scalar::Bool(true)];
//!
//! let mut encoder = PackEncoder::new();
//! let buffer = encoder.encode(&readings).unwrap();
//! assert_eq!(buffer.len(), 6); // 4 + 1 + 1, no separators
//!
//! // The receiving side derives the same schema from the agreed sequence.
//! let schema = Schema::for_values(&readings).unwrap();
//! let decoded = PackDecoder::new().decode(&buffer, &schema).unwrap();
//! assert_eq!(decoded, readings);
//! ```

mod decoder;
mod encoder;
mod error;
mod scalar;
mod schema;
mod wire;

pub mod fixture;

pub use decoder::PackDecoder;
pub use encoder::PackEncoder;
pub use error::PackError;
pub use scalar::Scalar;
pub use schema::Schema;
pub use wire::{WireType, BOOL_FALSE, BOOL_TRUE};
