//! Buffer primitives for the telepack wire codec.
//!
//! The wire format is little-endian throughout, so every multi-byte method
//! on [`Writer`] and [`Reader`] is little-endian; no big-endian variants
//! exist.

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error returned by bounds-checked [`Reader`] methods.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A read required more bytes than remain before the end of the buffer.
    #[error("end of buffer: needed {needed} bytes, {remaining} remaining")]
    EndOfBuffer { needed: usize, remaining: usize },
}
