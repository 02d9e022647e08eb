//! `PackEncoder` — serializes an ordered scalar sequence into one packed
//! buffer.

use telepack_buffers::Writer;

use crate::{PackError, Scalar, WireType, BOOL_FALSE, BOOL_TRUE};

/// Packed-value encoder.
///
/// Each value is classified by the decision table and written at its chosen
/// width; the per-value encodings are concatenated with no separators,
/// padding, or alignment. Encoding is pure computation over the internal
/// buffer; the encoder performs no I/O.
pub struct PackEncoder {
    pub writer: Writer,
}

impl Default for PackEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PackEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes the value sequence into a single packed buffer.
    ///
    /// Fails atomically: if any value is rejected, no buffer is returned
    /// and the partial bytes are discarded on the next call's reset.
    pub fn encode(&mut self, values: &[Scalar]) -> Result<Vec<u8>, PackError> {
        self.writer.reset();
        for value in values {
            self.write_scalar(value)?;
        }
        Ok(self.writer.flush())
    }

    /// Writes one scalar at the width the decision table assigns it.
    pub fn write_scalar(&mut self, value: &Scalar) -> Result<(), PackError> {
        match *value {
            Scalar::Float(f) => self.write_float(f),
            Scalar::Bool(b) => {
                self.write_boolean(b);
                Ok(())
            }
            Scalar::Int(n) => self.write_int(n),
        }
    }

    /// Writes a finite float as 4-byte IEEE-754 single precision.
    pub fn write_float(&mut self, f: f32) -> Result<(), PackError> {
        if !f.is_finite() {
            return Err(PackError::Unsupported("non-finite float"));
        }
        self.writer.f32(f);
        Ok(())
    }

    /// Writes a boolean as a single 0x00/0x01 byte.
    pub fn write_boolean(&mut self, b: bool) {
        self.writer.u8(if b { BOOL_TRUE } else { BOOL_FALSE });
    }

    /// Writes an integer at its minimum unsigned/signed width.
    pub fn write_int(&mut self, n: i128) -> Result<(), PackError> {
        match WireType::for_int(n)? {
            WireType::U8 => self.writer.u8(n as u8),
            WireType::U16 => self.writer.u16(n as u16),
            WireType::I16 => self.writer.i16(n as i16),
            WireType::U32 => self.writer.u32(n as u32),
            WireType::I32 => self.writer.i32(n as i32),
            WireType::U64 => self.writer.u64(n as u64),
            WireType::I64 => self.writer.i64(n as i64),
            // for_int never yields a non-integer layout.
            WireType::F32 | WireType::Bool => unreachable!(),
        }
        Ok(())
    }
}
