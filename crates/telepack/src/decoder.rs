//! `PackDecoder` — the symmetric decoder, driven by an out-of-band schema.

use telepack_buffers::Reader;

use crate::{PackError, Scalar, Schema, WireType, BOOL_FALSE};

/// Schema-driven decoder for packed buffers.
///
/// Consumes the buffer left-to-right, slicing exactly `width` bytes per
/// field and interpreting them per the field's wire type. The schema must
/// be the one derived from the encoded value sequence; the buffer itself
/// carries nothing to validate against.
pub struct PackDecoder;

impl Default for PackDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PackDecoder {
    pub fn new() -> Self {
        PackDecoder
    }

    /// Decodes a packed buffer against its schema.
    ///
    /// Fails with [`PackError::Truncated`] when a field's width exceeds the
    /// remaining bytes, and with [`PackError::TrailingBytes`] when bytes
    /// remain after the final field. Both indicate a desynchronized stream,
    /// so nothing partial is returned.
    pub fn decode(&self, data: &[u8], schema: &Schema) -> Result<Vec<Scalar>, PackError> {
        let mut reader = Reader::new(data);
        let mut values = Vec::with_capacity(schema.len());
        for wire in schema.wire_types() {
            values.push(self.read_scalar(&mut reader, *wire)?);
        }
        let surplus = reader.size();
        if surplus > 0 {
            return Err(PackError::TrailingBytes(surplus));
        }
        Ok(values)
    }

    /// Reads one field at the given wire type.
    ///
    /// Every integer layout decodes to [`Scalar::Int`]; signedness only
    /// affects how the raw bytes are interpreted.
    pub fn read_scalar(
        &self,
        reader: &mut Reader<'_>,
        wire: WireType,
    ) -> Result<Scalar, PackError> {
        let value = match wire {
            WireType::U8 => Scalar::Int(reader.try_u8()? as i128),
            WireType::U16 => Scalar::Int(reader.try_u16()? as i128),
            WireType::I16 => Scalar::Int(reader.try_i16()? as i128),
            WireType::U32 => Scalar::Int(reader.try_u32()? as i128),
            WireType::I32 => Scalar::Int(reader.try_i32()? as i128),
            WireType::U64 => Scalar::Int(reader.try_u64()? as i128),
            WireType::I64 => Scalar::Int(reader.try_i64()? as i128),
            WireType::F32 => Scalar::Float(reader.try_f32()?),
            WireType::Bool => Scalar::Bool(reader.try_u8()? != BOOL_FALSE),
        };
        Ok(value)
    }
}
