//! The reference device frame and acknowledgment convention.
//!
//! The emulated device sends one fixed frame of channel readings per cycle
//! and reads back a fixed-size acknowledgment. Both shapes are convention
//! between the two ends of the fixture; nothing on the wire describes them.

use crate::{PackDecoder, PackError, Scalar, Schema, WireType};

/// Length in bytes of the packed reference frame.
pub const REFERENCE_FRAME_LEN: usize = 40;

/// Length in bytes of the acknowledgment the device reads back.
pub const ACK_LEN: usize = 8;

/// The canonical channel sequence the emulated device transmits.
///
/// Five single-precision zone readings, a signed/unsigned humidity pair, a
/// light level, the active flag, a status code, and the device identifier.
/// The mix is chosen to hit every width class of the decision table.
pub fn reference_frame() -> Vec<Scalar> {
    vec![
        Scalar::Float(3.14),
        Scalar::Float(2.718),
        Scalar::Float(1.618),
        Scalar::Float(4.669),
        Scalar::Float(5.9856),
        Scalar::Int(-100_000),
        Scalar::Int(100_000),
        Scalar::Int(25),
        Scalar::Bool(true),
        Scalar::Int(-30_000),
        Scalar::Int(1_234_567_890_123_456_789),
    ]
}

/// Acknowledgment shape: two little-endian single-precision floats.
pub fn ack_schema() -> Schema {
    Schema::from(vec![WireType::F32, WireType::F32])
}

/// Interprets the fixed-size acknowledgment buffer.
///
/// The 8-byte-as-two-floats reading is the fixture's convention, not
/// something the codec derives.
pub fn decode_ack(data: &[u8]) -> Result<(f32, f32), PackError> {
    let decoded = PackDecoder::new().decode(data, &ack_schema())?;
    match decoded[..] {
        [Scalar::Float(a), Scalar::Float(b)] => Ok((a, b)),
        // ack_schema only yields floats.
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PackEncoder;

    #[test]
    fn reference_frame_is_forty_bytes() {
        let frame = reference_frame();
        let schema = Schema::for_values(&frame).unwrap();
        assert_eq!(schema.frame_len(), REFERENCE_FRAME_LEN);
        let mut enc = PackEncoder::new();
        assert_eq!(enc.encode(&frame).unwrap().len(), REFERENCE_FRAME_LEN);
    }

    #[test]
    fn reference_frame_width_classes() {
        let schema = Schema::for_values(&reference_frame()).unwrap();
        assert_eq!(
            schema.wire_types(),
            &[
                WireType::F32,
                WireType::F32,
                WireType::F32,
                WireType::F32,
                WireType::F32,
                WireType::I32,
                WireType::U32,
                WireType::U8,
                WireType::Bool,
                WireType::I16,
                WireType::U64,
            ]
        );
    }

    #[test]
    fn ack_roundtrip() {
        let mut enc = PackEncoder::new();
        let bytes = enc
            .encode(&[Scalar::Float(1.5), Scalar::Float(-0.25)])
            .unwrap();
        assert_eq!(bytes.len(), ACK_LEN);
        let (a, b) = decode_ack(&bytes).unwrap();
        assert_eq!(a, 1.5);
        assert_eq!(b, -0.25);
    }

    #[test]
    fn short_ack_is_truncated() {
        assert_eq!(
            decode_ack(&[0x00; 5]),
            Err(PackError::Truncated {
                needed: 4,
                remaining: 1
            })
        );
    }
}
