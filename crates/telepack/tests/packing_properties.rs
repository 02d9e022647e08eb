//! Property tests over the packing decision table and round-trip invariant.

use proptest::prelude::*;
use telepack::{PackDecoder, PackEncoder, Scalar, Schema, WireType};

/// Any integer the wire can carry: `[i64::MIN, u64::MAX]`.
fn arb_encodable_int() -> impl Strategy<Value = i128> {
    (i64::MIN as i128)..=(u64::MAX as i128)
}

/// Any scalar the wire can carry. Floats are drawn from raw bit patterns
/// (non-finite ones filtered out) so the whole representable space is
/// covered, not just round decimals.
fn arb_scalar() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        arb_encodable_int().prop_map(Scalar::Int),
        any::<bool>().prop_map(Scalar::Bool),
        any::<u32>()
            .prop_map(f32::from_bits)
            .prop_filter("finite floats only", |f| f.is_finite())
            .prop_map(Scalar::Float),
    ]
}

fn encode(values: &[Scalar]) -> Vec<u8> {
    let mut encoder = PackEncoder::new();
    encoder.encode(values).expect("encodable input")
}

proptest! {
    /// Width classes partition the integer domain exactly.
    #[test]
    fn prop_integer_width_class(n in arb_encodable_int()) {
        let wire = WireType::for_int(n).unwrap();
        let expected = if n >= 0 {
            match n {
                0..=255 => WireType::U8,
                256..=65_535 => WireType::U16,
                65_536..=4_294_967_295 => WireType::U32,
                _ => WireType::U64,
            }
        } else if n >= -32_768 {
            WireType::I16
        } else if n >= i32::MIN as i128 {
            WireType::I32
        } else {
            WireType::I64
        };
        prop_assert_eq!(wire, expected);
    }

    /// Negative values never classify as unsigned, non-negative never as
    /// signed.
    #[test]
    fn prop_signedness_follows_sign(n in arb_encodable_int()) {
        let wire = WireType::for_int(n).unwrap();
        prop_assert_eq!(wire.is_signed(), n < 0);
    }

    /// encode → decode over the derived schema reproduces the input
    /// exactly; the buffer length is the schema's frame length.
    #[test]
    fn prop_roundtrip(values in prop::collection::vec(arb_scalar(), 0..64)) {
        let bytes = encode(&values);
        let schema = Schema::for_values(&values).unwrap();
        prop_assert_eq!(bytes.len(), schema.frame_len());
        let decoded = PackDecoder::new().decode(&bytes, &schema).unwrap();
        prop_assert_eq!(decoded.len(), values.len());
        for (d, v) in decoded.iter().zip(values.iter()) {
            match (d, v) {
                // Bit-exact, not merely numerically equal.
                (Scalar::Float(a), Scalar::Float(b)) => {
                    prop_assert_eq!(a.to_bits(), b.to_bits());
                }
                _ => prop_assert_eq!(d, v),
            }
        }
    }

    /// Concatenation: packing a sequence equals packing its values one at
    /// a time and joining the buffers.
    #[test]
    fn prop_concatenation(a in arb_scalar(), b in arb_scalar()) {
        let mut joined = encode(&[a]);
        joined.extend(encode(&[b]));
        prop_assert_eq!(encode(&[a, b]), joined);
    }

    /// The decision table is deterministic across repeated calls.
    #[test]
    fn prop_deterministic(values in prop::collection::vec(arb_scalar(), 0..32)) {
        prop_assert_eq!(encode(&values), encode(&values));
    }

    /// Every strict prefix of a non-empty frame fails to decode with a
    /// truncation error.
    #[test]
    fn prop_prefix_truncation(values in prop::collection::vec(arb_scalar(), 1..16)) {
        let bytes = encode(&values);
        let schema = Schema::for_values(&values).unwrap();
        let decoder = PackDecoder::new();
        for cut in 0..bytes.len() {
            let is_truncated = matches!(
                decoder.decode(&bytes[..cut], &schema),
                Err(telepack::PackError::Truncated { .. })
            );
            prop_assert!(is_truncated);
        }
    }
}
