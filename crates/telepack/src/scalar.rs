//! [`Scalar`] — the tagged value type packed by the telemetry codec.

use crate::PackError;

/// One typed datum to be packed.
///
/// The reference device dispatched on runtime type inspection; here the
/// scalar kinds are a closed variant set so the encoding decision table is
/// total over them. The integer payload is an `i128`: wide enough to carry
/// the whole encodable domain `[i64::MIN, u64::MAX]` with its sign, and to
/// represent out-of-range magnitudes so the range check stays observable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// Single-precision channel reading.
    Float(f32),
    /// Device flag.
    Bool(bool),
    /// Counter, identifier, or status code; width chosen at encode time.
    Int(i128),
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i128> for Scalar {
    fn from(v: i128) -> Self {
        Scalar::Int(v)
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Scalar::Int(i128::from(v))
                }
            }
        )*
    };
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Dynamic intake boundary: JSON values map onto the scalar set, and
/// everything outside it is rejected here rather than deep in the encoder.
///
/// JSON numbers with a fractional part are narrowed to `f32`, matching the
/// fixture's single-precision channel convention.
impl TryFrom<&serde_json::Value> for Scalar {
    type Error = PackError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Bool(b) => Ok(Scalar::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Scalar::Int(i as i128))
                } else if let Some(u) = n.as_u64() {
                    Ok(Scalar::Int(u as i128))
                } else {
                    // Finiteness is checked by the decision table, not here.
                    Ok(Scalar::Float(n.as_f64().unwrap_or(f64::NAN) as f32))
                }
            }
            serde_json::Value::Null => Err(PackError::Unsupported("null")),
            serde_json::Value::String(_) => Err(PackError::Unsupported("string")),
            serde_json::Value::Array(_) => Err(PackError::Unsupported("array")),
            serde_json::Value::Object(_) => Err(PackError::Unsupported("object")),
        }
    }
}
