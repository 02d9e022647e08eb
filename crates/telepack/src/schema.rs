//! [`Schema`] — the out-of-band type/width agreement between the two ends.
//!
//! The packed buffer carries no tags or length prefixes, so the decoder must
//! be handed the exact ordered wire-type sequence the encoder chose. Both
//! ends derive it from the same value list.

use crate::{PackError, Scalar, WireType};

/// Ordered wire-type sequence for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    types: Vec<WireType>,
}

impl Schema {
    /// Runs the decision table over a value sequence.
    ///
    /// This is the only sanctioned way to obtain a schema that matches what
    /// [`PackEncoder::encode`](crate::PackEncoder::encode) will produce for
    /// the same values.
    pub fn for_values(values: &[Scalar]) -> Result<Schema, PackError> {
        let types = values
            .iter()
            .map(WireType::for_scalar)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Schema { types })
    }

    /// The ordered wire types.
    pub fn wire_types(&self) -> &[WireType] {
        &self.types
    }

    /// Total frame length in bytes: the sum of every field's width.
    ///
    /// This is exactly the length of the buffer the encoder produces; it is
    /// never transmitted.
    pub fn frame_len(&self) -> usize {
        self.types.iter().map(|t| t.width()).sum()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl From<Vec<WireType>> for Schema {
    fn from(types: Vec<WireType>) -> Self {
        Schema { types }
    }
}

impl FromIterator<WireType> for Schema {
    fn from_iter<I: IntoIterator<Item = WireType>>(iter: I) -> Self {
        Schema {
            types: iter.into_iter().collect(),
        }
    }
}
