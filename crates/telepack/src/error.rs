use telepack_buffers::BufferError;
use thiserror::Error;

/// Failure taxonomy for packing and unpacking.
///
/// Every failure aborts the whole buffer operation; the codec never returns
/// a partially encoded or partially decoded result, because the format has
/// no resynchronization markers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PackError {
    /// The value is not one of the packable scalar kinds.
    #[error("unsupported value kind: {0}")]
    Unsupported(&'static str),
    /// Integer magnitude exceeds signed/unsigned 64-bit capacity.
    #[error("integer {0} exceeds the 64-bit encodable range")]
    OutOfRange(i128),
    /// Decode ran out of bytes before the current field's width was satisfied.
    #[error("buffer truncated: field needs {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },
    /// Decode consumed the whole schema with bytes left over.
    #[error("{0} trailing bytes after the final field")]
    TrailingBytes(usize),
}

impl From<BufferError> for PackError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer { needed, remaining } => {
                PackError::Truncated { needed, remaining }
            }
        }
    }
}
