use thiserror::Error;

/// Failure modes of the arithmetic coder's external entry points.
///
/// The coder itself has no recoverable failures once it starts running; every
/// variant here is detected and returned *before* any `Coder` state is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoderError {
    #[error("context length {length} exceeds the maximum of {max} bits")]
    ContextTooLong { length: u64, max: u64 },

    #[error("context length must be at least 1 bit")]
    ContextTooShort,

    #[error("bit length {bit_length} requires at least {required_bytes} input bytes, got {actual_bytes}")]
    BufferTooShort {
        bit_length: u64,
        required_bytes: u64,
        actual_bytes: u64,
    },

    #[error("output buffer allocation failed")]
    AllocationFailure,
}

pub type Result<T> = std::result::Result<T, CoderError>;
