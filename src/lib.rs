//! # Binary Arithmetic Coder
//!
//! A binary arithmetic coder: an entropy codec that compresses an
//! arbitrary-length bit sequence into a shorter bit string using a
//! caller-supplied probability model. The encoder and decoder each process
//! one input bit at a time, maintaining a half-open numeric interval that is
//! successively narrowed in proportion to the probability of the observed
//! symbol.
//!
//! This crate is organized as:
//! - [`bitio`]: MSB-first packed bit readers and writers.
//! - [`context`]: the ring-buffer context tracker and its running popcount.
//! - [`predictor`]: the `Predictor` trait and the reference smoothed-count model.
//! - [`coder`]: shared constants and the renormalization state machine.
//! - [`encoder`] / [`decoder`]: the two halves of the codec proper.
//! - [`error`]: the crate's error type.
//! - [`ffi`]: a C-ABI binding surface for foreign callers.
//!
//! The coder is deliberately not adaptive, not self-framing, and carries no
//! checksum or header: the caller is responsible for transmitting the
//! decoded bit length out of band and for matching context length and
//! predictor on both sides. Mismatches silently produce garbage, not errors.

pub mod bitio;
pub mod coder;
pub mod context;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod ffi;
pub mod predictor;

pub use context::{ContextRing, ContextSnapshot, MAX_CONTEXT_BITS};
pub use decoder::decode;
pub use encoder::encode;
pub use error::{CoderError, Result};
pub use predictor::{Predictor, ReferencePredictor, SCALE};

/// Precision `P`, in bits, of the coder's range endpoints. Normative value.
pub use coder::PRECISION;

/// The reference binding's stricter contract (`K >= 1`) and its
/// buffer/bit-length cross-check, layered over the permissive core
/// `encode`/`decode` functions. The core itself accepts `K = 0` and never
/// cross-checks `bit_length` against the buffer length (padding with virtual
/// zeros instead); this wrapper is what the FFI layer and the CLI driver use
/// so they reject the mistakes most likely to indicate caller error.
pub fn encode_checked<P: Predictor>(
    sequence: &[u8],
    bit_length: u64,
    context_length: u64,
    predictor: &P,
) -> Result<Vec<u8>> {
    check_context_at_least_one(context_length)?;
    check_buffer_length(sequence.len() as u64, bit_length)?;
    encode(sequence, bit_length, context_length, predictor)
}

/// See [`encode_checked`]. Decoding has no input buffer length to cross
/// check against `bit_length` (the two are unrelated quantities), so this
/// only adds the `K >= 1` guard.
pub fn decode_checked<P: Predictor>(
    encoded: &[u8],
    bit_length: u64,
    context_length: u64,
    predictor: &P,
) -> Result<Vec<u8>> {
    check_context_at_least_one(context_length)?;
    decode(encoded, bit_length, context_length, predictor)
}

fn check_context_at_least_one(context_length: u64) -> Result<()> {
    if context_length == 0 {
        return Err(CoderError::ContextTooShort);
    }
    Ok(())
}

fn check_buffer_length(buffer_bytes: u64, bit_length: u64) -> Result<()> {
    let required_bytes = bit_length.div_ceil(8);
    if required_bytes > buffer_bytes {
        return Err(CoderError::BufferTooShort {
            bit_length,
            required_bytes,
            actual_bytes: buffer_bytes,
        });
    }
    Ok(())
}
