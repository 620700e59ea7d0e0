//! The context ring buffer: the last `K` bits the coder has seen, exposed to
//! the predictor only as an aggregate popcount so it stays O(1) per bit.

use bitvec::prelude::*;
use log::trace;

use crate::error::{CoderError, Result};

/// Implementation-declared bound on context length, in bits. Matches the
/// reference implementation's 256,000-byte bound; the ring is heap-allocated
/// here rather than a fixed stack array, so this is an external-contract
/// guard rather than a stack-allocation necessity.
pub const MAX_CONTEXT_BITS: u64 = 256_000 * 8;

/// Ring buffer of the last `K` observed bits plus a running popcount.
///
/// The predictor never sees the raw ring, only `(ones, length)` via
/// [`ContextRing::snapshot`]; `ones` is maintained incrementally and must
/// never be recomputed by rescanning the ring.
pub struct ContextRing {
    bits: BitVec<u64, Msb0>,
    head: u64,
    ones: u64,
}

/// The `(ctx_ones, ctx_length)` aggregate handed to a [`crate::predictor::Predictor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextSnapshot {
    pub ones: u64,
    pub length: u64,
}

impl ContextRing {
    pub fn new(length: u64) -> Result<Self> {
        if length > MAX_CONTEXT_BITS {
            return Err(CoderError::ContextTooLong {
                length,
                max: MAX_CONTEXT_BITS,
            });
        }
        Ok(Self {
            bits: BitVec::repeat(false, length as usize),
            head: 0,
            ones: 0,
        })
    }

    pub fn len(&self) -> u64 {
        self.bits.len() as u64
    }

    pub fn snapshot(&self) -> ContextSnapshot {
        ContextSnapshot {
            ones: self.ones,
            length: self.len(),
        }
    }

    /// Records a newly observed bit, evicting the oldest one in its place.
    pub fn push(&mut self, bit: u8) {
        let len = self.bits.len() as u64;
        if len == 0 {
            return;
        }
        let old = self.bits[self.head as usize] as u8;
        self.bits.set(self.head as usize, bit != 0);
        self.ones = (self.ones as i64 + (bit as i64 - old as i64)) as u64;
        self.head = (self.head + 1) % len;
        trace!("context ring updated: ones={} head={}", self.ones, self.head);
    }
}
