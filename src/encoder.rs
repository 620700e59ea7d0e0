//! The encoder: narrows `[low, high]` one input bit at a time, emitting bits
//! as the interval's top bits settle, and performs the final flush.

use log::debug;

use crate::bitio::{BitReader, BitWriter};
use crate::coder::{cut_point, RenormStep, HALF, QUARTER, TOTAL};
use crate::context::ContextRing;
use crate::error::Result;
use crate::predictor::Predictor;

/// Encodes `bit_length` bits of `sequence` (MSB-first packed) into a new
/// packed byte buffer, conditioning each bit on the last `context_length`
/// bits via `predictor`.
///
/// `sequence` need not hold a full `bit_length` bits' worth of bytes: like
/// the decoder, bits past the end of the buffer read as `0` rather than
/// panicking or erroring. Callers that must reject a too-short buffer (e.g.
/// the FFI layer) check that before calling in.
pub fn encode<P: Predictor>(
    sequence: &[u8],
    bit_length: u64,
    context_length: u64,
    predictor: &P,
) -> Result<Vec<u8>> {
    let mut ctx = ContextRing::new(context_length)?;
    let mut reader = BitReader::new(sequence);
    let mut writer = BitWriter::new();

    let mut low: u32 = 0;
    let mut high: u32 = (TOTAL - 1) as u32;
    let mut pending: u64 = 0;

    for _ in 0..bit_length {
        let bit = reader.read_bit();

        let snapshot = ctx.snapshot();
        let p1 = predictor.probability_of_one(snapshot);
        let (cut, _scaled_p0) = cut_point(low, high, p1);

        if bit == 0 {
            high = cut - 1;
        } else {
            low = cut;
        }

        renormalize(&mut low, &mut high, &mut pending, &mut writer);
        ctx.push(bit);
    }

    pending += 1;
    if low < QUARTER {
        writer.push_bit(0);
        writer.push_repeated(1, pending);
    } else {
        writer.push_bit(1);
        writer.push_repeated(0, pending);
    }

    let out = writer.finish();
    debug!(
        "encoded {} bits (K={}) into {} bytes",
        bit_length,
        context_length,
        out.len()
    );
    Ok(out)
}

/// Drains every applicable renormalization rule, emitting bits as it goes.
fn renormalize(low: &mut u32, high: &mut u32, pending: &mut u64, writer: &mut BitWriter) {
    while let Some(step) = RenormStep::classify(*low, *high) {
        match step {
            RenormStep::Lower => {
                writer.push_bit(0);
                writer.push_repeated(1, *pending);
                *pending = 0;
            }
            RenormStep::Upper => {
                writer.push_bit(1);
                writer.push_repeated(0, *pending);
                *pending = 0;
                *low -= HALF;
                *high -= HALF;
            }
            RenormStep::Middle => {
                *pending += 1;
                *low -= QUARTER;
                *high -= QUARTER;
            }
        }
        *low <<= 1;
        *high = (*high << 1) | 1;
    }
}
