//! The decoder: mirrors the encoder's interval narrowing, deriving each
//! output bit from where the tracked `value` falls within the current cut.

use log::debug;

use crate::bitio::{write_bit_at, BitReader};
use crate::coder::{cut_point, RenormStep, HALF, PRECISION, QUARTER, TOTAL};
use crate::context::ContextRing;
use crate::error::Result;
use crate::predictor::Predictor;

/// Decodes `bit_length` bits from `encoded` (MSB-first packed), producing a
/// packed output buffer of `ceil(bit_length / 8)` bytes. Bits beyond
/// `bit_length` within the last output byte are zero.
///
/// Reads past the end of `encoded` yield `0` bits, per the coder's
/// "implicit zero padding" contract — a truncated or short encoded stream
/// never causes an error, only a garbage tail.
pub fn decode<P: Predictor>(
    encoded: &[u8],
    bit_length: u64,
    context_length: u64,
    predictor: &P,
) -> Result<Vec<u8>> {
    let mut ctx = ContextRing::new(context_length)?;
    let mut reader = BitReader::new(encoded);

    let mut low: u32 = 0;
    let mut high: u32 = (TOTAL - 1) as u32;
    let mut value: u32 = 0;
    for _ in 0..PRECISION {
        value = (value << 1) | reader.read_bit() as u32;
    }

    let out_len = bit_length.div_ceil(8) as usize;
    let mut out = vec![0u8; out_len];

    for i in 0..bit_length {
        let snapshot = ctx.snapshot();
        let p1 = predictor.probability_of_one(snapshot);
        let (cut, scaled_p0) = cut_point(low, high, p1);

        let range = (high - low) as u64 + 1;
        let scaled_value = (((value - low) as u64 + 1) * TOTAL - 1) / range;

        let bit = if scaled_value < scaled_p0 as u64 {
            high = cut - 1;
            0u8
        } else {
            low = cut;
            1u8
        };

        write_bit_at(&mut out, i, bit);
        ctx.push(bit);
        renormalize(&mut low, &mut high, &mut value, &mut reader);
    }

    debug!(
        "decoded {} bits (K={}) from {} bytes",
        bit_length,
        context_length,
        encoded.len()
    );
    Ok(out)
}

/// Drains every applicable renormalization rule, consuming encoded bits into
/// `value` as it goes. Shares [`RenormStep::classify`] with the encoder so
/// the two sides can never disagree on when to rescale.
fn renormalize(low: &mut u32, high: &mut u32, value: &mut u32, reader: &mut BitReader) {
    while let Some(step) = RenormStep::classify(*low, *high) {
        match step {
            RenormStep::Lower => {}
            RenormStep::Upper => {
                *value -= HALF;
                *low -= HALF;
                *high -= HALF;
            }
            RenormStep::Middle => {
                *value -= QUARTER;
                *low -= QUARTER;
                *high -= QUARTER;
            }
        }
        *low <<= 1;
        *high = (*high << 1) | 1;
        *value = (*value << 1) | reader.read_bit() as u32;
    }
}
