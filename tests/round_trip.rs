//! Literal end-to-end vectors and randomized round-trip coverage for the
//! arithmetic coder, exercising the boundary behaviors and scenarios called
//! out in the coder's specification.

use bit_arith_coder::{decode, encode, ReferencePredictor};
use nanorand::{Rng, WyRand};

fn bit_at(buf: &[u8], i: u64) -> u8 {
    (buf[(i / 8) as usize] >> (7 - (i % 8))) & 1
}

fn first_n_bits_equal(a: &[u8], b: &[u8], n: u64) -> bool {
    (0..n).all(|i| bit_at(a, i) == bit_at(b, i))
}

/// Packs a `Vec<u8>` of `0`/`1` values (one per bit, MSB-first) into bytes.
fn pack_bits(bits: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; bits.len().div_ceil(8)];
    for (i, &b) in bits.iter().enumerate() {
        if b != 0 {
            out[i / 8] |= 1 << (7 - (i % 8));
        }
    }
    out
}

fn random_bits(rng: &mut WyRand, n: usize, p_one_percent: u32) -> Vec<u8> {
    (0..n)
        .map(|_| (rng.generate_range(0u32..100) < p_one_percent) as u8)
        .collect()
}

// --- Literal end-to-end scenarios ---------------------------------------

#[test]
fn scenario_1_the_reference_driver_vector_round_trips() {
    let encoded = encode(&[0xCA], 8, 4, &ReferencePredictor).unwrap();
    let decoded = decode(&encoded, 8, 4, &ReferencePredictor).unwrap();
    assert_eq!(decoded, vec![0xCA]);
}

#[test]
fn scenario_2_all_zero_byte_round_trips_and_changes_representation() {
    let encoded = encode(&[0x00], 8, 4, &ReferencePredictor).unwrap();
    let decoded = decode(&encoded, 8, 4, &ReferencePredictor).unwrap();
    assert_eq!(decoded, vec![0x00]);
    assert_ne!(encoded, vec![0x00]);
}

#[test]
fn scenario_3_heavily_biased_input_compresses_below_its_bit_length() {
    let input = vec![0xFFu8; 128];
    let bit_length = 1024u64;
    let encoded = encode(&input, bit_length, 8, &ReferencePredictor).unwrap();
    let decoded = decode(&encoded, bit_length, 8, &ReferencePredictor).unwrap();
    assert_eq!(decoded, input);
    assert!((encoded.len() as u64) * 8 < bit_length);
}

#[test]
fn scenario_4_roughly_balanced_random_bits_round_trip_near_the_entropy_bound() {
    let mut rng = WyRand::new_seed(42);
    let n = 10_000usize;
    let bits = random_bits(&mut rng, n, 50);
    let input = pack_bits(&bits);

    let encoded = encode(&input, n as u64, 16, &ReferencePredictor).unwrap();
    let decoded = decode(&encoded, n as u64, 16, &ReferencePredictor).unwrap();
    assert!(first_n_bits_equal(&decoded, &input, n as u64));

    let out_bits = encoded.len() as u64 * 8;
    // Near-uniform bits shouldn't compress much; allow generous headroom.
    assert!(out_bits < n as u64 * 2);
}

#[test]
fn scenario_5_low_probability_random_bits_compress_well_below_their_bit_length() {
    let mut rng = WyRand::new_seed(7);
    let n = 10_000usize;
    let bits = random_bits(&mut rng, n, 10);
    let input = pack_bits(&bits);

    let encoded = encode(&input, n as u64, 16, &ReferencePredictor).unwrap();
    let decoded = decode(&encoded, n as u64, 16, &ReferencePredictor).unwrap();
    assert!(first_n_bits_equal(&decoded, &input, n as u64));

    let out_bits = encoded.len() as u64 * 8;
    assert!(out_bits < n as u64 / 2);
}

#[test]
fn scenario_6_zero_length_input_round_trips_to_empty_output() {
    let encoded = encode(&[], 0, 4, &ReferencePredictor).unwrap();
    assert!(!encoded.is_empty()); // the final-flush byte is still emitted
    let decoded = decode(&encoded, 0, 4, &ReferencePredictor).unwrap();
    assert!(decoded.is_empty());
}

// --- Boundary behaviors ---------------------------------------------------

#[test]
fn zero_context_length_still_round_trips() {
    let mut rng = WyRand::new_seed(11);
    let bits = random_bits(&mut rng, 500, 35);
    let input = pack_bits(&bits);

    let encoded = encode(&input, bits.len() as u64, 0, &ReferencePredictor).unwrap();
    let decoded = decode(&encoded, bits.len() as u64, 0, &ReferencePredictor).unwrap();
    assert!(first_n_bits_equal(&decoded, &input, bits.len() as u64));
}

#[test]
fn single_bit_inputs_round_trip_through_the_full_flush_path() {
    for &bit in &[0u8, 1u8] {
        let input = pack_bits(&[bit]);
        let encoded = encode(&input, 1, 4, &ReferencePredictor).unwrap();
        let decoded = decode(&encoded, 1, 4, &ReferencePredictor).unwrap();
        assert_eq!(bit_at(&decoded, 0), bit);
    }
}

#[test]
fn decoded_padding_bits_beyond_n_do_not_affect_the_first_n_bits() {
    let mut rng = WyRand::new_seed(99);
    let bits = random_bits(&mut rng, 13, 50); // not a multiple of 8
    let input = pack_bits(&bits);

    let encoded = encode(&input, bits.len() as u64, 6, &ReferencePredictor).unwrap();
    let decoded = decode(&encoded, bits.len() as u64, 6, &ReferencePredictor).unwrap();
    assert!(first_n_bits_equal(&decoded, &input, bits.len() as u64));
}

#[test]
fn large_context_window_round_trips_without_overrun() {
    let mut rng = WyRand::new_seed(4096);
    let n = 20_000usize;
    let k = 4096u64;
    let bits = random_bits(&mut rng, n, 40);
    let input = pack_bits(&bits);

    let encoded = encode(&input, n as u64, k, &ReferencePredictor).unwrap();
    let decoded = decode(&encoded, n as u64, k, &ReferencePredictor).unwrap();
    assert!(first_n_bits_equal(&decoded, &input, n as u64));
}

// --- Randomized property coverage across many shapes ----------------------

#[test]
fn round_trip_holds_across_many_random_lengths_and_context_sizes() {
    let mut rng = WyRand::new_seed(1234);
    for _ in 0..200 {
        let n = rng.generate_range(0u32..2000) as usize;
        let k = rng.generate_range(0u32..64) as u64;
        let p_one = rng.generate_range(1u32..99);

        let bits = random_bits(&mut rng, n, p_one);
        let input = pack_bits(&bits);

        let encoded = encode(&input, n as u64, k, &ReferencePredictor).unwrap();
        let decoded = decode(&encoded, n as u64, k, &ReferencePredictor).unwrap();
        assert!(
            first_n_bits_equal(&decoded, &input, n as u64),
            "round trip failed for n={n} k={k} p_one={p_one}"
        );
    }
}
