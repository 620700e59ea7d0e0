// src/bin/arith_cli.rs
//! Small CLI driver that reproduces the reference end-to-end scenario and
//! reports the resulting compression ratio. Mirrors the original C `main()`'s
//! `0xCA` vector by default; pass `--input <path>` to run against a file
//! instead.

use std::fs;
use std::path::Path;

use bit_arith_coder::{decode_checked, encode_checked, ReferencePredictor};

fn print_bits(buffer: &[u8], bit_length: u64) {
    for i in 0..bit_length {
        let byte = buffer[(i / 8) as usize];
        let bit = (byte >> (7 - (i % 8))) & 1;
        print!("{bit}");
        if (i + 1) % 8 == 0 {
            print!(" ");
        }
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let find_arg_value = |flag: &str| -> Option<&str> {
        args.iter()
            .position(|arg| arg == flag)
            .and_then(|i| args.get(i + 1))
            .map(|s| s.as_str())
    };

    let context_length: u64 = find_arg_value("--context")
        .and_then(|s| s.parse().ok())
        .unwrap_or(4);

    let (input, bit_length) = match find_arg_value("--input") {
        Some(path) if Path::new(path).exists() => {
            let bytes = fs::read(path)?;
            let bit_length = bytes.len() as u64 * 8;
            (bytes, bit_length)
        }
        Some(path) => {
            println!("Input file not found at '{path}', falling back to the reference 0xCA vector.");
            (vec![0xCAu8], 8)
        }
        None => (vec![0xCAu8], 8),
    };

    println!(
        "Input ({} bytes, {} bits, context length {}):",
        input.len(),
        bit_length,
        context_length
    );
    print_bits(&input, bit_length);

    let predictor = ReferencePredictor;
    let encoded = encode_checked(&input, bit_length, context_length, &predictor)?;

    println!("Encoded ({} bytes):", encoded.len());
    for byte in &encoded {
        print!("{byte:02X} ");
    }
    println!();

    let decoded = decode_checked(&encoded, bit_length, context_length, &predictor)?;
    println!("Decoded:");
    print_bits(&decoded, bit_length);

    if decoded[..] == input[..(bit_length.div_ceil(8) as usize)] {
        println!("Decoding successful. The decoded bits match the original input.");
    } else {
        println!("Decoding failed. The decoded bits do not match the original input.");
    }

    let in_bits = bit_length.max(1);
    let out_bits = encoded.len() as u64 * 8;
    println!(
        "Compression: {in_bits} bits -> {out_bits} bits ({:.1}%)",
        100.0 * out_bits as f64 / in_bits as f64
    );

    Ok(())
}
