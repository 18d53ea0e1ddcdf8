//! Known-Answer Vectors for xoshiro-jump
//!
//! Verifies derived constants against the canonical JSON vectors, which
//! include the published `2^128` and `2^192` jumps.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Deserialize)]
struct Vector {
    name: String,
    steps: String,
    words: [String; 4],
}

#[derive(Deserialize)]
struct JumpVectors {
    vectors: Vec<Vector>,
}

fn parse_words(words: &[String; 4]) -> [u64; 4] {
    let mut out = [0u64; 4];
    for (slot, word) in out.iter_mut().zip(words) {
        let bytes = hex::decode(word).expect("Invalid hex word");
        *slot = u64::from_be_bytes(bytes.try_into().expect("Word must be 8 bytes"));
    }
    out
}

#[test]
fn test_official_vectors() {
    let file = File::open("tests/jump_vectors.json").expect("Failed to open jump_vectors.json");
    let reader = BufReader::new(file);
    let data: JumpVectors = serde_json::from_reader(reader).expect("Failed to parse JSON");

    println!("\n=== Verifying Jump Vectors ===");

    for vector in data.vectors {
        let expected = xoshiro_jump::JumpConstant(parse_words(&vector.words));
        let derived = xoshiro_jump::jump_constant_str(&vector.steps).unwrap();

        assert_eq!(derived, expected, "Vector Mismatched: {}", vector.name);
        println!("✅ {:<18} | {}", vector.name, derived);
    }
    println!("==============================\n");
}

#[test]
fn test_reference_check_passes() {
    xoshiro_jump::verify_reference().unwrap();
}
