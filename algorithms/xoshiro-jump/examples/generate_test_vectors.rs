//! Generator for xoshiro-jump test vectors
//!
//! Generates the canonical JSON vectors used by `tests/jump_vectors.json`.
//! Refuses to emit anything unless the published reference jumps reproduce.
#![allow(clippy::unwrap_used)]
use serde_json::json;
use xoshiro_jump::{jump_constant_str, verify_reference, JumpConstant};

fn words(jump: JumpConstant) -> Vec<String> {
    jump.words()
        .iter()
        .map(|w| hex::encode(w.to_be_bytes()))
        .collect()
}

fn main() {
    verify_reference().unwrap();

    // (name, steps)
    let cases = [
        // =====================================================================
        // 1. BASIS VECTORS (N < 256 maps to e_N)
        // =====================================================================
        ("identity", "0"),
        ("single_step", "1"),
        ("word_boundary", "64"),
        ("last_basis_vector", "255"),
        // =====================================================================
        // 2. PUBLISHED JUMPS
        // =====================================================================
        ("jump", "2^128"),
        ("long_jump", "2**192"),
    ];

    let vectors: Vec<_> = cases
        .iter()
        .map(|(name, steps)| {
            json!({
                "name": name,
                "steps": steps,
                "words": words(jump_constant_str(steps).unwrap()),
            })
        })
        .collect();

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
