//! Verify Command
//!
//! Re-derive the published jumps and report each one (like `sha256sum -c`).

use anyhow::{Context, Result};
use xoshiro_jump::{JumpConstantGenerator, REFERENCE_JUMPS};

// =============================================================================
// VERIFY
// =============================================================================

/// Check every reference jump; exits with status 1 on any mismatch.
pub fn verify_mode() -> Result<()> {
    let generator = JumpConstantGenerator::shared().context("Failed to build generator")?;

    let mut failed = 0;
    for (exponent, expected) in REFERENCE_JUMPS {
        let actual = generator.derive_pow2(exponent);
        if actual == expected {
            println!("2^{exponent}: OK");
        } else {
            println!("2^{exponent}: FAILED");
            println!("  expected {expected}");
            println!("  derived  {actual}");
            failed += 1;
        }
    }

    println!();
    if failed == 0 {
        println!("All {} reference jumps verified", REFERENCE_JUMPS.len());
    } else {
        eprintln!(
            "WARNING: {} of {} reference jumps did NOT match",
            failed,
            REFERENCE_JUMPS.len()
        );
        std::process::exit(1);
    }

    Ok(())
}
