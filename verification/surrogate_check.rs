//! # Surrogate Jump Check
//!
//! Brute-force cross-check of derived jump constants.
//!
//! Jumps of `2^128` steps can only be checked against published constants,
//! but the same code path derives `2^k` for small `k`, where stepping the
//! linear core one step at a time is tractable. For every `k` up to the
//! requested maximum this binary compares:
//!
//! 1. the derived `2^k` jump applied to the start state, and
//! 2. the start state advanced `2^k` times,
//!
//! and additionally that two `2^(k-1)` jumps land on the same state.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use xoshiro_jump::{advance, JumpConstant, JumpConstantGenerator, State};

#[derive(Parser)]
#[command(name = "surrogate_check")]
#[command(about = "Compare derived 2^k jumps with brute-force stepping", long_about = None)]
struct Args {
    /// Largest exponent k to check (2^k steps are brute forced)
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(0..=40))]
    max_exponent: u32,

    /// Start state as four hex words (default: all ones)
    #[arg(long, num_args = 4, value_name = "HEX")]
    state: Option<Vec<String>>,

    /// Log filter, overrides RUST_LOG
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

/// Entry point for the surrogate check.
fn main() -> Result<()> {
    let args = Args::parse();
    xoshiro_jump::logging::init(args.log_level.as_deref(), "info")
        .context("Failed to set up logging")?;

    let start: State = match &args.state {
        Some(words) => parse_state(words)?,
        None => [u64::MAX; 4],
    };

    let generator = JumpConstantGenerator::shared().context("Failed to build generator")?;
    generator
        .verify_reference()
        .context("Reference check failed; surrogate results would be meaningless")?;

    let mut failed = 0;
    let mut stepped = start;
    let mut steps_done: u64 = 0;
    let mut previous: Option<JumpConstant> = None;

    for k in 0..=args.max_exponent {
        let target = 1u64 << k;
        stepped = advance(&stepped, target - steps_done);
        steps_done = target;

        let jump = generator.derive_pow2(k);
        let jumped = jump.apply(&start);
        let composed = previous.map(|p| p.apply(&p.apply(&start)));

        let ok = jumped == stepped && composed.is_none_or(|c| c == stepped);
        if ok {
            println!("2^{k:<2}: OK      {jump}");
        } else {
            println!("2^{k:<2}: FAILED  {jump}");
            failed += 1;
        }
        previous = Some(jump);
    }

    info!(checked = args.max_exponent + 1, failed, "surrogate check finished");
    if failed > 0 {
        eprintln!("WARNING: {failed} exponent(s) did NOT match brute force");
        std::process::exit(1);
    }
    Ok(())
}

fn parse_state(words: &[String]) -> Result<State> {
    let mut state = [0u64; 4];
    if words.len() != state.len() {
        bail!("Expected 4 words, got {}", words.len());
    }
    for (slot, word) in state.iter_mut().zip(words) {
        *slot = parse_hex_word(word)?;
    }
    Ok(state)
}

/// One hex word, with at most one `0x` prefix.
fn parse_hex_word(word: &str) -> Result<u64> {
    let digits = word
        .strip_prefix("0x")
        .or_else(|| word.strip_prefix("0X"))
        .unwrap_or(word);
    if digits.starts_with('+') {
        bail!("Not a hex word: {word}");
    }
    u64::from_str_radix(digits, 16).with_context(|| format!("Not a hex word: {word}"))
}
