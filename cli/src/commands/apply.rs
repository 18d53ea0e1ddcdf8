//! Apply Command
//!
//! Advance a state by a jump given either as a constant or as a step count.

use anyhow::{bail, Context, Result};
use tracing::debug;
use xoshiro_jump::{parse_steps, JumpConstant, JumpConstantGenerator, State};

/// Apply the jump and print the resulting state, one word per line.
pub fn apply_jump(state: &[String], constant: Option<&[String]>, steps: Option<&str>) -> Result<()> {
    let state = parse_words(state).context("Invalid --state")?;

    let jump = match (constant, steps) {
        (Some(words), _) => JumpConstant(parse_words(words).context("Invalid --constant")?),
        (None, Some(steps)) => {
            let steps = parse_steps(steps).with_context(|| format!("Rejected step count: {steps}"))?;
            let generator =
                JumpConstantGenerator::shared().context("Failed to build generator")?;
            generator
                .verify_reference()
                .context("Refusing to derive: reference check failed")?;
            generator.derive(&steps)
        }
        (None, None) => bail!("Either --constant or --steps is required"),
    };
    debug!(%jump, "applying jump");

    for word in jump.apply(&state) {
        println!("{word:#018x}");
    }
    Ok(())
}

/// Four words, each decimal or `0x` hex.
pub fn parse_words(words: &[String]) -> Result<State> {
    if words.len() != 4 {
        bail!("Expected 4 words, got {}", words.len());
    }

    let mut out = [0u64; 4];
    for (slot, word) in out.iter_mut().zip(words) {
        let word = word.trim().replace('_', "");
        let parsed = match word.strip_prefix("0x").or_else(|| word.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => word.parse(),
        };
        *slot = parsed.with_context(|| format!("Not a 64-bit word: {word}"))?;
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_words() {
        let words = strings(&["1", "0x10", "0XFF", "18446744073709551615"]);
        assert_eq!(parse_words(&words).unwrap(), [1, 16, 255, u64::MAX]);
    }

    #[test]
    fn test_parse_words_rejects_bad_input() {
        assert!(parse_words(&strings(&["1", "2", "3"])).is_err());
        assert!(parse_words(&strings(&["1", "2", "3", "0x1_0000_0000_0000_0000"])).is_err());
        assert!(parse_words(&strings(&["1", "2", "3", "-4"])).is_err());
    }
}
