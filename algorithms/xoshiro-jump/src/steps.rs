//! Step Counts
//!
//! Parses the textual step counts accepted by the tooling. Jump lengths are
//! usually powers of two far beyond `u64`, so values are arbitrary precision.
//!
//! Accepted forms (surrounding whitespace and `_` separators ignored):
//!
//! ```text
//! 1048576        decimal
//! 0x100000       hexadecimal
//! 0b1000         binary
//! 2^128, 2**128  power (decimal base and exponent)
//! ```

use num_bigint::BigUint;
use num_traits::{Num, One, Zero};

use crate::types::JumpError;

/// Largest accepted step count, in bits. Derivation cost grows linearly with
/// the bit length, so anything larger is almost certainly a typo.
pub const MAX_STEP_BITS: u64 = 1 << 16;

/// Parse a non-negative step count.
///
/// A leading `-` is rejected unless the magnitude is zero, so `-0` parses as
/// zero. A leading `+` is never accepted.
///
/// # Errors
/// - [`JumpError::NegativeSteps`] for a negative value.
/// - [`JumpError::InvalidSteps`] for anything else that is not a step count,
///   including values wider than [`MAX_STEP_BITS`].
///
/// # Example
/// ```rust
/// use num_bigint::BigUint;
///
/// let steps = xoshiro_jump::parse_steps("2^20")?;
/// assert_eq!(steps, BigUint::from(1_048_576u32));
/// # Ok::<(), xoshiro_jump::JumpError>(())
/// ```
pub fn parse_steps(input: &str) -> Result<BigUint, JumpError> {
    let trimmed = input.trim();
    let cleaned: String = trimmed.chars().filter(|&c| c != '_').collect();

    let (negative, magnitude) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let value = parse_magnitude(magnitude)
        .ok_or_else(|| JumpError::InvalidSteps(input.to_string()))?;
    if negative && !value.is_zero() {
        return Err(JumpError::NegativeSteps(trimmed.to_string()));
    }
    Ok(value)
}

/// Unsigned value of `s`, or `None` if malformed or wider than
/// [`MAX_STEP_BITS`].
fn parse_magnitude(s: &str) -> Option<BigUint> {
    let value = if let Some((base, exponent)) = split_power(s) {
        let base = parse_plain(base)?;
        let exponent = parse_exponent(exponent)?;
        // base^exponent has at least (bits(base) - 1) * exponent + 1 bits.
        let lower_bound = base
            .bits()
            .saturating_sub(1)
            .saturating_mul(u64::from(exponent))
            .saturating_add(1);
        if lower_bound > MAX_STEP_BITS {
            return None;
        }
        if base == BigUint::from(2u32) {
            BigUint::one() << exponent
        } else {
            base.pow(exponent)
        }
    } else {
        parse_plain(s)?
    };

    (value.bits() <= MAX_STEP_BITS).then_some(value)
}

/// Decimal exponent, digits only.
fn parse_exponent(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Split `a^b` / `a**b` into its two halves.
fn split_power(s: &str) -> Option<(&str, &str)> {
    s.split_once("**").or_else(|| s.split_once('^'))
}

/// Decimal, `0x` hex or `0b` binary without sign.
fn parse_plain(s: &str) -> Option<BigUint> {
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        (bin, 2)
    } else {
        (s, 10)
    };

    if digits.is_empty() || digits.starts_with('+') {
        return None;
    }
    BigUint::from_str_radix(digits, radix).ok()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_forms() {
        assert_eq!(parse_steps("0").unwrap(), BigUint::zero());
        assert_eq!(parse_steps("1_048_576").unwrap(), BigUint::from(1u32 << 20));
        assert_eq!(parse_steps(" 0x100000 ").unwrap(), BigUint::from(1u32 << 20));
        assert_eq!(parse_steps("0b1000").unwrap(), BigUint::from(8u32));
    }

    #[test]
    fn test_power_forms() {
        let expected = BigUint::one() << 128u32;
        assert_eq!(parse_steps("2^128").unwrap(), expected);
        assert_eq!(parse_steps("2**128").unwrap(), expected);
        assert_eq!(parse_steps("10^3").unwrap(), BigUint::from(1000u32));
        assert_eq!(parse_steps("2^0").unwrap(), BigUint::one());
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(
            parse_steps("-5"),
            Err(JumpError::NegativeSteps("-5".to_string()))
        );
        assert!(matches!(
            parse_steps("-2^128"),
            Err(JumpError::NegativeSteps(_))
        ));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(parse_steps("-0").unwrap(), BigUint::zero());
        assert_eq!(parse_steps(" -0x0 ").unwrap(), BigUint::zero());
        assert_eq!(parse_steps("-0^5").unwrap(), BigUint::zero());
    }

    #[test]
    fn test_power_width_limit() {
        let widest = parse_steps("2^65535").unwrap();
        assert_eq!(widest.bits(), MAX_STEP_BITS);
        assert_eq!(parse_steps("2**40000").unwrap().bits(), 40_001);
        assert!(matches!(
            parse_steps("2^65536"),
            Err(JumpError::InvalidSteps(_))
        ));
    }

    #[test]
    fn test_power_and_hex_agree() {
        let hex = format!("0x1{}", "0".repeat(10_000));
        assert_eq!(parse_steps(&hex).unwrap(), parse_steps("2^40000").unwrap());
    }

    #[test]
    fn test_garbage_rejected() {
        for input in ["", "  ", "abc", "0x", "2^", "^5", "2^-1", "1.5", "+3", "2^+5", "+2^5", "2^ 5", "-", "-abc", "2^99999999", "3^65535"] {
            assert!(
                matches!(parse_steps(input), Err(JumpError::InvalidSteps(_))),
                "accepted {input:?}"
            );
        }
    }
}
