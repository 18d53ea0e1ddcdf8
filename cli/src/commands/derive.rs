//! Derive Command
//!
//! Jump constants for a list of step counts, derived in parallel via Rayon.

use anyhow::{Context, Result};
use clap::ValueEnum;
use rayon::prelude::*;
use xoshiro_jump::{parse_steps, JumpConstant, JumpConstantGenerator};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Format {
    /// `2^128 = { 0x..., 0x..., 0x..., 0x... }`
    Plain,
    /// Rust `const` array
    Rust,
    /// C `static const uint64_t` array
    C,
}

/// Derive and print one constant per step count, in input order.
///
/// Every step count is parsed before any matrix work, and the published
/// reference jumps must reproduce before anything is printed.
pub fn derive_constants(inputs: &[String], format: Format) -> Result<()> {
    let steps = inputs
        .iter()
        .map(|input| parse_steps(input).with_context(|| format!("Rejected step count: {input}")))
        .collect::<Result<Vec<_>>>()?;

    let generator = JumpConstantGenerator::shared().context("Failed to build generator")?;
    generator
        .verify_reference()
        .context("Refusing to emit constants: reference check failed")?;

    let constants: Vec<JumpConstant> = steps.par_iter().map(|n| generator.derive(n)).collect();

    for (input, constant) in inputs.iter().zip(constants) {
        println!("{}", render(input.trim(), constant, format));
    }

    Ok(())
}

fn render(label: &str, constant: JumpConstant, format: Format) -> String {
    let [w0, w1, w2, w3] = constant.words();
    match format {
        Format::Plain => format!("{label} = {constant}"),
        Format::Rust => format!(
            "pub const {}: [u64; 4] = [{w0:#018x}, {w1:#018x}, {w2:#018x}, {w3:#018x}];",
            constant_name(label)
        ),
        Format::C => format!(
            "static const uint64_t {}[4] = {{{w0:#018x}, {w1:#018x}, {w2:#018x}, {w3:#018x}}};",
            constant_name(label)
        ),
    }
}

/// `2^128` -> `JUMP_2P128`, `0x10` -> `JUMP_0X10`.
fn constant_name(label: &str) -> String {
    let name: String = label
        .replace("**", "^")
        .chars()
        .filter(|&c| c != '_')
        .map(|c| match c {
            '^' => 'P',
            c if c.is_ascii_alphanumeric() => c.to_ascii_uppercase(),
            _ => '_',
        })
        .collect();
    format!("JUMP_{name}")
}
