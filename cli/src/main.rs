//! xoshiro-jump CLI
//!
//! Derives, verifies and applies xoshiro256 jump constants.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{apply_jump, derive_constants, verify_mode, Format};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "xoshiro-jump")]
#[command(about = "Derive xoshiro256 jump-polynomial constants", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Step counts to derive (if no subcommand): 1048576, 0x100000, 2^128, 2**192
    #[arg(value_name = "STEPS")]
    steps: Vec<String>,

    /// Output syntax for derived constants
    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Log filter, overrides RUST_LOG (e.g. "debug", "xoshiro_jump=trace")
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-derive the published 2^128 and 2^192 jumps and compare them
    Verify,
    /// Apply a jump to a state and print the resulting state
    Apply {
        /// Start state as four words (decimal or 0x hex)
        #[arg(long, num_args = 4, value_name = "WORD", required = true)]
        state: Vec<String>,

        /// Jump constant as four words (decimal or 0x hex)
        #[arg(long, num_args = 4, value_name = "WORD", conflicts_with = "steps")]
        constant: Option<Vec<String>>,

        /// Step count to derive the jump from
        #[arg(long, value_name = "STEPS", required_unless_present = "constant")]
        steps: Option<String>,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    xoshiro_jump::logging::init(cli.log_level.as_deref(), "warn")
        .context("Failed to set up logging")?;

    match &cli.command {
        Some(Commands::Verify) => verify_mode()?,
        Some(Commands::Apply {
            state,
            constant,
            steps,
        }) => apply_jump(state, constant.as_deref(), steps.as_deref())?,
        None => {
            if cli.steps.is_empty() {
                eprintln!("Error: No step counts specified");
                eprintln!("Usage: xoshiro-jump [STEPS]... or xoshiro-jump --help");
                std::process::exit(1);
            }

            derive_constants(&cli.steps, cli.format)?;
        }
    }

    Ok(())
}
