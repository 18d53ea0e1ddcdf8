//! xoshiro-jump Basic Example
//!
//! Minimal usage: `let jump = xoshiro_jump::jump_constant_pow2(160)?;`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() -> Result<(), xoshiro_jump::JumpError> {
    // Never trust a derived constant before the published ones reproduce.
    xoshiro_jump::verify_reference()?;

    let jump = xoshiro_jump::jump_constant_pow2(160)?;
    let state = [u64::MAX; 4];

    println!("2^160 jump: {jump}");
    println!("State:      {state:#018x?}");
    println!("Jumped:     {:#018x?}", jump.apply(&state));
    Ok(())
}
