#![no_main]

use libfuzzer_sys::fuzz_target;
use xoshiro_jump::{advance, JumpConstant};

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }

    // First 32 bytes: start state
    let mut state = [0u64; 4];
    for (slot, chunk) in state.iter_mut().zip(data[..32].chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *slot = u64::from_le_bytes(bytes);
    }

    // Optional next byte: a single coefficient, i.e. a jump of that many steps
    let n = data.get(32).copied().unwrap_or(0) as usize;
    let mut words = [0u64; 4];
    words[n / 64] = 1 << (n % 64);

    let jumped = JumpConstant(words).apply(&state);
    let stepped = advance(&state, n as u64);

    assert_eq!(jumped, stepped, "single-coefficient jump differs from stepping");
});
