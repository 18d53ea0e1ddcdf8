#![no_main]

use libfuzzer_sys::fuzz_target;
use xoshiro_jump::{parse_steps, JumpError, MAX_STEP_BITS};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    match parse_steps(text) {
        Ok(steps) => assert!(steps.bits() <= MAX_STEP_BITS, "oversized step count accepted"),
        // A leading '-' is the only way to get a negative-step error
        Err(JumpError::NegativeSteps(_)) => {
            assert!(text.trim().replace('_', "").starts_with('-'));
        }
        Err(_) => {}
    }
});
