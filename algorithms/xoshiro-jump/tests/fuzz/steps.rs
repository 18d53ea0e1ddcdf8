use bolero::check;
use num_bigint::BigUint;
use xoshiro_jump::{parse_steps, JumpError};

#[test]
fn fuzz_parse_steps_total() {
    check!().with_type::<String>().for_each(|input| {
        // Must never panic; any accepted value stays within the bit budget.
        if let Ok(steps) = parse_steps(input) {
            assert!(steps.bits() <= xoshiro_jump::MAX_STEP_BITS);
        }
    });
}

#[test]
fn fuzz_parse_steps_decimal_and_hex() {
    check!().with_type::<u128>().for_each(|&n| {
        let expected = BigUint::from(n);
        assert_eq!(parse_steps(&n.to_string()).unwrap(), expected);
        assert_eq!(parse_steps(&format!("{n:#x}")).unwrap(), expected);

        if n != 0 {
            assert!(matches!(
                parse_steps(&format!("-{n}")),
                Err(JumpError::NegativeSteps(_))
            ));
        }
    });
}
