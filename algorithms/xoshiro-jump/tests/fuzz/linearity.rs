use bolero::check;
use xoshiro_jump::{encode, step, transition_matrix, JUMP};

#[test]
fn fuzz_transition_linearity() {
    let t = transition_matrix();

    check!()
        .with_type::<([u64; 4], [u64; 4])>()
        .for_each(|(a, b)| {
            let va = encode(a);
            let vb = encode(b);

            // =============================================================================
            // MATRIX IS LINEAR
            // =============================================================================

            assert_eq!(
                t.mul_vec(&(va ^ vb)),
                t.mul_vec(&va) ^ t.mul_vec(&vb),
                "T(a ^ b) != T(a) ^ T(b)"
            );

            // =============================================================================
            // MATRIX IS THE STEP
            // =============================================================================

            assert_eq!(t.mul_vec(&va), encode(&step(a)), "T disagrees with step");
        });
}

#[test]
fn fuzz_jump_linearity() {
    check!()
        .with_type::<([u64; 4], [u64; 4])>()
        .for_each(|(a, b)| {
            // A jump is a polynomial in T, so it is linear as well.
            let mut xor = [0u64; 4];
            for (i, slot) in xor.iter_mut().enumerate() {
                *slot = a[i] ^ b[i];
            }

            let ja = JUMP.apply(a);
            let jb = JUMP.apply(b);
            let mut expected = [0u64; 4];
            for (i, slot) in expected.iter_mut().enumerate() {
                *slot = ja[i] ^ jb[i];
            }

            assert_eq!(JUMP.apply(&xor), expected, "jump(a ^ b) != jump(a) ^ jump(b)");
        });
}
