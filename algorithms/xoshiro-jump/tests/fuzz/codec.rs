use bolero::check;
use xoshiro_jump::{decode, encode, BitVector};

#[test]
fn fuzz_codec_roundtrip() {
    check!().with_type::<[u64; 4]>().for_each(|state| {
        // =============================================================================
        // STATE -> VECTOR -> STATE
        // =============================================================================

        let v = encode(state);
        assert_eq!(decode(&v), *state, "decode(encode(s)) != s");

        // =============================================================================
        // PACKED <-> UNPACKED
        // =============================================================================

        let bits = v.to_bits();
        assert_eq!(BitVector::from_bits(&bits), v, "unpacked view lost bits");
        for (i, &bit) in bits.iter().enumerate() {
            assert_eq!(bit, (state[i / 64] >> (i % 64)) & 1 == 1, "bit {i} misplaced");
        }

        // =============================================================================
        // VECTOR -> WORDS -> VECTOR
        // =============================================================================

        assert_eq!(encode(&decode(&v)), v, "encode(decode(v)) != v");
    });
}
