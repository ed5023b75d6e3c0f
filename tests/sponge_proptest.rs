//! Sponge transcript consistency, property-tested.
//!
//! Generalizes the teacher's `src/fuzzing.rs` (which checked
//! `XoodyakHash` absorb/squeeze transcripts) to this crate's Keccak-based
//! sponge: replaying the same sequence of absorb/squeeze calls on two
//! independent sponge instances always produces identical output, and two
//! different sequences produce different output with overwhelming
//! probability.

use proptest::collection::vec;
use proptest::prelude::*;

use microcrypt::keccak::KeccakP64;
use microcrypt::sponge::Sponge;

const RATE: usize = 136;
const ROUNDS: usize = 24;

#[derive(Clone, Debug, PartialEq)]
enum SpongeOp {
    Absorb(Vec<u8>),
    Squeeze(usize),
}

fn apply_transcript(ops: &[SpongeOp]) -> Vec<u8> {
    let mut sponge: Sponge<KeccakP64, 200> = Sponge::new();
    let mut squeezed = Vec::new();

    for op in ops {
        match op {
            SpongeOp::Absorb(data) => sponge.absorb(data, RATE, ROUNDS),
            SpongeOp::Squeeze(n) => {
                let mut out = vec![0u8; *n];
                sponge.squeeze(&mut out, RATE, ROUNDS);
                squeezed.extend_from_slice(&out);
            }
        }
    }

    let mut tail = [0u8; 16];
    sponge.squeeze(&mut tail, RATE, ROUNDS);
    squeezed.extend_from_slice(&tail);
    squeezed
}

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 0..200)
}

fn arb_op() -> impl Strategy<Value = SpongeOp> {
    prop_oneof![
        arb_data().prop_map(SpongeOp::Absorb),
        (1usize..256).prop_map(SpongeOp::Squeeze),
    ]
}

prop_compose! {
    fn arb_transcript()(ops in vec(arb_op(), 0..48)) -> Vec<SpongeOp> {
        ops
    }
}

proptest! {
    #[test]
    fn transcript_consistency(t0 in arb_transcript(), t1 in arb_transcript()) {
        let out0 = apply_transcript(&t0);
        let out1 = apply_transcript(&t1);

        if t0 == t1 {
            prop_assert_eq!(out0, out1);
        } else {
            prop_assert_ne!(out0, out1);
        }
    }

    #[test]
    fn encrypt_decrypt_inverse_over_arbitrary_buffers(data in vec(any::<u8>(), 0..400)) {
        let mut enc: Sponge<KeccakP64, 200> = Sponge::new();
        let mut dec: Sponge<KeccakP64, 200> = Sponge::new();

        let mut buf = data.clone();
        enc.encrypt(&mut buf, RATE, ROUNDS);
        dec.decrypt(&mut buf, RATE, ROUNDS);

        prop_assert_eq!(buf, data);
    }
}
