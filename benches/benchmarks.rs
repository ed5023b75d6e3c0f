//! Benchmarks comparing this crate's primitives against established
//! RustCrypto implementations of the same standards, following the
//! teacher's `benches/benchmarks.rs` layout (one `criterion_group` per
//! family: hash, AEAD, permutation).

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::Aes256Gcm;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use sha3::{Digest, Sha3_256 as RustCryptoSha3_256};

use microcrypt::aead::{AeadW64, KeccakAead};
use microcrypt::aes::encrypt_block;
use microcrypt::keccak::{KeccakP64, Permutation};
use microcrypt::sha3::Sha3_256;

const INPUT: usize = 100 * 1024;

fn hash_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("hash");
    g.sample_size(1_000);
    g.throughput(Throughput::Bytes(INPUT as u64));

    g.bench_with_input("microcrypt::Sha3_256", &[0u8; INPUT], |b, block| {
        b.iter(|| Sha3_256::digest(block))
    });
    g.bench_with_input("RustCrypto::Sha3_256", &[0u8; INPUT], |b, block| {
        b.iter(|| {
            let mut digest = RustCryptoSha3_256::default();
            digest.update(block);
            digest.finalize()
        })
    });
    g.finish();
}

fn aead_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("aead");
    g.sample_size(1_000);
    g.throughput(Throughput::Bytes(INPUT as u64));

    g.bench_with_input("microcrypt::AeadW64", &[0u8; INPUT], |b, block| {
        let key = [7u8; 32];
        b.iter(|| {
            let mut st: AeadW64 = KeccakAead::init(&key);
            let mut buf = *block;
            st.encrypt(&mut buf);
            let mut tag = [0u8; 16];
            st.squeeze_tag(&mut tag);
            (buf, tag)
        })
    });
    g.bench_with_input("RustCrypto::Aes256Gcm", &[0u8; INPUT], |b, block| {
        let k = [7u8; 32];
        let n = [8u8; 12];
        b.iter(|| {
            let aes = Aes256Gcm::new(&k.into());
            aes.encrypt(&n.into(), Payload { msg: block, aad: &[] })
        })
    });
    g.finish();
}

fn permutation_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("permutation");
    g.sample_size(1_000);
    g.throughput(Throughput::Bytes(200));

    g.bench_function("microcrypt::KeccakP64[24 rounds]", |b| {
        let mut state = [0u8; 200];
        b.iter(|| KeccakP64::permute(&mut state, 24))
    });
    g.bench_function("microcrypt::KeccakP64[12 rounds]", |b| {
        let mut state = [0u8; 200];
        b.iter(|| KeccakP64::permute(&mut state, 12))
    });
    g.finish();
}

fn aes_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("aes_block");
    g.throughput(Throughput::Bytes(16));

    g.bench_function("microcrypt::aes_128_ecb_block", |b| {
        let key = [0x2bu8; 16];
        let block = [0u8; 16];
        b.iter(|| encrypt_block(&key, &block))
    });
    g.finish();
}

criterion_group!(
    benches,
    hash_benchmarks,
    aead_benchmarks,
    permutation_benchmarks,
    aes_benchmarks
);
criterion_main!(benches);
