//! Benchmarks for signer recovery.
use criterion::{criterion_group, criterion_main, Criterion};
use evm_recover::{
    derive_address,
    primitives::{message_digest, B256},
    recover_address, recover_public_key, Signature,
};
use k256::ecdsa::SigningKey;
use std::hint::black_box;

/// Benchmarks the recovery pipeline with a freshly generated signer.
pub fn benchmark_recover(c: &mut Criterion) {
    let mut group = c.benchmark_group("Recovery benchmarks");

    // generate secp256k1 signature
    let digest = message_digest(b"1337133713371337");
    let secret_key = SigningKey::random(&mut rand::thread_rng());
    let (sig, recid) = secret_key
        .sign_prehash_recoverable(digest.as_slice())
        .unwrap();
    let bytes = sig.to_bytes();
    let sig = Signature::from_rs_and_parity(
        B256::from_slice(&bytes[..32]),
        B256::from_slice(&bytes[32..]),
        recid.is_y_odd(),
    )
    .unwrap();
    let key = recover_public_key(&sig, &digest).unwrap();

    group.bench_function("recover public key", |b| {
        b.iter(|| recover_public_key(black_box(&sig), black_box(&digest)).unwrap())
    });
    group.bench_function("derive address", |b| {
        b.iter(|| derive_address(black_box(&key)))
    });
    group.bench_function("recover address", |b| {
        b.iter(|| recover_address(black_box(&sig), black_box(&digest)).unwrap())
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = benchmark_recover
}
criterion_main!(benches);
