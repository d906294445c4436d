use criterion::{criterion_group, Criterion};
use qtils::{hex, unhex, Hex};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::hint::black_box;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(len as u64);
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    bytes
}

fn bench_hex(c: &mut Criterion) {
    for len in [32, 1 << 10, 1 << 16] {
        let bytes = random_bytes(len);
        c.bench_function(&format!("{}/fn=hex len={len}", module_path!()), |b| {
            b.iter(|| hex(black_box(&bytes)));
        });
        c.bench_function(
            &format!("{}/fn=display_full len={len}", module_path!()),
            |b| {
                b.iter(|| format!("{:x}", Hex::new(black_box(&bytes))));
            },
        );
    }
}

fn bench_unhex(c: &mut Criterion) {
    for len in [32, 1 << 10, 1 << 16] {
        let encoded = hex(&random_bytes(len));
        c.bench_function(&format!("{}/fn=unhex len={len}", module_path!()), |b| {
            b.iter(|| unhex(black_box(&encoded)).unwrap());
        });
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_hex, bench_unhex,
}
