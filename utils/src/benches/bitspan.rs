use criterion::{criterion_group, Criterion};
use qtils::BitSpan;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::hint::black_box;

fn bench_get_as_byte(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut bytes = vec![0u8; 1 << 12];
    rng.fill_bytes(&mut bytes);
    let span = BitSpan::new(&bytes);
    for width in [1, 4, 8] {
        c.bench_function(
            &format!("{}/fn=get_as_byte width={width}", module_path!()),
            |b| {
                b.iter(|| {
                    let mut acc = 0u8;
                    let mut offset = 3;
                    while offset + width <= span.len() {
                        acc ^= span.get_as_byte(offset, width);
                        offset += width;
                    }
                    black_box(acc)
                });
            },
        );
    }
}

fn bench_iter(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut bytes = vec![0u8; 1 << 12];
    rng.fill_bytes(&mut bytes);
    let span = BitSpan::with_range(&bytes, 5, bytes.len() * 8 - 3);
    c.bench_function(&format!("{}/fn=iter", module_path!()), |b| {
        b.iter(|| black_box(span).iter().filter(|bit| *bit).count());
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_get_as_byte, bench_iter,
}
