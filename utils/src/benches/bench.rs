use criterion::criterion_main;

mod bitspan;
mod hex;

criterion_main!(bitspan::benches, hex::benches, sized::benches);
