use criterion::criterion_main;

mod opaque;
mod vec;

criterion_main!(opaque::benches, vec::benches);
