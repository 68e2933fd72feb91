use criterion::{criterion_group, Criterion};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use xdrkit_codec::{BytesM, DecodeExt, Encode};

fn benchmark_opaque(c: &mut Criterion) {
    let mut sampler = StdRng::seed_from_u64(0);
    for len in [31, 1_000, 64_000] {
        let mut data = vec![0u8; len];
        sampler.fill_bytes(&mut data);
        let value = BytesM::<65_536>::try_from(data).unwrap();
        let encoded = value.encode().freeze();
        c.bench_function(&format!("{}/encode len={}", module_path!(), len), |b| {
            b.iter(|| value.encode());
        });
        c.bench_function(&format!("{}/decode len={}", module_path!(), len), |b| {
            b.iter(|| BytesM::<65_536>::decode(encoded.clone()).unwrap());
        });
    }
}

criterion_group!(benches, benchmark_opaque);
