use criterion::{criterion_group, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use xdrkit_codec::{DecodeExt, Encode, VecM};

fn benchmark_vec(c: &mut Criterion) {
    let mut sampler = StdRng::seed_from_u64(0);
    for count in [10, 1_000, 100_000] {
        let items: Vec<u64> = (0..count).map(|_| sampler.gen()).collect();
        let value = VecM::<u64, 100_000>::try_from(items).unwrap();
        let encoded = value.encode().freeze();
        c.bench_function(&format!("{}/encode count={}", module_path!(), count), |b| {
            b.iter(|| value.encode());
        });
        c.bench_function(&format!("{}/decode count={}", module_path!(), count), |b| {
            b.iter(|| VecM::<u64, 100_000>::decode(encoded.clone()).unwrap());
        });
    }
}

criterion_group!(benches, benchmark_vec);
