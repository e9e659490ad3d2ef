use sss_hazmat::{Threshold, add_keyshares, combine_keyshares, create_keyshares_with_rng};

use criterion::{Criterion, criterion_group, criterion_main};
use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::SeedableRng;
use std::hint::black_box;

const KEY: [u8; 32] = [0x5a; 32];

pub fn bench_create(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([0u8; 32]);

    for (n, k) in [(3, 2), (10, 5), (255, 127)] {
        let threshold = Threshold::new(n, k).unwrap();
        c.bench_function(&format!("create_keyshares {k}-of-{n}"), |b| {
            b.iter(|| create_keyshares_with_rng(black_box(&KEY), threshold, &mut rng))
        });
    }
}

pub fn bench_combine(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);

    for (n, k) in [(3, 2), (10, 5), (255, 127)] {
        let shares = create_keyshares_with_rng(&KEY, Threshold::new(n, k).unwrap(), &mut rng);
        c.bench_function(&format!("combine_keyshares {k}-of-{n}"), |b| {
            b.iter(|| combine_keyshares(black_box(&shares[..k as usize])))
        });
    }
}

pub fn bench_add(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let threshold = Threshold::new(255, 127).unwrap();

    let mut shares1 = create_keyshares_with_rng(&KEY, threshold, &mut rng);
    let shares2 = create_keyshares_with_rng(&KEY, threshold, &mut rng);

    c.bench_function("add_keyshares 255 shares", |b| {
        b.iter(|| add_keyshares(&mut shares1, black_box(&shares2)))
    });
}

criterion_group!(benches, bench_create, bench_combine, bench_add);
criterion_main!(benches);
