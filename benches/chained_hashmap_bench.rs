use chain_hashmap::ChainedHashMap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn value(n: u64) -> String {
    format!("v{:08x}", n as u32)
}

fn filled(seed: u64, n: usize) -> (ChainedHashMap, Vec<i64>) {
    let mut m = ChainedHashMap::new();
    let keys: Vec<i64> = lcg(seed).take(n).map(|x| x as i64).collect();
    for &k in &keys {
        m.insert(k, value(k as u64));
    }
    (m, keys)
}

fn bench_insert_fresh_100k(c: &mut Criterion) {
    c.bench_function("chained::insert_fresh_100k", |b| {
        b.iter_batched(
            ChainedHashMap::new,
            |mut m| {
                for x in lcg(1).take(100_000) {
                    m.insert(x as i64, value(x));
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_insert_presized_100k(c: &mut Criterion) {
    c.bench_function("chained::insert_presized_100k", |b| {
        b.iter_batched(
            || ChainedHashMap::with_capacity(1 << 16),
            |mut m| {
                for x in lcg(3).take(100_000) {
                    m.insert(x as i64, value(x));
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_overwrite_bounded_100k(c: &mut Criterion) {
    c.bench_function("chained::overwrite_256_keys_100k", |b| {
        b.iter_batched(
            ChainedHashMap::new,
            |mut m| {
                for x in lcg(4).take(100_000) {
                    m.insert((x >> 17) as i64 % 256, value(x));
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_remove_random_10k(c: &mut Criterion) {
    c.bench_function("chained::remove_random_10k_of_110k", |b| {
        b.iter_batched(
            || {
                let (m, keys) = filled(5, 110_000);
                // Precompute 10k unique indices via LCG
                let n = keys.len();
                let mut sel = std::collections::HashSet::with_capacity(10_000);
                let mut s = 0x9e3779b97f4a7c15u64;
                while sel.len() < 10_000 {
                    s = s.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
                    sel.insert((s as usize) % n);
                }
                let to_remove: Vec<i64> = sel.into_iter().map(|i| keys[i]).collect();
                (m, to_remove)
            },
            |(mut m, to_remove)| {
                for k in to_remove {
                    let _ = m.remove(k);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit_10k(c: &mut Criterion) {
    c.bench_function("chained::get_hit_10k_on_100k", |b| {
        let (m, keys) = filled(7, 100_000);
        let n = keys.len();
        let mut s = 0x9e3779b97f4a7c15u64;
        let queries: Vec<i64> = (0..10_000)
            .map(|_| {
                s = s.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
                keys[(s as usize) % n]
            })
            .collect();
        b.iter(|| {
            for &k in &queries {
                black_box(m.get(k));
            }
        })
    });
}

fn bench_get_miss_10k(c: &mut Criterion) {
    c.bench_function("chained::get_miss_10k_on_100k", |b| {
        let (m, _) = filled(11, 100_000);
        let misses: Vec<i64> = lcg(0xdead_beef).take(10_000).map(|x| x as i64).collect();
        b.iter(|| {
            for &k in &misses {
                black_box(m.get(k));
            }
        })
    });
}

fn bench_iter_and_render(c: &mut Criterion) {
    c.bench_function("chained::iter_all_100k", |b| {
        let (m, _) = filled(999, 100_000);
        b.iter(|| {
            let mut sum = 0usize;
            for (_k, v) in m.iter() {
                sum = sum.wrapping_add(v.len());
            }
            black_box(sum)
        })
    });

    c.bench_function("chained::render_10k", |b| {
        let (m, _) = filled(1001, 10_000);
        b.iter(|| black_box(m.render()))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_insert;
    config = bench_config();
    targets = bench_insert_fresh_100k, bench_insert_presized_100k, bench_overwrite_bounded_100k
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_remove_random_10k,
              bench_get_hit_10k,
              bench_get_miss_10k,
              bench_iter_and_render
}
criterion_main!(benches_insert, benches_ops);
