use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slru_cache::config::SlruCacheConfig;
use slru_cache::SlruCache;
use std::sync::Arc;
use std::thread;

fn make_slru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> SlruCache<K, V> {
    SlruCache::new(cap).unwrap()
}

fn make_slru_with_ratio<K: std::hash::Hash + Eq + Clone, V>(
    cap: usize,
    ratio: f64,
) -> SlruCache<K, V> {
    let config = SlruCacheConfig::new(cap).with_probation_ratio(ratio);
    SlruCache::init(config, None).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const CACHE_SIZE: usize = 1000;
    let mut group = c.benchmark_group("SLRU Operations");

    // Warm cache: every key promoted into protected where it fits
    {
        let cache = make_slru(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.set(i, i);
            cache.get(&i);
        }

        group.bench_function("get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("get miss", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i + 10 * CACHE_SIZE)));
                }
            });
        });

        group.bench_function("peek hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.peek(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("set existing", |b| {
            b.iter(|| {
                for i in 0..100 {
                    cache.set(black_box(i % CACHE_SIZE), i);
                }
            });
        });
    }

    // Scan: every set admits a fresh key and evicts from probation
    {
        let cache = make_slru(CACHE_SIZE);
        let mut next = 0usize;

        group.bench_function("set new key", |b| {
            b.iter(|| {
                for _ in 0..100 {
                    cache.set(black_box(next), next);
                    next = next.wrapping_add(1);
                }
            });
        });
    }

    // Promotion churn: probation hits that overflow protected
    {
        let cache = make_slru_with_ratio(CACHE_SIZE, 0.5);
        let mut next = 0usize;

        group.bench_function("set then promote", |b| {
            b.iter(|| {
                for _ in 0..100 {
                    cache.set(next, next);
                    black_box(cache.get(&next));
                    next = next.wrapping_add(1);
                }
            });
        });
    }

    group.finish();
}

pub fn concurrent_benchmark(c: &mut Criterion) {
    const CACHE_SIZE: usize = 1000;
    const THREADS: usize = 4;
    let mut group = c.benchmark_group("SLRU Concurrent");

    let cache: Arc<SlruCache<usize, usize>> = Arc::new(make_slru(CACHE_SIZE));
    for i in 0..CACHE_SIZE {
        cache.set(i, i);
    }

    group.bench_function("mixed 4 threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..THREADS)
                .map(|t| {
                    let cache = Arc::clone(&cache);
                    thread::spawn(move || {
                        for i in 0..250 {
                            let key = (i * 31 + t) % (2 * CACHE_SIZE);
                            if i % 4 == 0 {
                                cache.set(key, i);
                            } else {
                                black_box(cache.get(&key));
                            }
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark, concurrent_benchmark);
criterion_main!(benches);
