use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tombola::{draw_into_groups_with_rng, draw_with_rng, random_index_with_rng};

fn bench_random_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_index");
    let sizes = [10, 1_000, 100_000];

    for &size in &sizes {
        let values: Vec<u32> = (0..size).collect();
        group.bench_function(format!("n{}", size), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            b.iter(|| {
                random_index_with_rng(black_box(Some(&values[..])), &mut rng).expect("values present")
            })
        });
    }
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");

    // The working-copy removal makes draws O(count * n); sizes chosen to show it.
    let sizes = [100, 1_000, 10_000];
    let count = 50;

    for &size in &sizes {
        let values: Vec<u32> = (0..size).collect();
        group.bench_function(format!("n{}_k{}", size, count), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(2);
            b.iter(|| {
                let drawn = draw_with_rng(black_box(Some(&values[..])), count, &mut rng)
                    .expect("draw ok");
                black_box(drawn);
            })
        });
    }
    group.finish();
}

fn bench_draw_into_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_into_groups");
    let sizes = [100, 1_000];
    let group_count = 4;

    for &size in &sizes {
        let values: Vec<u32> = (0..size).collect();
        group.bench_function(format!("n{}_g{}", size, group_count), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            b.iter(|| {
                let groups = draw_into_groups_with_rng(
                    black_box(Some(&values[..])),
                    size as i64,
                    group_count,
                    &mut rng,
                )
                .expect("deal ok");
                black_box(groups);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random_index, bench_draw, bench_draw_into_groups);
criterion_main!(benches);
