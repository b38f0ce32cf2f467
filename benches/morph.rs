use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use treemorph::engine::MorphEngine;
use treemorph::morph::MorphState;

fn bench_full_update(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(40);
    let mut engine = MorphEngine::new(&mut rng).unwrap();
    engine.mount_all();
    let mut time = 0.0f32;

    c.bench_function("update_all_categories", |b| {
        b.iter(|| {
            time += 1.0 / 60.0;
            engine.update(black_box(MorphState::TreeShape), black_box(time), &mut rng);
        });
    });
}

fn bench_par_update(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(41);
    let mut engine = MorphEngine::new(&mut rng).unwrap();
    engine.mount_all();
    let mut time = 0.0f32;

    c.bench_function("par_update_all_categories", |b| {
        b.iter(|| {
            time += 1.0 / 60.0;
            engine.par_update(black_box(MorphState::TreeShape), black_box(time), &mut rng);
        });
    });
}

fn bench_dataset_build(c: &mut Criterion) {
    c.bench_function("build_all_datasets", |b| {
        b.iter(|| {
            let mut rng = SmallRng::seed_from_u64(black_box(42));
            MorphEngine::new(&mut rng).unwrap()
        });
    });
}

criterion_group!(benches, bench_full_update, bench_par_update, bench_dataset_build);
criterion_main!(benches);
