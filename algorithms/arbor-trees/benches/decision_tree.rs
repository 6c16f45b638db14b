use arbor::prelude::*;
use arbor_datasets::generate::blobs;
use arbor_trees::DecisionTree;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::SmallRng;

fn decision_tree_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);

    // Controls how many samples for each class are generated
    let training_set_sizes = &[25, 50, 100, 200];

    let n_classes = 4;
    let n_features = 4;

    // Use the default configuration
    let hyperparams = DecisionTree::params();

    let mut group = c.benchmark_group("decision_tree");
    group.sample_size(10);

    for n in training_set_sizes.iter() {
        let centroids =
            Array2::random_using((n_classes, n_features), Uniform::new(-30., 30.), &mut rng);
        let table = blobs(*n, &centroids, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::new("fit", n), &table, |b, table| {
            b.iter(|| hyperparams.fit(table))
        });

        let model = hyperparams.fit(&table).unwrap();
        group.bench_with_input(BenchmarkId::new("predict", n), &table, |b, table| {
            b.iter(|| model.predict(table.records()))
        });
    }

    group.finish();
}

criterion_group!(benches, decision_tree_bench);
criterion_main!(benches);
