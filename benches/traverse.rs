use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use modscope::graph::ModuleTable;
use modscope::traverse::{traverse, QueryMode};

/// Builds a layered table where each module depends on the next `fan_out`
/// modules, so a rooted descent from the first module reaches everything.
fn synthetic_table(modules: usize, fan_out: usize) -> ModuleTable {
    let pairs = (0..modules).map(|i| {
        let deps: Vec<String> = (1..=fan_out)
            .filter(|step| i + step < modules)
            .map(|step| format!("Module{}", i + step))
            .collect();
        (format!("Module{}", i), deps)
    });
    ModuleTable::from_pairs(pairs)
}

fn bench_flat_traversal(c: &mut Criterion) {
    let table = synthetic_table(1_000, 4);
    let exclude = HashSet::new();

    c.bench_function("flat_traversal_1000_modules", |b| {
        b.iter(|| traverse(black_box(&table), &QueryMode::Flat, &exclude))
    });
}

fn bench_rooted_traversal(c: &mut Criterion) {
    let table = synthetic_table(1_000, 4);
    let exclude = HashSet::new();
    let mode = QueryMode::Rooted("Module0".to_string());

    c.bench_function("rooted_traversal_1000_modules", |b| {
        b.iter(|| traverse(black_box(&table), &mode, &exclude))
    });
}

fn bench_inverted_lookup(c: &mut Criterion) {
    let table = synthetic_table(1_000, 4);
    let exclude = HashSet::new();
    let mode = QueryMode::Inverted("Module500".to_string());

    c.bench_function("inverted_lookup_1000_modules", |b| {
        b.iter(|| traverse(black_box(&table), &mode, &exclude))
    });
}

criterion_group!(
    benches,
    bench_flat_traversal,
    bench_rooted_traversal,
    bench_inverted_lookup
);
criterion_main!(benches);
