use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bintree::format::Format;
use bintree::traversal::Traverse;
use bintree::tree::Tree;

/// Builds a balanced tree of `size` nodes.
fn get_tree(size: i32) -> Tree<i32> {
    let mut tree: Tree<i32> = (0..size).collect();
    tree.balance();
    tree
}

/// Helper to bench a whole-tree operation at a range of sizes.
fn bench_helper<R>(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i32>) -> R) {
    let mut group = c.benchmark_group(name);

    for size in [100, 1_000, 10_000] {
        let tree = get_tree(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| black_box(f(tree)))
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "traverse-in-order", |tree| tree.traverse_in_order().len());
    bench_helper(c, "map", |tree| tree.map(|x| x * 2));
    bench_helper(c, "filter", |tree| tree.filter(|x| x % 2 == 0));
    bench_helper(c, "save", |tree| tree.save_to_string(&Format::KLP));

    let mut group = c.benchmark_group("load");
    for size in [100, 1_000, 10_000] {
        let text = get_tree(size).save_to_string(&Format::KLP);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| Tree::<i32>::from_str_with(text, &Format::KLP))
        });
    }
    group.finish();

    // Balancing a chain is the worst case: every insert went right.
    let mut group = c.benchmark_group("balance");
    for size in [100, 1_000] {
        let chain: Tree<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &chain, |b, chain| {
            b.iter_batched(
                || chain.clone(),
                |mut tree| {
                    tree.balance();
                    tree
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
