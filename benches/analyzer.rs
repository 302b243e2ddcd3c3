//! Benchmarks for matrix parsing and full-report analysis
//!
//! Strong connectivity is O(V·(V+E)); these keep an eye on how that grows
//! for the matrix sizes the tool is meant for.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphinfo::analysis::GraphAnalyzer;
use graphinfo::parser::GraphBuilder;

/// Render a directed ring (every vertex points at the next) as matrix text
fn ring_matrix(size: usize) -> String {
    (0..size)
        .map(|i| {
            (0..size)
                .map(|j| if j == (i + 1) % size { "1" } else { "0" })
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_parse");

    for size in [10, 50, 200] {
        let text = ring_matrix(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| GraphBuilder::default().build_from_text(black_box(text)))
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis_report");

    for size in [10, 50, 200] {
        let graph = match GraphBuilder::default().build_from_text(&ring_matrix(size)) {
            Ok(graph) => graph,
            Err(err) => panic!("benchmark fixture failed to parse: {err}"),
        };
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| GraphAnalyzer::new(black_box(graph)).report())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_report);
criterion_main!(benches);
