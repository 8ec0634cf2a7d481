use bstr::BString;

use scaffold_graph::edge::*;
use scaffold_graph::graph::*;
use scaffold_graph::writer::*;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// A chain of `n` contigs, each linked to the next in both
/// orientations, plus a reverse-complement self-edge every tenth
/// contig.
fn build_chain(n: usize) -> ScaffoldGraph<BString> {
    let mut graph = ScaffoldGraph::new();
    let ids: Vec<BString> =
        (0..n).map(|i| BString::from(format!("ctg{}", i))).collect();

    for (i, id) in ids.iter().enumerate() {
        graph.add_vertex(id.clone(), 1000 + i).unwrap();
    }

    for (i, pair) in ids.windows(2).enumerate() {
        let sense = ScaffoldLink::new(
            pair[1].clone(),
            EdgeDir::Sense,
            EdgeComp::Same,
            (i % 400) as i64,
            ScaffoldLinkType::DistanceEstimate,
        );
        let anti = ScaffoldLink::new(
            pair[1].clone(),
            EdgeDir::Antisense,
            EdgeComp::Reverse,
            -20,
            ScaffoldLinkType::Overlap,
        );
        graph.add_link(&pair[0], sense).unwrap();
        graph.add_link(&pair[0], anti).unwrap();
        if i % 10 == 0 {
            let selfie = ScaffoldLink::new(
                pair[0].clone(),
                EdgeDir::Sense,
                EdgeComp::Reverse,
                5,
                ScaffoldLinkType::DistanceEstimate,
            );
            graph.add_link(&pair[0], selfie).unwrap();
        }
    }
    graph
}

fn delete_sense_edges(graph: &mut ScaffoldGraph<BString>) {
    for v in graph.vertex_indices() {
        graph
            .delete_edges_and_twins_in_dir(v, EdgeDir::Sense)
            .unwrap();
    }
}

fn bench_delete_in_dir(c: &mut Criterion) {
    for &n in [1_000usize, 10_000].iter() {
        let graph = build_chain(n);
        c.bench_with_input(
            BenchmarkId::new("delete_edges_and_twins_in_dir", n),
            &graph,
            |b, g| {
                b.iter_batched(
                    || g.clone(),
                    |mut g| delete_sense_edges(&mut g),
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }
}

fn bench_write_dot(c: &mut Criterion) {
    let graph = build_chain(10_000);
    c.bench_with_input(
        BenchmarkId::new("write_dot", 10_000),
        &graph,
        |b, g| b.iter(|| dot_string(g, &DotConfig::all())),
    );
}

criterion_group!(
    name = graph_benches;
    config = Criterion::default().sample_size(25);
    targets = bench_delete_in_dir, bench_write_dot
);

criterion_main!(graph_benches);
