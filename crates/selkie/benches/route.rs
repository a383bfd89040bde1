use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use selkie::aggregated_edge_bendpoints;
use selkie::model::geom::{point, size};
use selkie::model::{Edge, ElementLabel, TopologyGraph};
use std::hint::black_box;

fn collapsed_group(x: f64, w: f64) -> ElementLabel {
    ElementLabel {
        group: true,
        collapsed: true,
        hull: Some(vec![
            point(x, 0.0),
            point(x + w, 0.0),
            point(x + w, w),
            point(x, w),
        ]),
        ..Default::default()
    }
}

fn leaf(x: f64, y: f64) -> ElementLabel {
    ElementLabel {
        position: point(x, y),
        dimensions: size(1.0, 1.0),
        ..Default::default()
    }
}

/// Two chains of `depth` nested collapsed groups with `leaves` connected leaf pairs at the
/// bottom. Every edge contributes to every aggregation scan, so this stresses the full
/// depth x edge-count product.
fn nested_model(depth: usize, leaves: usize) -> (TopologyGraph, Edge) {
    let mut g = TopologyGraph::new("graph");

    for side in 0..2 {
        let base = side as f64 * 100.0;
        let prefix = if side == 0 { "s" } else { "t" };
        for level in 0..depth {
            let id = format!("{prefix}{level}");
            g.set_node(id.clone(), collapsed_group(base, 50.0 - level as f64));
            if level > 0 {
                g.set_parent(id, format!("{prefix}{}", level - 1));
            }
        }
        for i in 0..leaves {
            let id = format!("{prefix}_leaf{i}");
            g.set_node(id.clone(), leaf(base + i as f64, i as f64));
            g.set_parent(id, format!("{prefix}{}", depth - 1));
        }
    }

    for i in 0..leaves {
        g.set_edge(format!("s_leaf{i}"), format!("t_leaf{i}"));
    }

    (g, Edge::new("s_leaf0", "t_leaf0"))
}

fn bench_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregated_edge_bendpoints");
    for (depth, leaves) in [(2, 4), (4, 16), (8, 64)] {
        let (g, edge) = nested_model(depth, leaves);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("depth{depth}_edges{leaves}")),
            &(g, edge),
            |b, (g, edge)| b.iter(|| black_box(aggregated_edge_bendpoints(g, edge))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_route);
criterion_main!(benches);
