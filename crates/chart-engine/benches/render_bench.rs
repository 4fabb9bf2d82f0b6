// File: crates/chart-engine/benches/render_bench.rs
// Summary: Render-pass and hit-test throughput for large line and bar charts.

use chart_engine::{Chart, ChartConfig, ChartData, ChartKind, DataPoint, Series};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_config(kind: ChartKind, n: usize) -> ChartConfig {
    let series = (0..3)
        .map(|s| {
            let data = (0..n)
                .map(|i| DataPoint::new((i as f64 * 0.01 + s as f64).sin() * 10.0 + 12.0))
                .collect();
            Series::new(format!("s{s}"), data)
        })
        .collect();
    ChartConfig::new(kind, ChartData::Series(series)).with_size(800, 500).without_labels()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");
    for &n in &[1_000usize, 10_000usize] {
        for kind in [ChartKind::Line, ChartKind::Bar] {
            group.bench_function(format!("{kind:?}_{n}"), |b| {
                let mut chart = Chart::new(build_config(kind, n)).expect("chart");
                b.iter(|| {
                    chart.render();
                    black_box(chart.hit_targets().len());
                });
            });
        }
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut chart = Chart::new(build_config(ChartKind::Line, 10_000)).expect("chart");
    c.bench_function("pointer_move_10k", |b| {
        let mut x = 60.0;
        b.iter(|| {
            x = if x > 740.0 { 60.0 } else { x + 1.5 };
            black_box(chart.pointer_move(x, 200.0));
        });
    });
}

criterion_group!(benches, bench_render, bench_hit_test);
criterion_main!(benches);
