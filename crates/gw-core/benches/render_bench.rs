// File: crates/gw-core/benches/render_bench.rs
// Summary: Criterion benches for rendering each figure kind to PNG bytes.

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gw_core::{Dataset, Figure, FigureOptions};

fn dataset() -> Dataset {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/games.csv");
    Dataset::load_csv(path).expect("fixture loads")
}

fn bench_render(c: &mut Criterion) {
    let ds = dataset();
    let opts = FigureOptions::default();
    let mut group = c.benchmark_group("render_png_bytes");
    for figure in Figure::DEFAULT {
        group.bench_function(figure.to_string(), |b| {
            let chart = figure.build(&ds, &opts).expect("build figure");
            let render = chart.default_options().with_labels(false);
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&render)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
