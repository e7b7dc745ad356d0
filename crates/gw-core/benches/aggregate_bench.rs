// File: crates/gw-core/benches/aggregate_bench.rs
// Summary: Criterion benches for CSV loading and the grouped counts on a synthetic catalogue.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gw_core::{aggregate, Dataset, GroupBy};

const SERIES: [&str; 6] = ["Silver", "Gold", "Wide Screen", "Multi Screen", "New Wide Screen", "Table Top"];

fn synthetic_csv(n: usize) -> String {
    let mut csv = String::from("release order,game,model,series,date of release,produced\n");
    for i in 0..n {
        let year = 1980 + (i / 12) % 12;
        let month = i % 12 + 1;
        csv.push_str(&format!(
            "{},Game {i},GW-{i:03},{},{year}-{month:02}-15,{}\n",
            i + 1,
            SERIES[i % SERIES.len()],
            100_000 + (i * 7_919) % 900_000
        ));
    }
    csv
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_csv");
    for &n in &[60usize, 5_000usize] {
        let csv = synthetic_csv(n);
        group.bench_function(format!("rows_{n}"), |b| {
            b.iter(|| black_box(Dataset::from_reader(csv.as_bytes()).expect("valid csv")));
        });
    }
    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let ds = Dataset::from_reader(synthetic_csv(5_000).as_bytes()).expect("valid csv");
    c.bench_function("aggregate_year", |b| b.iter(|| black_box(aggregate(&ds, GroupBy::Year))));
    c.bench_function("aggregate_series", |b| b.iter(|| black_box(aggregate(&ds, GroupBy::Series))));
}

criterion_group!(benches, bench_load, bench_aggregate);
criterion_main!(benches);
