use std::collections::HashSet;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use gapdash_domain::analytics::DashboardViews;
use gapdash_domain::filter::{FilterSpec, PopulationRange};
use gapdash_domain::model::Record;
use gapdash_shared_kernel::value_objects::{Continent, Year};

fn synthetic_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let continent = Continent::ALL[i % Continent::ALL.len()];
            Record::builder(format!("country-{i}"), continent)
                .year(1952 + ((i % 12) as i32) * 5)
                .population((i as u64 % 1_000) * 1_000_000)
                .life_expectancy(40.0 + (i % 40) as f64)
                .gdp_per_capita(500.0 + (i % 100) as f64 * 300.0)
                .build()
        })
        .collect()
}

fn benchmark_pipeline(c: &mut Criterion) {
    let records = synthetic_records(10_000);
    let continents: HashSet<_> = [Continent::Asia, Continent::Europe].into_iter().collect();
    let spec = FilterSpec::new(Year::new(2007), continents, PopulationRange::full());

    c.bench_function("filter_10k", |b| {
        b.iter(|| {
            let filtered = spec.apply(black_box(&records));
            black_box(filtered);
        })
    });

    c.bench_function("build_views_10k", |b| {
        b.iter(|| {
            let views = DashboardViews::build(black_box(spec.clone()), black_box(&records));
            black_box(views);
        })
    });
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
