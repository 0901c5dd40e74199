// crates/infra/src/output/formatters/structured.rs
use std::io::Write;

use gapdash_domain::{analytics::{ContinentGroup, DashboardViews}, model::Record};
use gapdash_shared_kernel::Result;
use serde::Serialize;

use crate::output::{VERSION, config::RenderConfig, utils::limited};

pub fn output_json(
    views: &DashboardViews,
    config: &RenderConfig,
    out: &mut impl Write,
) -> Result<()> {
    let output = build_output(views, config);
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(feature = "yaml")]
pub fn output_yaml(
    views: &DashboardViews,
    config: &RenderConfig,
    out: &mut impl Write,
) -> Result<()> {
    let output = build_output(views, config);
    let yaml = serde_yaml::to_string(&output)?;
    write!(out, "{yaml}")?;
    Ok(())
}

#[derive(Serialize)]
struct StructuredOutput<'a> {
    version: &'static str,
    filter: FilterEcho,
    records: &'a [Record],
    summary: SummaryOut,
    continents: &'a [ContinentGroup],
    distribution: &'a [ContinentGroup],
}

#[derive(Serialize)]
struct FilterEcho {
    year: i32,
    continents: Vec<String>,
    min_population: u64,
    max_population: u64,
}

#[derive(Serialize)]
struct SummaryOut {
    countries: usize,
    records: usize,
    total_population: u64,
    /// `null` when the selection is empty; never coerced to zero.
    avg_life_expectancy: Option<f64>,
    avg_gdp_per_capita: Option<f64>,
}

fn build_output<'a>(views: &'a DashboardViews, config: &RenderConfig) -> StructuredOutput<'a> {
    let spec = &views.spec;
    let mut continents: Vec<String> =
        spec.continents.iter().map(|c| c.as_str().to_string()).collect();
    continents.sort();

    let summary = SummaryOut {
        countries: views.summary.countries(),
        records: views.summary.rows(),
        total_population: views.summary.total_population().value(),
        avg_life_expectancy: views.summary.mean_life_expectancy().ok().map(|v| v.value()),
        avg_gdp_per_capita: views.summary.mean_gdp_per_capita().ok().map(|v| v.value()),
    };

    StructuredOutput {
        version: VERSION,
        filter: FilterEcho {
            year: spec.year.value(),
            continents,
            min_population: spec.population.min.value(),
            max_population: spec.population.max.value(),
        },
        records: limited(&views.rows, config),
        summary,
        continents: &views.by_continent,
        distribution: &views.distribution,
    }
}
