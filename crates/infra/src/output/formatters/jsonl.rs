// crates/infra/src/output/formatters/jsonl.rs
use std::io::Write;

use gapdash_domain::analytics::DashboardViews;
use gapdash_shared_kernel::Result;

use crate::output::{VERSION, config::RenderConfig, utils::limited};

pub fn output_jsonl(
    views: &DashboardViews,
    config: &RenderConfig,
    out: &mut impl Write,
) -> Result<()> {
    for record in limited(&views.rows, config) {
        let item = serde_json::json!({
            "type": "record",
            "country": record.country.as_str(),
            "continent": record.continent.as_str(),
            "year": record.year.value(),
            "lifeExp": record.life_expectancy.value(),
            "pop": record.population.value(),
            "gdpPercap": record.gdp_per_capita.value(),
        });
        serde_json::to_writer(&mut *out, &item)?;
        writeln!(out)?;
    }

    for group in &views.by_continent {
        let item = serde_json::json!({
            "type": "continent",
            "continent": group.continent.as_str(),
            "pop": group.population.value(),
            "count": group.count,
        });
        serde_json::to_writer(&mut *out, &item)?;
        writeln!(out)?;
    }

    let summary = &views.summary;
    let total = serde_json::json!({
        "type": "summary",
        "version": VERSION,
        "year": views.spec.year.value(),
        "countries": summary.countries(),
        "records": summary.rows(),
        "total_population": summary.total_population().value(),
        "avg_life_expectancy": summary.mean_life_expectancy().ok().map(|v| v.value()),
        "avg_gdp_per_capita": summary.mean_gdp_per_capita().ok().map(|v| v.value()),
    });
    serde_json::to_writer(&mut *out, &total)?;
    writeln!(out)?;
    Ok(())
}
