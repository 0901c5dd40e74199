// crates/infra/src/output/formatters/delimited.rs
use std::io::Write;

use gapdash_domain::analytics::DashboardViews;

use crate::output::{
    config::RenderConfig,
    utils::{escape_field, limited},
};

/// CSV/TSV listing using the Gapminder column headers, so the output of
/// one run can be fed back in as a dataset.
pub fn output_delimited(
    views: &DashboardViews,
    config: &RenderConfig,
    sep: char,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(
        out,
        "country{sep}continent{sep}year{sep}lifeExp{sep}pop{sep}gdpPercap"
    )?;

    for record in limited(&views.rows, config) {
        writeln!(
            out,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
            escape_field(record.country.as_str(), sep),
            record.continent,
            record.year,
            record.life_expectancy.value(),
            record.population.value(),
            record.gdp_per_capita.value()
        )?;
    }

    if config.total_row {
        write_total_row(views, sep, out)?;
    }
    Ok(())
}

fn write_total_row(
    views: &DashboardViews,
    sep: char,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let summary = &views.summary;
    let life = summary
        .mean_life_expectancy()
        .map(|v| format!("{:.3}", v.value()))
        .unwrap_or_default();
    let gdp = summary
        .mean_gdp_per_capita()
        .map(|v| format!("{:.3}", v.value()))
        .unwrap_or_default();

    writeln!(
        out,
        "TOTAL{sep}{sep}{sep}{life}{sep}{}{sep}{gdp}",
        summary.total_population().value()
    )?;
    Ok(())
}
