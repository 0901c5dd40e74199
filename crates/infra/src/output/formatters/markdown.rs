// crates/infra/src/output/formatters/markdown.rs
use std::io::Write;

use gapdash_domain::analytics::DashboardViews;

use crate::output::{
    config::RenderConfig,
    utils::{format_money, format_population_compact, format_ratio, limited, safe_key_label, truncate_rows},
};

pub fn output_markdown(
    views: &DashboardViews,
    config: &RenderConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    write_record_table(views, config, out)?;
    write_aggregation_table(views, config, out)?;
    write_summary(views, out)?;
    Ok(())
}

fn write_record_table(
    views: &DashboardViews,
    config: &RenderConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "### Filtered Records\n")?;
    if views.rows.is_empty() {
        writeln!(out, "_No records match the current selection._")?;
        return Ok(());
    }

    if config.ratio {
        writeln!(out, "| COUNTRY | CONTINENT | YEAR | POPULATION | POP% | LIFE EXP | GDP/CAP |")?;
        writeln!(out, "|:---|:---|---:|---:|---:|---:|---:|")?;
    } else {
        writeln!(out, "| COUNTRY | CONTINENT | YEAR | POPULATION | LIFE EXP | GDP/CAP |")?;
        writeln!(out, "|:---|:---|---:|---:|---:|---:|")?;
    }

    let whole = views.summary.total_population().value();
    for record in limited(&views.rows, config) {
        let country = safe_key_label(record.country.as_str());
        if config.ratio {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} | {:.2} | {} |",
                country,
                record.continent,
                record.year,
                record.population.value(),
                format_ratio(record.population.value(), whole),
                record.life_expectancy.value(),
                format_money(record.gdp_per_capita.value())
            )?;
        } else {
            writeln!(
                out,
                "| {} | {} | {} | {} | {:.2} | {} |",
                country,
                record.continent,
                record.year,
                record.population.value(),
                record.life_expectancy.value(),
                format_money(record.gdp_per_capita.value())
            )?;
        }
    }
    Ok(())
}

fn write_aggregation_table(
    views: &DashboardViews,
    config: &RenderConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if views.by_continent.is_empty() {
        return Ok(());
    }

    writeln!(out, "\n### Population by Continent\n")?;
    writeln!(out, "| CONTINENT | POPULATION | SHARE | COUNTRIES |")?;
    writeln!(out, "|:---|---:|---:|---:|")?;

    let whole = views.summary.total_population().value();
    let mut rows: Vec<_> = views.by_continent.iter().zip(views.distribution.iter()).collect();
    truncate_rows(&mut rows, config.by_limit);
    for (absolute, share) in rows {
        writeln!(
            out,
            "| {} | {} | {}% | {} |",
            absolute.continent,
            absolute.population.value(),
            format_ratio(share.population.value(), whole),
            absolute.count
        )?;
    }
    Ok(())
}

fn write_summary(views: &DashboardViews, out: &mut impl Write) -> anyhow::Result<()> {
    let summary = &views.summary;
    let life = summary
        .mean_life_expectancy()
        .map(|v| format!("{v} years"))
        .unwrap_or_else(|_| "N/A".to_string());
    let gdp = summary
        .mean_gdp_per_capita()
        .map(|v| format_money(v.value()))
        .unwrap_or_else(|_| "N/A".to_string());

    writeln!(out, "\n### Summary\n")?;
    writeln!(out, "- Countries: {}", summary.countries())?;
    writeln!(out, "- Total population: {}", format_population_compact(summary.total_population().value()))?;
    writeln!(out, "- Avg life expectancy: {life}")?;
    writeln!(out, "- Avg GDP per capita: {gdp}")?;
    Ok(())
}
