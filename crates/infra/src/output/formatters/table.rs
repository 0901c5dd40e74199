// crates/infra/src/output/formatters/table.rs
use std::io::Write;

use gapdash_domain::analytics::DashboardViews;

use crate::{
    options::OutputMode,
    output::{
        VERSION,
        config::RenderConfig,
        utils::{
            format_money, format_population_compact, format_ratio, group_digits, limited,
            truncate_rows,
        },
    },
};

pub fn output_table(
    views: &DashboardViews,
    config: &RenderConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "gapdash v{VERSION} · year={}", views.spec.year)?;

    match config.output_mode {
        OutputMode::TotalOnly => {}
        OutputMode::Summary => write_aggregations(views, config, out)?,
        OutputMode::Full => {
            write_listing(views, config, out)?;
            write_aggregations(views, config, out)?;
        }
    }
    write_metrics(views, out)
}

fn write_listing(
    views: &DashboardViews,
    config: &RenderConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out)?;
    if views.rows.is_empty() {
        writeln!(out, "No records match the current selection.")?;
        writeln!(out, "---")?;
        return Ok(());
    }

    if config.ratio {
        writeln!(out, "{:>14}\t{:>6}\t{:>9}\t{:>12}\tCOUNTRY", "POPULATION", "POP%", "LIFE EXP", "GDP/CAP")?;
    } else {
        writeln!(out, "{:>14}\t{:>9}\t{:>12}\tCOUNTRY", "POPULATION", "LIFE EXP", "GDP/CAP")?;
    }
    writeln!(out, "----------------------------------------------")?;

    let whole = views.summary.total_population().value();
    for record in limited(&views.rows, config) {
        let population = group_digits(record.population.value());
        let life = format!("{:.2}", record.life_expectancy.value());
        let gdp = format_money(record.gdp_per_capita.value());
        if config.ratio {
            writeln!(
                out,
                "{:>14}\t{:>6}\t{:>9}\t{:>12}\t{} ({})",
                population,
                format_ratio(record.population.value(), whole),
                life,
                gdp,
                record.country,
                record.continent
            )?;
        } else {
            writeln!(
                out,
                "{:>14}\t{:>9}\t{:>12}\t{} ({})",
                population, life, gdp, record.country, record.continent
            )?;
        }
    }
    writeln!(out, "---")?;
    Ok(())
}

fn write_aggregations(
    views: &DashboardViews,
    config: &RenderConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if views.by_continent.is_empty() {
        return Ok(());
    }

    writeln!(out, "[Population by Continent]")?;
    writeln!(out, "{:>14}\t{:>6}\tCONTINENT", "POPULATION", "SHARE")?;

    let whole = views.summary.total_population().value();
    let mut rows: Vec<_> = views.by_continent.iter().zip(views.distribution.iter()).collect();
    truncate_rows(&mut rows, config.by_limit);
    for (absolute, share) in rows {
        writeln!(
            out,
            "{:>14}\t{:>5}%\t{} ({} countries)",
            group_digits(absolute.population.value()),
            format_ratio(share.population.value(), whole),
            absolute.continent,
            absolute.count
        )?;
    }
    writeln!(out, "---")?;
    Ok(())
}

fn write_metrics(views: &DashboardViews, out: &mut impl Write) -> anyhow::Result<()> {
    let summary = &views.summary;
    let life = summary
        .mean_life_expectancy()
        .map(|v| format!("{v} years"))
        .unwrap_or_else(|_| "N/A".to_string());
    let gdp = summary
        .mean_gdp_per_capita()
        .map(|v| format_money(v.value()))
        .unwrap_or_else(|_| "N/A".to_string());

    writeln!(out, "{:<18}{}", "COUNTRIES", summary.countries())?;
    writeln!(out, "{:<18}{}", "TOTAL POPULATION", format_population_compact(summary.total_population().value()))?;
    writeln!(out, "{:<18}{}", "AVG LIFE EXP", life)?;
    writeln!(out, "{:<18}{}", "AVG GDP/CAP", gdp)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use gapdash_domain::{
        filter::{FilterSpec, PopulationRange},
        model::Record,
    };
    use gapdash_shared_kernel::value_objects::{Continent, Year};

    use super::*;

    fn sample_views() -> DashboardViews {
        let records = vec![
            Record::builder("X", Continent::Asia)
                .year(2007)
                .population(100)
                .life_expectancy(70.0)
                .gdp_per_capita(1_000.0)
                .build(),
            Record::builder("Y", Continent::Asia)
                .year(2007)
                .population(200)
                .life_expectancy(80.0)
                .gdp_per_capita(2_000.0)
                .build(),
            Record::builder("Z", Continent::Europe)
                .year(2007)
                .population(100)
                .life_expectancy(75.0)
                .gdp_per_capita(3_000.0)
                .build(),
        ];
        let continents: HashSet<_> = [Continent::Asia, Continent::Europe].into_iter().collect();
        let spec = FilterSpec::new(Year::new(2007), continents, PopulationRange::full());
        DashboardViews::build(spec, &records)
    }

    fn render(views: &DashboardViews, config: &RenderConfig) -> String {
        let mut buffer = Vec::new();
        output_table(views, config, &mut buffer).expect("table output succeeds");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn full_table_lists_rows_aggregations_and_metrics() {
        let text = render(&sample_views(), &RenderConfig::default());

        assert!(text.contains("year=2007"));
        assert!(text.contains("X (Asia)"));
        assert!(text.contains("Z (Europe)"));
        assert!(text.contains("[Population by Continent]"));
        assert!(text.contains("Asia (2 countries)"));
        assert!(metric_value(&text, "COUNTRIES") == "3");
        assert!(metric_value(&text, "AVG LIFE EXP") == "75.00 years");
        assert!(metric_value(&text, "AVG GDP/CAP") == "$2,000.00");
    }

    fn metric_value(text: &str, label: &str) -> String {
        let line = text
            .lines()
            .find(|l| l.starts_with(label))
            .unwrap_or_else(|| panic!("metric {label} missing from:\n{text}"));
        line[label.len()..].trim().to_string()
    }

    #[test]
    fn continent_share_is_a_percentage_of_the_filtered_total() {
        let text = render(&sample_views(), &RenderConfig::default());
        // Asia holds 300 of 400.
        assert!(text.contains("75.0%"), "missing share column: {text}");
        assert!(text.contains("25.0%"), "missing share column: {text}");
    }

    #[test]
    fn empty_selection_renders_placeholders_not_zeros() {
        let spec = FilterSpec::new(Year::new(1800), HashSet::new(), PopulationRange::full());
        let views = DashboardViews::build(spec, &[]);
        let text = render(&views, &RenderConfig::default());

        assert!(text.contains("No records match the current selection."));
        assert!(metric_value(&text, "COUNTRIES") == "0");
        assert!(metric_value(&text, "AVG LIFE EXP") == "N/A");
        assert!(metric_value(&text, "AVG GDP/CAP") == "N/A");
        assert!(!text.contains("[Population by Continent]"));
    }

    #[test]
    fn total_only_skips_listing_and_aggregations() {
        let config = RenderConfig { output_mode: OutputMode::TotalOnly, ..Default::default() };
        let text = render(&sample_views(), &config);

        assert!(!text.contains("X (Asia)"));
        assert!(!text.contains("[Population by Continent]"));
        assert!(text.contains("TOTAL POPULATION"));
    }

    #[test]
    fn top_n_truncates_the_listing_only() {
        let config = RenderConfig { top_n: Some(1), ..Default::default() };
        let text = render(&sample_views(), &config);

        assert!(text.contains("X (Asia)"));
        assert!(!text.contains("Y (Asia)"));
        // Metrics still cover the whole selection.
        assert!(metric_value(&text, "COUNTRIES") == "3");
    }

    #[test]
    fn ratio_adds_per_row_share() {
        let config = RenderConfig { ratio: true, ..Default::default() };
        let text = render(&sample_views(), &config);
        assert!(text.contains("POP%"));
        // X holds 100 of 400.
        assert!(text.contains("25.0"));
    }
}
