// crates/cli/src/presentation.rs
use std::io::Write;

use gapdash_domain::analytics::{DashboardViews, SortStrategy};
use gapdash_infra::options::OutputFormat;
use gapdash_infra::output::{OutputWriter, RenderConfig, formatters};

use crate::error::Result;

/// Applies presentation ordering and renders the views in the selected
/// format. Sorting reorders the listing only; the aggregations and
/// metrics were derived before any reordering.
pub fn print_results(mut views: DashboardViews, render: &RenderConfig) -> Result<()> {
    let strategy = SortStrategy::new(render.sort.clone());
    strategy.apply(&mut views.rows);

    let mut out = OutputWriter::create(render)?;
    match render.format {
        OutputFormat::Table => formatters::output_table(&views, render, &mut out)?,
        OutputFormat::Csv => formatters::output_delimited(&views, render, ',', &mut out)?,
        OutputFormat::Tsv => formatters::output_delimited(&views, render, '\t', &mut out)?,
        OutputFormat::Json => formatters::output_json(&views, render, &mut out)?,
        OutputFormat::Yaml => formatters::output_yaml(&views, render, &mut out)?,
        OutputFormat::Md => formatters::output_markdown(&views, render, &mut out)?,
        OutputFormat::Jsonl => formatters::output_jsonl(&views, render, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
