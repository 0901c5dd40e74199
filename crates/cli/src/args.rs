// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::{ContinentArg, OutputFormat, SortArg, WatchOutput};
use crate::parsers::PopArg;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "gapdash",
    version = crate::VERSION,
    about = "Filter and summarise Gapminder country-year indicators"
)]
pub struct Args {
    /// Dataset CSV (country,continent,year,lifeExp,pop,gdpPercap).
    /// Uses the built-in sample when omitted.
    #[arg(value_hint = ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Observation year to select
    #[arg(long, default_value_t = 2007, help_heading = "Filter")]
    pub year: i32,

    /// Continents to include (comma-separated or repeated; all when omitted)
    #[arg(long, value_enum, value_delimiter = ',', help_heading = "Filter")]
    pub continent: Vec<ContinentArg>,

    /// Minimum population (suffixes: k, m, b)
    #[arg(long, help_heading = "Filter")]
    pub min_pop: Option<PopArg>,

    /// Maximum population (suffixes: k, m, b)
    #[arg(long, help_heading = "Filter")]
    pub max_pop: Option<PopArg>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Sort keys (e.g. pop:desc,country); dataset order when omitted
    #[arg(long, help_heading = "Output")]
    pub sort: Option<SortArg>,

    /// Show only the first N records
    #[arg(long, help_heading = "Output")]
    pub top: Option<usize>,

    /// Aggregations and metrics only (no record listing)
    #[arg(long, conflicts_with = "total_only", help_heading = "Output")]
    pub summary_only: bool,

    /// Metrics only
    #[arg(long, help_heading = "Output")]
    pub total_only: bool,

    /// Show only the first N aggregation rows
    #[arg(long, help_heading = "Output")]
    pub by_limit: Option<usize>,

    /// Append a TOTAL row (csv/tsv)
    #[arg(long, help_heading = "Output")]
    pub total_row: bool,

    /// Add a population-share column to the listing
    #[arg(long, help_heading = "Output")]
    pub ratio: bool,

    /// Write to a file instead of stdout
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Re-render when the dataset file changes
    #[arg(long, requires = "data", help_heading = "Behaviour")]
    pub watch: bool,

    /// Debounce interval between watch re-renders, in seconds
    #[arg(long, help_heading = "Behaviour")]
    pub watch_interval: Option<u64>,

    /// Watch output style
    #[arg(long, value_enum, default_value = "full", help_heading = "Behaviour")]
    pub watch_output: WatchOutput,
}
