// crates/cli/src/options.rs
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use gapdash_domain::options::SortKey;
use gapdash_infra::options as infra_options;
use gapdash_shared_kernel::Continent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Md,
    Jsonl,
}

impl From<OutputFormat> for infra_options::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => Self::Table,
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Tsv => Self::Tsv,
            OutputFormat::Json => Self::Json,
            OutputFormat::Yaml => Self::Yaml,
            OutputFormat::Md => Self::Md,
            OutputFormat::Jsonl => Self::Jsonl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum WatchOutput {
    Full,
    Jsonl,
}

impl From<WatchOutput> for infra_options::WatchOutput {
    fn from(output: WatchOutput) -> Self {
        match output {
            WatchOutput::Full => Self::Full,
            WatchOutput::Jsonl => Self::Jsonl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum ContinentArg {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl From<ContinentArg> for Continent {
    fn from(arg: ContinentArg) -> Self {
        match arg {
            ContinentArg::Africa => Self::Africa,
            ContinentArg::Americas => Self::Americas,
            ContinentArg::Asia => Self::Asia,
            ContinentArg::Europe => Self::Europe,
            ContinentArg::Oceania => Self::Oceania,
        }
    }
}

/// Comma-separated sort specification, e.g. `pop:desc,country`.
#[derive(Debug, Clone)]
pub struct SortArg(pub Vec<(SortKey, bool)>);

impl FromStr for SortArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let specs = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(parse_single_spec)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(specs))
    }
}

fn parse_single_spec(part: &str) -> Result<(SortKey, bool), String> {
    let (key_str, desc) = part.split_once(':').map_or((part, false), |(k, d)| {
        (k.trim(), matches!(d.trim(), "desc" | "DESC"))
    });

    let key = parse_sort_key(key_str)?;
    Ok((key, desc))
}

fn parse_sort_key(key_str: &str) -> Result<SortKey, String> {
    match key_str.to_ascii_lowercase().as_str() {
        "country" => Ok(SortKey::Country),
        "continent" => Ok(SortKey::Continent),
        "year" => Ok(SortKey::Year),
        "pop" => Ok(SortKey::Population),
        "lifeexp" => Ok(SortKey::LifeExpectancy),
        "gdp" => Ok(SortKey::GdpPerCapita),
        other => Err(format!("Unknown sort key: {other}")),
    }
}
