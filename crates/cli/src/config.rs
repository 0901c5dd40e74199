// crates/cli/src/config.rs
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use gapdash_domain::analytics::SortSpec;
use gapdash_domain::filter::{FilterSpec, PopulationRange};
use gapdash_infra::options as infra_options;
use gapdash_infra::output::{RenderConfig, RenderConfigBuilder};
use gapdash_shared_kernel::value_objects::{Continent, Population, Year};

use crate::args::Args;
use crate::options::SortArg;

/// Resolved runtime configuration: the filter selection plus rendering
/// and watch behaviour.
#[derive(Debug, Clone)]
pub struct Config {
    pub data: Option<PathBuf>,
    pub spec: FilterSpec,
    pub render: RenderConfig,
    pub watch: bool,
    pub watch_interval: Duration,
    pub watch_output: infra_options::WatchOutput,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // The omitted continent flag means "all", matching the dashboard
        // default; an empty set stays expressible through the library.
        let continents: HashSet<Continent> = if args.continent.is_empty() {
            Continent::ALL.into_iter().collect()
        } else {
            args.continent.iter().copied().map(Continent::from).collect()
        };

        let population = PopulationRange::new(
            Population::new(args.min_pop.map_or(0, |p| p.0)),
            Population::new(args.max_pop.map_or(u64::MAX, |p| p.0)),
        );
        let spec = FilterSpec::new(Year::new(args.year), continents, population);

        let output_mode = if args.total_only {
            infra_options::OutputMode::TotalOnly
        } else if args.summary_only {
            infra_options::OutputMode::Summary
        } else {
            infra_options::OutputMode::Full
        };

        let sort: Vec<SortSpec> = args
            .sort
            .map(|SortArg(specs)| {
                specs
                    .into_iter()
                    .map(|(key, desc)| SortSpec::new(key, desc.into()))
                    .collect()
            })
            .unwrap_or_default();

        let format: infra_options::OutputFormat = args.format.into();

        let render = RenderConfigBuilder::default()
            .format(format)
            .output_mode(output_mode)
            .sort(sort)
            .top_n(args.top)
            .by_limit(args.by_limit)
            .total_row(args.total_row)
            .ratio(args.ratio)
            .output(args.output)
            .build()
            .expect("Failed to build render config");

        Self {
            data: args.data,
            spec,
            render,
            watch: args.watch,
            watch_interval: Duration::from_secs(args.watch_interval.unwrap_or(1)),
            watch_output: args.watch_output.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn config_from(argv: &[&str]) -> Config {
        Config::from(Args::try_parse_from(argv).expect("argv parses"))
    }

    #[test]
    fn defaults_select_2007_across_all_continents() {
        let config = config_from(&["gapdash"]);
        assert_eq!(config.spec.year, Year::new(2007));
        assert_eq!(config.spec.continents.len(), 5);
        assert_eq!(config.spec.population, PopulationRange::full());
        assert!(config.render.sort.is_empty());
        assert!(!config.watch);
    }

    #[test]
    fn continent_flags_narrow_the_selection() {
        let config = config_from(&["gapdash", "--continent", "asia", "--year", "2002"]);
        let expected: HashSet<Continent> = [Continent::Asia].into_iter().collect();
        assert_eq!(config.spec.year, Year::new(2002));
        assert_eq!(config.spec.continents, expected);
    }

    #[test]
    fn population_flags_build_the_range() {
        let config = config_from(&["gapdash", "--min-pop", "1m", "--max-pop", "1b"]);
        assert_eq!(config.spec.population.min, Population::new(1_000_000));
        assert_eq!(config.spec.population.max, Population::new(1_000_000_000));
    }

    #[test]
    fn output_flags_feed_the_render_config() {
        let config = config_from(&[
            "gapdash",
            "--format",
            "csv",
            "--total-row",
            "--top",
            "5",
            "--sort",
            "pop:desc",
        ]);
        assert_eq!(config.render.format, infra_options::OutputFormat::Csv);
        assert!(config.render.total_row);
        assert_eq!(config.render.top_n, Some(5));
        assert_eq!(config.render.sort.len(), 1);
    }

    #[test]
    fn total_only_wins_the_output_mode() {
        let config = config_from(&["gapdash", "--total-only"]);
        assert_eq!(config.render.output_mode, infra_options::OutputMode::TotalOnly);
    }
}
