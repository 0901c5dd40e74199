// crates/domain/src/analytics/views.rs
use crate::{
    analytics::{Aggregator, ContinentGroup, Summary},
    filter::FilterSpec,
    model::Record,
};

/// The derived views handed to the presentation layer: the filtered rows,
/// summary metrics, per-continent totals and the distribution view.
///
/// Built in full on every interaction from the original dataset; nothing
/// here is updated incrementally or persisted.
#[derive(Debug, Clone)]
pub struct DashboardViews {
    pub spec: FilterSpec,
    pub rows: Vec<Record>,
    pub summary: Summary,
    pub by_continent: Vec<ContinentGroup>,
    pub distribution: Vec<ContinentGroup>,
}

impl DashboardViews {
    /// Filters the dataset with `spec` and derives all views from the
    /// resulting selection.
    pub fn build(spec: FilterSpec, records: &[Record]) -> Self {
        let rows = spec.apply(records);
        let summary = Summary::from_records(&rows);
        let by_continent = Aggregator::population_by_continent(&rows);
        let distribution = Aggregator::population_distribution(&rows);
        Self { spec, rows, summary, by_continent, distribution }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use gapdash_shared_kernel::value_objects::{Continent, Population, Year};

    use super::*;
    use crate::filter::PopulationRange;

    fn dataset() -> Vec<Record> {
        vec![
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
                .population(50)
                .life_expectancy(75.0)
                .gdp_per_capita(3_000.0)
                .build(),
        ]
    }

    fn asia_spec() -> FilterSpec {
        let continents: HashSet<_> = [Continent::Asia].into_iter().collect();
        FilterSpec::new(
            Year::new(2007),
            continents,
            PopulationRange::new(Population::zero(), Population::new(1_000)),
        )
    }

    #[test]
    fn builds_all_views_from_one_pass() {
        let views = DashboardViews::build(asia_spec(), &dataset());

        let names: Vec<_> = views.rows.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(names, vec!["X", "Y"]);

        assert_eq!(views.summary.countries(), 2);
        assert_eq!(views.summary.total_population().value(), 300);
        assert_eq!(views.summary.mean_life_expectancy().unwrap().value(), 75.0);
        assert_eq!(views.summary.mean_gdp_per_capita().unwrap().value(), 1_500.0);

        assert_eq!(views.by_continent.len(), 1);
        assert_eq!(views.by_continent[0].continent, Continent::Asia);
        assert_eq!(views.by_continent[0].population.value(), 300);

        assert_eq!(views.distribution, views.by_continent);
    }

    #[test]
    fn rebuild_on_identical_inputs_is_identical() {
        let records = dataset();
        let first = DashboardViews::build(asia_spec(), &records);
        let second = DashboardViews::build(asia_spec(), &records);

        assert_eq!(first.rows, second.rows);
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.by_continent, second.by_continent);
        assert_eq!(first.distribution, second.distribution);
    }

    #[test]
    fn empty_selection_builds_coherent_views() {
        let spec = FilterSpec::new(Year::new(1800), [Continent::Asia].into_iter().collect(),
            PopulationRange::full());
        let views = DashboardViews::build(spec, &dataset());

        assert!(views.rows.is_empty());
        assert_eq!(views.summary.countries(), 0);
        assert_eq!(views.summary.total_population(), Population::zero());
        assert!(views.summary.mean_life_expectancy().is_err());
        assert!(views.by_continent.is_empty());
        assert!(views.distribution.is_empty());
    }
}
