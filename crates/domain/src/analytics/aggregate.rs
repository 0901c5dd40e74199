// crates/domain/src/analytics/aggregate.rs
use std::collections::HashMap;

use serde::Serialize;

use gapdash_shared_kernel::value_objects::{Continent, Population};

use crate::model::Record;

/// Aggregation results for a single continent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinentGroup {
    pub continent: Continent,
    pub population: Population,
    pub count: usize,
}

impl ContinentGroup {
    fn new(continent: Continent, population: Population, count: usize) -> Self {
        Self { continent, population, count }
    }
}

/// Aggregator grouping records by continent and summing population.
pub struct Aggregator;

impl Aggregator {
    /// Sums population per continent over the selection. Only continents
    /// with at least one record appear; keys are emitted in first-seen
    /// order so repeated runs over the same input render identically.
    pub fn population_by_continent(records: &[Record]) -> Vec<ContinentGroup> {
        let mut index: HashMap<Continent, usize> = HashMap::new();
        let mut groups: Vec<ContinentGroup> = Vec::new();

        for record in records {
            if let Some(&slot) = index.get(&record.continent) {
                groups[slot].population += record.population;
                groups[slot].count += 1;
            } else {
                index.insert(record.continent, groups.len());
                groups.push(ContinentGroup::new(record.continent, record.population, 1));
            }
        }

        groups
    }

    /// The distribution view consumed as proportions of the whole.
    ///
    /// Same sums as [`Self::population_by_continent`], exposed under its
    /// own name so the two consumers stay decoupled; normalisation to
    /// percentages is left to the presentation layer.
    pub fn population_distribution(records: &[Record]) -> Vec<ContinentGroup> {
        Self::population_by_continent(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::Summary;
    use crate::model::Record;

    fn record(country: &str, continent: Continent, population: u64) -> Record {
        Record::builder(country, continent)
            .year(2007)
            .population(population)
            .build()
    }

    #[test]
    fn groups_in_first_seen_order() {
        let records = vec![
            record("X", Continent::Asia, 100),
            record("Z", Continent::Europe, 50),
            record("Y", Continent::Asia, 200),
        ];

        let groups = Aggregator::population_by_continent(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].continent, Continent::Asia);
        assert_eq!(groups[0].population.value(), 300);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[1].continent, Continent::Europe);
        assert_eq!(groups[1].population.value(), 50);
        assert_eq!(groups[1].count, 1);
    }

    #[test]
    fn no_entries_for_absent_continents() {
        let records = vec![record("X", Continent::Asia, 100)];
        let groups = Aggregator::population_by_continent(&records);
        assert_eq!(groups.len(), 1);
        assert!(groups.iter().all(|g| !g.population.is_zero() || g.count > 0));
    }

    #[test]
    fn empty_selection_yields_no_groups() {
        assert!(Aggregator::population_by_continent(&[]).is_empty());
    }

    #[test]
    fn group_totals_match_summary_total() {
        let records = vec![
            record("X", Continent::Asia, 100),
            record("Y", Continent::Asia, 200),
            record("Z", Continent::Europe, 50),
            record("W", Continent::Oceania, 7),
        ];

        let summary = Summary::from_records(&records);
        let grouped: u64 = Aggregator::population_by_continent(&records)
            .iter()
            .map(|g| g.population.value())
            .sum();
        assert_eq!(grouped, summary.total_population().value());
    }

    #[test]
    fn distribution_matches_absolute_aggregation() {
        let records = vec![
            record("X", Continent::Asia, 100),
            record("Z", Continent::Europe, 50),
        ];

        assert_eq!(
            Aggregator::population_distribution(&records),
            Aggregator::population_by_continent(&records)
        );
    }
}
