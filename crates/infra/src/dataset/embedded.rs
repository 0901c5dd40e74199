// crates/infra/src/dataset/embedded.rs
use gapdash_ports::dataset::{DatasetSource, RecordDto};
use gapdash_shared_kernel::Result;

use super::read_records;

/// Built-in Gapminder excerpt used when no dataset file is given:
/// fifteen countries across all five continents for 1997, 2002 and 2007.
const SAMPLE: &str = include_str!("gapminder_sample.csv");

const ORIGIN: &str = "built-in sample";

#[derive(Debug, Default)]
pub struct EmbeddedDatasetSource;

impl EmbeddedDatasetSource {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetSource for EmbeddedDatasetSource {
    fn load(&self) -> Result<Vec<RecordDto>> {
        let records = read_records(SAMPLE.as_bytes(), ORIGIN)?;
        Ok(records)
    }

    fn origin(&self) -> String {
        ORIGIN.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sample_parses_cleanly() {
        let records = EmbeddedDatasetSource::new().load().expect("sample is well-formed");
        assert_eq!(records.len(), 45);
    }

    #[test]
    fn sample_covers_all_continents_and_years() {
        let records = EmbeddedDatasetSource::new().load().expect("sample is well-formed");

        let continents: HashSet<_> = records.iter().map(|r| r.continent.clone()).collect();
        assert_eq!(continents.len(), 5);

        let years: HashSet<_> = records.iter().map(|r| r.year).collect();
        assert_eq!(years, [1997, 2002, 2007].into_iter().collect());
    }
}
