// crates/infra/src/dataset/csv_file.rs
use std::fs::File;
use std::path::PathBuf;

use gapdash_ports::dataset::{DatasetSource, RecordDto};
use gapdash_shared_kernel::{InfrastructureError, Result};

use super::read_records;

/// Dataset adapter reading a Gapminder-shaped CSV file
/// (`country,continent,year,lifeExp,pop,gdpPercap`).
pub struct CsvDatasetSource {
    path: PathBuf,
}

impl CsvDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl DatasetSource for CsvDatasetSource {
    fn load(&self) -> Result<Vec<RecordDto>> {
        let file = File::open(&self.path).map_err(|source| InfrastructureError::FileRead {
            path: self.path.clone(),
            source,
        })?;
        let records = read_records(file, &self.path.display().to_string())?;
        Ok(records)
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}
