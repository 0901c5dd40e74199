// crates/infra/src/dataset/mod.rs
pub mod csv_file;
pub mod embedded;

pub use csv_file::CsvDatasetSource;
pub use embedded::EmbeddedDatasetSource;

use gapdash_ports::dataset::RecordDto;
use gapdash_shared_kernel::{InfraResult, InfrastructureError};

/// Deserialises Gapminder-shaped CSV rows from any reader. Unknown
/// columns (iso_alpha, iso_num) are ignored; malformed rows fail the
/// whole load with their position attached.
pub(crate) fn read_records<R: std::io::Read>(reader: R, origin: &str) -> InfraResult<Vec<RecordDto>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<RecordDto>().enumerate() {
        let dto = row.map_err(|e| InfrastructureError::DatasetParse {
            origin: origin.to_string(),
            details: format!("row {}: {e}", index + 1),
        })?;
        validate(&dto, index, origin)?;
        records.push(dto);
    }

    log::debug!("loaded {} records from {origin}", records.len());
    Ok(records)
}

fn validate(dto: &RecordDto, index: usize, origin: &str) -> InfraResult<()> {
    let reject = |reason: String| InfrastructureError::DatasetParse {
        origin: origin.to_string(),
        details: format!("row {}: {reason}", index + 1),
    };

    if dto.country.trim().is_empty() {
        return Err(reject("empty country name".to_string()));
    }
    if dto.life_exp < 0.0 || !dto.life_exp.is_finite() {
        return Err(reject(format!("life expectancy out of range: {}", dto.life_exp)));
    }
    if dto.gdp_percap < 0.0 || !dto.gdp_percap.is_finite() {
        return Err(reject(format!("GDP per capita out of range: {}", dto.gdp_percap)));
    }
    Ok(())
}
