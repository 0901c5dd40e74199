// crates/ports/src/dataset.rs
use gapdash_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// DTO for one country-year observation as delivered by a dataset
/// adapter. Field names follow the Gapminder column headers; adapters
/// validate shape (non-negative measures, non-empty country) before
/// handing records over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDto {
    pub country: String,
    pub continent: String,
    pub year: i32,
    #[serde(rename = "lifeExp")]
    pub life_exp: f64,
    pub pop: u64,
    #[serde(rename = "gdpPercap")]
    pub gdp_percap: f64,
}

/// Port for loading the immutable record sequence.
///
/// A source is read once per session; the returned order is the dataset's
/// own order and is preserved by every downstream stage.
pub trait DatasetSource: Send + Sync {
    fn load(&self) -> Result<Vec<RecordDto>>;

    /// Human-readable origin of the data, used in logs and messages.
    fn origin(&self) -> String;
}
