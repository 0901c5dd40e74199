// crates/domain/src/options.rs
use serde::{Deserialize, Serialize};

/// Keys the presentation layer may order records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Country,
    Continent,
    Year,
    Population,
    LifeExpectancy,
    GdpPerCapita,
}
