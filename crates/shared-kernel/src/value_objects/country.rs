// crates/shared-kernel/src/value_objects/country.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Country name as it appears in the source dataset. Case-sensitive;
/// two rows refer to the same country iff their names are byte-equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryName(String);

impl CountryName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for CountryName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CountryName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for CountryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
