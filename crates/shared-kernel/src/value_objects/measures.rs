// crates/shared-kernel/src/value_objects/measures.rs
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Population headcount. Wide enough for sums across all countries
/// (world totals run into the billions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Population(u64);

impl Population {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for Population {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Population {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Population {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl From<u64> for Population {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

/// Life expectancy at birth, in years.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LifeExpectancy(f64);

impl LifeExpectancy {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for LifeExpectancy {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// GDP per capita in inflation-adjusted dollars.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GdpPerCapita(f64);

impl GdpPerCapita {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for GdpPerCapita {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

mod display {
    use std::fmt;

    use super::{GdpPerCapita, LifeExpectancy, Population};

    impl fmt::Display for Population {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }

    impl fmt::Display for LifeExpectancy {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:.2}", self.value())
        }
    }

    impl fmt::Display for GdpPerCapita {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:.2}", self.value())
        }
    }
}
