// crates/domain/src/model.rs
use serde::Serialize;

use gapdash_shared_kernel::value_objects::{
    Continent, CountryName, GdpPerCapita, LifeExpectancy, Population, Year,
};

/// One country-year observation from the source dataset.
///
/// Records are immutable once constructed; every pipeline stage produces
/// freshly allocated output and never mutates its input in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub country: CountryName,
    pub continent: Continent,
    pub year: Year,
    pub population: Population,
    pub life_expectancy: LifeExpectancy,
    pub gdp_per_capita: GdpPerCapita,
}

impl Record {
    pub fn new(
        country: CountryName,
        continent: Continent,
        year: Year,
        population: Population,
        life_expectancy: LifeExpectancy,
        gdp_per_capita: GdpPerCapita,
    ) -> Self {
        Self { country, continent, year, population, life_expectancy, gdp_per_capita }
    }

    pub fn builder(country: impl Into<CountryName>, continent: Continent) -> RecordBuilder {
        RecordBuilder::new(country, continent)
    }
}

pub struct RecordBuilder {
    country: CountryName,
    continent: Continent,
    year: Year,
    population: Population,
    life_expectancy: LifeExpectancy,
    gdp_per_capita: GdpPerCapita,
}

impl RecordBuilder {
    pub fn new(country: impl Into<CountryName>, continent: Continent) -> Self {
        Self {
            country: country.into(),
            continent,
            year: Year::new(2007),
            population: Population::zero(),
            life_expectancy: LifeExpectancy::new(0.0),
            gdp_per_capita: GdpPerCapita::new(0.0),
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Year::new(year);
        self
    }

    pub fn population(mut self, population: u64) -> Self {
        self.population = Population::new(population);
        self
    }

    pub fn life_expectancy(mut self, life_expectancy: f64) -> Self {
        self.life_expectancy = LifeExpectancy::new(life_expectancy);
        self
    }

    pub fn gdp_per_capita(mut self, gdp_per_capita: f64) -> Self {
        self.gdp_per_capita = GdpPerCapita::new(gdp_per_capita);
        self
    }

    pub fn build(self) -> Record {
        Record {
            country: self.country,
            continent: self.continent,
            year: self.year,
            population: self.population,
            life_expectancy: self.life_expectancy,
            gdp_per_capita: self.gdp_per_capita,
        }
    }
}
