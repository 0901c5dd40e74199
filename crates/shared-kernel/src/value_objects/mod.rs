pub mod continent;
pub mod country;
pub mod measures;
pub mod year;

pub use continent::Continent;
pub use country::CountryName;
pub use measures::{GdpPerCapita, LifeExpectancy, Population};
pub use year::Year;
