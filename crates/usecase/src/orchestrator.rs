use gapdash_domain::{analytics::DashboardViews, filter::FilterSpec, model::Record};
use gapdash_ports::dataset::{DatasetSource, RecordDto};
use gapdash_shared_kernel::{
    ErrorContext, GapdashError, Result,
    value_objects::{CountryName, GdpPerCapita, LifeExpectancy, Population, Year},
};

/// Orchestrates one dashboard computation: load records through the
/// dataset port, map them into the domain, filter and derive views.
///
/// Each run is an independent, stateless computation; nothing is shared
/// between invocations.
pub struct BuildDashboard<'a> {
    source: &'a dyn DatasetSource,
}

impl<'a> BuildDashboard<'a> {
    pub fn new(source: &'a dyn DatasetSource) -> Self {
        Self { source }
    }

    pub fn run(&self, spec: &FilterSpec) -> Result<DashboardViews> {
        let records = self.load()?;
        Ok(DashboardViews::build(spec.clone(), &records))
    }

    fn load(&self) -> Result<Vec<Record>> {
        let dtos = self
            .source
            .load()
            .with_context(|| format!("loading dataset from {}", self.source.origin()))?;
        dtos.into_iter().map(dto_to_record).collect()
    }
}

fn dto_to_record(dto: RecordDto) -> Result<Record> {
    let continent = dto.continent.parse().map_err(GapdashError::from)?;
    Ok(Record::new(
        CountryName::new(dto.country),
        continent,
        Year::new(dto.year),
        Population::new(dto.pop),
        LifeExpectancy::new(dto.life_exp),
        GdpPerCapita::new(dto.gdp_percap),
    ))
}
