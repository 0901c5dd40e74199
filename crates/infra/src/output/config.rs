// crates/infra/src/output/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use gapdash_domain::analytics::SortSpec;

use crate::options::{OutputFormat, OutputMode};

/// Rendering options applied to the derived views; purely a presentation
/// concern, the views themselves are never affected.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct RenderConfig {
    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    #[builder(default)]
    pub output_mode: OutputMode,
    /// Sort keys applied to the record listing; the empty list keeps
    /// source order.
    #[builder(default)]
    pub sort: Vec<SortSpec>,
    #[builder(default)]
    pub top_n: Option<usize>,
    #[builder(default)]
    pub by_limit: Option<usize>,
    #[builder(default)]
    pub total_row: bool,
    /// Adds a population-share column to record listings.
    #[builder(default)]
    pub ratio: bool,
    #[builder(default)]
    pub output: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            output_mode: OutputMode::Full,
            sort: vec![],
            top_n: None,
            by_limit: None,
            total_row: false,
            ratio: false,
            output: None,
        }
    }
}
