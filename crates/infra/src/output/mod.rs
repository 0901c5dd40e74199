pub mod config;
pub mod formatters;
pub(crate) mod utils;
pub mod writer;

pub use config::{RenderConfig, RenderConfigBuilder};
pub use writer::OutputWriter;

/// Workspace version stamped into structured output.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
