// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod dataset;
pub mod options;
pub mod output;
#[cfg(feature = "watch")]
pub mod watch;
