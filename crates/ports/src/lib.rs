//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines the traits that abstract external concerns:
//!
//! - [`dataset`]: loading the tabular country-year dataset
//!
//! Ports keep the domain and application layers independent of any
//! specific ingestion format or storage.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod dataset;

pub use dataset::{DatasetSource, RecordDto};
