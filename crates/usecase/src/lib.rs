//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters to
//! implement the dashboard use case:
//!
//! - [`orchestrator`]: load the dataset, apply the filter selection and
//!   derive the presentation views
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::BuildDashboard;
