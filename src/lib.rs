//! A Rust library for loading tab-delimited pedigree files into a verified
//! registry of people linked to their biological parents.
//!
//! Every defect in the input (malformed rows, unknown gender codes, duplicate
//! ids, dangling parent references) is isolated and reported, while every
//! consistent record is still delivered.

pub mod algorithm;
pub mod collections;
pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;

// Re-export the most common types for easier use
pub use algorithm::validation::run;
pub use algorithm::{LoadOutcome, LoadStatistics, ValidationPipeline};
pub use collections::PersonRegistry;
pub use config::{LoaderConfig, OutputFormat};
pub use error::{ErrorRecord, ErrorReport, LoaderError, Pass, RecordError, Result};
pub use models::{Gender, ParentRole, Person, RawRecord};

// Loading entry points
pub use loader::{load_file, load_reader};
