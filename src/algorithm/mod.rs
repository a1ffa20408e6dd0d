//! Algorithms over loaded pedigree data
//!
//! Currently this is the two-pass validation pipeline that turns raw input
//! lines into a verified person registry.

pub mod validation;

pub use validation::{LoadOutcome, LoadStatistics, ValidationPipeline};
