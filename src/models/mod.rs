//! Domain models for the pedigree loader
//!
//! This module contains the raw input record, the verified `Person` entity
//! and the shared enum types.

pub mod person;
pub mod raw_record;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use person::Person;
pub use raw_record::{RawRecord, RawRecordParser};
pub use traits::EntityModel;
pub use types::{Gender, ParentRole};
