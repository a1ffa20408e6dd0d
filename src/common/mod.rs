//! Common traits
//!
//! Shared interfaces used by the models and collections without either side
//! depending on the other's concrete types.

pub mod traits;

pub use traits::*;
