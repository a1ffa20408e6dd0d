//! Error handling for the pedigree loader.
//!
//! Two layers of errors exist. [`RecordError`] describes why a single input
//! record was rejected; it is never fatal and always ends up in an
//! [`ErrorReport`]. [`LoaderError`] covers the I/O boundary around the
//! validation core (opening files, writing reports).

pub mod report;
pub mod util;

use std::io;
use std::path::PathBuf;

use crate::models::types::{Gender, ParentRole};

pub use report::{ErrorRecord, ErrorReport, Pass};

/// Reasons an individual record is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The line did not split into the expected number of fields
    #[error("has {fields} fields, not {expected}")]
    MalformedRow {
        /// 1-based source row
        row: usize,
        /// Number of fields actually found
        fields: usize,
        /// Number of fields required
        expected: usize,
    },

    /// The gender code matched neither recognized code
    #[error("invalid gender code '{code}'")]
    InvalidGender {
        /// The raw code as it appeared in the input
        code: String,
    },

    /// The identifier appeared on more than one row
    #[error("duplicate ID: {id}")]
    DuplicateId {
        /// The conflicting identifier
        id: String,
    },

    /// A parent reference names an identifier absent from the registry
    #[error("for {child} missing {role} {parent_id}")]
    MissingParent {
        /// Identifier of the referring child
        child: String,
        /// Which parent reference failed
        role: ParentRole,
        /// The identifier that could not be resolved
        parent_id: String,
    },

    /// A parent reference names a person that is itself rejected by the
    /// relatedness pass
    #[error("for {child} rejected {role} {parent_id}")]
    RejectedParent {
        /// Identifier of the referring child
        child: String,
        /// Which parent reference failed
        role: ParentRole,
        /// The identifier of the rejected parent
        parent_id: String,
    },

    /// A resolved parent has the wrong gender for its role
    #[error("for {child} {role} {parent_id} has gender {actual}, expected {expected}")]
    ParentGenderMismatch {
        /// Identifier of the referring child
        child: String,
        /// Which parent reference failed
        role: ParentRole,
        /// The referenced identifier
        parent_id: String,
        /// Gender required by the role
        expected: Gender,
        /// Gender the referenced person was registered with
        actual: Gender,
    },
}

/// Errors raised at the file boundary of the loader
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// Error opening, reading or writing a file or stream
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted
        context: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A path could not be used for the requested purpose
    #[error("{message}: {}", path.display())]
    InvalidPath {
        /// Why the path was refused
        message: String,
        /// The offending path
        path: PathBuf,
    },

    /// Error rendering the registry as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LoaderError {
    /// Wrap an I/O error with a description of the failed operation
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for loader operations
pub type Result<T> = std::result::Result<T, LoaderError>;
