//! Load statistics and summaries

use std::fmt;

use crate::error::{ErrorReport, Pass};

/// Counts describing one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStatistics {
    /// Lines consumed from the source
    pub lines_read: usize,
    /// Lines that split into a record
    pub parsed: usize,
    /// People in the registry after pass 1
    pub admitted: usize,
    /// People in the final registry
    pub verified: usize,
    pub parse_errors: usize,
    pub individual_errors: usize,
    pub relatedness_errors: usize,
}

impl LoadStatistics {
    /// Fill in the error counts from a finished report
    #[must_use]
    pub fn with_errors(mut self, errors: &ErrorReport) -> Self {
        self.parse_errors = errors.count_for(Pass::Parse);
        self.individual_errors = errors.count_for(Pass::Individual);
        self.relatedness_errors = errors.count_for(Pass::Relatedness);
        self
    }

    /// Records that did not make it into the final registry
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.lines_read.saturating_sub(self.verified)
    }
}

impl fmt::Display for LoadStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pedigree Load Summary:")?;
        writeln!(f, "  Lines Read: {}", self.lines_read)?;
        writeln!(f, "  Records Parsed: {}", self.parsed)?;
        writeln!(f, "  Admitted After Identity Pass: {}", self.admitted)?;
        writeln!(f, "  Verified People: {}", self.verified)?;
        writeln!(f, "  Parse Errors: {}", self.parse_errors)?;
        writeln!(f, "  Individual Errors: {}", self.individual_errors)?;
        write!(f, "  Relatedness Errors: {}", self.relatedness_errors)
    }
}
