//! Aggregated error report for a single pipeline run

use std::fmt;

use super::RecordError;

/// The stage of the pipeline that rejected a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pass {
    /// Splitting a line into fields
    Parse,
    /// Identity and gender checks (pass 1)
    Individual,
    /// Parent reference resolution (pass 2)
    Relatedness,
}

impl Pass {
    /// Heading of the report section this pass belongs to
    #[must_use]
    pub const fn section_header(self) -> &'static str {
        match self {
            Self::Parse | Self::Individual => "- individual errors -",
            Self::Relatedness => "- relatedness errors -",
        }
    }
}

/// A rejected record together with the row it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// 1-based source row
    pub row: usize,
    /// Stage that detected the problem
    pub pass: Pass,
    /// What went wrong
    pub error: RecordError,
}

impl ErrorRecord {
    #[must_use]
    pub fn new(row: usize, pass: Pass, error: RecordError) -> Self {
        Self { row, pass, error }
    }

    /// The message part of the rendered line, without the row prefix
    #[must_use]
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.error)
    }
}

/// All errors of one run, in discovery order
///
/// Parse errors come first, then pass 1 errors, then pass 2 errors; inside
/// each group the rows ascend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReport {
    records: Vec<ErrorRecord>,
}

impl ErrorReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record error discovered at `row` during `pass`
    pub fn push(&mut self, row: usize, pass: Pass, error: RecordError) {
        log::debug!("Rejected row {row} during {pass:?}: {error}");
        self.records.push(ErrorRecord::new(row, pass, error));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorRecord> {
        self.records.iter()
    }

    /// Records discovered by the given pass
    pub fn for_pass(&self, pass: Pass) -> impl Iterator<Item = &ErrorRecord> {
        self.records.iter().filter(move |record| record.pass == pass)
    }

    /// Count of records discovered by the given pass
    #[must_use]
    pub fn count_for(&self, pass: Pass) -> usize {
        self.for_pass(pass).count()
    }

    /// Parse and pass 1 errors, reported together under one header
    #[must_use]
    pub fn individual_errors(&self) -> Vec<&ErrorRecord> {
        self.records
            .iter()
            .filter(|record| record.pass != Pass::Relatedness)
            .collect()
    }

    #[must_use]
    pub fn relatedness_errors(&self) -> Vec<&ErrorRecord> {
        self.for_pass(Pass::Relatedness).collect()
    }

    /// Rendered `row {row}: {message}` lines in report order
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ErrorRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a ErrorReport {
    type Item = &'a ErrorRecord;
    type IntoIter = std::slice::Iter<'a, ErrorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
