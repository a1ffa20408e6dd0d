//! Two-pass validation pipeline
//!
//! Lines are parsed into raw records, pass 1 builds the identity registry,
//! and pass 2 resolves parent references against it. Pass 2 only starts once
//! pass 1 has seen every record, because a parent may appear after its child.

pub mod identity;
pub mod relatedness;
pub mod statistics;

pub use identity::IdentityPass;
pub use relatedness::ReferenceResolver;
pub use statistics::LoadStatistics;

use crate::collections::PersonRegistry;
use crate::config::LoaderConfig;
use crate::error::{ErrorReport, Pass};
use crate::models::{RawRecord, RawRecordParser};

/// Result of one pipeline run
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// People with unique ids and fully resolved parents
    pub registry: PersonRegistry,
    /// Every rejected record, in discovery order
    pub errors: ErrorReport,
    pub statistics: LoadStatistics,
}

impl LoadOutcome {
    #[must_use]
    pub fn into_parts(self) -> (PersonRegistry, ErrorReport) {
        (self.registry, self.errors)
    }

    /// Whether any input was rejected
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Orchestrates parsing and both validation passes
///
/// The pipeline holds only configuration. Every call to [`run`](Self::run)
/// builds a fresh registry and error report, so runs never share state.
#[derive(Debug, Clone, Default)]
pub struct ValidationPipeline {
    config: LoaderConfig,
}

impl ValidationPipeline {
    #[must_use]
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Split every line into a record; malformed lines are reported and skipped
    fn parse_lines<I, S>(&self, lines: I, errors: &mut ErrorReport) -> (Vec<RawRecord>, usize)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parser = RawRecordParser::new(&self.config);
        let mut records = Vec::new();
        let mut lines_read = 0;

        for (index, line) in lines.into_iter().enumerate() {
            let row = index + 1;
            lines_read = row;
            match parser.parse(line.as_ref(), row) {
                Ok(record) => records.push(record),
                Err(error) => errors.push(row, Pass::Parse, error),
            }
        }

        (records, lines_read)
    }

    /// Run the whole pipeline over an already-open sequence of lines
    ///
    /// Never fails: rejected input shows up in the returned error report while
    /// every verified person is still delivered.
    pub fn run<I, S>(&self, lines: I) -> LoadOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = PersonRegistry::new();
        let mut errors = ErrorReport::new();

        let (records, lines_read) = self.parse_lines(lines, &mut errors);
        log::info!(
            "Parsed {} of {} lines into records",
            records.len(),
            lines_read
        );

        IdentityPass::new(&mut registry).run(&records, &mut errors);
        let admitted = registry.len();

        ReferenceResolver::new(&self.config, &mut registry).resolve(&records, &mut errors);

        let statistics = LoadStatistics {
            lines_read,
            parsed: records.len(),
            admitted,
            verified: registry.len(),
            ..LoadStatistics::default()
        }
        .with_errors(&errors);

        LoadOutcome {
            registry,
            errors,
            statistics,
        }
    }
}

/// Run the pipeline with the default configuration
///
/// Returns the verified registry and the aggregated error report.
pub fn run<I, S>(lines: I) -> (PersonRegistry, ErrorReport)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ValidationPipeline::default().run(lines).into_parts()
}
