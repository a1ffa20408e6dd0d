//! Report rendering
//!
//! Formats the verified registry and the error sections of a run, and writes
//! them to stdout or to an append-mode report file.

use std::io::Write;

use itertools::Itertools;

use crate::collections::PersonRegistry;
use crate::config::OutputFormat;
use crate::error::{ErrorRecord, ErrorReport, LoaderError, Pass, Result};

/// Render the registry in ascending id order
pub fn render_registry(registry: &PersonRegistry, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(registry.iter_sorted().join("\n")),
        OutputFormat::Json => {
            let people: Vec<_> = registry.iter_sorted().collect();
            Ok(serde_json::to_string_pretty(&people)?)
        }
    }
}

fn render_section(header: &str, records: &[&ErrorRecord]) -> String {
    format!("\n{header}\n{}\n", records.iter().join("\n"))
}

/// Render the error report as one section per pass
///
/// Sections without errors are left out, so an empty report renders as an
/// empty string.
#[must_use]
pub fn render_errors(errors: &ErrorReport) -> String {
    let mut text = String::new();

    let individual = errors.individual_errors();
    if !individual.is_empty() {
        text.push_str(&render_section(Pass::Individual.section_header(), &individual));
    }

    let relatedness = errors.relatedness_errors();
    if !relatedness.is_empty() {
        text.push_str(&render_section(
            Pass::Relatedness.section_header(),
            &relatedness,
        ));
    }

    text
}

/// Write the error sections of a run to `sink`
pub fn write_errors<W: Write>(sink: &mut W, errors: &ErrorReport) -> Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    sink.write_all(render_errors(errors).as_bytes())
        .and_then(|()| sink.flush())
        .map_err(|e| LoaderError::io("Failed to write error report", e))
}

/// Write the verified registry to `sink`, one entry per line in text mode
pub fn write_registry<W: Write>(
    sink: &mut W,
    registry: &PersonRegistry,
    format: OutputFormat,
) -> Result<()> {
    let rendered = render_registry(registry, format)?;
    if rendered.is_empty() {
        return Ok(());
    }
    writeln!(sink, "{rendered}")
        .and_then(|()| sink.flush())
        .map_err(|e| LoaderError::io("Failed to write registry", e))
}

/// Emit one log entry per verified person, in ascending id order
pub fn log_verified(registry: &PersonRegistry) {
    for person in registry.iter_sorted() {
        log::info!("ID:{} is successfully loaded.", person.id);
    }
}
