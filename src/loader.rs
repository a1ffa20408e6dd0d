//! Pedigree file loading utilities
//!
//! The boundary between the file system and the validation pipeline: obtains
//! the input lines and hands them to [`ValidationPipeline::run`].

use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::algorithm::{LoadOutcome, ValidationPipeline};
use crate::error::util::safe_open_file;
use crate::error::{LoaderError, Result};

/// Read every line of `reader`, without line terminators
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .enumerate()
        .map(|(index, line)| {
            line.map_err(|e| LoaderError::io(format!("Failed to read line {}", index + 1), e))
        })
        .collect()
}

/// Load a pedigree from any buffered reader
pub fn load_reader<R: BufRead>(reader: R, pipeline: &ValidationPipeline) -> Result<LoadOutcome> {
    let lines = read_lines(reader)?;
    log::debug!("Read {} lines from input", lines.len());
    Ok(pipeline.run(lines))
}

/// Load a pedigree file from disk
pub fn load_file(path: &Path, pipeline: &ValidationPipeline) -> Result<LoadOutcome> {
    let file = safe_open_file(path, "reading pedigree records")?;
    log::info!("Loading pedigree records from: {}", path.display());

    let lines = read_lines(BufReader::new(file)).map_err(|e| match e {
        LoaderError::Io { context, source } => LoaderError::Io {
            context: format!("{context} of {}", path.display()),
            source,
        },
        other => other,
    })?;

    Ok(pipeline.run(lines))
}
