//! Configuration for the pedigree loader.

use std::fmt;

/// How the verified registry is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per person
    #[default]
    Text,
    /// A JSON array of person objects
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Configuration for the validation pipeline and its reports
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Identifier meaning "no parent"; never looked up in the registry
    pub null_id: String,
    /// Field separator of the input lines
    pub delimiter: char,
    /// Reject mothers that are not Female and fathers that are not Male
    pub check_parent_gender: bool,
    /// Rendering of the verified registry
    pub output_format: OutputFormat,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            null_id: "0".to_string(),
            delimiter: '\t',
            check_parent_gender: false,
            output_format: OutputFormat::Text,
        }
    }
}

impl LoaderConfig {
    #[must_use]
    pub fn with_null_id(mut self, null_id: impl Into<String>) -> Self {
        self.null_id = null_id.into();
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_parent_gender_check(mut self, enabled: bool) -> Self {
        self.check_parent_gender = enabled;
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Whether `id` is the "no parent" sentinel
    #[must_use]
    pub fn is_null_id(&self, id: &str) -> bool {
        id == self.null_id
    }
}

impl fmt::Display for LoaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loader Configuration:")?;
        writeln!(f, "  Null ID: {}", self.null_id)?;
        writeln!(f, "  Delimiter: {:?}", self.delimiter)?;
        writeln!(f, "  Check Parent Gender: {}", self.check_parent_gender)?;
        writeln!(f, "  Output Format: {}", self.output_format)?;
        Ok(())
    }
}
