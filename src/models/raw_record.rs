//! Raw input records
//!
//! A `RawRecord` is one input line split into its positional fields. Nothing
//! about the field contents is checked here; that happens in pass 1.

use crate::config::LoaderConfig;
use crate::error::RecordError;
use crate::models::types::ParentRole;

/// One successfully split input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub id: String,
    pub name: String,
    pub father_id: String,
    pub mother_id: String,
    pub gender_code: String,
    /// 1-based line number in the input
    pub row: usize,
}

impl RawRecord {
    /// Number of fields on a well-formed line
    pub const FIELDS: usize = 5;

    /// Parse a line using the default tab delimiter
    pub fn from_line(line: &str, row: usize) -> Result<Self, RecordError> {
        RawRecordParser::default().parse(line, row)
    }

    /// The identifier this record asserts for the given parent role
    #[must_use]
    pub fn parent_id(&self, role: ParentRole) -> &str {
        match role {
            ParentRole::Mother => &self.mother_id,
            ParentRole::Father => &self.father_id,
        }
    }
}

/// Splits input lines into [`RawRecord`]s
#[derive(Debug, Clone, Copy)]
pub struct RawRecordParser {
    delimiter: char,
}

impl Default for RawRecordParser {
    fn default() -> Self {
        Self { delimiter: '\t' }
    }
}

impl RawRecordParser {
    #[must_use]
    pub const fn new(config: &LoaderConfig) -> Self {
        Self {
            delimiter: config.delimiter,
        }
    }

    /// Split `line` into a record, or report how many fields it had
    pub fn parse(&self, line: &str, row: usize) -> Result<RawRecord, RecordError> {
        // Only the line terminator is stripped; trailing empty fields count.
        let line = line.trim_end_matches(['\r', '\n']);
        let fields: Vec<&str> = line.split(self.delimiter).collect();

        match fields[..] {
            [id, name, father_id, mother_id, gender_code] => Ok(RawRecord {
                id: id.to_string(),
                name: name.to_string(),
                father_id: father_id.to_string(),
                mother_id: mother_id.to_string(),
                gender_code: gender_code.to_string(),
                row,
            }),
            _ => Err(RecordError::MalformedRow {
                row,
                fields: fields.len(),
                expected: RawRecord::FIELDS,
            }),
        }
    }
}
