//! Identity pass (pass 1)
//!
//! Admits each parsed record to the registry as a parentless person, rejecting
//! unknown gender codes and identifiers that occur on more than one row.

use rustc_hash::FxHashSet;

use crate::collections::PersonRegistry;
use crate::error::{ErrorReport, Pass, RecordError};
use crate::models::{Gender, Person, RawRecord};

/// Builds the identity registry from raw records
#[derive(Debug)]
pub struct IdentityPass<'a> {
    registry: &'a mut PersonRegistry,
    /// Ids that may never be admitted again during this pass
    bad_ids: FxHashSet<String>,
}

impl<'a> IdentityPass<'a> {
    #[must_use]
    pub fn new(registry: &'a mut PersonRegistry) -> Self {
        Self {
            registry,
            bad_ids: FxHashSet::default(),
        }
    }

    /// Try to admit a single record
    ///
    /// A second occurrence of an id evicts the first one, and the id stays
    /// blocked for every later row.
    pub fn admit(&mut self, record: &RawRecord) -> Result<(), RecordError> {
        let evicted = self.registry.remove(&record.id).is_some();
        if evicted || self.bad_ids.contains(&record.id) {
            self.bad_ids.insert(record.id.clone());
            return Err(RecordError::DuplicateId {
                id: record.id.clone(),
            });
        }

        let gender: Gender = record.gender_code.parse()?;
        self.registry
            .insert(Person::new(record.id.as_str(), record.name.as_str(), gender));
        Ok(())
    }

    /// Admit every record in row order, collecting failures into `errors`
    ///
    /// Returns the ids excluded from the registry.
    pub fn run(mut self, records: &[RawRecord], errors: &mut ErrorReport) -> FxHashSet<String> {
        for record in records {
            if let Err(error) = self.admit(record) {
                // Any rejected row blocks its id, so a later row cannot claim it.
                self.bad_ids.insert(record.id.clone());
                errors.push(record.row, Pass::Individual, error);
            }
        }

        log::info!(
            "Identity pass admitted {} of {} records ({} ids excluded)",
            self.registry.len(),
            records.len(),
            self.bad_ids.len()
        );

        self.bad_ids
    }
}
