//! Relatedness pass (pass 2)
//!
//! Resolves the mother and father references of every admitted record against
//! the registry built by pass 1, then purges every child with an unresolved
//! reference.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::collections::PersonRegistry;
use crate::config::LoaderConfig;
use crate::error::{ErrorReport, Pass, RecordError};
use crate::models::{ParentRole, RawRecord};

/// Attaches parent links and removes children whose links cannot be resolved
#[derive(Debug)]
pub struct ReferenceResolver<'a> {
    config: &'a LoaderConfig,
    registry: &'a mut PersonRegistry,
}

impl<'a> ReferenceResolver<'a> {
    #[must_use]
    pub fn new(config: &'a LoaderConfig, registry: &'a mut PersonRegistry) -> Self {
        Self { config, registry }
    }

    /// Check one parent reference of `record`
    ///
    /// Returns the parent id to link, `None` for the sentinel, or the reason
    /// the reference is unusable.
    fn check_parent<'r>(
        &self,
        record: &'r RawRecord,
        role: ParentRole,
        rejected: &FxHashSet<&str>,
    ) -> Result<Option<&'r str>, RecordError> {
        let parent_id = record.parent_id(role);
        if self.config.is_null_id(parent_id) {
            return Ok(None);
        }

        if rejected.contains(parent_id) {
            return Err(RecordError::RejectedParent {
                child: record.id.clone(),
                role,
                parent_id: parent_id.to_string(),
            });
        }
        let parent = self
            .registry
            .get(parent_id)
            .ok_or_else(|| RecordError::MissingParent {
                child: record.id.clone(),
                role,
                parent_id: parent_id.to_string(),
            })?;

        if self.config.check_parent_gender && parent.gender != role.expected_gender() {
            return Err(RecordError::ParentGenderMismatch {
                child: record.id.clone(),
                role,
                parent_id: parent_id.to_string(),
                expected: role.expected_gender(),
                actual: parent.gender,
            });
        }

        Ok(Some(parent_id))
    }

    /// Ids of every candidate that cannot be verified
    ///
    /// A candidate is rejected when one of its references fails on its own,
    /// or names a person that is itself rejected. Direct failures seed a
    /// worklist which is then spread through a parent-to-children index, so
    /// every candidate is checked once whatever the row order.
    fn rejection_closure<'r>(&self, candidates: &[&'r RawRecord]) -> FxHashSet<&'r str> {
        let none_rejected = FxHashSet::default();
        let mut children: FxHashMap<&'r str, Vec<&'r str>> = FxHashMap::default();
        let mut rejected: FxHashSet<&'r str> = FxHashSet::default();
        let mut pending = VecDeque::new();

        for &record in candidates {
            let id = record.id.as_str();
            let unresolved = ParentRole::ALL
                .iter()
                .any(|&role| self.check_parent(record, role, &none_rejected).is_err());
            if unresolved {
                if rejected.insert(id) {
                    pending.push_back(id);
                }
                continue;
            }
            for role in ParentRole::ALL {
                let parent_id = record.parent_id(role);
                if !self.config.is_null_id(parent_id) {
                    children.entry(parent_id).or_default().push(id);
                }
            }
        }
        let direct = rejected.len();

        while let Some(parent_id) = pending.pop_front() {
            for &child in children.get(parent_id).into_iter().flatten() {
                if rejected.insert(child) {
                    pending.push_back(child);
                }
            }
        }

        log::debug!(
            "Rejection closure: {} direct, {} cascaded",
            direct,
            rejected.len() - direct
        );
        rejected
    }

    /// Resolve every admitted record in row order
    ///
    /// Records whose id did not survive pass 1 are skipped. One error is
    /// reported per failing role, mother before father. Returns the purged ids
    /// in ascending order.
    pub fn resolve(&mut self, records: &[RawRecord], errors: &mut ErrorReport) -> Vec<String> {
        let candidates: Vec<&RawRecord> = records
            .iter()
            .filter(|record| self.registry.contains(&record.id))
            .collect();
        let rejected = self.rejection_closure(&candidates);

        for record in &candidates {
            for role in ParentRole::ALL {
                match self.check_parent(record, role, &rejected) {
                    Ok(Some(parent_id)) => {
                        if let Some(child) = self.registry.get_mut(&record.id) {
                            child.set_parent(role, parent_id);
                        }
                    }
                    Ok(None) => {}
                    Err(error) => errors.push(record.row, Pass::Relatedness, error),
                }
            }
        }

        let mut purged: Vec<String> = rejected.into_iter().map(str::to_string).collect();
        purged.sort_unstable();
        for id in &purged {
            // Dropping the person discards any link attached above.
            self.registry.remove(id);
        }

        log::info!(
            "Relatedness pass verified {} of {} people ({} purged)",
            self.registry.len(),
            candidates.len(),
            purged.len()
        );

        purged
    }
}
