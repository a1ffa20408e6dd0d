//! Person entity model
//!
//! A `Person` is a verified individual. Parents are held as identifiers into
//! the owning [`PersonRegistry`](crate::collections::PersonRegistry), never as
//! owning pointers, so the registry is the single owner of every person.

use std::fmt;

use serde::Serialize;

use super::traits::EntityModel;
use super::types::{Gender, ParentRole};

/// A person admitted to the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    /// Unique identifier
    pub id: String,
    /// Name as given in the input
    pub name: String,
    pub gender: Gender,
    /// Identifier of the resolved mother, if any
    pub mother: Option<String>,
    /// Identifier of the resolved father, if any
    pub father: Option<String>,
}

impl Person {
    /// Create a person with no parents attached
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gender,
            mother: None,
            father: None,
        }
    }

    /// Identifier of the parent in the given role
    #[must_use]
    pub fn parent(&self, role: ParentRole) -> Option<&str> {
        match role {
            ParentRole::Mother => self.mother.as_deref(),
            ParentRole::Father => self.father.as_deref(),
        }
    }

    /// Attach a parent link for the given role
    pub fn set_parent(&mut self, role: ParentRole, parent_id: impl Into<String>) {
        let parent_id = Some(parent_id.into());
        match role {
            ParentRole::Mother => self.mother = parent_id,
            ParentRole::Father => self.father = parent_id,
        }
    }

    /// Whether the given id is one of this person's parents
    #[must_use]
    pub fn has_parent(&self, parent_id: &str) -> bool {
        ParentRole::ALL
            .iter()
            .any(|&role| self.parent(role) == Some(parent_id))
    }
}

impl EntityModel for Person {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) mother: {} father: {}",
            self.id,
            self.name,
            self.gender.code(),
            self.mother.as_deref().unwrap_or("-"),
            self.father.as_deref().unwrap_or("-"),
        )
    }
}
