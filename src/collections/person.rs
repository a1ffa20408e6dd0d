//! Person registry
//!
//! The identity registry: owns every admitted [`Person`] and enforces that an
//! identifier maps to at most one of them.

use crate::collections::GenericCollection;
use crate::common::traits::ModelCollection;
use crate::models::{Gender, ParentRole, Person};

/// Specialized collection for Person models
#[derive(Debug, Clone, Default)]
pub struct PersonRegistry {
    /// Base generic collection implementation
    inner: GenericCollection<Person>,
}

impl PersonRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: GenericCollection::new(),
        }
    }

    /// Create a registry from a vector of people
    #[must_use]
    pub fn from_people(people: Vec<Person>) -> Self {
        Self {
            inner: GenericCollection::from_models(people),
        }
    }

    /// Get a person by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Person> {
        self.inner.get_by(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Person> {
        self.inner.get_mut_by(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.inner.get_by(id).is_some()
    }

    /// Insert a person, returning the person previously stored under its id
    pub fn insert(&mut self, person: Person) -> Option<Person> {
        self.inner.add(person)
    }

    /// Remove a person and every link it held
    pub fn remove(&mut self, id: &str) -> Option<Person> {
        self.inner.remove_by(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// All ids in ascending order
    #[must_use]
    pub fn ids_sorted(&self) -> Vec<&str> {
        self.inner
            .ids_sorted()
            .into_iter()
            .map(String::as_str)
            .collect()
    }

    /// Iterate people in ascending id order
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Person> {
        self.inner.iter_sorted()
    }

    /// The registered parent of `person` in the given role
    #[must_use]
    pub fn parent_of(&self, person: &Person, role: ParentRole) -> Option<&Person> {
        person.parent(role).and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn mother_of(&self, person: &Person) -> Option<&Person> {
        self.parent_of(person, ParentRole::Mother)
    }

    #[must_use]
    pub fn father_of(&self, person: &Person) -> Option<&Person> {
        self.parent_of(person, ParentRole::Father)
    }

    /// People naming `id` as mother or father, in ascending id order
    #[must_use]
    pub fn children_of(&self, id: &str) -> Vec<&Person> {
        self.inner.filter(|person| person.has_parent(id))
    }

    /// Get people by gender
    #[must_use]
    pub fn by_gender(&self, gender: Gender) -> Vec<&Person> {
        self.inner.filter(|person| person.gender == gender)
    }

    /// Whether every parent link points at a registered person
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.iter_sorted().all(|person| {
            ParentRole::ALL
                .iter()
                .filter_map(|&role| person.parent(role))
                .all(|parent_id| self.contains(parent_id))
        })
    }
}

impl ModelCollection<Person> for PersonRegistry {
    fn add(&mut self, person: Person) -> Option<Person> {
        self.inner.add(person)
    }

    fn get(&self, id: &String) -> Option<&Person> {
        self.inner.get(id)
    }

    fn remove(&mut self, id: &String) -> Option<Person> {
        self.inner.remove(id)
    }

    fn count(&self) -> usize {
        self.inner.count()
    }

    fn filter<F>(&self, predicate: F) -> Vec<&Person>
    where
        F: Fn(&Person) -> bool,
    {
        self.inner.filter(predicate)
    }
}

impl PartialEq for PersonRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter_sorted().eq(other.iter_sorted())
    }
}

impl Eq for PersonRegistry {}
