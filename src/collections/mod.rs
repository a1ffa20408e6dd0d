//! Standardized model collections
//!
//! This module provides a generic collection keyed by model identifier, and
//! the specialized `PersonRegistry` built on top of it.

pub mod person;

pub use person::PersonRegistry;

use std::borrow::Borrow;
use std::hash::Hash;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::common::traits::ModelCollection;
use crate::models::EntityModel;

/// Generic model collection implementation
///
/// Stores models by value in a hash map indexed by their ID. The collection is
/// the sole owner of its models; anything that relates two models does so by
/// identifier.
#[derive(Debug, Clone)]
pub struct GenericCollection<T: EntityModel> {
    /// Models indexed by ID
    items: FxHashMap<T::Id, T>,
}

impl<T: EntityModel> GenericCollection<T> {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: FxHashMap::default(),
        }
    }

    /// Create a collection from a vector of models
    #[must_use]
    pub fn from_models(models: Vec<T>) -> Self {
        let mut collection = Self::new();
        collection.add_all(models);
        collection
    }

    /// Look up a model by any borrowed form of its identifier
    pub fn get_by<Q>(&self, id: &Q) -> Option<&T>
    where
        T::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.get(id)
    }

    /// Mutable lookup by any borrowed form of the identifier
    pub fn get_mut_by<Q>(&mut self, id: &Q) -> Option<&mut T>
    where
        T::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.get_mut(id)
    }

    /// Remove a model by any borrowed form of its identifier
    pub fn remove_by<Q>(&mut self, id: &Q) -> Option<T>
    where
        T::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.remove(id)
    }

    /// All model IDs in ascending order
    #[must_use]
    pub fn ids_sorted(&self) -> Vec<&T::Id> {
        self.items.keys().sorted().collect()
    }

    /// Iterate models in ascending ID order
    pub fn iter_sorted(&self) -> impl Iterator<Item = &T> {
        self.items
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, model)| model)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: EntityModel> Default for GenericCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EntityModel> ModelCollection<T> for GenericCollection<T> {
    fn add(&mut self, model: T) -> Option<T> {
        let id = model.id().clone();
        self.items.insert(id, model)
    }

    fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.items.remove(id)
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.items
            .values()
            .filter(|model| predicate(*model))
            .sorted_by(|a, b| a.id().cmp(b.id()))
            .collect()
    }
}
