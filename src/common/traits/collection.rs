//! Standardized collection traits
//!
//! This module defines the interface shared by collections of domain models,
//! standardizing adding, getting, removing and filtering items.

use crate::models::traits::EntityModel;

/// Core trait for model collections
///
/// A collection owns its models outright; relations between models are
/// expressed through identifiers rather than shared pointers.
pub trait ModelCollection<T: EntityModel>: std::fmt::Debug {
    /// Add a model to the collection, returning any model it displaced
    fn add(&mut self, model: T) -> Option<T>;

    /// Get a model by its identifier
    fn get(&self, id: &T::Id) -> Option<&T>;

    /// Remove a model by its identifier
    fn remove(&mut self, id: &T::Id) -> Option<T>;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool;

    /// Check if the collection contains a model with the given ID
    fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Add multiple models to the collection
    fn add_all(&mut self, models: Vec<T>) {
        for model in models {
            self.add(model);
        }
    }
}
