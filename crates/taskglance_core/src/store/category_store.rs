//! Category store snapshot.

use crate::model::category::Category;
use crate::store::StoreError;
use std::collections::HashSet;

/// Insertion-ordered snapshot of the category reference data.
///
/// Categories are fixed for the lifetime of a board, so this store has no
/// transition methods; it is rebuilt wholesale when reference data loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStore {
    categories: Vec<Category>,
}

impl CategoryStore {
    /// Builds a store from records, rejecting duplicate ids.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id.clone()) {
                return Err(StoreError::DuplicateCategory(category.id.clone()));
            }
        }
        Ok(Self { categories })
    }

    /// Looks up one category by id.
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// The fallback category for drafts that name none (first in order).
    pub fn default_category(&self) -> Option<&Category> {
        self.categories.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
