//! Category reference data.
//!
//! # Responsibility
//! - Define the named, colored grouping that every task belongs to.
//!
//! # Invariants
//! - `id` is unique within a `CategoryStore` and never reused.
//! - Categories are immutable reference data; tasks point at them via
//!   `category_id`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable, human-readable category identifier (e.g. `"work"`).
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CategoryId = String;

/// A named grouping with a display color.
///
/// `color` is a display hint (hex string) and is intentionally not
/// validated beyond being present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable slug used as the foreign key target of `Task::category_id`.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Hex color used by presentation layers.
    pub color: String,
}

/// Validation failures for category records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyId,
    EmptyName,
}

impl Display for CategoryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "category id must not be empty"),
            Self::EmptyName => write!(f, "category name must not be empty"),
        }
    }
}

impl Error for CategoryValidationError {}

impl Category {
    /// Creates a category record.
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Checks the record against category invariants.
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.id.trim().is_empty() {
            return Err(CategoryValidationError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        Ok(())
    }
}
