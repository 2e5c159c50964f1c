//! Author domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another author.
//! - Identity is the `id`; two authors with the same name are distinct.
//! - Authors are only constructed inside the crate, by the author service,
//!   so every author handed out is registered.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an author.
pub type AuthorId = Uuid;

/// Identity entity on the writing side of a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

impl Author {
    /// Creates an author with a generated stable ID. `name` is not validated.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
