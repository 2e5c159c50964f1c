//! Book domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a book.
pub type BookId = Uuid;

/// Identity entity on the published side of a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Book {
    pub id: BookId,
    pub title: String,
}

impl Book {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
        }
    }
}
