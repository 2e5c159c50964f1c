//! Domain model for authors, books and the contracts between them.
//!
//! # Responsibility
//! - Define the two identity entities and the join entity linking them.
//! - Own field validation for contract values.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID.
//! - Entities never reference the registry; relationship queries live in
//!   the service layer.

pub mod author;
pub mod book;
pub mod contract;
pub mod value;
