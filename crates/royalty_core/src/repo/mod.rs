//! Registry layer for authors, books and contracts.
//!
//! # Responsibility
//! - Hold the process-wide ordered collections every entity registers into.
//! - Expose registration and scan contracts to the service layer.
//!
//! # Invariants
//! - Registries are append-only and preserve insertion order.
//! - Each registry is guarded by its own lock.

pub mod catalog_repo;
pub mod registry;
