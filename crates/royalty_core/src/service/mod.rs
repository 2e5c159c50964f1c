//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate construction, validation and registration of entities.
//! - Derive author/book relationships from the contract registry.
//!
//! # Invariants
//! - Services never bypass contract validation before registration.
//! - Services stay agnostic of the concrete `CatalogRepository`.

pub mod author_service;
pub mod book_service;
pub mod contract_service;
