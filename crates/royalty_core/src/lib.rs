//! Core domain logic for the royalty catalog.
//! Authors and books linked through contracts that carry a date and a royalty
//! amount; every constructed entity registers into an ordered catalog.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::author::{Author, AuthorId};
pub use model::book::{Book, BookId};
pub use model::contract::{
    Contract, ContractError, ContractField, ContractId, ContractRecord, ContractResult,
};
pub use model::value::{FieldValue, ValueKind};
pub use repo::catalog_repo::{CatalogRepository, CatalogSnapshot, InMemoryCatalog};
pub use service::author_service::AuthorService;
pub use service::book_service::BookService;
pub use service::contract_service::ContractService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
