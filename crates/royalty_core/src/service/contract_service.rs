//! Contract use-case service.
//!
//! # Responsibility
//! - Construct validated contracts and register them.
//! - Answer registry-level contract queries.
//!
//! # Invariants
//! - A contract is registered only after every field validated.
//! - A rejected contract leaves every registry untouched.
//! - A registered contract's author and book are registered too; entities
//!   that reached the caller some other way (e.g. deserialized) are
//!   registered before the contract.

use crate::model::contract::{Contract, ContractResult};
use crate::model::value::FieldValue;
use crate::repo::catalog_repo::CatalogRepository;
use log::{info, warn};
use std::sync::Arc;

/// Use-case service for contract construction and date queries.
pub struct ContractService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> ContractService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Constructs and registers a contract.
    ///
    /// # Errors
    /// - `TypeMismatch` when any field has the wrong runtime kind; nothing is
    ///   registered in that case.
    pub fn create_contract(
        &self,
        author: impl Into<FieldValue>,
        book: impl Into<FieldValue>,
        date: impl Into<FieldValue>,
        royalties: impl Into<FieldValue>,
    ) -> ContractResult<Arc<Contract>> {
        register_new_contract(
            &self.repo,
            "contract_create",
            author.into(),
            book.into(),
            date.into(),
            royalties.into(),
        )
    }

    /// Returns every registered contract dated exactly `date`, in registry order.
    pub fn contracts_by_date(&self, date: &str) -> Vec<Arc<Contract>> {
        self.repo
            .contracts_matching(&|contract: &Contract| contract.is_dated(date))
    }

    pub fn list_contracts(&self) -> Vec<Arc<Contract>> {
        self.repo.contracts()
    }
}

/// Validates, builds and registers one contract, logging under `event`.
///
/// Registers the contract's author and book first when the catalog does not
/// hold them yet.
pub(crate) fn register_new_contract<R: CatalogRepository + ?Sized>(
    repo: &R,
    event: &str,
    author: FieldValue,
    book: FieldValue,
    date: FieldValue,
    royalties: FieldValue,
) -> ContractResult<Arc<Contract>> {
    let contract = match Contract::new(author, book, date, royalties) {
        Ok(contract) => Arc::new(contract),
        Err(err) => {
            warn!(
                "event={} module=service status=error error_code=type_mismatch field={} error={}",
                event,
                err.field(),
                err
            );
            return Err(err);
        }
    };

    let record = contract.record();
    if repo.ensure_author(contract.author()) {
        info!(
            "event={} module=service status=ok registered=author author_id={}",
            event, record.author_id
        );
    }
    if repo.ensure_book(contract.book()) {
        info!(
            "event={} module=service status=ok registered=book book_id={}",
            event, record.book_id
        );
    }
    repo.register_contract(Arc::clone(&contract));
    info!(
        "event={} module=service status=ok contract_id={} author_id={} book_id={}",
        event, record.id, record.author_id, record.book_id
    );
    Ok(contract)
}
