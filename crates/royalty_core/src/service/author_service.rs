//! Author use-case service.
//!
//! # Responsibility
//! - Create and register authors.
//! - Derive an author's contracts, books and royalty total from the contract
//!   registry.
//!
//! # Invariants
//! - Relationship queries are recomputed on every call.
//! - `books()` corresponds positionally to `contracts()`; duplicates are kept.

use crate::model::author::Author;
use crate::model::book::Book;
use crate::model::contract::{Contract, ContractResult};
use crate::model::value::FieldValue;
use crate::repo::catalog_repo::CatalogRepository;
use crate::service::contract_service::register_new_contract;
use log::info;
use std::sync::Arc;

/// Use-case service for author registration and relationship queries.
pub struct AuthorService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> AuthorService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an author and appends it to the author registry.
    pub fn create_author(&self, name: impl Into<String>) -> Arc<Author> {
        let author = Arc::new(Author::new(name));
        self.repo.register_author(Arc::clone(&author));
        info!(
            "event=author_create module=service status=ok author_id={}",
            author.id
        );
        author
    }

    /// Returns contracts whose author is `author`, in registry order.
    pub fn contracts(&self, author: &Author) -> Vec<Arc<Contract>> {
        let author_id = author.id;
        self.repo
            .contracts_matching(&|contract: &Contract| contract.is_signed_by(author_id))
    }

    /// Returns the book of each of `author`'s contracts.
    pub fn books(&self, author: &Author) -> Vec<Arc<Book>> {
        self.contracts(author)
            .iter()
            .map(|contract| contract.book())
            .collect()
    }

    /// Creates and registers a contract between `author` and `book`.
    ///
    /// # Errors
    /// - Same `TypeMismatch` errors as `ContractService::create_contract`.
    pub fn sign_contract(
        &self,
        author: &Arc<Author>,
        book: impl Into<FieldValue>,
        date: impl Into<FieldValue>,
        royalties: impl Into<FieldValue>,
    ) -> ContractResult<Arc<Contract>> {
        register_new_contract(
            &self.repo,
            "contract_sign",
            FieldValue::from(author),
            book.into(),
            date.into(),
            royalties.into(),
        )
    }

    /// Sums royalties over `author`'s contracts; 0 when there are none.
    ///
    /// Accumulates in `i128`, so any realistic number of `i64` amounts sums
    /// without overflow.
    pub fn total_royalties(&self, author: &Author) -> i128 {
        self.contracts(author)
            .iter()
            .map(|contract| i128::from(contract.royalties()))
            .sum()
    }

    pub fn list_authors(&self) -> Vec<Arc<Author>> {
        self.repo.authors()
    }
}

#[cfg(test)]
mod tests {
    use super::AuthorService;
    use crate::model::book::Book;
    use crate::repo::catalog_repo::{CatalogRepository, InMemoryCatalog};
    use std::sync::Arc;

    #[test]
    fn create_author_registers_in_creation_order() {
        let catalog = InMemoryCatalog::new();
        let service = AuthorService::new(&catalog);

        let jane = service.create_author("Jane");
        let john = service.create_author("John");

        let ids: Vec<_> = catalog.authors().iter().map(|author| author.id).collect();
        assert_eq!(ids, vec![jane.id, john.id]);
    }

    #[test]
    fn author_without_contracts_has_zero_royalties() {
        let catalog = InMemoryCatalog::new();
        let service = AuthorService::new(&catalog);
        let jane = service.create_author("Jane");

        assert!(service.contracts(&jane).is_empty());
        assert!(service.books(&jane).is_empty());
        assert_eq!(service.total_royalties(&jane), 0);
    }

    #[test]
    fn total_royalties_does_not_overflow_i64() {
        let catalog = InMemoryCatalog::new();
        let service = AuthorService::new(&catalog);
        let jane = service.create_author("Jane");
        let book = Arc::new(Book::new("Hamlet"));

        service
            .sign_contract(&jane, &book, "2023-01-01", i64::MAX)
            .expect("valid contract");
        service
            .sign_contract(&jane, &book, "2023-01-02", 1_i64)
            .expect("valid contract");

        assert_eq!(service.total_royalties(&jane), i128::from(i64::MAX) + 1);
    }

    #[test]
    fn same_name_authors_are_distinct() {
        let catalog = InMemoryCatalog::new();
        let service = AuthorService::new(&catalog);
        let first = service.create_author("Jane");
        let second = service.create_author("Jane");
        let book = Arc::new(Book::new("Hamlet"));

        service
            .sign_contract(&first, &book, "2023-01-01", 100)
            .expect("valid contract");

        assert_eq!(service.contracts(&first).len(), 1);
        assert!(service.contracts(&second).is_empty());
    }
}
