//! Catalog repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Register every constructed author, book and contract.
//! - Answer relationship queries by linear scans over registry order.
//!
//! # Invariants
//! - One append-only registry per entity type, initialized empty.
//! - Registration is the caller's last step: only fully validated entities
//!   are ever registered.
//! - Queries are recomputed on every call; nothing is cached or indexed.

use crate::model::author::Author;
use crate::model::book::Book;
use crate::model::contract::{Contract, ContractRecord};
use crate::repo::registry::EntityRegistry;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

static GLOBAL_CATALOG: Lazy<InMemoryCatalog> = Lazy::new(InMemoryCatalog::new);

/// Repository interface for registering entities and scanning registries.
pub trait CatalogRepository {
    fn register_author(&self, author: Arc<Author>);
    fn register_book(&self, book: Arc<Book>);
    fn register_contract(&self, contract: Arc<Contract>);
    /// Registers `author` unless an author with the same id is present.
    /// Returns whether it was newly registered.
    fn ensure_author(&self, author: Arc<Author>) -> bool;
    /// Registers `book` unless a book with the same id is present.
    fn ensure_book(&self, book: Arc<Book>) -> bool;
    fn authors(&self) -> Vec<Arc<Author>>;
    fn books(&self) -> Vec<Arc<Book>>;
    fn contracts(&self) -> Vec<Arc<Contract>>;
    /// Returns registered contracts accepted by `predicate`, in registry order.
    fn contracts_matching(&self, predicate: &dyn Fn(&Contract) -> bool) -> Vec<Arc<Contract>>;
}

impl<T: CatalogRepository + ?Sized> CatalogRepository for &T {
    fn register_author(&self, author: Arc<Author>) {
        (**self).register_author(author)
    }

    fn register_book(&self, book: Arc<Book>) {
        (**self).register_book(book)
    }

    fn register_contract(&self, contract: Arc<Contract>) {
        (**self).register_contract(contract)
    }

    fn ensure_author(&self, author: Arc<Author>) -> bool {
        (**self).ensure_author(author)
    }

    fn ensure_book(&self, book: Arc<Book>) -> bool {
        (**self).ensure_book(book)
    }

    fn authors(&self) -> Vec<Arc<Author>> {
        (**self).authors()
    }

    fn books(&self) -> Vec<Arc<Book>> {
        (**self).books()
    }

    fn contracts(&self) -> Vec<Arc<Contract>> {
        (**self).contracts()
    }

    fn contracts_matching(&self, predicate: &dyn Fn(&Contract) -> bool) -> Vec<Arc<Contract>> {
        (**self).contracts_matching(predicate)
    }
}

impl<T: CatalogRepository + ?Sized> CatalogRepository for Arc<T> {
    fn register_author(&self, author: Arc<Author>) {
        (**self).register_author(author)
    }

    fn register_book(&self, book: Arc<Book>) {
        (**self).register_book(book)
    }

    fn register_contract(&self, contract: Arc<Contract>) {
        (**self).register_contract(contract)
    }

    fn ensure_author(&self, author: Arc<Author>) -> bool {
        (**self).ensure_author(author)
    }

    fn ensure_book(&self, book: Arc<Book>) -> bool {
        (**self).ensure_book(book)
    }

    fn authors(&self) -> Vec<Arc<Author>> {
        (**self).authors()
    }

    fn books(&self) -> Vec<Arc<Book>> {
        (**self).books()
    }

    fn contracts(&self) -> Vec<Arc<Contract>> {
        (**self).contracts()
    }

    fn contracts_matching(&self, predicate: &dyn Fn(&Contract) -> bool) -> Vec<Arc<Contract>> {
        (**self).contracts_matching(predicate)
    }
}

/// Process-lifetime catalog keeping one registry per entity type.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    authors: EntityRegistry<Author>,
    books: EntityRegistry<Book>,
    contracts: EntityRegistry<Contract>,
}

impl InMemoryCatalog {
    /// Creates a catalog with empty registries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lazily initialized process-wide catalog.
    ///
    /// Prefer an owned `InMemoryCatalog::new()` where isolation matters;
    /// the global instance grows for the whole process lifetime.
    pub fn global() -> &'static InMemoryCatalog {
        &GLOBAL_CATALOG
    }

    /// Returns a serializable copy of every registry, in registry order.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            authors: self
                .authors
                .all()
                .iter()
                .map(|author| Author::clone(author))
                .collect(),
            books: self.books.all().iter().map(|book| Book::clone(book)).collect(),
            contracts: self
                .contracts
                .all()
                .iter()
                .map(|contract| contract.record())
                .collect(),
        }
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn register_author(&self, author: Arc<Author>) {
        self.authors.append(author);
    }

    fn register_book(&self, book: Arc<Book>) {
        self.books.append(book);
    }

    fn register_contract(&self, contract: Arc<Contract>) {
        self.contracts.append(contract);
    }

    fn ensure_author(&self, author: Arc<Author>) -> bool {
        self.authors
            .append_if_absent(author, &|left: &Author, right: &Author| left.id == right.id)
    }

    fn ensure_book(&self, book: Arc<Book>) -> bool {
        self.books
            .append_if_absent(book, &|left: &Book, right: &Book| left.id == right.id)
    }

    fn authors(&self) -> Vec<Arc<Author>> {
        self.authors.all()
    }

    fn books(&self) -> Vec<Arc<Book>> {
        self.books.all()
    }

    fn contracts(&self) -> Vec<Arc<Contract>> {
        self.contracts.all()
    }

    fn contracts_matching(&self, predicate: &dyn Fn(&Contract) -> bool) -> Vec<Arc<Contract>> {
        self.contracts.filter(predicate)
    }
}

/// Serializable view of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub authors: Vec<Author>,
    pub books: Vec<Book>,
    pub contracts: Vec<ContractRecord>,
}

#[cfg(test)]
mod tests {
    use super::{CatalogRepository, InMemoryCatalog};
    use crate::model::author::Author;
    use crate::model::book::Book;
    use crate::model::contract::Contract;
    use std::sync::Arc;

    #[test]
    fn new_catalog_has_empty_registries() {
        let catalog = InMemoryCatalog::new();
        assert!(catalog.authors().is_empty());
        assert!(catalog.books().is_empty());
        assert!(catalog.contracts().is_empty());
    }

    #[test]
    fn contracts_matching_scans_in_registry_order() {
        let catalog = InMemoryCatalog::new();
        let author = Arc::new(Author::new("Jane"));
        let book = Arc::new(Book::new("Hamlet"));
        for royalties in [10, 20, 30] {
            let contract = Contract::new(&author, &book, "2023-01-01", royalties)
                .expect("valid contract");
            catalog.register_contract(Arc::new(contract));
        }

        let royalties: Vec<i64> = catalog
            .contracts_matching(&|contract: &Contract| contract.royalties() >= 20)
            .iter()
            .map(|contract| contract.royalties())
            .collect();
        assert_eq!(royalties, vec![20, 30]);
    }

    #[test]
    fn forwards_through_shared_handles() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let by_ref = &catalog;
        by_ref.register_author(Arc::new(Author::new("Jane")));
        catalog.register_book(Arc::new(Book::new("Hamlet")));

        assert_eq!(catalog.authors().len(), 1);
        assert_eq!(catalog.books().len(), 1);
    }

    #[test]
    fn ensure_registers_each_id_once() {
        let catalog = InMemoryCatalog::new();
        let author = Arc::new(Author::new("Jane"));
        let book = Arc::new(Book::new("Hamlet"));

        assert!(catalog.ensure_author(Arc::clone(&author)));
        assert!(!catalog.ensure_author(Arc::new(Author::clone(&author))));
        assert!(catalog.ensure_book(Arc::clone(&book)));
        assert!(!catalog.ensure_book(book));

        assert_eq!(catalog.authors().len(), 1);
        assert_eq!(catalog.books().len(), 1);
    }

    #[test]
    fn global_catalog_is_a_single_instance() {
        assert!(std::ptr::eq(
            InMemoryCatalog::global(),
            InMemoryCatalog::global()
        ));
    }
}
