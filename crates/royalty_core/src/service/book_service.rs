//! Book use-case service.

use crate::model::author::Author;
use crate::model::book::Book;
use crate::model::contract::Contract;
use crate::repo::catalog_repo::CatalogRepository;
use log::info;
use std::sync::Arc;

/// Use-case service for book registration and relationship queries.
pub struct BookService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> BookService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a book and appends it to the book registry.
    pub fn create_book(&self, title: impl Into<String>) -> Arc<Book> {
        let book = Arc::new(Book::new(title));
        self.repo.register_book(Arc::clone(&book));
        info!(
            "event=book_create module=service status=ok book_id={}",
            book.id
        );
        book
    }

    /// Returns contracts covering `book`, in registry order.
    pub fn contracts(&self, book: &Book) -> Vec<Arc<Contract>> {
        let book_id = book.id;
        self.repo
            .contracts_matching(&|contract: &Contract| contract.covers(book_id))
    }

    /// Returns the author of each of `book`'s contracts; duplicates are kept.
    pub fn authors(&self, book: &Book) -> Vec<Arc<Author>> {
        self.contracts(book)
            .iter()
            .map(|contract| contract.author())
            .collect()
    }

    pub fn list_books(&self) -> Vec<Arc<Book>> {
        self.repo.books()
    }
}
