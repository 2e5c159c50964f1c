//! Contract join-entity model.
//!
//! # Responsibility
//! - Link one author to one book with a date and a royalty amount.
//! - Validate the runtime kind of every field on construction and assignment.
//!
//! # Invariants
//! - `author` is always an `Author`, `book` always a `Book`, `date` always a
//!   string and `royalties` always an integer.
//! - A failed assignment leaves the previous value in place.
//! - Construction validates every field before anything is stored, so an
//!   invalid contract is never observable.
//! - Contracts are only constructed inside the crate; callers obtain them
//!   already registered from the services.

use crate::model::author::{Author, AuthorId};
use crate::model::book::{Book, BookId};
use crate::model::value::{FieldValue, ValueKind};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Stable identifier of a contract.
pub type ContractId = Uuid;

pub type ContractResult<T> = Result<T, ContractError>;

/// Validated contract fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractField {
    Author,
    Book,
    Date,
    Royalties,
}

impl ContractField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Book => "book",
            Self::Date => "date",
            Self::Royalties => "royalties",
        }
    }

    /// Runtime kind a value must have to be stored in this field.
    pub fn expected_kind(self) -> ValueKind {
        match self {
            Self::Author => ValueKind::Author,
            Self::Book => ValueKind::Book,
            Self::Date => ValueKind::Text,
            Self::Royalties => ValueKind::Integer,
        }
    }
}

impl Display for ContractField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    TypeMismatch {
        field: ContractField,
        expected: ValueKind,
        found: ValueKind,
    },
}

impl ContractError {
    fn type_mismatch(field: ContractField, found: ValueKind) -> Self {
        Self::TypeMismatch {
            field,
            expected: field.expected_kind(),
            found,
        }
    }

    /// Field that rejected the value.
    pub fn field(&self) -> ContractField {
        match self {
            Self::TypeMismatch { field, .. } => *field,
        }
    }
}

impl Display for ContractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch {
                field,
                expected,
                found,
            } => write!(f, "contract field `{field}` expects {expected}, got {found}"),
        }
    }
}

impl Error for ContractError {}

#[derive(Debug, Clone)]
struct ContractTerms {
    author: Arc<Author>,
    book: Arc<Book>,
    date: String,
    royalties: i64,
}

/// Join entity between one author and one book.
///
/// Fields sit behind a per-contract lock so a registered contract can be
/// reassigned through `&self` while other callers scan the registry.
#[derive(Debug)]
pub struct Contract {
    id: ContractId,
    terms: RwLock<ContractTerms>,
}

impl Contract {
    /// Builds an unregistered contract with a generated stable ID.
    ///
    /// Only the contract service calls this; it registers the result.
    ///
    /// # Errors
    /// - `TypeMismatch` for the first invalid field, checked in the order
    ///   author, book, date, royalties.
    pub(crate) fn new(
        author: impl Into<FieldValue>,
        book: impl Into<FieldValue>,
        date: impl Into<FieldValue>,
        royalties: impl Into<FieldValue>,
    ) -> ContractResult<Self> {
        let terms = ContractTerms {
            author: expect_author(author.into())?,
            book: expect_book(book.into())?,
            date: expect_date(date.into())?,
            royalties: expect_royalties(royalties.into())?,
        };

        Ok(Self {
            id: Uuid::new_v4(),
            terms: RwLock::new(terms),
        })
    }

    pub fn id(&self) -> ContractId {
        self.id
    }

    pub fn author(&self) -> Arc<Author> {
        Arc::clone(&self.read_terms().author)
    }

    pub fn book(&self) -> Arc<Book> {
        Arc::clone(&self.read_terms().book)
    }

    pub fn date(&self) -> String {
        self.read_terms().date.clone()
    }

    pub fn royalties(&self) -> i64 {
        self.read_terms().royalties
    }

    /// Returns whether this contract currently points at `author_id`.
    pub fn is_signed_by(&self, author_id: AuthorId) -> bool {
        self.read_terms().author.id == author_id
    }

    /// Returns whether this contract currently points at `book_id`.
    pub fn covers(&self, book_id: BookId) -> bool {
        self.read_terms().book.id == book_id
    }

    pub fn is_dated(&self, date: &str) -> bool {
        self.read_terms().date == date
    }

    /// Reassigns the author. Fails unless `value` is an `Author`.
    pub fn set_author(&self, value: impl Into<FieldValue>) -> ContractResult<()> {
        let author = expect_author(value.into())?;
        self.write_terms().author = author;
        Ok(())
    }

    /// Reassigns the book. Fails unless `value` is a `Book`.
    pub fn set_book(&self, value: impl Into<FieldValue>) -> ContractResult<()> {
        let book = expect_book(value.into())?;
        self.write_terms().book = book;
        Ok(())
    }

    /// Reassigns the date. Fails unless `value` is a string.
    pub fn set_date(&self, value: impl Into<FieldValue>) -> ContractResult<()> {
        let date = expect_date(value.into())?;
        self.write_terms().date = date;
        Ok(())
    }

    /// Reassigns the royalty amount. Fails unless `value` is an integer.
    pub fn set_royalties(&self, value: impl Into<FieldValue>) -> ContractResult<()> {
        let royalties = expect_royalties(value.into())?;
        self.write_terms().royalties = royalties;
        Ok(())
    }

    /// Returns a plain serializable copy of the current field values.
    pub fn record(&self) -> ContractRecord {
        let terms = self.read_terms();
        ContractRecord {
            id: self.id,
            author_id: terms.author.id,
            book_id: terms.book.id,
            date: terms.date.clone(),
            royalties: terms.royalties,
        }
    }

    fn read_terms(&self) -> RwLockReadGuard<'_, ContractTerms> {
        self.terms.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_terms(&self) -> RwLockWriteGuard<'_, ContractTerms> {
        self.terms.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Serializable view of one contract, referencing entities by ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub id: ContractId,
    pub author_id: AuthorId,
    pub book_id: BookId,
    pub date: String,
    pub royalties: i64,
}

fn expect_author(value: FieldValue) -> ContractResult<Arc<Author>> {
    match value {
        FieldValue::Author(author) => Ok(author),
        other => Err(ContractError::type_mismatch(ContractField::Author, other.kind())),
    }
}

fn expect_book(value: FieldValue) -> ContractResult<Arc<Book>> {
    match value {
        FieldValue::Book(book) => Ok(book),
        other => Err(ContractError::type_mismatch(ContractField::Book, other.kind())),
    }
}

fn expect_date(value: FieldValue) -> ContractResult<String> {
    match value {
        FieldValue::Text(date) => Ok(date),
        other => Err(ContractError::type_mismatch(ContractField::Date, other.kind())),
    }
}

fn expect_royalties(value: FieldValue) -> ContractResult<i64> {
    match value {
        FieldValue::Integer(royalties) => Ok(royalties),
        other => Err(ContractError::type_mismatch(
            ContractField::Royalties,
            other.kind(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{Contract, ContractError, ContractField};
    use crate::model::author::Author;
    use crate::model::book::Book;
    use crate::model::value::ValueKind;
    use std::sync::Arc;

    fn parties() -> (Arc<Author>, Arc<Book>) {
        (Arc::new(Author::new("Jane")), Arc::new(Book::new("Hamlet")))
    }

    #[test]
    fn new_stores_all_fields() {
        let (author, book) = parties();
        let contract = Contract::new(&author, &book, "2023-01-01", 100).expect("valid contract");

        assert_eq!(contract.author().id, author.id);
        assert_eq!(contract.book().id, book.id);
        assert_eq!(contract.date(), "2023-01-01");
        assert_eq!(contract.royalties(), 100);
    }

    #[test]
    fn new_reports_first_invalid_field_in_declaration_order() {
        let (_, book) = parties();
        let err = Contract::new("Jane", "Hamlet", 20230101, 1.5)
            .expect_err("author is checked first");
        assert_eq!(err.field(), ContractField::Author);

        let author = Arc::new(Author::new("Jane"));
        let err = Contract::new(&author, &book, 20230101, 1.5).expect_err("date is checked next");
        assert_eq!(
            err,
            ContractError::TypeMismatch {
                field: ContractField::Date,
                expected: ValueKind::Text,
                found: ValueKind::Integer,
            }
        );
    }

    #[test]
    fn failed_set_keeps_previous_value() {
        let (author, book) = parties();
        let contract = Contract::new(&author, &book, "2023-01-01", 100).expect("valid contract");

        contract
            .set_royalties("a lot")
            .expect_err("string royalties must fail");
        contract.set_date(None::<String>).expect_err("null date must fail");
        contract.set_book(&author).expect_err("author is not a book");

        assert_eq!(contract.royalties(), 100);
        assert_eq!(contract.date(), "2023-01-01");
        assert_eq!(contract.book().id, book.id);
    }

    #[test]
    fn successful_set_replaces_value() {
        let (author, book) = parties();
        let contract = Contract::new(&author, &book, "2023-01-01", 100).expect("valid contract");
        let other = Arc::new(Book::new("Macbeth"));

        contract.set_book(&other).expect("book should be accepted");
        contract.set_royalties(250).expect("integer should be accepted");

        assert!(contract.covers(other.id));
        assert!(!contract.covers(book.id));
        assert_eq!(contract.record().royalties, 250);
    }

    #[test]
    fn bool_is_not_an_integer() {
        let (author, book) = parties();
        let err = Contract::new(&author, &book, "2023-01-01", true).expect_err("bool must fail");
        assert_eq!(err.field(), ContractField::Royalties);
        assert_eq!(
            err.to_string(),
            "contract field `royalties` expects integer, got bool"
        );
    }
}
