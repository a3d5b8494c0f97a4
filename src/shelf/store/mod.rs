//! # Storage Layer
//!
//! This module defines the storage abstraction for shelf. The [`BookStore`] trait
//! is the catalog contract the command layer programs against.
//!
//! ## Two Layers
//!
//! - [`backend::StorageBackend`]: raw I/O for the two files a shelf keeps
//!   (the catalog and the free-id ledger). Knows nothing about books.
//! - [`book_store::ShelfStore`]: the catalog logic (chunked scans, id
//!   recycling, whole-file rewrites), generic over the backend.
//!
//! ## Implementations
//!
//! - [`FileStore`] = `ShelfStore<FsBackend>`: production, plain text files
//! - [`memory::InMemoryStore`] = `ShelfStore<MemBackend>`: for tests, no filesystem
//!
//! ## Storage Format
//!
//! ```text
//! books.txt      # one book per line: id,title,author
//! free_ids.txt   # one reclaimed id per line, oldest first
//! ```
//!
//! Both files are plain text and safe to inspect by hand. Neither is locked:
//! running two shelves against the same files at once is not supported.
//!
//! ## Id Recycling
//!
//! Deleting a book appends its id to the ledger. The next add takes the oldest
//! ledger entry and slots the book into place so the catalog stays ordered by
//! id. With an empty ledger, the new book gets one past the highest id.

use crate::config::ShelfConfig;
use crate::error::Result;
use crate::model::{Book, BookId};

pub mod backend;
pub mod book_store;
pub mod chunks;
pub mod free_ids;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod pages;

pub use book_store::ShelfStore;
pub use pages::{Page, Pages};

pub type FileStore = ShelfStore<fs_backend::FsBackend>;

impl FileStore {
    /// Opens the files named in `config`, creating them if needed.
    pub fn open(config: &ShelfConfig) -> Result<Self> {
        let backend = fs_backend::FsBackend::new(
            config.book_entry_file.clone(),
            config.free_ids_file.clone(),
        );
        let store = ShelfStore::with_backend(backend);
        store.init()?;
        Ok(store)
    }
}

/// Abstract interface for the book catalog.
///
/// Every operation is a linear scan of the catalog. Mutations that find their
/// target rewrite the catalog before returning.
pub trait BookStore {
    /// Add a book, reusing the oldest free id if there is one.
    fn add(&mut self, title: &str, author: &str) -> Result<Book>;

    /// Replace title and author of an existing book.
    fn update(&mut self, id: BookId, title: &str, author: &str) -> Result<Book>;

    /// Remove a book and release its id for reuse.
    fn delete(&mut self, id: BookId) -> Result<Book>;

    /// Look up a single book
    fn find(&self, id: BookId) -> Result<Book>;

    /// Page through the catalog in file order
    fn pages(&self, page_size: usize) -> Result<Pages<'_>>;

    /// Ids waiting to be reused, oldest first
    fn free_ids(&self) -> Result<Vec<BookId>>;

    /// Number of books in the catalog
    fn count(&self) -> Result<usize>;
}
