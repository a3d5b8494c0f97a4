//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all shelf operations, whichever UI drives them.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Applies configuration** (e.g. the default page size)
//! - **Returns structured types** (`Result<CmdResult>`), never printed text
//!
//! Errors come back as [`ShelfError`](crate::error::ShelfError) values. A UI
//! turns them into its own messages; the CLI prints `Error: <message>` and keeps
//! going.
//!
//! `ShelfApi<S: BookStore>` is generic over the store:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::model::BookId;
use crate::store::{BookStore, Pages};

pub struct ShelfApi<S: BookStore> {
    store: S,
    config: ShelfConfig,
}

impl<S: BookStore> ShelfApi<S> {
    pub fn new(store: S, config: ShelfConfig) -> Self {
        Self { store, config }
    }

    pub fn add_book(&mut self, title: &str, author: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, author)
    }

    pub fn update_book(
        &mut self,
        id: BookId,
        title: &str,
        author: &str,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, title, author)
    }

    pub fn delete_book(&mut self, id: BookId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn show_book(&self, id: BookId) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, id)
    }

    /// Every book at once, for non-interactive output.
    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, self.config.page_size)
    }

    /// Page through the catalog, `page_size` books at a time
    /// (the configured size when `None`).
    pub fn pages(&self, page_size: Option<usize>) -> Result<Pages<'_>> {
        self.store
            .pages(page_size.unwrap_or(self.config.page_size))
    }

    pub fn status(&self) -> Result<commands::CmdResult> {
        commands::status::run(&self.store)
    }

    pub fn config(&self) -> Result<commands::CmdResult> {
        Ok(commands::CmdResult::default().with_config(self.config.clone()))
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::store::memory::InMemoryStore;

    fn api() -> ShelfApi<InMemoryStore> {
        let mut config = ShelfConfig::new("books.txt", "free_ids.txt");
        config.page_size = 2;
        ShelfApi::new(InMemoryStore::new(), config)
    }

    #[test]
    fn dispatches_crud() {
        let mut api = api();
        api.add_book("A", "X").unwrap();
        api.add_book("B", "Y").unwrap();

        let updated = api.update_book(2, "B2", "Y2").unwrap();
        assert_eq!(updated.affected_books[0].title(), "B2");

        let deleted = api.delete_book(1).unwrap();
        assert_eq!(deleted.affected_books[0].id(), 1);

        let status = api.status().unwrap();
        assert_eq!(status.free_ids, vec![1]);
    }

    #[test]
    fn pages_use_configured_size() {
        let mut api = api();
        for t in ["A", "B", "C"] {
            api.add_book(t, "X").unwrap();
        }

        let sizes: Vec<usize> = api
            .pages(None)
            .unwrap()
            .map(|p| p.unwrap().books.len())
            .collect();
        assert_eq!(sizes, vec![2, 1]);

        let sizes: Vec<usize> = api
            .pages(Some(3))
            .unwrap()
            .map(|p| p.unwrap().books.len())
            .collect();
        assert_eq!(sizes, vec![3]);
    }

    #[test]
    fn errors_pass_through() {
        let mut api = api();
        assert!(matches!(api.delete_book(5), Err(ShelfError::NotFound(5))));
        assert!(matches!(api.show_book(5), Err(ShelfError::NotFound(5))));
    }

    #[test]
    fn config_is_reported() {
        let api = api();
        let result = api.config().unwrap();
        assert_eq!(result.config.unwrap().page_size, 2);
    }
}
