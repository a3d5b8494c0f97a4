use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

/// Reads the whole catalog at once. Interactive listing pages through
/// [`BookStore::pages`] instead.
pub fn run<S: BookStore>(store: &S, page_size: usize) -> Result<CmdResult> {
    let mut books = Vec::new();
    for page in store.pages(page_size)? {
        books.extend(page?.books);
    }

    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info("No books available in the library."));
    }
    Ok(result.with_listed_books(books))
}
