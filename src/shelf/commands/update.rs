use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{validate_author, validate_title, BookId};
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &mut S, id: BookId, title: &str, author: &str) -> Result<CmdResult> {
    validate_title(title)?;
    validate_author(author)?;

    let book = store.update(id, title, author)?;

    let mut result = CmdResult::default().with_affected_books(vec![book]);
    result.add_message(CmdMessage::success("Book updated successfully."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_existing_book() {
        let mut store = StoreFixture::new().with_books(2).store;
        let result = run(&mut store, 2, "New Title", "New Author").unwrap();

        assert_eq!(result.affected_books[0].title(), "New Title");
        assert_eq!(store.find(2).unwrap().author(), "New Author");
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut store = StoreFixture::new().with_books(1).store;
        let err = run(&mut store, 9, "T", "A").unwrap_err();
        assert!(matches!(err, ShelfError::NotFound(9)));
        assert_eq!(err.to_string(), "Book with ID 9 not found");
    }
}
