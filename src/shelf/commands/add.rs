use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{validate_author, validate_title};
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &mut S, title: &str, author: &str) -> Result<CmdResult> {
    validate_title(title)?;
    validate_author(author)?;

    let book = store.add(title, author)?;
    let id = book.id();

    let mut result = CmdResult::default().with_affected_books(vec![book]);
    result.add_message(CmdMessage::success(format!(
        "Book added successfully (id {}).",
        id
    )));
    Ok(result)
}
