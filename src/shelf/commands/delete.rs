use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &mut S, id: BookId) -> Result<CmdResult> {
    let book = store.delete(id)?;

    let mut result = CmdResult::default().with_affected_books(vec![book]);
    result.add_message(CmdMessage::success("Book deleted successfully."));
    Ok(result)
}
