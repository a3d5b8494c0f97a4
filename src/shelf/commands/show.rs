use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::BookId;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &S, id: BookId) -> Result<CmdResult> {
    let book = store.find(id)?;
    Ok(CmdResult::default().with_listed_books(vec![book]))
}
