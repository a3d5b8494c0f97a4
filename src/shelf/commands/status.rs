use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &S) -> Result<CmdResult> {
    let count = store.count()?;
    let free_ids = store.free_ids()?;

    let mut result = CmdResult::default();
    let noun = if count == 1 { "book" } else { "books" };
    result.add_message(CmdMessage::info(format!("{} {} in the catalog", count, noun)));
    if free_ids.is_empty() {
        result.add_message(CmdMessage::info("No ids waiting for reuse"));
    } else {
        let listed: Vec<String> = free_ids.iter().map(|id| id.to_string()).collect();
        result.add_message(CmdMessage::info(format!(
            "Ids waiting for reuse: {}",
            listed.join(", ")
        )));
    }
    Ok(result.with_free_ids(free_ids))
}
