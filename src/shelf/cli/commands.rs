use super::input::Input;
use super::print::{
    print_book_detail, print_books, print_config, print_free_ids, print_messages, print_page,
};
use super::AppContext;
use shelf::error::Result;
use shelf::model::BookId;
use std::io::BufRead;

const MORE_PROMPT: &str = "Do you want to display more books? (yes/no): ";

pub fn handle_add(ctx: &mut AppContext, title: &str, author: &str) -> Result<()> {
    let result = ctx.api.add_book(title, author)?;
    print_messages(&result.messages);
    Ok(())
}

pub fn handle_update(ctx: &mut AppContext, id: BookId, title: &str, author: &str) -> Result<()> {
    let result = ctx.api.update_book(id, title, author)?;
    print_messages(&result.messages);
    Ok(())
}

pub fn handle_delete(ctx: &mut AppContext, id: BookId) -> Result<()> {
    let result = ctx.api.delete_book(id)?;
    print_messages(&result.messages);
    Ok(())
}

pub fn handle_show(ctx: &AppContext, id: BookId) -> Result<()> {
    let result = ctx.api.show_book(id)?;
    for book in &result.listed_books {
        print_book_detail(book);
    }
    Ok(())
}

pub fn handle_json(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_books()?;
    println!("{}", serde_json::to_string_pretty(&result.listed_books)?);
    Ok(())
}

pub fn handle_status(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.status()?;
    print_messages(&result.messages);
    if !result.free_ids.is_empty() {
        print_free_ids(&result.free_ids);
    }
    Ok(())
}

pub fn handle_config(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.config()?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    Ok(())
}

/// Shows the catalog page by page. With `ask_between`, the user is asked
/// before each further page and can stop early.
pub fn display_pages<R: BufRead>(
    ctx: &AppContext,
    input: &mut Input<R>,
    page_size: Option<usize>,
    ask_between: bool,
) -> Result<()> {
    let mut shown_any = false;

    for page in ctx.api.pages(page_size)? {
        let page = page?;
        shown_any = true;
        print_page(&page);

        if page.is_last {
            break;
        }
        if ask_between && !input.confirm(MORE_PROMPT)? {
            println!("You chose to stop. Exiting the display process.");
            return Ok(());
        }
    }

    if shown_any {
        println!("This is the end of the books.");
    } else {
        println!("No books available in the library.");
    }
    Ok(())
}

pub fn handle_list<R: BufRead>(
    ctx: &AppContext,
    input: &mut Input<R>,
    page_size: Option<usize>,
    all: bool,
) -> Result<()> {
    if all {
        let result = ctx.api.list_books()?;
        print_books(&result.listed_books);
        print_messages(&result.messages);
        return Ok(());
    }
    display_pages(ctx, input, page_size, true)
}
