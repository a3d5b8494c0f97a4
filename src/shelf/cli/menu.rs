//! The interactive menu: the default way to drive shelf.
//!
//! Operation errors are printed as `Error: <message>` and the menu comes back;
//! only running out of input or choosing Exit ends the loop.

use super::commands::display_pages;
use super::input::Input;
use super::print::{print_error, print_messages};
use super::AppContext;
use shelf::api::{CmdMessage, CmdResult};
use shelf::error::Result;
use shelf::model::BookId;
use std::io::BufRead;

const NOT_A_NUMBER: &str = "Invalid input. Please enter a number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    Display,
    Update,
    Delete,
    Exit,
}

impl Choice {
    fn parse(raw: &str) -> std::result::Result<Self, &'static str> {
        match raw.trim().parse::<u32>() {
            Ok(1) => Ok(Choice::Add),
            Ok(2) => Ok(Choice::Display),
            Ok(3) => Ok(Choice::Update),
            Ok(4) => Ok(Choice::Delete),
            Ok(5) => Ok(Choice::Exit),
            Ok(_) => Err("Invalid choice. Please try again."),
            Err(_) => Err(NOT_A_NUMBER),
        }
    }
}

fn print_menu(page_size: usize) {
    println!("\nLibrary Management System:");
    println!("1. Add Book");
    println!(
        "2. Display All Books (in result of {} entries at a time)",
        page_size
    );
    println!("3. Update Book Information");
    println!("4. Delete Book Entry");
    println!("5. Exit");
}

fn report(outcome: Result<CmdResult>) {
    match outcome {
        Ok(result) => print_messages(&result.messages),
        Err(e) => print_error(&e),
    }
}

/// Reads an id, telling the user when it isn't one.
/// `Ok(None)` covers both bad input and end of input.
fn ask_id<R: BufRead>(input: &mut Input<R>, prompt: &str) -> Result<Option<BookId>> {
    let Some(raw) = input.ask(prompt)? else {
        return Ok(None);
    };
    match raw.trim().parse::<BookId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            print_messages(&[CmdMessage::warning(NOT_A_NUMBER)]);
            Ok(None)
        }
    }
}

pub fn run<R: BufRead>(ctx: &mut AppContext, input: &mut Input<R>) -> Result<()> {
    loop {
        print_menu(ctx.api.page_size());
        let Some(raw) = input.ask("Enter your choice: ")? else {
            return Ok(());
        };

        let choice = match Choice::parse(&raw) {
            Ok(choice) => choice,
            Err(notice) => {
                print_messages(&[CmdMessage::warning(notice)]);
                continue;
            }
        };

        match choice {
            Choice::Add => {
                let Some(title) = input.ask("Enter book title: ")? else {
                    return Ok(());
                };
                let Some(author) = input.ask("Enter book author: ")? else {
                    return Ok(());
                };
                report(ctx.api.add_book(&title, &author));
            }
            Choice::Display => {
                if let Err(e) = display_pages(ctx, input, None, true) {
                    print_error(&e);
                }
            }
            Choice::Update => {
                let Some(id) = ask_id(input, "Enter the book ID to update: ")? else {
                    continue;
                };
                let Some(title) = input.ask("Enter new title: ")? else {
                    return Ok(());
                };
                let Some(author) = input.ask("Enter new author: ")? else {
                    return Ok(());
                };
                report(ctx.api.update_book(id, &title, &author));
            }
            Choice::Delete => {
                let Some(id) = ask_id(input, "Enter the book ID to delete: ")? else {
                    continue;
                };
                report(ctx.api.delete_book(id));
            }
            Choice::Exit => return Ok(()),
        }
    }
}
