use colored::Colorize;
use shelf::api::{CmdMessage, MessageLevel};
use shelf::config::ShelfConfig;
use shelf::error::ShelfError;
use shelf::model::{Book, BookId};
use shelf::store::Page;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 6;
const TITLE_WIDTH: usize = 44;
const AUTHOR_WIDTH: usize = 30;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Operation errors inside the menu are reported and the loop carries on.
pub(super) fn print_error(error: &ShelfError) {
    print_messages(&[CmdMessage::error(format!("Error: {}", error))]);
}

pub(super) fn print_page(page: &Page) {
    println!("\n{}", format!("Displaying books (Page {}):", page.number).bold());
    print_books(&page.books);
}

pub(super) fn print_books(books: &[Book]) {
    for book in books {
        let id = format!("{:>width$}. ", book.id(), width = ID_WIDTH);
        let title = pad_to_width(&truncate_to_width(book.title(), TITLE_WIDTH), TITLE_WIDTH);
        let author = truncate_to_width(book.author(), AUTHOR_WIDTH);
        println!("{}{}  {}", id.yellow(), title, author.dimmed());
    }
}

pub(super) fn print_book_detail(book: &Book) {
    println!("{} {}", "ID:    ".dimmed(), book.id().to_string().yellow());
    println!("{} {}", "Title: ".dimmed(), book.title().bold());
    println!("{} {}", "Author:".dimmed(), book.author());
}

pub(super) fn print_config(config: &ShelfConfig) {
    println!("BookEntryFile = {}", config.book_entry_file.display());
    println!("FreeIdsFile   = {}", config.free_ids_file.display());
    println!("PageSize      = {}", config.page_size);
}

pub(super) fn print_free_ids(ids: &[BookId]) {
    for id in ids {
        println!("  {}", id.to_string().yellow());
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Emma", 10), "Emma");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        let out = truncate_to_width("The Left Hand of Darkness", 10);
        assert_eq!(out, "The Left …");
        assert_eq!(out.width(), 10);
    }

    #[test]
    fn wide_chars_count_double() {
        let out = truncate_to_width("吾輩は猫である", 7);
        assert!(out.width() <= 7);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn pads_to_column() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
    }
}
