use super::chunks::ChunkReader;
use crate::error::Result;
use crate::model::Book;
use std::io::BufRead;

/// One screenful of books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub books: Vec<Book>,
    /// Set when the page came up short, i.e. the catalog ended inside it.
    /// A catalog whose size is a multiple of the page size ends with a full
    /// page that is not marked last; the following `next()` returns `None`.
    pub is_last: bool,
}

/// Lazy pagination over the catalog in file order.
///
/// Nothing past the current page is read until the caller asks for the next
/// one, so a UI can stop whenever the user declines to continue. The
/// underlying file is released when the iterator is dropped.
pub struct Pages<'a> {
    chunks: ChunkReader<Box<dyn BufRead + 'a>>,
    page_size: usize,
    number: usize,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(reader: Box<dyn BufRead + 'a>, page_size: usize) -> Self {
        Self {
            chunks: ChunkReader::new(reader, page_size),
            page_size,
            number: 0,
        }
    }
}

impl Iterator for Pages<'_> {
    type Item = Result<Page>;

    fn next(&mut self) -> Option<Self::Item> {
        let books = match self.chunks.next()? {
            Ok(books) => books,
            Err(e) => return Some(Err(e)),
        };
        self.number += 1;
        let is_last = books.len() < self.page_size;
        Some(Ok(Page {
            number: self.number,
            books,
            is_last,
        }))
    }
}
