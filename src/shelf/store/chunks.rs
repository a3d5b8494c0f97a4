//! Fixed-size batches of books read off a line stream.
//!
//! Every scan in the store walks the catalog one chunk at a time so a single
//! step never holds more than `chunk_size` parsed books. Blank lines are
//! skipped and do not count toward the chunk size, which means a chunk is
//! empty only at end of input.

use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::io::{BufRead, Read};

pub struct ChunkReader<R> {
    reader: R,
    chunk_size: usize,
    done: bool,
}

impl<R: BufRead> ChunkReader<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size: chunk_size.max(1),
            done: false,
        }
    }

    fn read_chunk(&mut self) -> Result<Vec<Book>> {
        let mut books = Vec::with_capacity(self.chunk_size);
        let mut line = String::new();

        while books.len() < self.chunk_size {
            line.clear();
            if self.reader.read_line(&mut line).map_err(ShelfError::Io)? == 0 {
                self.done = true;
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            books.push(Book::from_line(&line)?);
        }

        Ok(books)
    }

    /// Everything not yet read, unparsed.
    pub fn into_remainder(mut self) -> Result<String> {
        let mut rest = String::new();
        if !self.done {
            self.reader
                .read_to_string(&mut rest)
                .map_err(ShelfError::Io)?;
        }
        Ok(rest)
    }
}

impl<R: BufRead> Iterator for ChunkReader<R> {
    type Item = Result<Vec<Book>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_chunk() {
            Ok(books) if books.is_empty() => None,
            Ok(books) => Some(Ok(books)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Appends the storage lines of `books` to `out`.
pub fn push_lines(out: &mut String, books: &[Book]) {
    for book in books {
        out.push_str(&book.to_line());
    }
}
