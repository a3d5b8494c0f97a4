use super::backend::{Slot, StorageBackend};
use super::chunks::{push_lines, ChunkReader};
use super::free_ids::FreeIdLedger;
use super::pages::Pages;
use super::BookStore;
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookId};
use log::{debug, info, warn};
use std::io::BufRead;

/// Lines parsed per scan step when looking for a mutation target.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// The catalog logic, generic over where the bytes live.
///
/// Every mutation scans the catalog chunk by chunk until it finds the chunk it
/// has to change. The rewrite that follows always covers the whole catalog:
/// chunks already scanned are written back as they were, the changed chunk
/// takes its place, and whatever was not scanned yet is copied through
/// without being parsed.
pub struct ShelfStore<B: StorageBackend> {
    backend: B,
    chunk_size: usize,
}

impl<B: StorageBackend> ShelfStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Creates both files if they are missing.
    pub fn init(&self) -> Result<()> {
        self.backend.ensure(Slot::Books)?;
        self.ledger().ensure_exists()
    }

    fn ledger(&self) -> FreeIdLedger<'_, B> {
        FreeIdLedger::new(&self.backend)
    }

    fn chunks(&self) -> Result<ChunkReader<Box<dyn BufRead + '_>>> {
        Ok(ChunkReader::new(
            self.backend.open(Slot::Books)?,
            self.chunk_size,
        ))
    }

    /// Finds the first chunk `edit` changes and rewrites the catalog around it.
    /// Returns `None`, without writing anything, when no chunk was changed.
    fn rewrite_first<T>(
        &self,
        mut edit: impl FnMut(&mut Vec<Book>) -> Option<T>,
    ) -> Result<Option<T>> {
        let mut chunks = self.chunks()?;
        let mut out = String::new();

        while let Some(mut chunk) = chunks.next().transpose()? {
            if let Some(outcome) = edit(&mut chunk) {
                push_lines(&mut out, &chunk);
                out.push_str(&chunks.into_remainder()?);
                self.backend.replace(Slot::Books, &out)?;
                return Ok(Some(outcome));
            }
            push_lines(&mut out, &chunk);
        }

        Ok(None)
    }

    /// Places a book under a recycled id.
    ///
    /// The target is the first chunk that starts above `id` or brackets it;
    /// failing that the book goes after the last chunk. Returns `None` when a
    /// scanned chunk already holds `id`, meaning the ledger entry was stale.
    /// Assumes the catalog is in id order; an `id` sitting in a chunk past the
    /// insertion point is not seen and ends up duplicated.
    fn insert_recycled(&self, id: BookId, title: &str, author: &str) -> Result<Option<Book>> {
        let book = Book::new(id, title, author);
        let mut chunks = self.chunks()?;
        let mut out = String::new();

        while let Some(mut chunk) = chunks.next().transpose()? {
            if chunk.iter().any(|b| b.id() == id) {
                return Ok(None);
            }

            let first = chunk[0].id();
            let last = chunk[chunk.len() - 1].id();
            if first > id || (first < id && id < last) {
                chunk.push(book.clone());
                chunk.sort_by_key(Book::id);
                push_lines(&mut out, &chunk);
                out.push_str(&chunks.into_remainder()?);
                self.backend.replace(Slot::Books, &out)?;
                return Ok(Some(book));
            }
            push_lines(&mut out, &chunk);
        }
        drop(chunks);

        out.push_str(&book.to_line());
        self.backend.replace(Slot::Books, &out)?;
        Ok(Some(book))
    }

    /// Places a book under a fresh id, one past the highest in the catalog.
    fn append_fresh(&self, title: &str, author: &str) -> Result<Book> {
        let mut out = String::new();
        let mut max_id = 0;

        for chunk in self.chunks()? {
            let chunk = chunk?;
            max_id = chunk.iter().map(Book::id).fold(max_id, BookId::max);
            push_lines(&mut out, &chunk);
        }

        let next = max_id
            .checked_add(1)
            .ok_or_else(|| ShelfError::Store("no ids left".into()))?;
        let book = Book::new(next, title, author);
        out.push_str(&book.to_line());
        self.backend.replace(Slot::Books, &out)?;
        Ok(book)
    }
}

impl<B: StorageBackend> BookStore for ShelfStore<B> {
    fn add(&mut self, title: &str, author: &str) -> Result<Book> {
        let ledger = self.ledger();
        while let Some(id) = ledger.peek()? {
            debug!("Free id found: {}", id);
            let placed = self.insert_recycled(id, title, author)?;
            ledger.take_one()?;
            match placed {
                Some(book) => {
                    info!("Added book {} under recycled id", book.id());
                    return Ok(book);
                }
                None => warn!("Discarding free id {}: already in use", id),
            }
        }

        let book = self.append_fresh(title, author)?;
        info!("Added book {}", book.id());
        Ok(book)
    }

    fn update(&mut self, id: BookId, title: &str, author: &str) -> Result<Book> {
        let updated = self.rewrite_first(|chunk| {
            let pos = chunk.iter().position(|b| b.id() == id)?;
            let book = chunk[pos].with_fields(title, author);
            chunk[pos] = book.clone();
            Some(book)
        })?;

        let book = updated.ok_or(ShelfError::NotFound(id))?;
        info!("Updated book {}", id);
        Ok(book)
    }

    fn delete(&mut self, id: BookId) -> Result<Book> {
        let removed = self.rewrite_first(|chunk| {
            let book = chunk.iter().find(|b| b.id() == id)?.clone();
            chunk.retain(|b| b.id() != id);
            Some(book)
        })?;

        let book = removed.ok_or(ShelfError::NotFound(id))?;
        self.ledger().add_one(id)?;
        info!("Deleted book {}", id);
        Ok(book)
    }

    fn find(&self, id: BookId) -> Result<Book> {
        for chunk in self.chunks()? {
            if let Some(book) = chunk?.into_iter().find(|b| b.id() == id) {
                return Ok(book);
            }
        }
        Err(ShelfError::NotFound(id))
    }

    fn pages(&self, page_size: usize) -> Result<Pages<'_>> {
        if page_size == 0 {
            return Err(ShelfError::Api("Page size must be at least 1".into()));
        }
        Ok(Pages::new(self.backend.open(Slot::Books)?, page_size))
    }

    fn free_ids(&self) -> Result<Vec<BookId>> {
        self.ledger().list()
    }

    fn count(&self) -> Result<usize> {
        let mut total = 0;
        for chunk in self.chunks()? {
            total += chunk?.len();
        }
        Ok(total)
    }
}
