//! # Free-ID Ledger
//!
//! Ids released by deletes wait here, oldest first, until an add picks them up.
//! An id belongs in the ledger only while no book carries it; `add_one` does not
//! deduplicate, so callers must only hand over ids they just removed.
//!
//! An add calls `peek`, writes the catalog, and only then `take_one`, so a
//! failed add leaves the ledger as it was.
//! `take_one` is a read-modify-write: the remaining ids are written through
//! [`StorageBackend::replace`], which is atomic, so an interrupted take leaves
//! either the old ledger or the new one. It is not locked against a second
//! process doing the same thing.

use super::backend::{Slot, StorageBackend};
use crate::error::{Result, ShelfError};
use crate::model::BookId;
use log::debug;
use std::io::BufRead;

pub struct FreeIdLedger<'a, B: StorageBackend> {
    backend: &'a B,
}

impl<'a, B: StorageBackend> FreeIdLedger<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    pub fn ensure_exists(&self) -> Result<()> {
        self.backend.ensure(Slot::FreeIds)
    }

    /// All waiting ids in ledger order.
    pub fn list(&self) -> Result<Vec<BookId>> {
        let reader = self.backend.open(Slot::FreeIds)?;
        let mut ids = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(ShelfError::Io)?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let id = trimmed
                .parse::<BookId>()
                .map_err(|_| ShelfError::format(trimmed, "free id is not an integer"))?;
            if id == 0 {
                return Err(ShelfError::format(trimmed, "free id must be at least 1"));
            }
            ids.push(id);
        }
        Ok(ids)
    }

    /// The oldest waiting id, left in place.
    pub fn peek(&self) -> Result<Option<BookId>> {
        Ok(self.list()?.first().copied())
    }

    /// Removes and returns the oldest waiting id.
    pub fn take_one(&self) -> Result<Option<BookId>> {
        let ids = self.list()?;
        let Some((&first, rest)) = ids.split_first() else {
            return Ok(None);
        };

        let remaining: String = rest.iter().map(|id| format!("{}\n", id)).collect();
        self.backend.replace(Slot::FreeIds, &remaining)?;

        debug!("Took free id {} ({} left)", first, rest.len());
        Ok(Some(first))
    }

    pub fn add_one(&self, id: BookId) -> Result<()> {
        self.backend.append_line(Slot::FreeIds, &id.to_string())?;
        debug!("Released id {}", id);
        Ok(())
    }
}
