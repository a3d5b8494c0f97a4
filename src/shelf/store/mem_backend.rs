use super::backend::{Slot, StorageBackend};
use crate::error::{Result, ShelfError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{BufRead, Cursor};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since shelf is single-threaded.
/// This keeps every `StorageBackend` method on `&self`, same as `FsBackend`.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<Slot, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Raw slot contents, exactly as a file would hold them.
    pub fn raw(&self, slot: Slot) -> String {
        self.slots.borrow().get(&slot).cloned().unwrap_or_default()
    }

    /// Test helper to seed a slot with hand-written contents.
    pub fn set_raw(&self, slot: Slot, content: impl Into<String>) {
        self.slots.borrow_mut().insert(slot, content.into());
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn ensure(&self, slot: Slot) -> Result<()> {
        self.slots.borrow_mut().entry(slot).or_default();
        Ok(())
    }

    fn open(&self, slot: Slot) -> Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(Cursor::new(self.raw(slot).into_bytes())))
    }

    fn replace(&self, slot: Slot, content: &str) -> Result<()> {
        self.check_writable()?;
        self.slots.borrow_mut().insert(slot, content.to_string());
        Ok(())
    }

    fn append_line(&self, slot: Slot, line: &str) -> Result<()> {
        self.check_writable()?;
        let mut slots = self.slots.borrow_mut();
        let text = slots.entry(slot).or_default();
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(line);
        if !line.ends_with('\n') {
            text.push('\n');
        }
        Ok(())
    }
}
