use crate::error::Result;
use std::io::BufRead;

/// The two files a shelf keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The catalog, one serialized book per line.
    Books,
    /// Ids reclaimed by deletes, one per line, oldest first.
    FreeIds,
}

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `ShelfStore` handles the "what" (scans, id recycling, rewrites).
pub trait StorageBackend {
    /// Create the slot if it does not exist yet, leaving existing data alone.
    fn ensure(&self, slot: Slot) -> Result<()>;

    /// Open the slot for sequential reading.
    /// A slot that was never created reads as empty.
    fn open(&self, slot: Slot) -> Result<Box<dyn BufRead + '_>>;

    /// Replace the whole slot.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn replace(&self, slot: Slot, content: &str) -> Result<()>;

    /// Append one line, terminating it and separating it from any
    /// unterminated last line already present.
    fn append_line(&self, slot: Slot, line: &str) -> Result<()>;
}
