use super::book_store::ShelfStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = ShelfStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ShelfStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::BookId;
    use crate::store::backend::{Slot, StorageBackend};
    use crate::store::BookStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let store = InMemoryStore::new();
            store.init().unwrap();
            Self { store }
        }

        /// Adds `count` books titled "Test Book N" through the store itself.
        pub fn with_books(mut self, count: usize) -> Self {
            for i in 1..=count {
                self.store
                    .add(&format!("Test Book {}", i), &format!("Test Author {}", i))
                    .unwrap();
            }
            self
        }

        /// Seeds the catalog file verbatim, bypassing the store.
        pub fn with_raw_books(self, raw: &str) -> Self {
            self.store.backend().set_raw(Slot::Books, raw);
            self
        }

        pub fn with_free_ids(self, ids: &[BookId]) -> Self {
            for id in ids {
                self.store
                    .backend()
                    .append_line(Slot::FreeIds, &id.to_string())
                    .unwrap();
            }
            self
        }
    }
}
