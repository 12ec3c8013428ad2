use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::storage::{Generation, GenerationStore, ResultSets};
use crate::types::GenerationId;

/// Keeps the current generation in memory behind a reference swap.
///
/// The lock only guards the `Arc` itself; readers clone it and scan the
/// generation after the lock is released.
pub struct MemoryStore {
    current: RwLock<Arc<Generation>>,
    next_id: AtomicU64
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(Generation::default())),
            next_id: AtomicU64::new(1)
        }
    }

    fn swap(&self, sets: ResultSets) -> GenerationId {
        //NOTE: A panic while holding the lock cannot leave a half-written Arc behind, so poisoning is ignored
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);

        //NOTE: Ids are taken under the write lock so the stored generation ids only ever grow
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let previous = std::mem::replace(&mut *current, Arc::new(Generation::new(id, sets)));
        drop(current);

        //NOTE: The outgoing generation is freed after the lock is released
        drop(previous);

        id
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationStore for MemoryStore {
    fn replace(&self, sets: ResultSets) -> GenerationId {
        self.swap(sets)
    }

    fn reset(&self) -> GenerationId {
        self.swap(ResultSets::default())
    }

    fn snapshot(&self) -> Arc<Generation> {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
