mod generation;
mod memory_store;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::types::GenerationId;

pub use generation::{Generation, ResultSets};
pub use memory_store::MemoryStore;

/// Holds exactly one current generation of result sets.
///
/// Implementations must make `replace` and `reset` atomic with respect to
/// `snapshot`: a reader sees either the old generation or the new one, never a mix.
pub trait GenerationStore: Send + Sync + 'static {
    /// Swaps in a fully built set of results and returns the id of the new generation.
    fn replace(&self, sets: ResultSets) -> GenerationId;
    /// Swaps in an empty generation.
    fn reset(&self) -> GenerationId;
    /// Returns the current generation. Holding it never blocks writers.
    fn snapshot(&self) -> Arc<Generation>;
}
