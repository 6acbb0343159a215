use crate::model::Verse;
use crate::selector::SelectionRequest;

pub mod memory;
pub mod schema;
pub mod store;

pub use memory::MemorySource;
pub use store::VerseStore;

/// Read-only view of the verse store used by the selector.
pub trait VerseSource {
    /// Unassigned verses matching `req`, at most `req.limit`, in no particular order.
    fn find_unassigned(&self, req: &SelectionRequest<'_>) -> anyhow::Result<Vec<Verse>>;

    /// Number of verses whose category is already `category`.
    fn count_assigned(&self, category: &str) -> anyhow::Result<u64>;
}
