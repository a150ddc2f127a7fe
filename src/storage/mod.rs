//! Storage abstractions for snapshot persistence.
//!
//! The whole crawler state is one JSON document:
//!
//! ```text
//! habr_vacancies.json
//! ├── source, search_keywords, search_params
//! ├── updated               # UTC, set on every rewrite
//! ├── statistics            # recomputed on every rewrite
//! └── vacancies[]           # newest first
//! ```

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Snapshot;

// Re-export for convenience
pub use local::LocalStorage;

/// Trait for snapshot storage backends.
#[async_trait]
pub trait SnapshotStorage: Send + Sync {
    /// Load the persisted snapshot, `None` if there is none yet.
    async fn load(&self) -> Result<Option<Snapshot>>;

    /// Replace the persisted snapshot.
    async fn save(&self, snapshot: &Snapshot) -> Result<()>;

    /// Human-readable location for log output.
    fn location(&self) -> String;
}
