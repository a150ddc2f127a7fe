//! Pipeline entry points for crawler operations.
//!
//! - `walk_all`: Follow the search listing page by page
//! - `check_for_updates`: Merge unseen vacancies into the snapshot
//! - `run_full_walk`: Rebuild the snapshot from scratch
//! - `run_scheduler`: Poll forever

pub mod merge;
pub mod schedule;
pub mod walk;

pub use merge::{UpdateOutcome, check_for_updates, new_vacancies, run_full_walk};
pub use schedule::run_scheduler;
pub use walk::{WalkOutcome, walk_all};
