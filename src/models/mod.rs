// src/models/mod.rs

//! Domain models for the crawler application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod selectors;
mod snapshot;
mod vacancy;

// Re-export all public types
pub use config::{Config, CrawlerConfig, SchedulerConfig, SearchConfig, SnapshotConfig};
pub use selectors::{VacancySelectors, parse_selector};
pub use snapshot::{SearchParams, Snapshot, Statistics};
pub use vacancy::{NOT_SPECIFIED, OPEN_VACANCY, SALARY_NOT_SPECIFIED, Vacancy, VacancyDetails};
