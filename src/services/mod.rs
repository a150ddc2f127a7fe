//! Service layer for the crawler application.
//!
//! This module contains the business logic for:
//! - Page fetching (`PageFetcher`, `HttpFetcher`)
//! - Listing page parsing (`ListingParser`)
//! - Detail page parsing (`DetailParser`)
//! - Fetch + parse orchestration (`VacancyCrawler`)

mod crawler;
mod details;
mod fetcher;
mod listing;

pub use crawler::VacancyCrawler;
pub use details::DetailParser;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use listing::{ListingPage, ListingParser};

use scraper::ElementRef;

/// Concatenated text of an element, trimmed.
fn text_of(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
