// src/services/crawler.rs

//! Vacancy crawler service.
//!
//! Fetches listing and detail pages through a [`PageFetcher`] and hands the
//! HTML to the parsers. One request at a time.

use crate::error::Result;
use crate::models::{Config, VacancyDetails};

use super::details::DetailParser;
use super::fetcher::PageFetcher;
use super::listing::{ListingPage, ListingParser};

/// Service for fetching and parsing vacancy pages.
pub struct VacancyCrawler {
    fetcher: Box<dyn PageFetcher>,
    listing: ListingParser,
    details: DetailParser,
}

impl VacancyCrawler {
    /// Create a crawler with the given configuration and page source.
    pub fn new(config: &Config, fetcher: Box<dyn PageFetcher>) -> Result<Self> {
        Ok(Self {
            fetcher,
            listing: ListingParser::new(config)?,
            details: DetailParser::new(config)?,
        })
    }

    /// Fetch and parse one listing page.
    pub async fn fetch_listing(&self, url: &str) -> Result<ListingPage> {
        log::info!("Parsing listing page: {}", url);
        let html = self.fetcher.fetch(url).await?;
        Ok(self.listing.parse(&html))
    }

    /// Fetch and parse one vacancy page.
    ///
    /// Only transport failures are returned as errors; unreadable pages yield
    /// placeholder details.
    pub async fn fetch_details(&self, url: &str) -> Result<VacancyDetails> {
        log::info!("Parsing vacancy details: {}", url);
        let html = self.fetcher.fetch(url).await?;
        Ok(self.details.parse(url, &html))
    }
}
