// src/pipeline/walk.rs

//! Pagination walk over the search listing.

use crate::error::Result;
use crate::models::Vacancy;
use crate::services::VacancyCrawler;

/// Summary of one walk.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Fully populated vacancies in discovery order
    pub vacancies: Vec<Vacancy>,
    /// Listing pages visited
    pub pages: usize,
    /// Cards skipped because they could not be read
    pub skipped_cards: usize,
}

/// Follow next-page links from `start_url` until the listing ends,
/// fetching the detail page of every vacancy on the way.
///
/// The walk also stops when a page links to itself as the next page.
pub async fn walk_all(crawler: &VacancyCrawler, start_url: &str) -> Result<WalkOutcome> {
    let mut outcome = WalkOutcome::default();
    let mut current = Some(start_url.to_string());

    while let Some(url) = current.take() {
        let page = crawler.fetch_listing(&url).await?;
        outcome.pages += 1;
        outcome.skipped_cards += page.skipped;

        for mut vacancy in page.vacancies {
            let details = crawler.fetch_details(&vacancy.url).await?;
            vacancy.apply_details(details);
            outcome.vacancies.push(vacancy);
        }

        current = match page.next_page {
            Some(next) if next == url => {
                log::warn!("Next page link points back to {}; stopping", url);
                None
            }
            next => next,
        };
    }

    log::info!(
        "Walked {} page(s): {} vacancies, {} card(s) skipped",
        outcome.pages,
        outcome.vacancies.len(),
        outcome.skipped_cards
    );
    Ok(outcome)
}
