// src/services/listing.rs

//! Vacancy listing page parser.
//!
//! Turns one search results page into summary vacancies plus the link to the
//! next page. Cards that cannot be read are skipped, never fatal.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Config, NOT_SPECIFIED, Vacancy, parse_selector};
use crate::utils::{extract_vacancy_id, resolve_url};

use super::text_of;

/// One parsed listing page.
#[derive(Debug, Default)]
pub struct ListingPage {
    /// Vacancies read from well-formed cards, in page order
    pub vacancies: Vec<Vacancy>,
    /// Absolute URL of the next page, `None` on the last page
    pub next_page: Option<String>,
    /// Number of cards that were skipped
    pub skipped: usize,
}

/// Parser for vacancy search result pages.
pub struct ListingParser {
    base: Url,
    role: String,
    date_attr: String,
    card: Selector,
    title: Selector,
    company: Selector,
    logo: Selector,
    salary: Selector,
    date: Selector,
    location: Selector,
    next_page: Selector,
}

impl ListingParser {
    /// Compile the listing selectors from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let s = &config.selectors;
        Ok(Self {
            base: config.search.base()?,
            role: config.search.role.clone(),
            date_attr: s.date_attr.clone(),
            card: parse_selector(&s.card)?,
            title: parse_selector(&s.title)?,
            company: parse_selector(&s.company)?,
            logo: parse_selector(&s.logo)?,
            salary: parse_selector(&s.salary)?,
            date: parse_selector(&s.date)?,
            location: parse_selector(&s.location)?,
            next_page: parse_selector(&s.next_page)?,
        })
    }

    /// Parse a listing page.
    pub fn parse(&self, html: &str) -> ListingPage {
        let document = Html::parse_document(html);
        let mut page = ListingPage::default();

        for card in document.select(&self.card) {
            match self.parse_card(&card) {
                Ok(vacancy) => page.vacancies.push(vacancy),
                Err(e) => {
                    page.skipped += 1;
                    log::warn!("Skipping vacancy card: {}", e);
                }
            }
        }

        page.next_page = document
            .select(&self.next_page)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(|href| resolve_url(&self.base, href));

        page
    }

    fn parse_card(&self, card: &ElementRef) -> Result<Vacancy> {
        let title = card
            .select(&self.title)
            .next()
            .ok_or_else(|| AppError::parse("vacancy card", "missing title link"))?;
        let href = title
            .value()
            .attr("href")
            .ok_or_else(|| AppError::parse("vacancy card", "title link has no href"))?;

        let url = self.base.join(href)?;
        let id = extract_vacancy_id(url.as_str())
            .ok_or_else(|| AppError::parse(url.as_str(), "no identifier in vacancy URL"))?;

        let mut vacancy = Vacancy::new(id, text_of(&title), url.as_str(), self.role.as_str());

        if let Some(company) = card.select(&self.company).next() {
            vacancy.company = text_of(&company);
            vacancy.company_url = company
                .value()
                .attr("href")
                .map(|href| resolve_url(&self.base, href))
                .unwrap_or_else(|| NOT_SPECIFIED.to_string());
        }

        if let Some(src) = card
            .select(&self.logo)
            .next()
            .and_then(|img| img.value().attr("src"))
        {
            vacancy.company_logo = src.to_string();
        }

        if let Some(salary) = card.select(&self.salary).next() {
            let text = text_of(&salary);
            if !text.is_empty() {
                vacancy.salary = text.clone();
                vacancy.salary_raw = Some(text);
            }
        }

        if let Some(datetime) = card
            .select(&self.date)
            .next()
            .and_then(|el| el.value().attr(&self.date_attr))
        {
            vacancy.published_at = datetime.to_string();
            vacancy.created_at = datetime.to_string();
        }

        if let Some(location) = card.select(&self.location).next() {
            vacancy.area = text_of(&location);
        }

        Ok(vacancy)
    }
}
