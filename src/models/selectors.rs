// src/models/selectors.rs

//! CSS selectors for scraping vacancy listing and detail pages.

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// CSS selectors and section markers for career.habr.com markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VacancySelectors {
    /// Selector for each vacancy card on a listing page
    pub card: String,

    /// Title link within a card (text is the title, `href` the vacancy URL)
    pub title: String,

    /// Company link within a card
    pub company: String,

    /// Company logo image within a card
    pub logo: String,

    /// Salary text within a card
    pub salary: String,

    /// Publish date element within a card
    pub date: String,

    /// Attribute on the date element holding a machine-readable timestamp
    pub date_attr: String,

    /// Location link within a card
    pub location: String,

    /// Pagination control pointing at the next listing page
    pub next_page: String,

    /// Free-text description block on the detail page
    pub description: String,

    /// Structured content section on the detail page
    pub section: String,

    /// Title element within a content section
    pub section_title: String,

    /// Line item within a content section
    pub section_line: String,

    /// Section title text marking the requirements list
    pub requirements_title: String,

    /// Section title text marking location and employment type
    pub employment_title: String,
}

impl Default for VacancySelectors {
    fn default() -> Self {
        Self {
            card: ".vacancy-card".to_string(),
            title: ".vacancy-card__title-link".to_string(),
            company: ".vacancy-card__company-title a".to_string(),
            logo: ".vacancy-card__icon img".to_string(),
            salary: ".basic-salary".to_string(),
            date: ".basic-date".to_string(),
            date_attr: "datetime".to_string(),
            location: ".vacancy-card__meta a".to_string(),
            next_page: ".button-comp--appearance-pagination-button[href]".to_string(),
            description: ".vacancy-description__text".to_string(),
            section: ".content-section".to_string(),
            section_title: ".content-section__title".to_string(),
            section_line: ".preserve-line".to_string(),
            requirements_title: "Требования".to_string(),
            employment_title: "Местоположение и тип занятости".to_string(),
        }
    }
}

impl VacancySelectors {
    /// Check that every selector compiles.
    pub fn validate(&self) -> Result<()> {
        for s in [
            &self.card,
            &self.title,
            &self.company,
            &self.logo,
            &self.salary,
            &self.date,
            &self.location,
            &self.next_page,
            &self.description,
            &self.section,
            &self.section_title,
            &self.section_line,
        ] {
            parse_selector(s)?;
        }
        Ok(())
    }
}

/// Compile a CSS selector, mapping failures into [`AppError::Selector`].
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
