// src/services/details.rs

//! Vacancy detail page parser.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Config, VacancyDetails, parse_selector};

use super::text_of;

/// Parser for a single vacancy page.
pub struct DetailParser {
    description: Selector,
    section: Selector,
    section_title: Selector,
    section_line: Selector,
    requirements_title: String,
    employment_title: String,
}

impl DetailParser {
    /// Compile the detail selectors from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let s = &config.selectors;
        Ok(Self {
            description: parse_selector(&s.description)?,
            section: parse_selector(&s.section)?,
            section_title: parse_selector(&s.section_title)?,
            section_line: parse_selector(&s.section_line)?,
            requirements_title: s.requirements_title.clone(),
            employment_title: s.employment_title.clone(),
        })
    }

    /// Parse a detail page, falling back to placeholders if it cannot be read.
    pub fn parse(&self, url: &str, html: &str) -> VacancyDetails {
        self.extract(html).unwrap_or_else(|e| {
            log::warn!("Failed to parse vacancy details {}: {}", url, e);
            VacancyDetails::default()
        })
    }

    fn extract(&self, html: &str) -> Result<VacancyDetails> {
        let document = Html::parse_document(html);
        let mut details = VacancyDetails::default();
        let mut found = false;

        if let Some(description) = document.select(&self.description).next() {
            let text = multiline_text(&description);
            details.requirement = text.clone();
            details.responsibility = text;
            found = true;
        }

        for section in document.select(&self.section) {
            let Some(title) = section.select(&self.section_title).next() else {
                continue;
            };
            found = true;
            let title = text_of(&title);
            let lines: Vec<String> = section
                .select(&self.section_line)
                .map(|line| text_of(&line))
                .collect();

            if title.contains(&self.requirements_title) {
                if !lines.is_empty() {
                    details.requirement = lines.join("\n");
                }
            } else if title.contains(&self.employment_title) {
                if let Some(line) = lines.get(1) {
                    details.schedule = line.clone();
                    details.employment = line.clone();
                }
            }
        }

        if !found {
            return Err(AppError::parse(
                "vacancy page",
                "no description or content sections",
            ));
        }
        Ok(details)
    }
}

/// Text nodes joined with newlines, trimmed.
fn multiline_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
