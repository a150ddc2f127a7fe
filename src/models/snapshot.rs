//! Persisted snapshot of all vacancies seen so far.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::SnapshotConfig;
use super::vacancy::Vacancy;

/// Descriptive search parameters written into the snapshot header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchParams {
    pub area: String,
    pub schedule: String,
    pub search_field: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            area: "Россия".to_string(),
            schedule: "Удалённая работа".to_string(),
            search_field: "В названии вакансии".to_string(),
        }
    }
}

/// Summary counts over the vacancy list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub with_salary: usize,
    pub companies: usize,
    pub cities: usize,
    pub premium: usize,
    pub with_test: usize,
}

impl Statistics {
    /// Compute statistics for a vacancy list.
    pub fn collect(vacancies: &[Vacancy]) -> Self {
        let companies: HashSet<&str> = vacancies.iter().map(|v| v.company.as_str()).collect();
        let cities: HashSet<&str> = vacancies.iter().map(|v| v.area.as_str()).collect();

        Self {
            total: vacancies.len(),
            with_salary: vacancies.iter().filter(|v| v.salary_raw.is_some()).count(),
            companies: companies.len(),
            cities: cities.len(),
            premium: vacancies.iter().filter(|v| v.premium).count(),
            with_test: vacancies.iter().filter(|v| v.has_test).count(),
        }
    }
}

/// The JSON document kept on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub source: String,
    pub search_keywords: Vec<String>,
    pub search_params: SearchParams,
    #[serde(with = "timestamp")]
    pub updated: DateTime<Utc>,
    pub statistics: Statistics,
    pub vacancies: Vec<Vacancy>,
}

impl Snapshot {
    /// Build a fresh snapshot from a full walk.
    pub fn new(config: &SnapshotConfig, vacancies: Vec<Vacancy>) -> Self {
        Self {
            source: config.source.clone(),
            search_keywords: config.keywords.clone(),
            search_params: config.params.clone(),
            updated: now(),
            statistics: Statistics::collect(&vacancies),
            vacancies,
        }
    }

    /// Identifiers of every stored vacancy.
    pub fn ids(&self) -> HashSet<&str> {
        self.vacancies.iter().map(|v| v.id.as_str()).collect()
    }

    /// Put `fresh` in front of the stored vacancies and refresh the header.
    pub fn prepend(&mut self, fresh: Vec<Vacancy>) {
        let mut vacancies = fresh;
        vacancies.append(&mut self.vacancies);
        self.vacancies = vacancies;
        self.statistics = Statistics::collect(&self.vacancies);
        self.updated = now();
    }
}

/// Current UTC time truncated to whole seconds, matching the on-disk format.
fn now() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now)
}

/// `YYYY-MM-DDTHH:MM:SSZ` on write, any RFC 3339 timestamp on read.
mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
