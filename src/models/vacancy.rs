//! Vacancy data structure.

use serde::{Deserialize, Serialize};

/// Placeholder for text fields the site did not provide.
pub const NOT_SPECIFIED: &str = "Не указано";

/// Salary display text when a card has no salary.
pub const SALARY_NOT_SPECIFIED: &str = "Зарплата не указана";

/// Vacancy type recorded for every scraped posting.
pub const OPEN_VACANCY: &str = "Открытая";

fn not_specified() -> String {
    NOT_SPECIFIED.to_string()
}

/// A vacancy scraped from a listing card and its detail page.
///
/// `id` is the only deduplication key: two vacancies with the same `id` are
/// the same posting regardless of their other fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vacancy {
    /// Last path segment of `url`
    pub id: String,

    /// Vacancy title
    pub name: String,

    #[serde(default = "not_specified")]
    pub company: String,

    #[serde(default = "not_specified")]
    pub company_id: String,

    #[serde(default = "not_specified")]
    pub company_url: String,

    #[serde(default = "not_specified")]
    pub company_logo: String,

    /// Absolute URL of the vacancy page
    pub url: String,

    /// ISO 8601 timestamp from the card, empty when absent
    #[serde(default)]
    pub published_at: String,

    #[serde(default)]
    pub created_at: String,

    #[serde(default = "not_specified")]
    pub area: String,

    /// Salary as displayed
    #[serde(default)]
    pub salary: String,

    /// Raw salary text, `None` when the card lists no salary
    #[serde(default)]
    pub salary_raw: Option<String>,

    #[serde(default = "not_specified")]
    pub experience: String,

    #[serde(default = "not_specified")]
    pub schedule: String,

    #[serde(default = "not_specified")]
    pub employment: String,

    #[serde(default)]
    pub requirement: String,

    #[serde(default)]
    pub responsibility: String,

    #[serde(rename = "type", default)]
    pub vacancy_type: String,

    #[serde(default)]
    pub professional_roles: Vec<String>,

    #[serde(default)]
    pub has_test: bool,

    #[serde(default)]
    pub premium: bool,

    #[serde(default)]
    pub accept_handicapped: bool,

    #[serde(default)]
    pub accept_kids: bool,

    #[serde(default)]
    pub accept_temporary: bool,
}

impl Vacancy {
    /// Create a vacancy with every optional field at its placeholder.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            company: not_specified(),
            company_id: not_specified(),
            company_url: not_specified(),
            company_logo: not_specified(),
            url: url.into(),
            published_at: String::new(),
            created_at: String::new(),
            area: not_specified(),
            salary: SALARY_NOT_SPECIFIED.to_string(),
            salary_raw: None,
            experience: not_specified(),
            schedule: not_specified(),
            employment: not_specified(),
            requirement: String::new(),
            responsibility: String::new(),
            vacancy_type: OPEN_VACANCY.to_string(),
            professional_roles: vec![role.into()],
            has_test: false,
            premium: false,
            accept_handicapped: false,
            accept_kids: false,
            accept_temporary: false,
        }
    }

    /// Overwrite the detail-page fields.
    pub fn apply_details(&mut self, details: VacancyDetails) {
        self.experience = details.experience;
        self.schedule = details.schedule;
        self.employment = details.employment;
        self.requirement = details.requirement;
        self.responsibility = details.responsibility;
    }
}

/// Fields extracted from a vacancy detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyDetails {
    pub experience: String,
    pub schedule: String,
    pub employment: String,
    pub requirement: String,
    pub responsibility: String,
}

impl Default for VacancyDetails {
    fn default() -> Self {
        Self {
            experience: not_specified(),
            schedule: not_specified(),
            employment: not_specified(),
            requirement: String::new(),
            responsibility: String::new(),
        }
    }
}
