//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

use super::selectors::VacancySelectors;
use super::snapshot::SearchParams;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and crawling behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Search endpoint and query parameters
    #[serde(default)]
    pub search: SearchConfig,

    /// Snapshot file location and metadata
    #[serde(default)]
    pub snapshot: SnapshotConfig,

    /// Polling settings
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    /// CSS selectors for listing and detail pages
    #[serde(default)]
    pub selectors: VacancySelectors,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.scheduler.interval_minutes == 0 {
            return Err(AppError::validation(
                "scheduler.interval_minutes must be > 0",
            ));
        }
        if self.snapshot.path.as_os_str().is_empty() {
            return Err(AppError::validation("snapshot.path is empty"));
        }
        self.search.search_url()?;
        self.selectors.validate()?;
        Ok(())
    }
}

/// HTTP client and crawling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Delay before every request in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl CrawlerConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

/// Search endpoint and the fixed query it is polled with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Site origin; relative links on listing pages resolve against it
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Path of the vacancy search page
    #[serde(default = "defaults::search_path")]
    pub path: String,

    /// Free-text query (`q`)
    #[serde(default = "defaults::query")]
    pub query: String,

    /// Category codes, each sent as `s[]`
    #[serde(default = "defaults::skills")]
    pub skills: Vec<String>,

    /// Vacancy type filter (`type`)
    #[serde(default = "defaults::kind")]
    pub kind: String,

    /// Professional role recorded on every vacancy
    #[serde(default = "defaults::role")]
    pub role: String,
}

impl SearchConfig {
    /// Parsed site origin.
    pub fn base(&self) -> Result<Url> {
        Url::parse(&self.base_url).map_err(|e| {
            AppError::config(format!("search.base_url '{}': {}", self.base_url, e))
        })
    }

    /// First page of the search listing.
    pub fn search_url(&self) -> Result<Url> {
        let mut url = self.base()?.join(&self.path)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("q", &self.query);
            for skill in &self.skills {
                query.append_pair("s[]", skill);
            }
            query.append_pair("type", &self.kind);
        }
        Ok(url)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            path: defaults::search_path(),
            query: defaults::query(),
            skills: defaults::skills(),
            kind: defaults::kind(),
            role: defaults::role(),
        }
    }
}

/// Snapshot file location and the descriptive metadata written into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    #[serde(default = "defaults::snapshot_path")]
    pub path: PathBuf,

    #[serde(default = "defaults::source")]
    pub source: String,

    /// Keywords listed in the snapshot header; not used for filtering
    #[serde(default = "defaults::keywords")]
    pub keywords: Vec<String>,

    /// Human-readable search descriptor; not used for filtering
    #[serde(default)]
    pub params: SearchParams,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: defaults::snapshot_path(),
            source: defaults::source(),
            keywords: defaults::keywords(),
            params: SearchParams::default(),
        }
    }
}

/// Poll loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default = "defaults::interval_minutes")]
    pub interval_minutes: u64,
}

impl SchedulerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes * 60)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval_minutes: defaults::interval_minutes(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
            .into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn request_delay() -> u64 {
        2000
    }

    // Search defaults
    pub fn base_url() -> String {
        "https://career.habr.com".into()
    }
    pub fn search_path() -> String {
        "/vacancies".into()
    }
    pub fn query() -> String {
        "Системный администратор".into()
    }
    pub fn skills() -> Vec<String> {
        vec!["17".into(), "88".into()]
    }
    pub fn kind() -> String {
        "all".into()
    }
    pub fn role() -> String {
        "Системный администратор".into()
    }

    // Snapshot defaults
    pub fn snapshot_path() -> PathBuf {
        PathBuf::from("habr_vacancies.json")
    }
    pub fn source() -> String {
        "career.habr.com".into()
    }
    pub fn keywords() -> Vec<String> {
        vec![
            "системный администратор".into(),
            "сисадмин".into(),
            "system administrator".into(),
        ]
    }

    // Scheduler defaults
    pub fn interval_minutes() -> u64 {
        60
    }
}
