//! In-memory site used by unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::Snapshot;
use crate::services::PageFetcher;
use crate::storage::SnapshotStorage;

#[derive(Clone, Default)]
pub struct FixtureSite {
    pages: Arc<Mutex<HashMap<String, String>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FixtureSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, url: &str, html: &str) -> Self {
        self.set_page(url, html);
        self
    }

    pub fn set_page(&self, url: &str, html: &str) {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), html.to_string());
    }

    /// Register a listing page together with a detail page for each id.
    pub fn set_listing(&self, url: &str, ids: &[&str], next: Option<&str>) {
        self.set_page(url, &Self::listing(ids, next));
        for id in ids {
            self.set_page(
                &format!("https://career.habr.com/vacancies/{id}"),
                &Self::detail(&format!("Описание {id}")),
            );
        }
    }

    /// Every URL fetched so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Listing page with one card per id and an optional next link.
    pub fn listing(ids: &[&str], next: Option<&str>) -> String {
        let mut html = String::from("<html><body>");
        for id in ids {
            html.push_str(&format!(
                r#"<div class="vacancy-card">
                     <a class="vacancy-card__title-link" href="/vacancies/{id}">Vacancy {id}</a>
                     <div class="vacancy-card__company-title"><a href="/companies/c{id}">Company {id}</a></div>
                     <div class="vacancy-card__meta"><a href="/vacancies?city_id=1">Москва</a></div>
                   </div>"#
            ));
        }
        if let Some(next) = next {
            html.push_str(&format!(
                r#"<a class="button-comp--appearance-pagination-button" href="{next}">Дальше</a>"#
            ));
        }
        html.push_str("</body></html>");
        html
    }

    /// Detail page with a description block.
    pub fn detail(description: &str) -> String {
        format!(r#"<div class="vacancy-description__text">{description}</div>"#)
    }
}

#[async_trait]
impl PageFetcher for FixtureSite {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::parse(url, "404 Not Found"))
    }
}

/// Snapshot storage kept in memory, counting writes.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    snapshot: Arc<Mutex<Option<Snapshot>>>,
    saves: Arc<Mutex<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let storage = Self::default();
        *storage.snapshot.lock().unwrap() = Some(snapshot);
        storage
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn saves(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl SnapshotStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<Snapshot>> {
        Ok(self.snapshot())
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        *self.snapshot.lock().unwrap() = Some(snapshot.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
