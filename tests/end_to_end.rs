//! End-to-end runs against an in-memory two-page site and a real snapshot file.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;
use vacancy_crawler::error::{AppError, Result};
use vacancy_crawler::models::Config;
use vacancy_crawler::pipeline::{UpdateOutcome, check_for_updates};
use vacancy_crawler::services::{PageFetcher, VacancyCrawler};
use vacancy_crawler::storage::{LocalStorage, SnapshotStorage};

const BASE: &str = "https://career.habr.com";

struct Site {
    pages: Mutex<HashMap<String, String>>,
}

impl Site {
    fn new() -> Self {
        Self {
            pages: Mutex::new(HashMap::new()),
        }
    }

    fn set(&self, url: &str, html: String) {
        self.pages.lock().unwrap().insert(url.to_string(), html);
    }
}

#[async_trait]
impl PageFetcher for Site {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.pages
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::parse(url, "not found"))
    }
}

fn card(id: &str, company: &str, salary: Option<&str>) -> String {
    let salary = salary
        .map(|s| format!(r#"<div class="basic-salary">{s}</div>"#))
        .unwrap_or_default();
    format!(
        r#"<div class="vacancy-card">
             <div class="vacancy-card__icon"><img src="https://habrastorage.org/{id}.png"></div>
             <a class="vacancy-card__title-link" href="/vacancies/{id}">Администратор {id}</a>
             <div class="vacancy-card__company-title"><a href="/companies/{company}">{company}</a></div>
             <time class="basic-date" datetime="2026-10-1{id}T09:00:00+03:00">вчера</time>
             <div class="vacancy-card__meta"><a href="/vacancies?city_id=1">Москва</a></div>
             {salary}
           </div>"#
    )
}

fn page(cards: &[String], next: Option<&str>) -> String {
    let next = next
        .map(|href| {
            format!(r#"<a class="button-comp--appearance-pagination-button" href="{href}">Дальше</a>"#)
        })
        .unwrap_or_default();
    format!("<html><body>{}{}</body></html>", cards.concat(), next)
}

fn detail(id: &str) -> String {
    format!(
        r#"<html><body>
             <div class="vacancy-description__text"><p>Задачи {id}</p></div>
             <div class="content-section">
               <h2 class="content-section__title">Требования</h2>
               <span class="preserve-line">Linux</span>
               <span class="preserve-line">Ansible</span>
             </div>
             <div class="content-section">
               <h2 class="content-section__title">Местоположение и тип занятости</h2>
               <span class="preserve-line">Москва</span>
               <span class="preserve-line">Полный рабочий день</span>
             </div>
           </body></html>"#
    )
}

fn two_page_site(config: &Config) -> Site {
    let site = Site::new();
    let start = config.search.search_url().unwrap();
    site.set(
        start.as_str(),
        page(
            &[card("1", "acme", Some("от 200 000 ₽")), card("2", "initech", None)],
            Some("/vacancies?page=2&type=all"),
        ),
    );
    site.set(
        &format!("{BASE}/vacancies?page=2&type=all"),
        page(&[card("3", "acme", None)], None),
    );
    for id in ["1", "2", "3", "4"] {
        site.set(&format!("{BASE}/vacancies/{id}"), detail(id));
    }
    site
}

fn config_in(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.crawler.request_delay_ms = 0;
    config.snapshot.path = dir.path().join("habr_vacancies.json");
    config
}

#[tokio::test]
async fn full_walk_creates_snapshot() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let storage = LocalStorage::new(&config.snapshot.path);
    let crawler = VacancyCrawler::new(&config, Box::new(two_page_site(&config))).unwrap();

    assert!(!config.snapshot.path.exists());
    let outcome = check_for_updates(&config, &crawler, &storage).await.unwrap();
    assert_eq!(outcome, UpdateOutcome::Created { count: 3 });
    assert!(config.snapshot.path.exists());

    let snapshot = storage.load().await.unwrap().unwrap();
    let ids: Vec<&str> = snapshot.vacancies.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(snapshot.statistics.total, 3);
    assert_eq!(snapshot.statistics.with_salary, 1);
    assert_eq!(snapshot.statistics.companies, 2);
    assert_eq!(snapshot.statistics.cities, 1);

    let first = &snapshot.vacancies[0];
    assert_eq!(first.requirement, "Linux\nAnsible");
    assert_eq!(first.responsibility, "Задачи 1");
    assert_eq!(first.schedule, "Полный рабочий день");
    assert_eq!(first.company_url, "https://career.habr.com/companies/acme");
}

#[tokio::test]
async fn recheck_without_new_vacancies_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let storage = LocalStorage::new(&config.snapshot.path);
    let crawler = VacancyCrawler::new(&config, Box::new(two_page_site(&config))).unwrap();

    check_for_updates(&config, &crawler, &storage).await.unwrap();
    let before = std::fs::read(&config.snapshot.path).unwrap();

    let outcome = check_for_updates(&config, &crawler, &storage).await.unwrap();
    assert_eq!(outcome, UpdateOutcome::Unchanged);
    assert_eq!(std::fs::read(&config.snapshot.path).unwrap(), before);
}

#[tokio::test]
async fn recheck_prepends_new_vacancy() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let storage = LocalStorage::new(&config.snapshot.path);

    let crawler = VacancyCrawler::new(&config, Box::new(two_page_site(&config))).unwrap();
    check_for_updates(&config, &crawler, &storage).await.unwrap();

    // Vacancy 4 appears at the top of the first page.
    let site = two_page_site(&config);
    let start = config.search.search_url().unwrap();
    site.set(
        start.as_str(),
        page(
            &[
                card("4", "globex", Some("до 300 000 ₽")),
                card("1", "acme", Some("от 200 000 ₽")),
                card("2", "initech", None),
            ],
            Some("/vacancies?page=2&type=all"),
        ),
    );
    let crawler = VacancyCrawler::new(&config, Box::new(site)).unwrap();

    let outcome = check_for_updates(&config, &crawler, &storage).await.unwrap();
    assert_eq!(outcome, UpdateOutcome::Added { count: 1 });

    let snapshot = storage.load().await.unwrap().unwrap();
    let ids: Vec<&str> = snapshot.vacancies.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["4", "1", "2", "3"]);
    assert_eq!(snapshot.statistics.total, 4);
    assert_eq!(snapshot.statistics.with_salary, 2);
    assert_eq!(snapshot.statistics.companies, 3);
}
