//! Incremental merge of freshly walked vacancies into the snapshot.
//!
//! Every cycle re-walks the whole listing, diffs the result against the
//! stored identifiers and prepends only the unseen vacancies. Stored
//! vacancies are never updated or removed.

use std::collections::HashSet;

use chrono::Local;

use crate::error::Result;
use crate::models::{Config, Snapshot, Vacancy};
use crate::services::VacancyCrawler;
use crate::storage::SnapshotStorage;

use super::walk::walk_all;

/// What a check cycle did to the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No snapshot existed; a full walk created one
    Created { count: usize },
    /// New vacancies were prepended
    Added { count: usize },
    /// Nothing new; the snapshot was not written
    Unchanged,
}

/// Vacancies from `fresh` whose identifier is not in `snapshot`, in walk order.
///
/// Repeats within `fresh` are dropped as well, keeping the first occurrence.
pub fn new_vacancies(snapshot: &Snapshot, fresh: Vec<Vacancy>) -> Vec<Vacancy> {
    let mut seen: HashSet<String> = snapshot.ids().into_iter().map(str::to_string).collect();
    fresh
        .into_iter()
        .filter(|v| seen.insert(v.id.clone()))
        .collect()
}

/// Drop repeated identifiers, keeping the first occurrence.
fn dedup(vacancies: Vec<Vacancy>) -> Vec<Vacancy> {
    let mut seen = HashSet::new();
    vacancies
        .into_iter()
        .filter(|v| seen.insert(v.id.clone()))
        .collect()
}

/// Walk the whole listing and write a fresh snapshot, replacing any stored one.
pub async fn run_full_walk(
    config: &Config,
    crawler: &VacancyCrawler,
    storage: &dyn SnapshotStorage,
) -> Result<Snapshot> {
    log::info!("Running full vacancy parse...");

    let start_url = config.search.search_url()?;
    let outcome = walk_all(crawler, start_url.as_str()).await?;
    let snapshot = Snapshot::new(&config.snapshot, dedup(outcome.vacancies));
    storage.save(&snapshot).await?;

    log::info!(
        "Saved {} vacancies to {}",
        snapshot.vacancies.len(),
        storage.location()
    );
    Ok(snapshot)
}

/// Run one check cycle.
///
/// Without a stored snapshot this is a full walk. Otherwise the listing is
/// walked again and unseen vacancies are prepended; when there are none the
/// snapshot is left untouched.
pub async fn check_for_updates(
    config: &Config,
    crawler: &VacancyCrawler,
    storage: &dyn SnapshotStorage,
) -> Result<UpdateOutcome> {
    log::info!(
        "{} - Checking for new vacancies...",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let Some(mut snapshot) = storage.load().await? else {
        log::info!("No existing data, running full parse");
        let snapshot = run_full_walk(config, crawler, storage).await?;
        return Ok(UpdateOutcome::Created {
            count: snapshot.vacancies.len(),
        });
    };

    let start_url = config.search.search_url()?;
    let outcome = walk_all(crawler, start_url.as_str()).await?;
    let added = new_vacancies(&snapshot, outcome.vacancies);

    if added.is_empty() {
        log::info!("No new vacancies found");
        return Ok(UpdateOutcome::Unchanged);
    }

    let count = added.len();
    log::info!("Found {} new vacancies", count);
    snapshot.prepend(added);
    storage.save(&snapshot).await?;
    log::info!(
        "Snapshot updated: {} vacancies in {}",
        snapshot.statistics.total,
        storage.location()
    );

    Ok(UpdateOutcome::Added { count })
}
