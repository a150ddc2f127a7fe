// src/pipeline/schedule.rs

//! Poll loop.

use chrono::{DateTime, Local};
use tokio::time::{MissedTickBehavior, interval};

use crate::models::Config;
use crate::services::VacancyCrawler;
use crate::storage::SnapshotStorage;

use super::merge::{UpdateOutcome, check_for_updates};

/// Run a check immediately, then once per configured interval, forever.
///
/// A cycle that overruns the interval is followed straight away by the next
/// one. A failed cycle is logged and the loop carries on.
pub async fn run_scheduler(
    config: &Config,
    crawler: &VacancyCrawler,
    storage: &dyn SnapshotStorage,
) {
    let minutes = config.scheduler.interval_minutes;
    log::info!("Checking for new vacancies every {} minute(s)", minutes);

    let mut ticker = interval(config.scheduler.interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let started = Local::now();

        match check_for_updates(config, crawler, storage).await {
            Ok(UpdateOutcome::Created { count }) => {
                log::info!("Snapshot created with {} vacancies", count)
            }
            Ok(UpdateOutcome::Added { count }) => log::info!("Added {} vacancies", count),
            Ok(UpdateOutcome::Unchanged) => {}
            Err(e) => log::error!("Vacancy check failed: {}", e),
        }

        if let Some(next) = next_check_at(started, minutes) {
            log::info!("Next check at {}", next.format("%H:%M"));
        }
    }
}

/// Ticks are anchored to the start of the previous cycle, not its end.
fn next_check_at(started: DateTime<Local>, minutes: u64) -> Option<DateTime<Local>> {
    let interval = chrono::Duration::try_minutes(i64::try_from(minutes).ok()?)?;
    started.checked_add_signed(interval)
}
