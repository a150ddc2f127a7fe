//! Vacancy Crawler CLI
//!
//! Local execution entry point. Without a subcommand it polls forever.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vacancy_crawler::{
    error::Result,
    models::Config,
    pipeline::{self, UpdateOutcome},
    services::{HttpFetcher, VacancyCrawler},
    storage::{LocalStorage, SnapshotStorage},
};

/// Vacancy Crawler - career.habr.com vacancy watcher
#[derive(Parser, Debug)]
#[command(name = "vacancy-crawler", version, about = "Polls career.habr.com for new vacancies")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check immediately, then every configured interval (default)
    Run,

    /// Run a single check cycle and exit
    Check,

    /// Walk the whole listing and write a fresh snapshot
    Walk {
        /// Snapshot path (default: snapshot.path from the config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Show current snapshot info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn build_crawler(config: &Config) -> Result<VacancyCrawler> {
    let fetcher = HttpFetcher::new(&config.crawler)?;
    VacancyCrawler::new(config, Box::new(fetcher))
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::load_or_default(&cli.config)
    };

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            config.validate()?;
            let crawler = build_crawler(&config)?;
            let storage = LocalStorage::new(&config.snapshot.path);
            log::info!("Vacancy crawler started, snapshot at {}", storage.location());
            pipeline::run_scheduler(&config, &crawler, &storage).await;
        }

        Command::Check => {
            config.validate()?;
            let crawler = build_crawler(&config)?;
            let storage = LocalStorage::new(&config.snapshot.path);
            match pipeline::check_for_updates(&config, &crawler, &storage).await? {
                UpdateOutcome::Created { count } => {
                    log::info!("Snapshot created with {} vacancies", count)
                }
                UpdateOutcome::Added { count } => log::info!("Added {} vacancies", count),
                UpdateOutcome::Unchanged => log::info!("Snapshot unchanged"),
            }
        }

        Command::Walk { output } => {
            if let Some(path) = output {
                config.snapshot.path = path;
            }
            config.validate()?;
            let crawler = build_crawler(&config)?;
            let storage = LocalStorage::new(&config.snapshot.path);
            pipeline::run_full_walk(&config, &crawler, &storage).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
            log::info!("Search URL: {}", config.search.search_url()?);
            log::info!("Snapshot: {}", config.snapshot.path.display());
            log::info!(
                "Delay: {} ms, interval: {} min",
                config.crawler.request_delay_ms,
                config.scheduler.interval_minutes
            );
        }

        Command::Info => {
            let storage = LocalStorage::new(&config.snapshot.path);
            log::info!("Snapshot file: {}", storage.location());

            match storage.load().await? {
                Some(snapshot) => {
                    let stats = snapshot.statistics;
                    log::info!("Source: {}", snapshot.source);
                    log::info!("Last updated: {}", snapshot.updated.format("%Y-%m-%dT%H:%M:%SZ"));
                    log::info!("Vacancies: {}", stats.total);
                    log::info!("With salary: {}", stats.with_salary);
                    log::info!("Companies: {}", stats.companies);
                    log::info!("Cities: {}", stats.cities);
                    log::info!("Premium: {}", stats.premium);
                    log::info!("With test: {}", stats.with_test);
                }
                None => log::info!("No snapshot found yet."),
            }
        }
    }

    Ok(())
}
