//! Command-line dashboard for the Olympic participation dataset

use log::LevelFilter;
use olympic_medals::{
    aggregate,
    cache::SnapshotCache,
    config::{Args, Config, DetailRequest},
    countries, load,
    progress::ProgressReport,
    views::{DetailView, HomeView},
    Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Set up logging
    setup_logging().map_err(|e| anyhow::format_err!("{e}"))?;

    // Decode CLI arguments
    let args = Args::parse_and_check()?;
    let config = Config::new(args);

    // Set up the cache and the views that observe it. They are immediately
    // handed the current (empty) snapshot, and render once data is loaded.
    let cache = SnapshotCache::new();
    let home = {
        let config = config.clone();
        cache.subscribe(move |snapshot| match HomeView::new(snapshot, &config) {
            Some(view) => println!("{view}"),
            None => log::debug!("No dataset available, not rendering the overview"),
        })
    };
    let detail = match &config.detail {
        DetailRequest::Named(name) => {
            let name = name.clone();
            Some(cache.subscribe(move |snapshot| {
                if let Some(country) = aggregate::find_country(snapshot, &name) {
                    println!("{}", DetailView::new(country));
                }
            }))
        }
        DetailRequest::Pick | DetailRequest::None => None,
    };

    // Load the dataset, which will trigger rendering
    let report = ProgressReport::new();
    let client = reqwest::Client::new();
    let dataset = load::load_into(&cache, &config, &client, &report).await?;

    // Handle the detailed view requests that observers cannot report on
    match &config.detail {
        DetailRequest::Named(name) => {
            countries::get(&cache.current(), name)?;
        }
        DetailRequest::Pick => {
            let country = countries::prompt(&dataset)?;
            println!("{}", DetailView::new(country));
        }
        DetailRequest::None => {}
    }

    // Stop observing the cache
    home.release();
    if let Some(detail) = detail {
        detail.release();
    }
    Ok(())
}

/// Set up logging
fn setup_logging() -> syslog::Result<()> {
    syslog::init(
        syslog::Facility::LOG_USER,
        if cfg!(feature = "log-trace") {
            LevelFilter::Trace
        } else if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        None,
    )
}
