//! Loading of the dataset into the snapshot cache

use crate::{
    cache::SnapshotCache,
    config::{Config, Source},
    dataset::Dataset,
    progress::{ProgressReport, Work},
    Result,
};
use anyhow::Context;
use futures::stream::StreamExt;
use reqwest::Response;
use std::{path::Path, sync::Arc};

/// Upper bound on the body buffer preallocated from a Content-Length header
const MAX_PREALLOCATION: usize = 1 << 20;

/// Load the dataset and publish the outcome to the cache
///
/// On success, the new dataset replaces any previous one. On failure, the
/// cache is cleared and the error is returned to the caller. Either way, the
/// cache is updated exactly once.
pub async fn load_into(
    cache: &SnapshotCache,
    config: &Config,
    client: &reqwest::Client,
    report: &ProgressReport,
) -> Result<Arc<Dataset>> {
    match fetch(config, client, report).await {
        Ok(dataset) => {
            let dataset = Arc::new(dataset);
            log::info!(
                "Loaded {} countries from {}",
                dataset.countries().len(),
                config.source
            );
            cache.replace(Some(dataset.clone()));
            Ok(dataset)
        }
        Err(e) => {
            log::error!("Failed to load the dataset: {e:#}");
            cache.replace(None);
            Err(e)
        }
    }
}

/// Fetch and decode the dataset from its configured source
pub async fn fetch(
    config: &Config,
    client: &reqwest::Client,
    report: &ProgressReport,
) -> Result<Dataset> {
    log::debug!("Fetching the dataset from {}", config.source);
    let json = match &config.source {
        Source::Url(url) => download(client, url, report).await?,
        Source::Path(path) => read(path).await?,
    };
    let dataset = serde_json::from_slice::<Dataset>(&json)
        .with_context(|| format!("decoding the dataset from {}", config.source))?;
    if config.strict {
        dataset
            .validate()
            .with_context(|| format!("validating the dataset from {}", config.source))?;
    }
    Ok(dataset)
}

/// Download a remote dataset
async fn download(
    client: &reqwest::Client,
    url: &str,
    report: &ProgressReport,
) -> Result<Vec<u8>> {
    // Start the download
    let context = || format!("initiating download of {url}");
    let response = client
        .get(url)
        .send()
        .await
        .and_then(Response::error_for_status)
        .with_context(context)?;
    let content_length = response.content_length();
    let bytes = report.add(format!("Downloading {url}"), Work::from(content_length));

    // Collect the body, tracking how many bytes have been downloaded so far.
    // The announced length is only a hint, the body may turn out shorter.
    let capacity = content_length.map_or(0, |len| {
        usize::try_from(len).unwrap_or(usize::MAX).min(MAX_PREALLOCATION)
    });
    let mut json = Vec::with_capacity(capacity);
    let mut chunks = response.bytes_stream();
    let context = || format!("downloading {url}");
    while let Some(chunk) = chunks.next().await {
        let chunk = chunk.with_context(context)?;
        bytes.make_progress(chunk.len() as u64);
        json.extend_from_slice(&chunk);
    }
    bytes.finish();
    Ok(json)
}

/// Read a local dataset
async fn read(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))
}
