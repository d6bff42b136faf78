use olympic_medals::{
    aggregate::{self, CountryMedals},
    cache::SnapshotCache,
    config::{Config, Source},
    dataset::Snapshot,
    load,
    progress::ProgressReport,
    series::{self, MedalSeries},
    stats::CountryStats,
    views::HomeView,
};
use std::{
    io::Write,
    path::Path,
    sync::{Arc, Mutex},
};
use tempfile::NamedTempFile;

const SHIPPED_DATASET: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/olympic.json");

fn shipped_config() -> Config {
    Config::with_source(Source::Path(Path::new(SHIPPED_DATASET).into()))
}

#[tokio::test]
async fn shipped_dataset_overview() {
    let cache = SnapshotCache::new();
    let mut config = shipped_config();
    config.strict = true;
    load::load_into(&cache, &config, &reqwest::Client::new(), &ProgressReport::hidden())
        .await
        .unwrap();

    let snapshot = cache.current();
    assert_eq!(aggregate::country_count(&snapshot), 5);
    assert_eq!(series::distinct_year_count(&snapshot), 3);
    assert_eq!(
        aggregate::total_medals_by_country(&snapshot)[0],
        CountryMedals {
            country: "Italy".into(),
            total_medals: 96,
        }
    );

    let france = aggregate::find_country(&snapshot, "France").unwrap();
    assert_eq!(
        CountryStats::new(france),
        CountryStats {
            entries: 3,
            total_medals: 113,
            total_athletes: 1196,
        }
    );
    let series = MedalSeries::new(france);
    assert_eq!(series.years(), &[2012, 2016, 2020]);
    assert_eq!(series.medals(), &[35, 45, 33]);
}

#[tokio::test]
async fn observers_follow_load_outcomes() {
    let cache = SnapshotCache::new();
    let config = shipped_config();
    let overviews: Arc<Mutex<Vec<Option<HomeView>>>> = Arc::default();
    let _subscription = {
        let overviews = overviews.clone();
        let config = config.clone();
        cache.subscribe(move |snapshot: &Snapshot| {
            overviews
                .lock()
                .unwrap()
                .push(HomeView::new(snapshot, &config))
        })
    };
    let client = reqwest::Client::new();
    let report = ProgressReport::hidden();

    // Successful load
    load::load_into(&cache, &config, &client, &report).await.unwrap();

    // Failed load replaces the previous dataset with nothing
    let mut broken = NamedTempFile::new().unwrap();
    broken.write_all(b"{ not json").unwrap();
    let broken_config = Config::with_source(Source::Path(broken.path().into()));
    assert!(load::load_into(&cache, &broken_config, &client, &report)
        .await
        .is_err());
    assert!(aggregate::total_medals_by_country(&cache.current()).is_empty());
    assert!(aggregate::find_country(&cache.current(), "France").is_none());

    let overviews = overviews.lock().unwrap();
    assert_eq!(overviews.len(), 3);
    assert!(overviews[0].is_none());
    assert_eq!(overviews[1].as_ref().unwrap().countries, 5);
    assert!(overviews[2].is_none());
}
