//! Display-ready views of the dataset
//!
//! These are what observers of the [`SnapshotCache`](crate::cache::SnapshotCache)
//! render whenever a new snapshot is published.

use crate::{
    aggregate::{self, CountryMedals},
    config::Config,
    dataset::{Country, Snapshot},
    series::{self, MedalSeries},
    stats::CountryStats,
};
use std::{cmp::Reverse, fmt};

/// Overview of the whole dataset
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HomeView {
    /// Number of distinct editions of the games in the dataset
    pub editions: usize,

    /// Number of countries in the dataset
    pub countries: usize,

    /// Total medals per country, in display order
    pub medals: Vec<CountryMedals>,
}
//
impl HomeView {
    /// Compute the overview, or `None` if no dataset is loaded
    pub fn new(snapshot: &Snapshot, config: &Config) -> Option<Self> {
        snapshot.as_ref()?;
        let mut medals = aggregate::total_medals_by_country(snapshot);
        if config.sort_by_medals {
            // Stable sort, so ties keep the dataset order
            medals.sort_by_key(|entry| Reverse(entry.total_medals));
        }
        if let Some(max_outputs) = config.max_outputs {
            medals.truncate(max_outputs.get());
        }
        Some(Self {
            editions: series::distinct_year_count(snapshot),
            countries: aggregate::country_count(snapshot),
            medals,
        })
    }
}
//
impl fmt::Display for HomeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of JOs: {}", self.editions)?;
        writeln!(f, "Number of countries: {}", self.countries)?;
        let width = (self.medals.iter())
            .map(|entry| entry.country.chars().count())
            .max()
            .unwrap_or(0);
        for CountryMedals {
            country,
            total_medals,
        } in &self.medals
        {
            writeln!(f, "  {country:<width$}  {total_medals:>5} medals")?;
        }
        Ok(())
    }
}

/// Detailed history of one country
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DetailView {
    /// Name of the country
    pub country: Box<str>,

    /// Summary statistics
    pub stats: CountryStats,

    /// Medals won on each edition, chronologically
    pub series: MedalSeries,
}
//
impl DetailView {
    /// Compute the detailed view of a country
    pub fn new(country: &Country) -> Self {
        Self {
            country: country.name().into(),
            stats: CountryStats::new(country),
            series: MedalSeries::new(country),
        }
    }
}
//
impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let CountryStats {
            entries,
            total_medals,
            total_athletes,
        } = self.stats;
        writeln!(f, "{}", self.country)?;
        writeln!(f, "Number of entries: {entries}")?;
        writeln!(f, "Total number of medals: {total_medals}")?;
        writeln!(f, "Total number of athletes: {total_athletes}")?;
        for (year, medals) in self.series.points() {
            writeln!(f, "  {year}: {medals}")?;
        }
        Ok(())
    }
}
