//! Chronological medal series, for charting

use crate::{
    dataset::{Country, Snapshot},
    MedalCount, Year,
};
use std::collections::HashSet;

/// Medals won by one country on each edition, sorted by increasing year
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct MedalSeries {
    /// Edition years, in increasing order
    years: Box<[Year]>,

    /// Medals won on the edition of the same index
    medals: Box<[MedalCount]>,
}
//
impl MedalSeries {
    /// Build the medal series of a country
    ///
    /// The country's own participation list is left in its original order.
    pub fn new(country: &Country) -> Self {
        let mut sorted = country.participations().to_vec();
        sorted.sort_by_key(|participation| participation.year);
        Self {
            years: sorted.iter().map(|p| p.year).collect(),
            medals: sorted.iter().map(|p| p.medals_count).collect(),
        }
    }

    /// Edition years, to be used as chart labels
    pub fn years(&self) -> &[Year] {
        &self.years[..]
    }

    /// Medal counts, in the same order as [`years()`](Self::years)
    pub fn medals(&self) -> &[MedalCount] {
        &self.medals[..]
    }

    /// (year, medals) pairs in chronological order
    pub fn points(&self) -> impl Iterator<Item = (Year, MedalCount)> + '_ {
        self.years.iter().copied().zip(self.medals.iter().copied())
    }

    /// Number of points in the series
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Truth that the series has no points
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Number of distinct editions that appear anywhere in the dataset
///
/// Returns 0 if no dataset is loaded.
pub fn distinct_year_count(snapshot: &Snapshot) -> usize {
    let Some(dataset) = snapshot else {
        return 0;
    };
    (dataset.countries().iter())
        .flat_map(Country::participations)
        .map(|participation| participation.year)
        .collect::<HashSet<_>>()
        .len()
}
