//! In-memory representation of the Olympic participation dataset
//!
//! A [`Dataset`] is loaded in one go and never modified afterwards. Newer data
//! is published by swapping in a whole new dataset, see
//! [`SnapshotCache`](crate::cache::SnapshotCache).

use crate::{AthleteCount, MedalCount, Result, Year};
use serde::Deserialize;
use std::{
    collections::{hash_map, HashMap, HashSet},
    sync::Arc,
};

/// Current state of the data, as seen by the cache and its observers
///
/// `None` means that no dataset is available, either because none was loaded
/// yet or because the last load attempt failed.
pub type Snapshot = Option<Arc<Dataset>>;

/// Participation history of every country in the dataset
///
/// Countries are kept in the order where they were received.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(transparent)]
pub struct Dataset(Box<[Country]>);
//
impl Dataset {
    /// Build a dataset from a list of countries
    pub fn new(countries: impl IntoIterator<Item = Country>) -> Self {
        Self(countries.into_iter().collect())
    }

    /// Countries from the dataset, in input order
    pub fn countries(&self) -> &[Country] {
        &self.0[..]
    }

    /// Check the uniqueness invariants that the queries otherwise assume
    ///
    /// Country names must be non-empty and unique, and a country cannot take
    /// part in the same edition twice.
    pub fn validate(&self) -> Result<()> {
        let mut seen_countries = HashMap::with_capacity(self.0.len());
        for (idx, country) in self.0.iter().enumerate() {
            anyhow::ensure!(
                !country.name().is_empty(),
                "country #{idx} has an empty name"
            );
            match seen_countries.entry(country.name()) {
                hash_map::Entry::Occupied(o) => anyhow::bail!(
                    "country {:?} is listed twice (entries #{} and #{idx})",
                    country.name(),
                    o.get()
                ),
                hash_map::Entry::Vacant(v) => {
                    v.insert(idx);
                }
            }

            let mut seen_years = HashSet::with_capacity(country.participations().len());
            for participation in country.participations() {
                anyhow::ensure!(
                    seen_years.insert(participation.year),
                    "country {:?} took part in the {} games more than once",
                    country.name(),
                    participation.year
                );
            }
        }
        Ok(())
    }
}
//
impl From<Vec<Country>> for Dataset {
    fn from(countries: Vec<Country>) -> Self {
        Self(countries.into())
    }
}

/// Full participation history of one country
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq)]
pub struct Country {
    /// Name of the country, which identifies it within the dataset
    #[serde(rename = "country")]
    name: Box<str>,

    /// Participations in input order, which need not be chronological
    participations: Box<[Participation]>,
}
//
impl Country {
    /// Describe a country's participation history
    pub fn new(
        name: impl Into<Box<str>>,
        participations: impl IntoIterator<Item = Participation>,
    ) -> Self {
        Self {
            name: name.into(),
            participations: participations.into_iter().collect(),
        }
    }

    /// Name of the country
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Participations in input order
    pub fn participations(&self) -> &[Participation] {
        &self.participations[..]
    }

    /// Total number of medals won across all participations
    ///
    /// Saturates at [`MedalCount::MAX`] instead of overflowing.
    pub fn total_medals(&self) -> MedalCount {
        (self.participations.iter())
            .map(|p| p.medals_count)
            .fold(0, MedalCount::saturating_add)
    }
}

/// One country's record for one edition of the games
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    /// Year of the edition
    pub year: Year,

    /// Number of medals won during this edition
    pub medals_count: MedalCount,

    /// Number of athletes sent to this edition
    pub athlete_count: AthleteCount,
}
//
impl Participation {
    /// Record a participation
    pub fn new(year: Year, medals_count: MedalCount, athlete_count: AthleteCount) -> Self {
        Self {
            year,
            medals_count,
            athlete_count,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Single-country dataset used across the test suite
    pub(crate) fn france() -> Country {
        Country::new(
            "France",
            [
                Participation::new(1992, 8, 200),
                Participation::new(1996, 15, 250),
            ],
        )
    }

    #[test]
    fn decodes_input_shape() {
        let json = r#"[
            {
                "id": 1,
                "country": "Italy",
                "participations": [
                    {"id": 1, "year": 2012, "city": "Londres", "medalsCount": 28, "athleteCount": 372},
                    {"id": 2, "year": 2008, "city": "Pékin", "medalsCount": 27, "athleteCount": 375}
                ]
            },
            {"country": "Nowhere", "participations": []}
        ]"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(
            dataset,
            Dataset::new([
                Country::new(
                    "Italy",
                    [
                        Participation::new(2012, 28, 372),
                        Participation::new(2008, 27, 375),
                    ]
                ),
                Country::new("Nowhere", []),
            ])
        );
    }

    #[test]
    fn rejects_negative_counts() {
        let json = r#"[{"country": "X", "participations": [
            {"year": 2000, "medalsCount": -1, "athleteCount": 3}
        ]}]"#;
        assert!(serde_json::from_str::<Dataset>(json).is_err());
    }

    #[test]
    fn total_medals_of_empty_history_is_zero() {
        assert_eq!(Country::new("Nowhere", []).total_medals(), 0);
        assert_eq!(france().total_medals(), 23);
    }

    #[test]
    fn validation_accepts_well_formed_data() {
        let dataset = Dataset::new([france(), Country::new("Italy", [])]);
        dataset.validate().unwrap();
    }

    #[test]
    fn validation_rejects_duplicate_countries() {
        let dataset = Dataset::new([france(), Country::new("Italy", []), france()]);
        let error = dataset.validate().unwrap_err().to_string();
        assert!(error.contains("\"France\" is listed twice"), "{error}");
    }

    #[test]
    fn validation_rejects_duplicate_years() {
        let dataset = Dataset::new([Country::new(
            "Spain",
            [
                Participation::new(2004, 1, 10),
                Participation::new(2004, 2, 20),
            ],
        )]);
        assert!(dataset.validate().is_err());
    }

    #[test]
    fn validation_rejects_empty_names() {
        let dataset = Dataset::new([Country::new("", [])]);
        assert!(dataset.validate().is_err());
    }
}
