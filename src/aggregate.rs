//! Dataset-wide aggregations

use crate::{
    dataset::{Country, Snapshot},
    MedalCount,
};

/// Total number of medals won by one country across all editions
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CountryMedals {
    /// Name of the country
    pub country: Box<str>,

    /// Sum of the medals from every participation of this country
    pub total_medals: MedalCount,
}

/// Total medals for each country, in dataset order
///
/// Yields nothing if no dataset is loaded. Ordering for display purposes is
/// left to the caller.
pub fn total_medals_by_country(snapshot: &Snapshot) -> Vec<CountryMedals> {
    let Some(dataset) = snapshot else {
        return Vec::new();
    };
    (dataset.countries().iter())
        .map(|country| CountryMedals {
            country: country.name().into(),
            total_medals: country.total_medals(),
        })
        .collect()
}

/// Look up a country by exact, case-sensitive name
///
/// If the dataset lists several countries with this name, the first one wins.
pub fn find_country<'snapshot>(
    snapshot: &'snapshot Snapshot,
    name: &str,
) -> Option<&'snapshot Country> {
    snapshot
        .as_deref()?
        .countries()
        .iter()
        .find(|country| country.name() == name)
}

/// Number of countries in the dataset, or 0 if no dataset is loaded
pub fn country_count(snapshot: &Snapshot) -> usize {
    snapshot.as_deref().map_or(0, |dataset| dataset.countries().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{tests::france, Dataset, Participation};
    use std::sync::Arc;

    fn sample() -> Snapshot {
        Some(Arc::new(Dataset::new([
            Country::new(
                "Italy",
                [
                    Participation::new(2012, 28, 372),
                    Participation::new(2016, 28, 375),
                    Participation::new(2020, 40, 381),
                ],
            ),
            france(),
            Country::new("Atlantis", []),
        ])))
    }

    #[test]
    fn totals_follow_dataset_order() {
        let totals = total_medals_by_country(&sample());
        assert_eq!(
            totals,
            vec![
                CountryMedals {
                    country: "Italy".into(),
                    total_medals: 96,
                },
                CountryMedals {
                    country: "France".into(),
                    total_medals: 23,
                },
                CountryMedals {
                    country: "Atlantis".into(),
                    total_medals: 0,
                },
            ]
        );
    }

    #[test]
    fn totals_add_up_to_every_medal() {
        let snapshot = sample();
        let from_totals: MedalCount = (total_medals_by_country(&snapshot).iter())
            .map(|entry| entry.total_medals)
            .sum();
        let from_participations: MedalCount = (snapshot.as_ref().unwrap().countries().iter())
            .flat_map(Country::participations)
            .map(|p| p.medals_count)
            .sum();
        assert_eq!(from_totals, from_participations);
    }

    #[test]
    fn empty_state_has_no_totals() {
        assert!(total_medals_by_country(&None).is_empty());
        assert_eq!(country_count(&None), 0);
    }

    #[test]
    fn finds_exact_name_only() {
        let snapshot = sample();
        assert_eq!(find_country(&snapshot, "France"), Some(&france()));
        assert_eq!(find_country(&snapshot, "france"), None);
        assert_eq!(find_country(&snapshot, "Fra"), None);
        assert_eq!(find_country(&None, "France"), None);
    }

    #[test]
    fn first_duplicate_wins() {
        let first = Country::new("Germany", [Participation::new(2000, 1, 1)]);
        let second = Country::new("Germany", [Participation::new(2004, 2, 2)]);
        let snapshot = Some(Arc::new(Dataset::new([first.clone(), second])));
        assert_eq!(find_country(&snapshot, "Germany"), Some(&first));
    }

    #[test]
    fn huge_totals_saturate() {
        let snapshot = Some(Arc::new(Dataset::new([Country::new(
            "X",
            [
                Participation::new(2000, MedalCount::MAX, 0),
                Participation::new(2004, 1, 0),
            ],
        )])));
        assert_eq!(
            total_medals_by_country(&snapshot)[0].total_medals,
            MedalCount::MAX
        );
    }

    #[test]
    fn counts_countries() {
        assert_eq!(country_count(&sample()), 3);
    }
}
