//! Participation statistics of a single country

use crate::{dataset::Country, AthleteCount, MedalCount};

/// Summary of a country's participation history
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct CountryStats {
    /// Number of editions the country took part in
    pub entries: usize,

    /// Number of medals won across all editions, saturating on overflow
    pub total_medals: MedalCount,

    /// Number of athletes sent across all editions, saturating on overflow
    pub total_athletes: AthleteCount,
}
//
impl CountryStats {
    /// Compute the statistics of a country
    pub fn new(country: &Country) -> Self {
        let participations = country.participations();
        Self {
            entries: participations.len(),
            total_medals: country.total_medals(),
            total_athletes: (participations.iter())
                .map(|p| p.athlete_count)
                .fold(0, AthleteCount::saturating_add),
        }
    }
}
//
impl From<&Country> for CountryStats {
    fn from(country: &Country) -> Self {
        Self::new(country)
    }
}
