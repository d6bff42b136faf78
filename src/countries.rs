//! Selection of a country for the detailed view

use crate::{
    aggregate,
    dataset::{Country, Dataset, Snapshot},
    Result,
};
use anyhow::Context;
use dialoguer::FuzzySelect;
use unicase::UniCase;

/// Get a country from the current snapshot by exact name
///
/// If no country matches but one does when ignoring letter case, the error
/// message suggests it.
pub fn get<'snapshot>(snapshot: &'snapshot Snapshot, name: &str) -> Result<&'snapshot Country> {
    if let Some(country) = aggregate::find_country(snapshot, name) {
        return Ok(country);
    }
    anyhow::ensure!(
        snapshot.is_some(),
        "Cannot look up country {name:?} as no dataset is loaded"
    );
    match suggest(snapshot, name) {
        Some(suggestion) => anyhow::bail!(
            "Failed to find country {name:?}, did you mean {:?}?",
            suggestion.name()
        ),
        None => anyhow::bail!("Failed to find country {name:?}"),
    }
}

/// Find a country whose name only differs from the requested one by case
pub fn suggest<'snapshot>(snapshot: &'snapshot Snapshot, name: &str) -> Option<&'snapshot Country> {
    let name = UniCase::new(name);
    (snapshot.as_deref()?.countries().iter()).find(|country| UniCase::new(country.name()) == name)
}

/// Ask the user to select a country from the dataset
pub fn prompt(dataset: &Dataset) -> Result<&Country> {
    let countries = dataset.countries();
    anyhow::ensure!(!countries.is_empty(), "the dataset lists no country");
    let names = countries.iter().map(Country::name).collect::<Vec<_>>();
    let country_idx = FuzzySelect::new()
        .with_prompt("Which country should I detail?")
        .items(&names)
        .default(0)
        .max_length(usize::MAX)
        .interact()
        .context("prompting for a country")?;
    Ok(&countries[country_idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::france;
    use std::sync::Arc;

    fn snapshot() -> Snapshot {
        Some(Arc::new(Dataset::new([france(), Country::new("Italy", [])])))
    }

    #[test]
    fn gets_exact_match() {
        let snapshot = snapshot();
        assert_eq!(get(&snapshot, "Italy").unwrap().name(), "Italy");
    }

    #[test]
    fn suggests_other_casing() {
        let snapshot = snapshot();
        assert_eq!(suggest(&snapshot, "FRANCE").map(Country::name), Some("France"));
        let error = get(&snapshot, "FRANCE").unwrap_err().to_string();
        assert!(error.contains("did you mean \"France\""), "{error}");
    }

    #[test]
    fn reports_unknown_country() {
        let snapshot = snapshot();
        assert!(suggest(&snapshot, "Spain").is_none());
        let error = get(&snapshot, "Spain").unwrap_err().to_string();
        assert!(!error.contains("did you mean"), "{error}");
    }

    #[test]
    fn reports_missing_dataset() {
        let error = get(&None, "France").unwrap_err().to_string();
        assert!(error.contains("no dataset is loaded"), "{error}");
    }
}
