//! Command-line interface and the process configuration derived from it

use crate::Result;
use clap::Parser;
use std::{fmt, num::NonZeroUsize, path::Path, sync::Arc};

/// Location of the dataset when none is specified
pub const DEFAULT_SOURCE: &str = "assets/olympic.json";

/// Medal statistics from the Olympic participation dataset
///
/// Prints how many editions and countries the dataset covers along with the
/// total medal count of every country, and optionally the detailed history of
/// one country.
#[derive(Parser, Debug)]
#[command(version, author)]
pub struct Args {
    /// Path or http(s) URL of the JSON dataset
    #[arg(default_value = DEFAULT_SOURCE)]
    source: Box<str>,

    /// Name of a country whose detailed history should be displayed
    ///
    /// The name must match the dataset exactly, including letter case.
    #[arg(short, long, conflicts_with = "pick")]
    country: Option<Box<str>>,

    /// Interactively pick a country whose detailed history should be displayed
    #[arg(short, long, default_value_t = false)]
    pick: bool,

    /// Sort countries by decreasing total medal count
    ///
    /// By default, countries are listed in the order of the dataset.
    #[arg(short, long, default_value_t = false)]
    sort_by_medals: bool,

    /// Reject datasets with duplicate countries or editions
    ///
    /// Without this option, such datasets are accepted and lookups by
    /// country name return the first match.
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Max number of countries in the medal totals listing
    #[arg(short = 'o', long)]
    max_outputs: Option<NonZeroUsize>,
}
//
impl Args {
    /// Decode and validate CLI arguments
    pub fn parse_and_check() -> Result<Self> {
        Self::parse().check()
    }

    /// Check CLI arguments for basic sanity
    fn check(self) -> Result<Self> {
        anyhow::ensure!(
            !self.source.trim().is_empty(),
            "the dataset source cannot be empty"
        );
        if let Some(country) = &self.country {
            anyhow::ensure!(!country.is_empty(), "the country name cannot be empty");
        }
        Ok(self)
    }
}

/// Final process configuration
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// Where the dataset should be loaded from
    pub source: Source,

    /// Which country, if any, should get a detailed view
    pub detail: DetailRequest,

    /// Sort the medal totals by decreasing medal count
    pub sort_by_medals: bool,

    /// Validate the dataset on load
    pub strict: bool,

    /// Truncate the medal totals to this many countries
    pub max_outputs: Option<NonZeroUsize>,
}
//
impl Config {
    /// Determine process configuration from CLI arguments
    pub fn new(args: Args) -> Arc<Self> {
        let Args {
            source,
            country,
            pick,
            sort_by_medals,
            strict,
            max_outputs,
        } = args;
        let detail = match (country, pick) {
            (Some(name), _) => DetailRequest::Named(name),
            (None, true) => DetailRequest::Pick,
            (None, false) => DetailRequest::None,
        };
        Arc::new(Self {
            source: Source::parse(&source),
            detail,
            sort_by_medals,
            strict,
            max_outputs,
        })
    }

    /// Configuration that loads a dataset and displays it without any option
    pub fn with_source(source: Source) -> Self {
        Self {
            source,
            detail: DetailRequest::None,
            sort_by_medals: false,
            strict: false,
            max_outputs: None,
        }
    }
}

/// Location of the JSON dataset
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Source {
    /// Remote dataset, to be downloaded over HTTP(S)
    Url(Box<str>),

    /// Local file
    Path(Box<Path>),
}
//
impl Source {
    /// Interpret a user-provided dataset location
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::Url(source.into())
        } else {
            Self::Path(Path::new(source).into())
        }
    }
}
//
impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Request for a detailed view of one country
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DetailRequest {
    /// No detailed view
    None,

    /// Detailed view of the country with this exact name
    Named(Box<str>),

    /// Detailed view of a country picked interactively once data is loaded
    Pick,
}
