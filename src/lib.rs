//! Olympic participation dataset: snapshot cache and derived queries
//!
//! The dataset lists, for each country, one record per edition of the games
//! that it took part in. A [`SnapshotCache`](cache::SnapshotCache) holds the
//! latest successfully loaded [`Dataset`](dataset::Dataset) and republishes it
//! to observers, which compute display-ready views using the pure query
//! functions from [`aggregate`], [`stats`] and [`series`].

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod countries;
pub mod dataset;
pub mod load;
pub mod progress;
pub mod series;
pub mod stats;
pub mod views;

/// Use anyhow for Result type erasure
pub use anyhow::Result;

/// Year of Gregorian Calendar, identifying an edition of the games
pub type Year = i16;

/// Number of medals won by a country, over one or more editions
pub type MedalCount = u64;

/// Number of athletes sent by a country, over one or more editions
pub type AthleteCount = u64;
