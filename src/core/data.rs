//! Venue records and collection-level filtering
//!
//! A [`Venue`] is immutable once loaded and keyed by name. The JSON field
//! names match the venues.json store produced by the spreadsheet ingest, so
//! existing data files load as-is.

use crate::config::{Config, SortBy};
use crate::core::matcher;
use crate::core::schedule::{self, DaySchedule};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Calendar day, used both as a schedule key and a CLI filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All seven days in calendar order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Converts from chrono's weekday, for "happy hour now" queries.
    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Day::Monday,
            chrono::Weekday::Tue => Day::Tuesday,
            chrono::Weekday::Wed => Day::Wednesday,
            chrono::Weekday::Thu => Day::Thursday,
            chrono::Weekday::Fri => Day::Friday,
            chrono::Weekday::Sat => Day::Saturday,
            chrono::Weekday::Sun => Day::Sunday,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

/// One raw schedule string per day. All seven keys are always present; a
/// blank string means no promotion that day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(default)]
    pub monday: String,
    #[serde(default)]
    pub tuesday: String,
    #[serde(default)]
    pub wednesday: String,
    #[serde(default)]
    pub thursday: String,
    #[serde(default)]
    pub friday: String,
    #[serde(default)]
    pub saturday: String,
    #[serde(default)]
    pub sunday: String,
}

impl WeeklySchedule {
    /// The raw spreadsheet string for one day, verbatim.
    pub fn raw(&self, day: Day) -> &str {
        match day {
            Day::Monday => &self.monday,
            Day::Tuesday => &self.tuesday,
            Day::Wednesday => &self.wednesday,
            Day::Thursday => &self.thursday,
            Day::Friday => &self.friday,
            Day::Saturday => &self.saturday,
            Day::Sunday => &self.sunday,
        }
    }

    pub fn set(&mut self, day: Day, value: String) {
        match day {
            Day::Monday => self.monday = value,
            Day::Tuesday => self.tuesday = value,
            Day::Wednesday => self.wednesday = value,
            Day::Thursday => self.thursday = value,
            Day::Friday => self.friday = value,
            Day::Saturday => self.saturday = value,
            Day::Sunday => self.sunday = value,
        }
    }

    /// Normalize one day's string. Recomputed per query; the dataset is
    /// small enough that caching would buy nothing.
    pub fn normalized(&self, day: Day) -> DaySchedule {
        schedule::normalize(self.raw(day))
    }
}

/// A venue with its week of happy hour schedules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(rename = "priceRange", default)]
    pub price_range: String,
    #[serde(rename = "happyHours", default)]
    pub happy_hours: WeeklySchedule,
    #[serde(rename = "foodDeals", default)]
    pub food_deals: String,
    #[serde(rename = "drinkDeals", default)]
    pub drink_deals: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Venue {
    /// Everything a free-text query is matched against, lowercased.
    pub fn searchable_text(&self) -> String {
        [
            self.name.as_str(),
            self.neighborhood.as_str(),
            self.address.as_str(),
            self.food_deals.as_str(),
            self.drink_deals.as_str(),
            &self.tags.join(" "),
        ]
        .join(" ")
        .to_lowercase()
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.neighborhood.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.neighborhood)
        }
    }
}

/// Filter criteria composed with logical AND. All predicates are pure.
#[derive(Debug, Clone, Copy, Default)]
pub struct VenueFilter<'a> {
    /// Restrict to venues with any promotion on this day.
    pub day: Option<Day>,
    /// Minute of day the promotion must cover. With `day` unset this scans
    /// all seven days.
    pub at: Option<u16>,
    pub neighborhood: Option<&'a str>,
    pub tag: Option<&'a str>,
    pub query: Option<&'a str>,
}

/// The in-memory venue dataset, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueCollection {
    pub venues: Vec<Venue>,
}

/// Aggregate numbers for the `list --stats` view.
#[derive(Debug)]
pub struct VenueStats {
    pub total_venues: usize,
    pub total_neighborhoods: usize,
    /// Venue-days with any promotion classification.
    pub promotion_days: usize,
    pub neighborhood_counts: HashMap<String, usize>,
    pub tag_counts: HashMap<String, usize>,
}

impl VenueCollection {
    pub fn new() -> Self {
        Self { venues: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Find a venue by name, case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Venue> {
        self.venues
            .iter()
            .find(|v| v.name.eq_ignore_ascii_case(name))
    }

    /// Apply all filter criteria, AND-composed, and sort per config.
    pub fn search(&self, filter: &VenueFilter, config: &Config) -> Vec<Venue> {
        let mut venues = self.venues.clone();

        if let Some(neighborhood) = filter.neighborhood {
            venues.retain(|v| v.neighborhood.eq_ignore_ascii_case(neighborhood));
        }

        if let Some(tag) = filter.tag {
            venues.retain(|v| v.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)));
        }

        if let Some(q) = filter.query {
            let query = if config.general.search_case_sensitive {
                q.to_string()
            } else {
                q.to_lowercase()
            };
            venues.retain(|v| {
                let haystack = if config.general.search_case_sensitive {
                    [
                        v.name.as_str(),
                        v.neighborhood.as_str(),
                        v.address.as_str(),
                        v.food_deals.as_str(),
                        v.drink_deals.as_str(),
                        &v.tags.join(" "),
                    ]
                    .join(" ")
                } else {
                    v.searchable_text()
                };
                haystack.contains(&query)
            });
        }

        match (filter.day, filter.at) {
            (Some(day), None) => venues.retain(|v| matcher::matches_day_only(v, day)),
            (day, Some(minute)) => venues.retain(|v| matcher::matches_at_time(v, day, minute)),
            (None, None) => {}
        }

        match config.general.sort_by {
            SortBy::Name => venues.sort_by(|a, b| a.name.cmp(&b.name)),
            SortBy::Neighborhood => venues.sort_by(|a, b| {
                (a.neighborhood.as_str(), a.name.as_str())
                    .cmp(&(b.neighborhood.as_str(), b.name.as_str()))
            }),
        }

        venues
    }

    /// All distinct neighborhoods, sorted.
    pub fn neighborhoods(&self) -> Vec<String> {
        let mut neighborhoods: Vec<String> = self
            .venues
            .iter()
            .map(|v| v.neighborhood.clone())
            .filter(|n| !n.is_empty())
            .collect();
        neighborhoods.sort();
        neighborhoods.dedup();
        neighborhoods
    }

    /// All distinct tags, sorted.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .venues
            .iter()
            .flat_map(|v| v.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    pub fn stats(&self) -> VenueStats {
        let total_venues = self.venues.len();

        let promotion_days = self
            .venues
            .iter()
            .flat_map(|v| Day::ALL.iter().map(|d| v.happy_hours.normalized(*d)))
            .filter(|s| s.is_promotion())
            .count();

        let mut neighborhood_counts = HashMap::new();
        let mut tag_counts = HashMap::new();
        for venue in &self.venues {
            if !venue.neighborhood.is_empty() {
                *neighborhood_counts
                    .entry(venue.neighborhood.clone())
                    .or_insert(0) += 1;
            }
            for tag in &venue.tags {
                *tag_counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }

        VenueStats {
            total_venues,
            total_neighborhoods: neighborhood_counts.len(),
            promotion_days,
            neighborhood_counts,
            tag_counts,
        }
    }
}
