//! Data model for the two stats payloads served by the site.
//!
//! Both `/api/site_stats` and `/api/user_stats/{uid}` return one JSON object
//! per time window ("this_hebrew_year", "alltime"); the user payload
//! additionally carries `uid` and `name` at the top level. Snapshots are
//! replaced wholesale on every successful fetch.

use std::collections::HashMap;

use serde::Deserialize;

/// Time window selector for the dashboard. Changed only by explicit user
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeMode {
    #[default]
    YearToDate,
    AllTime,
}

impl TimeMode {
    pub const ALL: [TimeMode; 2] = [TimeMode::YearToDate, TimeMode::AllTime];

    /// JSON key selecting this window in both payloads.
    pub fn key(self) -> &'static str {
        match self {
            TimeMode::YearToDate => "this_hebrew_year",
            TimeMode::AllTime => "alltime",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeMode::YearToDate => "Year to Date",
            TimeMode::AllTime => "All Time",
        }
    }

    /// Get the next mode (wraps around)
    pub fn next(self) -> Self {
        match self {
            TimeMode::YearToDate => TimeMode::AllTime,
            TimeMode::AllTime => TimeMode::YearToDate,
        }
    }

    /// Get the previous mode (wraps around)
    pub fn prev(self) -> Self {
        self.next()
    }
}

/// Mapping from category name to a non-negative reading count.
pub type CategoryCounts = HashMap<String, f64>;

/// A text reference the user viewed often.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RefLink {
    pub en: String,
    pub he: String,
    pub book: String,
}

/// A source sheet in one of the favorites/popular lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SheetListing {
    #[serde(alias = "sheet_id")]
    pub id: u64,
    #[serde(alias = "sheet_title")]
    pub title: String,
    pub views: u64,
}

/// One time-keyed slice of either payload. The same shape serves the user
/// and the site-wide aggregate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivitySummary {
    pub texts_read: u64,
    pub sheets_read: u64,
    pub sheets_this_period: u64,
    pub categories_read: CategoryCounts,
    pub most_viewed_refs: Vec<RefLink>,
    pub most_viewed_sheets: Vec<SheetListing>,
    pub popular_sheets: Vec<SheetListing>,
}

impl ActivitySummary {
    /// True when there is anything to chart. Guards the percentage
    /// normalizer against a zero total.
    pub fn has_category_data(&self) -> bool {
        self.categories_read.values().any(|v| *v > 0.0)
    }
}

/// Payload of `/api/user_stats/{uid}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserStats {
    pub uid: Option<u64>,
    pub name: Option<String>,
    pub this_hebrew_year: Option<ActivitySummary>,
    pub alltime: Option<ActivitySummary>,
}

impl UserStats {
    pub fn period(&self, mode: TimeMode) -> Option<&ActivitySummary> {
        match mode {
            TimeMode::YearToDate => self.this_hebrew_year.as_ref(),
            TimeMode::AllTime => self.alltime.as_ref(),
        }
    }

    /// The payload is usable once it identifies a user and carries the
    /// requested window.
    pub fn is_ready(&self, mode: TimeMode) -> bool {
        self.uid.is_some() && self.period(mode).is_some()
    }
}

/// Payload of `/api/site_stats`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteStats {
    pub this_hebrew_year: Option<ActivitySummary>,
    pub alltime: Option<ActivitySummary>,
}

impl SiteStats {
    pub fn period(&self, mode: TimeMode) -> Option<&ActivitySummary> {
        match mode {
            TimeMode::YearToDate => self.this_hebrew_year.as_ref(),
            TimeMode::AllTime => self.alltime.as_ref(),
        }
    }

    pub fn is_ready(&self, mode: TimeMode) -> bool {
        self.period(mode).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mode_keys_and_labels() {
        assert_eq!(TimeMode::YearToDate.key(), "this_hebrew_year");
        assert_eq!(TimeMode::AllTime.key(), "alltime");
        assert_eq!(TimeMode::YearToDate.label(), "Year to Date");
        assert_eq!(TimeMode::AllTime.label(), "All Time");
    }

    #[test]
    fn test_mode_cycle() {
        assert_eq!(TimeMode::YearToDate.next(), TimeMode::AllTime);
        assert_eq!(TimeMode::AllTime.next(), TimeMode::YearToDate);
        assert_eq!(TimeMode::YearToDate.prev(), TimeMode::AllTime);
    }

    #[test]
    fn test_user_stats_deserialization() {
        let value = json!({
            "uid": 42,
            "name": "Rivka",
            "this_hebrew_year": {
                "textsRead": 120,
                "sheetsRead": 14,
                "sheetsThisPeriod": 3,
                "categoriesRead": {"Tanakh": 80.0, "Talmud": 40.0},
                "mostViewedRefs": [
                    {"en": "Genesis 1", "he": "בראשית א", "book": "Genesis"}
                ],
                "mostViewedSheets": [{"sheet_id": 9, "sheet_title": "Shabbat"}],
                "popularSheets": [{"id": 11, "title": "Purim", "views": 250}]
            },
            "alltime": {
                "textsRead": 4000,
                "sheetsRead": 300,
                "sheetsThisPeriod": 51,
                "categoriesRead": {"Tanakh": 2000.0}
            }
        });

        let stats: UserStats = serde_json::from_value(value).unwrap();
        assert_eq!(stats.uid, Some(42));
        assert_eq!(stats.name.as_deref(), Some("Rivka"));
        assert!(stats.is_ready(TimeMode::YearToDate));
        assert!(stats.is_ready(TimeMode::AllTime));

        let ytd = stats.period(TimeMode::YearToDate).unwrap();
        assert_eq!(ytd.texts_read, 120);
        assert_eq!(ytd.categories_read["Tanakh"], 80.0);
        assert_eq!(ytd.most_viewed_refs[0].book, "Genesis");
        assert_eq!(ytd.most_viewed_sheets[0].id, 9);
        assert_eq!(ytd.most_viewed_sheets[0].title, "Shabbat");
        assert_eq!(ytd.popular_sheets[0].views, 250);
    }

    #[test]
    fn test_partial_payload_not_ready() {
        let stats: UserStats = serde_json::from_value(json!({"uid": 7})).unwrap();
        assert!(!stats.is_ready(TimeMode::AllTime));

        let stats: UserStats =
            serde_json::from_value(json!({"alltime": {"textsRead": 1}})).unwrap();
        assert!(!stats.is_ready(TimeMode::AllTime));

        let site: SiteStats = serde_json::from_value(json!({})).unwrap();
        assert!(!site.is_ready(TimeMode::YearToDate));
    }

    #[test]
    fn test_has_category_data() {
        let mut summary = ActivitySummary::default();
        assert!(!summary.has_category_data());

        summary.categories_read.insert("Mishnah".to_string(), 0.0);
        assert!(!summary.has_category_data());

        summary.categories_read.insert("Talmud".to_string(), 3.0);
        assert!(summary.has_category_data());
    }
}
