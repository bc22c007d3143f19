use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A calendar day stored as a day count from the common era.
///
/// Comparisons and gaps are plain integer arithmetic; the `YYYY-MM-DD` form only
/// appears when the value is displayed or serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(i32);

#[derive(Debug, thiserror::Error)]
#[error("invalid date key '{input}', expected YYYY-MM-DD")]
pub struct ParseDayError {
    input: String,
}

impl DayKey {
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.num_days_from_ce())
    }

    pub fn parse(input: &str) -> Result<Self, ParseDayError> {
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|_| ParseDayError {
                input: input.to_string(),
            })
    }

    pub fn date(self) -> NaiveDate {
        // Every DayKey is built from a valid NaiveDate.
        NaiveDate::from_num_days_from_ce_opt(self.0).unwrap_or_default()
    }

    /// Whole days from `earlier` to `self`; negative when `earlier` is in the future.
    pub fn days_since(self, earlier: DayKey) -> i64 {
        i64::from(self.0) - i64::from(earlier.0)
    }

    pub fn long_display(self) -> String {
        self.date().format("%A, %B %-d, %Y").to_string()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date().format("%Y-%m-%d"))
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DayKey::parse(&raw).map_err(serde::de::Error::custom)
    }
}
