//! Serde helpers for the two textual date formats the API emits.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Release dates, e.g. `2014-11-21`.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// `lastUpdated` timestamps, e.g. `2023-03-20T10:15:00.000`. The service has
/// also been seen emitting microseconds, which are accepted as well.
pub const LAST_UPDATED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.3f", "%Y-%m-%dT%H:%M:%S%.6f"];

pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, RELEASE_DATE_FORMAT).ok()
}

/// Parse a `lastUpdated` value. The string carries no offset and is read as UTC.
pub fn parse_last_updated(raw: &str) -> Option<DateTime<Utc>> {
    LAST_UPDATED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `Option<NaiveDate>` field codec. Anything that is not a well-formed
/// `yyyy-MM-dd` string (missing key, `null`, a number, a bad date) decodes
/// to `None`.
pub mod lenient_date {
    use super::*;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(RELEASE_DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(raw
            .as_ref()
            .and_then(|v| v.as_str())
            .and_then(parse_release_date))
    }
}
