//! Wire temporal handling
//!
//! The backend serializes most datetimes as ISO-8601 strings, but Jackson
//! renders transaction timestamps as numeric arrays
//! (`[year, month, day, hour, minute, second, nano]`, trailing zero fields
//! omitted). `WireDateTime` accepts both shapes on the way in and always
//! writes ISO on the way out.
//!
//! All backend wall-clock values are Korea Standard Time.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Asia::Seoul;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid datetime array: expected 5 to 7 components, got {0}")]
    InvalidArrayLength(usize),

    #[error("Invalid datetime components: {0}")]
    InvalidComponents(String),

    #[error("Unparseable datetime string: {0}")]
    Unparseable(String),
}

/// A backend wall-clock datetime (KST, no explicit offset on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WireDateTime(NaiveDateTime);

impl WireDateTime {
    pub fn new(inner: NaiveDateTime) -> Self {
        Self(inner)
    }

    pub fn inner(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Parses the ISO-8601 string form, with or without fractional seconds
    pub fn parse_iso(s: &str) -> Result<Self, TemporalError> {
        // Some endpoints append an offset or a trailing Z; strip it since
        // the wall-clock value is what the UI renders.
        let trimmed = s.trim_end_matches('Z');
        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
            .or_else(|_| {
                NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                    .map(|d| d.and_hms_opt(0, 0, 0).unwrap())
            })
            .map(Self)
            .map_err(|_| TemporalError::Unparseable(s.to_string()))
    }

    /// Builds a datetime from the Jackson numeric-array form
    pub fn from_components(parts: &[i64]) -> Result<Self, TemporalError> {
        if !(5..=7).contains(&parts.len()) {
            return Err(TemporalError::InvalidArrayLength(parts.len()));
        }

        let second = parts.get(5).copied().unwrap_or(0);
        let nano = parts.get(6).copied().unwrap_or(0);

        let date = NaiveDate::from_ymd_opt(parts[0] as i32, parts[1] as u32, parts[2] as u32)
            .ok_or_else(|| {
                TemporalError::InvalidComponents(format!(
                    "{}-{}-{} is not a calendar date",
                    parts[0], parts[1], parts[2]
                ))
            })?;

        date.and_hms_nano_opt(parts[3] as u32, parts[4] as u32, second as u32, nano as u32)
            .map(Self)
            .ok_or_else(|| {
                TemporalError::InvalidComponents(format!(
                    "{}:{}:{}.{} is not a time of day",
                    parts[3], parts[4], second, nano
                ))
            })
    }

    /// Renders the ISO-8601 string the backend accepts
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    /// Korean locale date, e.g. `2024. 03. 15.`
    pub fn format_date_korean(&self) -> String {
        self.0.format("%Y. %m. %d.").to_string()
    }

    /// 24-hour clock time, e.g. `10:30`
    pub fn format_time_korean(&self) -> String {
        self.0.format("%H:%M").to_string()
    }
}

impl fmt::Display for WireDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso())
    }
}

impl Serialize for WireDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_iso())
    }
}

impl<'de> Deserialize<'de> for WireDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WireDateTimeVisitor;

        impl<'de> Visitor<'de> for WireDateTimeVisitor {
            type Value = WireDateTime;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an ISO-8601 datetime string or a numeric component array")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                WireDateTime::parse_iso(value).map_err(E::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut parts = Vec::with_capacity(7);
                while let Some(part) = seq.next_element::<i64>()? {
                    parts.push(part);
                }
                WireDateTime::from_components(&parts).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(WireDateTimeVisitor)
    }
}

/// Current wall-clock datetime in Korea Standard Time
pub fn now_kst() -> NaiveDateTime {
    Utc::now().with_timezone(&Seoul).naive_local()
}

/// Current calendar date in Korea Standard Time
pub fn today_kst() -> NaiveDate {
    now_kst().date()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_with_seconds() {
        let dt = WireDateTime::parse_iso("2024-03-15T10:30:00").unwrap();
        assert_eq!(dt.to_iso(), "2024-03-15T10:30:00");
    }

    #[test]
    fn test_parse_iso_with_fraction() {
        let dt = WireDateTime::parse_iso("2024-03-15T10:30:00.123456").unwrap();
        assert_eq!(dt.format_time_korean(), "10:30");
    }

    #[test]
    fn test_array_and_string_forms_agree() {
        let from_array = WireDateTime::from_components(&[2024, 3, 15, 10, 30, 0]).unwrap();
        let from_string = WireDateTime::parse_iso("2024-03-15T10:30:00").unwrap();
        assert_eq!(from_array, from_string);
    }

    #[test]
    fn test_array_without_seconds() {
        let dt = WireDateTime::from_components(&[2024, 3, 15, 10, 30]).unwrap();
        assert_eq!(dt.to_iso(), "2024-03-15T10:30:00");
    }

    #[test]
    fn test_array_with_nanos() {
        let dt = WireDateTime::from_components(&[2024, 3, 15, 10, 30, 5, 500_000_000]).unwrap();
        assert_eq!(dt.to_iso(), "2024-03-15T10:30:05");
    }

    #[test]
    fn test_bad_array_length() {
        let err = WireDateTime::from_components(&[2024, 3, 15]).unwrap_err();
        assert_eq!(err, TemporalError::InvalidArrayLength(3));
    }

    #[test]
    fn test_bad_calendar_date() {
        let err = WireDateTime::from_components(&[2024, 13, 1, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, TemporalError::InvalidComponents(_)));
    }

    #[test]
    fn test_deserialize_both_wire_shapes() {
        let from_string: WireDateTime =
            serde_json::from_str("\"2024-03-15T10:30:00\"").unwrap();
        let from_array: WireDateTime =
            serde_json::from_str("[2024,3,15,10,30,0]").unwrap();
        assert_eq!(from_string, from_array);
    }

    #[test]
    fn test_serialize_always_iso() {
        let dt = WireDateTime::from_components(&[2024, 3, 15, 10, 30, 0]).unwrap();
        assert_eq!(
            serde_json::to_string(&dt).unwrap(),
            "\"2024-03-15T10:30:00\""
        );
    }

    #[test]
    fn test_korean_date_format() {
        let dt = WireDateTime::parse_iso("2024-03-05T09:05:00").unwrap();
        assert_eq!(dt.format_date_korean(), "2024. 03. 05.");
    }
}
