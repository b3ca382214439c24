//! Timestamp parsing for the backend's wire format.
//!
//! The backend serializes `DateTime` values without an offset
//! (`2024-10-11T18:05:00`), occasionally with fractional seconds or a
//! trailing offset. All of them are kept as naive wall-clock values; no
//! timezone conversion happens anywhere in the client.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::{CoreError, CoreResult};

/// Format used when sending timestamps back to the backend.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub fn parse_timestamp(input: &str) -> CoreResult<NaiveDateTime> {
    let trimmed = input.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(ts);
        }
    }

    // Offsets are dropped, the wall-clock reading is kept as sent.
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.naive_local());
    }

    Err(CoreError::Parse {
        what: "timestamp",
        input: input.to_string(),
    })
}

pub fn parse_date(input: &str) -> CoreResult<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    parse_timestamp(trimmed)
        .map(|ts| ts.date())
        .map_err(|_| CoreError::Parse {
            what: "date",
            input: input.to_string(),
        })
}

/// `#[serde(with = "...")]` adapter for required timestamps.
pub mod naive {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(super::WIRE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// Same as [`naive`] for optional fields. Pair with `#[serde(default)]`.
pub mod option_naive {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.collect_str(&ts.format(super::WIRE_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => super::parse_timestamp(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

/// Dates go out as `YYYY-MM-DD` but come back as full timestamps.
pub mod date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parses_backend_timestamps() {
        let plain = parse_timestamp("2024-10-11T18:05:00").unwrap();
        assert_eq!(plain.hour(), 18);
        assert_eq!(plain.minute(), 5);

        let fractional = parse_timestamp("2024-10-11T18:05:00.1234567").unwrap();
        assert_eq!(fractional.minute(), 5);

        let short = parse_timestamp("2024-10-11T18:05").unwrap();
        assert_eq!(short, plain);

        let spaced = parse_timestamp("2024-10-11 18:05").unwrap();
        assert_eq!(spaced, plain);
    }

    #[test]
    fn test_offsets_keep_wall_clock() {
        let ts = parse_timestamp("2024-10-11T18:05:00+03:00").unwrap();
        assert_eq!(ts.hour(), 18);

        let utc = parse_timestamp("2024-10-11T18:05:00Z").unwrap();
        assert_eq!(utc.hour(), 18);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("next friday"),
            Err(CoreError::Parse { what: "timestamp", .. })
        ));
    }

    #[test]
    fn test_dates_accept_full_timestamps() {
        let expected = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        assert_eq!(parse_date("1990-01-01").unwrap(), expected);
        assert_eq!(parse_date("1990-01-01T00:00:00").unwrap(), expected);
        assert!(parse_date("01/01/1990").is_err());
    }
}
