//! Serde helpers for creation moments.
//!
//! Documents keep timestamps as RFC 3339 text with microsecond precision.
//! Older documents may carry ISO-8601 text without an offset; those are read
//! as UTC.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Current UTC moment at the precision documents are stored with, so a value
/// read back from the store compares equal to the one handed out at creation.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

pub fn format(moment: &DateTime<Utc>) -> String {
    moment.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub fn serialize<S>(moment: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(moment))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_offset_and_naive_forms() {
        let a = parse("2024-03-01T12:30:00.123456+00:00").unwrap();
        let b = parse("2024-03-01T12:30:00.123456Z").unwrap();
        let c = parse("2024-03-01T12:30:00.123456").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.month(), 3);
        assert_eq!(a.hour(), 12);
    }

    #[test]
    fn offsets_are_normalized_to_utc() {
        let t = parse("2024-03-01T09:00:00-03:00").unwrap();
        assert_eq!(t.hour(), 12);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("yesterday").is_none());
    }

    #[test]
    fn now_round_trips_through_text() {
        let t = now();
        assert_eq!(parse(&format(&t)), Some(t));
    }
}
