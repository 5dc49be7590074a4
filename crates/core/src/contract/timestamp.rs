//! Microsecond-precision timestamp type
//!
//! Every issue carries two of these: `created_on`, fixed at creation, and
//! `updated_on`, refreshed by each successful update.
//!
//! ## Precision
//!
//! Timestamps are stored as microseconds since Unix epoch (1970-01-01 00:00:00 UTC)
//! and rendered on the wire as RFC 3339 strings with microsecond digits, so two
//! writes in the same millisecond still render as distinct, ordered values.
//!
//! ```
//! use tracker_core::Timestamp;
//!
//! let t = Timestamp::from_secs(0);
//! assert_eq!(t.to_rfc3339(), "1970-01-01T00:00:00.000000Z");
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};

/// Microsecond-precision timestamp
///
/// ## Invariants
///
/// - Timestamps are always non-negative (u64)
/// - Timestamps are comparable and orderable
/// - The zero timestamp represents Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Create a timestamp for the current moment
    ///
    /// Returns epoch if the system clock is before Unix epoch.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp(duration.as_micros() as u64)
    }

    /// Create a timestamp from microseconds since epoch
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        Timestamp(micros)
    }

    /// Create a timestamp from seconds since epoch
    #[inline]
    pub const fn from_secs(secs: u64) -> Self {
        Timestamp(secs.saturating_mul(1_000_000))
    }

    /// Get microseconds since Unix epoch
    #[inline]
    pub const fn as_micros(&self) -> u64 {
        self.0
    }

    /// The current time, or one microsecond past `previous` if the clock has
    /// not moved beyond it.
    ///
    /// Used when refreshing `updated_on` so the new value is always strictly
    /// greater than the old one.
    pub fn now_after(previous: Timestamp) -> Self {
        let now = Self::now();
        if now > previous {
            now
        } else {
            Timestamp(previous.0.saturating_add(1))
        }
    }

    /// Render as RFC 3339 in UTC with microsecond digits.
    pub fn to_rfc3339(&self) -> String {
        self.to_datetime()
            .to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    /// Parse an RFC 3339 timestamp. Sub-microsecond digits are truncated.
    pub fn parse_rfc3339(s: &str) -> Result<Self> {
        let parsed = DateTime::parse_from_rfc3339(s).map_err(|e| Error::Cast {
            field: "timestamp".to_string(),
            reason: e.to_string(),
        })?;
        let micros = parsed.timestamp_micros();
        if micros < 0 {
            return Err(Error::Cast {
                field: "timestamp".to_string(),
                reason: format!("{} is before the Unix epoch", s),
            });
        }
        Ok(Timestamp(micros as u64))
    }

    fn to_datetime(self) -> DateTime<Utc> {
        let secs = (self.0 / 1_000_000) as i64;
        let nanos = ((self.0 % 1_000_000) * 1_000) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos).unwrap_or_default()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::EPOCH
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl From<u64> for Timestamp {
    fn from(micros: u64) -> Self {
        Timestamp::from_micros(micros)
    }
}

impl From<Timestamp> for u64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Timestamp::parse_rfc3339(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_epoch() {
        assert_eq!(Timestamp::EPOCH.as_micros(), 0);
        assert_eq!(Timestamp::default(), Timestamp::EPOCH);
    }

    #[test]
    fn test_timestamp_from_secs() {
        assert_eq!(Timestamp::from_secs(3).as_micros(), 3_000_000);
    }

    #[test]
    fn test_now_is_after_2020() {
        let now = Timestamp::now();
        assert!(now > Timestamp::from_secs(1_577_836_800));
    }

    #[test]
    fn test_now_after_is_strictly_greater() {
        let far_future = Timestamp::from_secs(u32::MAX as u64 * 4);
        let next = Timestamp::now_after(far_future);
        assert_eq!(next.as_micros(), far_future.as_micros() + 1);

        let past = Timestamp::from_secs(10);
        assert!(Timestamp::now_after(past) > past);
    }

    #[test]
    fn test_rfc3339_keeps_microseconds() {
        let ts = Timestamp::from_micros(1_700_000_000_123_456);
        let rendered = ts.to_rfc3339();
        assert_eq!(rendered, "2023-11-14T22:13:20.123456Z");
        assert_eq!(Timestamp::parse_rfc3339(&rendered).unwrap(), ts);
    }

    #[test]
    fn test_parse_accepts_offsets() {
        let ts = Timestamp::parse_rfc3339("1970-01-01T01:00:00+01:00").unwrap();
        assert_eq!(ts, Timestamp::EPOCH);
    }

    #[test]
    fn test_parse_rejects_garbage_and_pre_epoch() {
        assert!(Timestamp::parse_rfc3339("yesterday").is_err());
        assert!(Timestamp::parse_rfc3339("1969-12-31T23:59:59Z").is_err());
    }

    #[test]
    fn test_rendered_order_matches_numeric_order() {
        let a = Timestamp::from_micros(1_700_000_000_000_001);
        let b = Timestamp::from_micros(1_700_000_000_000_002);
        assert!(a.to_rfc3339() < b.to_rfc3339());
    }

    #[test]
    fn test_serde_as_string() {
        let ts = Timestamp::from_secs(1);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"1970-01-01T00:00:01.000000Z\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        // Up to the end of year 9999, the last instant RFC 3339 can render
        const MAX_MICROS: u64 = 253_402_300_799_999_999;

        proptest! {
            #[test]
            fn now_after_is_strictly_later(prev in 0..MAX_MICROS) {
                let prev = Timestamp::from_micros(prev);
                prop_assert!(Timestamp::now_after(prev) > prev);
            }

            #[test]
            fn rendered_order_matches_numeric_order(a in 0..MAX_MICROS, b in 0..MAX_MICROS) {
                let (ta, tb) = (Timestamp::from_micros(a), Timestamp::from_micros(b));
                prop_assert_eq!(ta.cmp(&tb), ta.to_rfc3339().cmp(&tb.to_rfc3339()));
            }
        }
    }
}
