//! # Date keys
//!
//! Every ledger and register record is keyed by a calendar day in the
//! configured timezone, rendered as `YYYY-MM-DD`. The host timezone never
//! participates.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{AttendanceError, AttendanceResult};

/// Zone used when no `TIMEZONE` is configured.
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

const KEY_FORMAT: &str = "%Y-%m-%d";

/// A calendar day identifying one DailyStatus record and one column of the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = AttendanceError;

    fn from_str(s: &str) -> AttendanceResult<Self> {
        // chrono accepts unpadded fields, the key format does not
        if s.len() != 10 {
            return Err(AttendanceError::Validation(format!("Invalid date key: {}", s)));
        }
        NaiveDate::parse_from_str(s, KEY_FORMAT)
            .map(DateKey)
            .map_err(|_| AttendanceError::Validation(format!("Invalid date key: {}", s)))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Resolves "today" in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct DateKeyResolver {
    tz: Tz,
}

impl DateKeyResolver {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Builds a resolver from an IANA zone name such as `Europe/Berlin`.
    pub fn from_name(name: &str) -> AttendanceResult<Self> {
        let tz = name
            .trim()
            .parse::<Tz>()
            .map_err(|_| AttendanceError::Validation(format!("Unknown timezone: {}", name)))?;
        Ok(Self { tz })
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// The key of the calendar day containing `instant` in the configured zone.
    pub fn key_at(&self, instant: DateTime<Utc>) -> DateKey {
        DateKey(instant.with_timezone(&self.tz).date_naive())
    }

    pub fn today(&self) -> DateKey {
        self.key_at(Utc::now())
    }
}

impl Default for DateKeyResolver {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Kolkata)
    }
}
