//! Date parsing and calendar arithmetic for the date operators.

use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::coerce;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a field or rule value as an instant.
///
/// Accepts RFC 3339, naive date-times (read as UTC), `YYYY-MM-DD`,
/// `MM/DD/YYYY` and numbers as Unix epoch milliseconds. Date-only inputs
/// land on midnight UTC.
pub fn parse_instant(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::String(s) => parse_instant_str(s),
        Value::Number(n) => {
            let millis = coerce::number_as_f64(n)?;
            if !millis.is_finite() {
                return None;
            }
            DateTime::from_timestamp_millis(millis as i64)
        }
        _ => None,
    }
}

fn parse_instant_str(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }
    None
}

/// Parse a value and keep only its UTC calendar day.
pub fn parse_calendar_date(value: Option<&Value>) -> Option<NaiveDate> {
    parse_instant(value).map(|dt| dt.date_naive())
}

/// Unit of an `inLast` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    /// Calendar days
    Days,
    /// Seven-day weeks
    Weeks,
    /// Calendar months, clamped to the end of shorter months
    Months,
    /// Twelve calendar months
    Years,
}

impl DurationUnit {
    /// All units in display order.
    pub const ALL: [Self; 4] = [Self::Days, Self::Weeks, Self::Months, Self::Years];

    /// Canonical wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
        }
    }

    /// Read a unit from a rule's second value.
    pub fn from_value(value: Option<&Value>) -> Option<Self> {
        match value? {
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// The instant `count` units before `now`, or `None` on overflow.
    pub fn back_from(self, now: DateTime<Utc>, count: u32) -> Option<DateTime<Utc>> {
        match self {
            Self::Days => now.checked_sub_signed(TimeDelta::try_days(i64::from(count))?),
            Self::Weeks => now.checked_sub_signed(TimeDelta::try_weeks(i64::from(count))?),
            Self::Months => now.checked_sub_months(Months::new(count)),
            Self::Years => now.checked_sub_months(Months::new(count.checked_mul(12)?)),
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a duration unit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown duration unit '{0}'")]
pub struct ParseUnitError(pub String);

impl FromStr for DurationUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "days" | "day" | "d" => Ok(Self::Days),
            "weeks" | "week" | "w" => Ok(Self::Weeks),
            "months" | "month" => Ok(Self::Months),
            "years" | "year" | "y" => Ok(Self::Years),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}

/// Read an `inLast` count: a non-negative whole number, possibly as a string.
pub fn parse_count(value: Option<&Value>) -> Option<u32> {
    let n = coerce::to_number(value);
    if coerce::is_empty(value) || !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
        return None;
    }
    u32::try_from(n as u64).ok()
}
