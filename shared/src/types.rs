//! Common request types used across the platform

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Directional preference for a weather metric.
///
/// The request surface only accepts the exact strings `"High"` and `"Low"`;
/// anything else is rejected with a validation error rather than silently
/// defaulting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Preference {
    High,
    Low,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid preference '{0}': expected 'High' or 'Low'")]
pub struct ParsePreferenceError(pub String);

impl FromStr for Preference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Preference::High),
            "Low" => Ok(Preference::Low),
            other => Err(ParsePreferenceError(other.to_string())),
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preference::High => write!(f, "High"),
            Preference::Low => write!(f, "Low"),
        }
    }
}

/// A calendar month selector, accepted as the two-digit codes `"01"`
/// through `"12"` and matched against record dates across all years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCode(u32);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid month '{0}': expected a two-digit code from '01' to '12'")]
pub struct ParseMonthError(pub String);

impl MonthCode {
    /// Month number, 1 through 12.
    pub fn number(&self) -> u32 {
        self.0
    }
}

impl FromStr for MonthCode {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMonthError(s.to_string()));
        }
        match s.parse::<u32>() {
            Ok(n) if (1..=12).contains(&n) => Ok(MonthCode(n)),
            _ => Err(ParseMonthError(s.to_string())),
        }
    }
}

impl fmt::Display for MonthCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl Serialize for MonthCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
