//! Unit-carrying numbers used in summary and history files.
//!
//! On disk a rate is written as `"12.5%"` and a duration as `"42.0s"`, the
//! format existing dashboards read. Readers accept the suffixed string or a
//! bare number so hand-edited files still load.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds to two decimal places, ties away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / whole * 100`, or `0.0` when `whole` is zero.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// A percentage in `[0, 100]`, kept to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percent(f64);

impl Percent {
    pub fn new(value: f64) -> Self {
        Self(round1(value))
    }

    pub fn of(part: u64, whole: u64) -> Self {
        Self::new(percentage(part, whole))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// A duration in seconds, kept to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Seconds(f64);

impl Seconds {
    pub fn new(value: f64) -> Self {
        Self(round1(value))
    }

    pub fn from_millis(ms: f64) -> Self {
        Self::new(ms / 1000.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn as_millis(self) -> f64 {
        self.0 * 1000.0
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}s", self.0)
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for Seconds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(SuffixedNumber { suffix: '%' })
            .map(Percent::new)
    }
}

impl<'de> Deserialize<'de> for Seconds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(SuffixedNumber { suffix: 's' })
            .map(Seconds::new)
    }
}

/// Accepts `12.5`, `"12.5"` or `"12.5<suffix>"`.
struct SuffixedNumber {
    suffix: char,
}

impl<'de> Visitor<'de> for SuffixedNumber {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a number or a string like \"1.0{}\"", self.suffix)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        let trimmed = v.trim();
        let number = trimmed.strip_suffix(self.suffix).unwrap_or(trimmed);
        number
            .trim()
            .parse::<f64>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_zero_total_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(Percent::of(3, 0).value(), 0.0);
    }

    #[test]
    fn display_keeps_one_decimal() {
        assert_eq!(Percent::of(1, 3).to_string(), "33.3%");
        assert_eq!(Seconds::from_millis(12_345.0).to_string(), "12.3s");
        assert_eq!(Seconds::new(2.0).to_string(), "2.0s");
    }

    #[test]
    fn reads_suffixed_strings_and_numbers() {
        let p: Percent = serde_json::from_str("\"87.5%\"").unwrap();
        assert_eq!(p.value(), 87.5);
        let p: Percent = serde_json::from_str("40").unwrap();
        assert_eq!(p.value(), 40.0);
        let s: Seconds = serde_json::from_str("\"3.2s\"").unwrap();
        assert_eq!(s.value(), 3.2);
        assert!(serde_json::from_str::<Seconds>("\"fast\"").is_err());
    }
}
