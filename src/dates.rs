//! Calendar-day keys and the date provider.
//!
//! Every persisted date is a local-time `YYYY-MM-DD` string. `DayKey` wraps a
//! `chrono::NaiveDate` so yesterday/tomorrow arithmetic crosses month and year
//! boundaries correctly, and serializes back to the same string form.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::DateError;

const FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Parses a zero-padded `YYYY-MM-DD` key.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        if s.len() != 10 {
            return Err(DateError::Invalid(s.to_owned()));
        }
        NaiveDate::parse_from_str(s, FORMAT)
            .map(DayKey)
            .map_err(|_| DateError::Invalid(s.to_owned()))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(DayKey)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        DayKey(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn yesterday(&self) -> Self {
        self.0.pred_opt().map(DayKey).unwrap_or(*self)
    }

    pub fn tomorrow(&self) -> Self {
        self.0.succ_opt().map(DayKey).unwrap_or(*self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Short Korean label used on result and calendar screens, e.g. `3월 7일`.
    pub fn display_label(&self) -> String {
        format!("{}월 {}일", self.0.month(), self.0.day())
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayKey::parse(s)
    }
}

impl TryFrom<String> for DayKey {
    type Error = DateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        DayKey::parse(&s)
    }
}

impl From<DayKey> for String {
    fn from(d: DayKey) -> String {
        d.to_string()
    }
}

/// Serde adapter for optional day keys stored as `""` when unset.
pub(crate) mod optional_key {
    use super::DayKey;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &Option<DayKey>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            Some(d) => s.serialize_str(&d.to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DayKey>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw.is_empty() {
            return Ok(None);
        }
        DayKey::parse(&raw).map(Some).map_err(serde::de::Error::custom)
    }
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Time left until the next local midnight, for the "next idiom in" timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

pub fn countdown_to_midnight(now: NaiveDateTime) -> Countdown {
    let elapsed = now.num_seconds_from_midnight();
    let left = 86_400 - elapsed;
    Countdown {
        hours: left / 3600,
        minutes: (left % 3600) / 60,
        seconds: left % 60,
    }
}

/// Source of "today". The whole core assumes a single consistent clock.
pub trait Clock {
    fn today(&self) -> DayKey;

    fn yesterday(&self) -> DayKey {
        self.today().yesterday()
    }
}

/// Local wall clock (browser time zone on wasm).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn countdown(&self) -> Countdown {
        countdown_to_midnight(Local::now().naive_local())
    }
}

impl Clock for SystemClock {
    fn today(&self) -> DayKey {
        DayKey(Local::now().date_naive())
    }
}

/// Settable clock for tests and previews.
#[derive(Debug)]
pub struct FixedClock {
    today: Cell<DayKey>,
}

impl FixedClock {
    pub fn new(today: DayKey) -> Self {
        Self {
            today: Cell::new(today),
        }
    }

    pub fn set(&self, today: DayKey) {
        self.today.set(today);
    }

    /// Moves the clock forward by `days`.
    pub fn advance_days(&self, days: u32) {
        let mut d = self.today.get();
        for _ in 0..days {
            d = d.tomorrow();
        }
        self.today.set(d);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> DayKey {
        self.today.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn today(&self) -> DayKey {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DayKey {
        DayKey::parse(s).unwrap()
    }

    #[test]
    fn test_parse_requires_zero_padding() {
        assert!(DayKey::parse("2024-01-05").is_ok());
        assert_eq!(
            DayKey::parse("2024-1-5"),
            Err(DateError::Invalid("2024-1-5".into()))
        );
        assert!(DayKey::parse("2024-02-30").is_err());
        assert!(DayKey::parse("").is_err());
    }

    #[test]
    fn test_yesterday_crosses_boundaries() {
        assert_eq!(key("2024-03-01").yesterday(), key("2024-02-29"));
        assert_eq!(key("2024-01-01").yesterday(), key("2023-12-31"));
        assert_eq!(key("2023-12-31").tomorrow(), key("2024-01-01"));
    }

    #[test]
    fn test_display_round_trip_and_label() {
        let d = key("2024-03-07");
        assert_eq!(d.to_string(), "2024-03-07");
        assert_eq!(d.display_label(), "3월 7일");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn test_countdown_to_midnight() {
        let now = key("2024-01-01").as_naive().and_hms_opt(22, 30, 15).unwrap();
        let left = countdown_to_midnight(now);
        assert_eq!((left.hours, left.minutes, left.seconds), (1, 29, 45));
    }

    #[test]
    fn test_fixed_clock_rollover() {
        let clock = FixedClock::new(key("2024-01-31"));
        assert_eq!(clock.yesterday(), key("2024-01-30"));
        clock.advance_days(1);
        assert_eq!(clock.today(), key("2024-02-01"));
    }
}
