//! Derived statistics for the stats and collection screens.
//!
//! Everything here is recomputed from the full record and collection lists.
//! Volumes are small (one record per day, a fixed catalog), so callers compute
//! once per state change and hand the result to the renderer.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::catalog::{self, Category};
use crate::dates::{self, DayKey};
use crate::store::{CollectionEntry, DailyRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    pub collected: usize,
    pub total: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdiomStats {
    pub total_attempts: usize,
    pub total_correct: usize,
    pub collection_count: usize,
    pub accuracy: f64,
    pub category_progress: BTreeMap<Category, CategoryProgress>,
}

impl IdiomStats {
    pub fn calculate(records: &[DailyRecord], collection: &[CollectionEntry]) -> Self {
        let collected: HashSet<u32> = collection.iter().map(|c| c.idiom_id).collect();
        let category_progress = Category::ALL
            .iter()
            .map(|&cat| {
                let entries = catalog::idioms_by_category(cat);
                let progress = CategoryProgress {
                    collected: entries.iter().filter(|i| collected.contains(&i.id)).count(),
                    total: entries.len(),
                };
                (cat, progress)
            })
            .collect();

        let total_attempts = records.len();
        let total_correct = records.iter().filter(|r| r.is_correct).count();
        let accuracy = if total_attempts == 0 {
            0.0
        } else {
            total_correct as f64 / total_attempts as f64
        };

        Self {
            total_attempts,
            total_correct,
            collection_count: collection.len(),
            accuracy,
            category_progress,
        }
    }

    pub fn ink_density(&self) -> InkDensity {
        InkDensity::from_accuracy(self.accuracy)
    }
}

/// Accuracy shown as ink strength instead of a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InkDensity {
    Blank,
    Faint,
    Light,
    Medium,
    Deep,
    Dark,
}

impl InkDensity {
    pub fn from_accuracy(ratio: f64) -> Self {
        if ratio >= 0.9 {
            InkDensity::Dark
        } else if ratio >= 0.7 {
            InkDensity::Deep
        } else if ratio >= 0.5 {
            InkDensity::Medium
        } else if ratio >= 0.3 {
            InkDensity::Light
        } else if ratio > 0.0 {
            InkDensity::Faint
        } else {
            InkDensity::Blank
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InkDensity::Dark => "진묵",
            InkDensity::Deep => "농묵",
            InkDensity::Medium => "중묵",
            InkDensity::Light => "담묵",
            InkDensity::Faint => "연묵",
            InkDensity::Blank => "백지",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub count: usize,
    pub label: &'static str,
    pub reached: bool,
}

const MILESTONES: [(usize, &str); 4] = [
    (1, "첫 수집"),
    (10, "10종 달성"),
    (50, "50종 달성"),
    (100, "100종 달성"),
];

pub fn milestones(collection_count: usize) -> Vec<Milestone> {
    MILESTONES
        .iter()
        .map(|&(count, label)| Milestone {
            count,
            label,
            reached: collection_count >= count,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub day: u32,
    /// `None` if no answer was recorded that day.
    pub correct: Option<bool>,
}

/// Sunday-first weeks of `month` (1-12), padded with `None` cells before the
/// first and after the last day.
pub fn month_calendar(
    year: i32,
    month: u32,
    records: &[DailyRecord],
) -> Vec<[Option<CalendarDay>; 7]> {
    use chrono::Datelike;

    let Some(first) = DayKey::from_ymd(year, month, 1) else {
        return Vec::new();
    };
    let by_date: HashMap<DayKey, bool> = records.iter().map(|r| (r.date, r.is_correct)).collect();

    let mut weeks = Vec::new();
    let mut week: [Option<CalendarDay>; 7] = [None; 7];
    let mut col = first.as_naive().weekday().num_days_from_sunday() as usize;
    for day in 1..=dates::days_in_month(year, month) {
        let correct = DayKey::from_ymd(year, month, day).and_then(|d| by_date.get(&d).copied());
        week[col] = Some(CalendarDay { day, correct });
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(week);
    }
    weeks
}
