//! Deterministic daily question selection.
//!
//! A date maps to one idiom and one blank position through a 31-multiplier
//! rolling hash over UTF-16 code units with 32-bit wrapping. Every client
//! derives the same question for the same date without coordination.

use serde::Serialize;

use crate::catalog::{self, IdiomEntry};
use crate::dates::DayKey;
use crate::error::CatalogError;
use crate::options::{self, ChoiceSet, DistractorMode};

const VERSION_TAG: &str = "daily-idiom-v1";
const BLANK_CHAR: char = '□';

/// Classic `h = h * 31 + c` string hash, wrapping at each step.
pub fn hash_code(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32))
}

/// `|hash(s)| mod n`, with `|i32::MIN|` taken as 2^31.
pub(crate) fn hash_index(s: &str, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    hash_code(s).unsigned_abs() as usize % n
}

/// Which day's question is being derived. `Yesterday` uses independent seeds so
/// a shield replay gets its own reproducible question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Today,
    Yesterday,
}

impl Variant {
    fn idiom_seed(self, date: &str) -> String {
        match self {
            Variant::Today => format!("{date}{VERSION_TAG}"),
            Variant::Yesterday => format!("{date}{VERSION_TAG}-yesterday"),
        }
    }

    fn blank_seed(self, date: &str) -> String {
        match self {
            Variant::Today => format!("{date}blank"),
            Variant::Yesterday => format!("{date}blank-y"),
        }
    }
}

/// Idiom and blank position for a date, before options are generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DailyPick {
    pub idiom: &'static IdiomEntry,
    pub blank_position: usize,
}

pub fn daily_pick(date: DayKey, variant: Variant) -> DailyPick {
    let date = date.to_string();
    let all = catalog::all_idioms();
    let idx = hash_index(&variant.idiom_seed(&date), all.len());
    let blank_position = hash_index(&variant.blank_seed(&date), 4);
    log::debug!("daily pick for {date} ({variant:?}): idiom #{idx}, blank {blank_position}");
    DailyPick {
        idiom: &all[idx],
        blank_position,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuestion {
    pub idiom: &'static IdiomEntry,
    pub blank_position: usize,
    pub options: [String; 4],
    pub correct_index: usize,
}

impl DailyQuestion {
    pub fn correct_label(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }

    /// Script form with the blank shown as `□`.
    pub fn masked_script(&self) -> String {
        mask(self.idiom.script, self.blank_position)
    }

    /// Phonetic form with the blank shown as `□`.
    pub fn masked_phonetic(&self) -> String {
        mask(self.idiom.phonetic, self.blank_position)
    }
}

fn mask(s: &str, pos: usize) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| if i == pos { BLANK_CHAR } else { c })
        .collect()
}

/// Today's (or yesterday-mode) question with seeded distractors.
pub fn select_daily(date: DayKey, variant: Variant) -> Result<DailyQuestion, CatalogError> {
    select_daily_with(date, variant, DistractorMode::default())
}

pub fn select_daily_with(
    date: DayKey,
    variant: Variant,
    mode: DistractorMode,
) -> Result<DailyQuestion, CatalogError> {
    let pick = daily_pick(date, variant);
    let ChoiceSet {
        options,
        correct_index,
    } = options::generate_options(pick.idiom, pick.blank_position, mode)?;
    Ok(DailyQuestion {
        idiom: pick.idiom,
        blank_position: pick.blank_position,
        options,
        correct_index,
    })
}
