//! Daily participation streak and the shield gate.

use serde::{Deserialize, Serialize};

use crate::dates::{self, DayKey};

/// Persisted streak record. `longest_streak >= current_streak` after every
/// [`advance`](StreakState::advance).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakState {
    pub current_streak: u32,
    pub longest_streak: u32,
    #[serde(with = "dates::optional_key", default)]
    pub last_date: Option<DayKey>,
}

impl StreakState {
    /// Counts a day of play. Continues the run if the previous play was the
    /// day before `date`, restarts at 1 after a gap or on first play, and does
    /// nothing if `date` was already counted. Returns whether state changed.
    pub fn advance(&mut self, date: DayKey) -> bool {
        if self.last_date == Some(date) {
            return false;
        }
        if self.last_date == Some(date.yesterday()) {
            self.current_streak += 1;
        } else {
            self.current_streak = 1;
        }
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_date = Some(date);
        log::info!(
            "streak advanced to {} on {date} (longest {})",
            self.current_streak,
            self.longest_streak
        );
        true
    }

    /// True when a live streak will reset on the next play: the last play was
    /// neither `today` nor the day before.
    pub fn needs_shield(&self, today: DayKey) -> bool {
        if self.current_streak == 0 {
            return false;
        }
        match self.last_date {
            Some(last) => last != today && last != today.yesterday(),
            None => false,
        }
    }
}
