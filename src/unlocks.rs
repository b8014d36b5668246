//! Ad-gated unlocks.
//!
//! Hint and shield are per-day gates: a stored date compared against the live
//! "today", so they lapse on day rollover without any expiry bookkeeping.
//! Collection and stats access are sticky flags that are recorded but do not
//! gate anything; both screens still ask for an ad every time they are opened.

use serde::{Deserialize, Serialize};

use crate::dates::{self, DayKey};

/// `stored == today`.
pub fn is_unlocked_today(stored: Option<DayKey>, today: DayKey) -> bool {
    stored == Some(today)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockState {
    #[serde(default)]
    pub collection: bool,
    #[serde(default)]
    pub stats: bool,
    #[serde(rename = "hintUsedToday", with = "dates::optional_key", default)]
    pub hint_unlocked_date: Option<DayKey>,
    #[serde(rename = "streakShieldUsedToday", with = "dates::optional_key", default)]
    pub streak_shield_used_date: Option<DayKey>,
}

impl UnlockState {
    pub fn hint_unlocked(&self, today: DayKey) -> bool {
        is_unlocked_today(self.hint_unlocked_date, today)
    }

    pub fn shield_used(&self, today: DayKey) -> bool {
        is_unlocked_today(self.streak_shield_used_date, today)
    }

    pub fn unlock_hint(&mut self, today: DayKey) {
        self.hint_unlocked_date = Some(today);
    }

    pub fn use_shield(&mut self, today: DayKey) {
        self.streak_shield_used_date = Some(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> DayKey {
        DayKey::parse(s).unwrap()
    }

    #[test]
    fn test_hint_gate_lapses_on_rollover() {
        let mut u = UnlockState::default();
        let today = day("2024-01-01");
        assert!(!u.hint_unlocked(today));
        u.unlock_hint(today);
        assert!(u.hint_unlocked(today));
        assert!(!u.hint_unlocked(today.tomorrow()));
    }

    #[test]
    fn test_shield_gate_is_independent_of_hint() {
        let mut u = UnlockState::default();
        let today = day("2024-01-01");
        u.use_shield(today);
        assert!(u.shield_used(today));
        assert!(!u.hint_unlocked(today));
    }

    #[test]
    fn test_web_app_json_shape() {
        let raw = concat!(
            r#"{"collection":true,"stats":false,"#,
            r#""hintUsedToday":"2024-01-01","streakShieldUsedToday":""}"#
        );
        let u: UnlockState = serde_json::from_str(raw).unwrap();
        assert!(u.collection);
        assert_eq!(u.hint_unlocked_date, Some(day("2024-01-01")));
        assert_eq!(u.streak_shield_used_date, None);
        assert_eq!(serde_json::to_string(&u).unwrap(), raw);
    }
}
