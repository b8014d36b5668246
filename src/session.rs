//! The daily play flow the UI drives.
//!
//! `Session` ties the selector, the progress store and the clock together:
//! which question is active (today's, or yesterday's after a shield), answer
//! submission, ad-gated unlocks and the shield offer. Derived state is kept in
//! a [`Snapshot`] rebuilt once per state change so renders never recompute
//! stats.

use serde::Serialize;

use crate::ad::{AdOutcome, AdService};
use crate::catalog::{self, Category, IdiomEntry};
use crate::daily::{self, DailyQuestion, Variant};
use crate::dates::{Clock, DayKey};
use crate::error::SessionError;
use crate::options::DistractorMode;
use crate::stats::{self, CalendarDay, IdiomStats, InkDensity, Milestone};
use crate::store::{DailyRecord, KeyValueStore, Progress};
use crate::streak::StreakState;

#[derive(Clone, Copy, Debug, Default)]
pub struct SessionConfig {
    pub distractor_mode: DistractorMode,
}

/// Derived state handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub today: DayKey,
    pub active_date: DayKey,
    pub yesterday_mode: bool,
    pub today_record: Option<DailyRecord>,
    pub streak: StreakState,
    pub collection_count: usize,
    pub total_idioms: usize,
    pub hint_unlocked: bool,
    pub stats: IdiomStats,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome {
    pub date: DayKey,
    pub idiom_id: u32,
    pub selected_index: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    /// False when an answer for `date` already existed and this one was dropped.
    pub recorded: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShieldOffer {
    pub current_streak: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    pub idiom: &'static IdiomEntry,
    pub collected_date: Option<DayKey>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub streak: StreakState,
    pub stats: IdiomStats,
    pub ink_density: InkDensity,
    pub ink_label: &'static str,
    pub milestones: Vec<Milestone>,
    pub calendar: Vec<[Option<CalendarDay>; 7]>,
}

pub struct Session<S, C> {
    progress: Progress<S>,
    clock: C,
    config: SessionConfig,
    /// Day being replayed after a shield, fixed when the shield is granted.
    replay: Option<DayKey>,
    /// Day the shield offer was declined.
    shield_dismissed: Option<DayKey>,
    snapshot: Snapshot,
}

impl<S: KeyValueStore, C: Clock> Session<S, C> {
    pub fn new(store: S, clock: C, config: SessionConfig) -> Self {
        let progress = Progress::new(store);
        let snapshot = build_snapshot(&progress, clock.today(), None);
        Self {
            progress,
            clock,
            config,
            replay: None,
            shield_dismissed: None,
            snapshot,
        }
    }

    pub fn progress(&self) -> &Progress<S> {
        &self.progress
    }

    pub fn today(&self) -> DayKey {
        self.clock.today()
    }

    pub fn yesterday_mode(&self) -> bool {
        self.replay.is_some()
    }

    /// Date the next submission is recorded under. A shield replay keeps the
    /// day it was granted for even if midnight passes before the answer.
    pub fn active_date(&self) -> DayKey {
        self.replay.unwrap_or_else(|| self.clock.today())
    }

    pub fn question(&self) -> Result<DailyQuestion, SessionError> {
        let (date, variant) = match self.replay {
            Some(date) => (date, Variant::Yesterday),
            None => (self.clock.today(), Variant::Today),
        };
        Ok(daily::select_daily_with(date, variant, self.config.distractor_mode)?)
    }

    /// Current derived state; rebuilt if the day rolled over since last time.
    pub fn snapshot(&mut self) -> &Snapshot {
        if self.snapshot.today != self.clock.today() {
            self.refresh();
        }
        &self.snapshot
    }

    pub fn refresh(&mut self) {
        self.snapshot = build_snapshot(&self.progress, self.clock.today(), self.replay);
    }

    /// Records the answer for the active question. Leaves yesterday mode once
    /// the replayed day has been answered.
    pub fn submit_answer(&mut self, selected_index: usize) -> Result<SubmitOutcome, SessionError> {
        let question = self.question()?;
        if selected_index >= question.options.len() {
            return Err(SessionError::InvalidOption(selected_index));
        }
        let date = self.active_date();
        let is_correct = question.is_correct(selected_index);
        let recorded = self.progress.record_attempt(DailyRecord {
            date,
            idiom_id: question.idiom.id,
            is_correct,
            selected_index,
        });
        if self.replay.take().is_some() {
            log::info!("shield replay for {date} answered, back to today");
        }
        self.refresh();
        Ok(SubmitOutcome {
            date,
            idiom_id: question.idiom.id,
            selected_index,
            correct_index: question.correct_index,
            is_correct,
            recorded,
        })
    }

    /// Example sentence of the active question, once the hint is unlocked today.
    pub fn hint(&self) -> Result<Option<&'static str>, SessionError> {
        if !self.progress.unlocks().hint_unlocked(self.clock.today()) {
            return Ok(None);
        }
        Ok(Some(self.question()?.idiom.example))
    }

    pub fn grant_hint(&mut self) {
        let today = self.clock.today();
        self.progress.update_unlocks(|u| u.unlock_hint(today));
        log::info!("hint unlocked for {today}");
        self.refresh();
    }

    pub fn grant_collection(&mut self) {
        self.progress.update_unlocks(|u| u.collection = true);
    }

    pub fn grant_stats(&mut self) {
        self.progress.update_unlocks(|u| u.stats = true);
    }

    /// Offered when a live streak is about to lapse, today is still unanswered,
    /// and the shield has not been used or declined today.
    pub fn shield_offer(&self) -> Option<ShieldOffer> {
        let today = self.clock.today();
        if self.shield_dismissed == Some(today) || self.replay.is_some() {
            return None;
        }
        let streak = self.progress.streak();
        if !streak.needs_shield(today) {
            return None;
        }
        if self.progress.record_for(today).is_some() {
            return None;
        }
        if self.progress.unlocks().shield_used(today) {
            return None;
        }
        Some(ShieldOffer {
            current_streak: streak.current_streak,
        })
    }

    /// Declines the offer for the rest of today.
    pub fn dismiss_shield(&mut self) {
        self.shield_dismissed = Some(self.clock.today());
    }

    /// Consumes the shield: marks it used today and switches to yesterday's
    /// question. Returns false if no shield was on offer.
    pub fn grant_shield(&mut self) -> bool {
        if self.shield_offer().is_none() {
            return false;
        }
        let today = self.clock.today();
        self.progress.update_unlocks(|u| u.use_shield(today));
        self.shield_dismissed = Some(today);
        self.replay = Some(today.yesterday());
        log::info!("streak shield used on {today}, replaying {}", today.yesterday());
        self.refresh();
        true
    }

    /// Leaves yesterday mode without answering.
    pub fn cancel_yesterday(&mut self) {
        if self.replay.take().is_some() {
            self.refresh();
        }
    }

    pub fn collection_view(&self, category: Category) -> Vec<CollectionItem> {
        let collection = self.progress.collection();
        catalog::idioms_by_category(category)
            .iter()
            .map(|idiom| CollectionItem {
                idiom,
                collected_date: collection
                    .iter()
                    .find(|c| c.idiom_id == idiom.id)
                    .map(|c| c.collected_date),
            })
            .collect()
    }

    pub fn stats_view(&mut self) -> StatsView {
        let today = self.clock.today();
        let records = self.progress.records();
        let snapshot = self.snapshot().clone();
        StatsView {
            ink_density: snapshot.stats.ink_density(),
            ink_label: snapshot.stats.ink_density().label(),
            milestones: stats::milestones(snapshot.collection_count),
            calendar: stats::month_calendar(today.year(), today.month(), &records),
            streak: snapshot.streak,
            stats: snapshot.stats,
        }
    }

    pub async fn unlock_hint<A: AdService>(&mut self, ads: &A) -> AdOutcome {
        let outcome = ads.show().await;
        self.grant_hint();
        outcome
    }

    pub async fn open_collection<A: AdService>(&mut self, ads: &A) -> AdOutcome {
        let outcome = ads.show().await;
        self.grant_collection();
        outcome
    }

    pub async fn open_stats<A: AdService>(&mut self, ads: &A) -> AdOutcome {
        let outcome = ads.show().await;
        self.grant_stats();
        outcome
    }

    /// Shows an ad for the offered shield. `None` if nothing was on offer,
    /// before the ad or once it finished (today got answered meanwhile).
    pub async fn accept_shield<A: AdService>(&mut self, ads: &A) -> Option<AdOutcome> {
        self.shield_offer()?;
        let outcome = ads.show().await;
        self.grant_shield().then_some(outcome)
    }
}

fn build_snapshot<S: KeyValueStore>(
    progress: &Progress<S>,
    today: DayKey,
    replay: Option<DayKey>,
) -> Snapshot {
    let records = progress.records();
    let collection = progress.collection();
    let unlocks = progress.unlocks();
    let today_record = records.iter().find(|r| r.date == today).cloned();
    let stats = IdiomStats::calculate(&records, &collection);
    Snapshot {
        today,
        active_date: replay.unwrap_or(today),
        yesterday_mode: replay.is_some(),
        today_record,
        streak: progress.streak(),
        collection_count: collection.len(),
        total_idioms: catalog::all_idioms().len(),
        hint_unlocked: unlocks.hint_unlocked(today),
        stats,
    }
}
