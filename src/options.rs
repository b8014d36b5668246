//! Four-way multiple choice generation.
//!
//! Distractors are the labels other idioms carry at the same blank position.
//! The final on-screen order is always a seeded Fisher-Yates shuffle keyed by
//! `idiom id + blank * 100`; how the three distractors are drawn from the pool
//! depends on [`DistractorMode`].

use serde::Serialize;

use crate::catalog::{self, IdiomEntry};
use crate::daily::hash_index;
use crate::error::CatalogError;

/// Upper bound on the candidate pool scanned per question.
pub const MAX_CANDIDATES: usize = 20;
const DISTRACTORS: usize = 3;

/// How three distractors are picked from the candidate pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DistractorMode {
    /// Pool shuffled with a hash seeded by idiom and blank; the whole question
    /// is reproducible across runs.
    #[default]
    Seeded,
    /// Pool shuffled with browser entropy so distractors vary per session.
    #[cfg(feature = "rng")]
    Session,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceSet {
    pub options: [String; 4],
    pub correct_index: usize,
}

/// Distinct labels of other idioms at `blank`, in catalog order, capped at
/// [`MAX_CANDIDATES`].
pub fn candidate_pool(idiom: &IdiomEntry, blank: usize, correct: &str) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    for other in catalog::all_idioms() {
        if other.id == idiom.id {
            continue;
        }
        let Some(label) = other.label_at(blank) else {
            continue;
        };
        if label != correct && !candidates.contains(&label) {
            candidates.push(label);
        }
        if candidates.len() >= MAX_CANDIDATES {
            break;
        }
    }
    candidates
}

pub fn generate_options(
    idiom: &IdiomEntry,
    blank: usize,
    mode: DistractorMode,
) -> Result<ChoiceSet, CatalogError> {
    let correct = idiom
        .label_at(blank)
        .ok_or(CatalogError::InvalidBlank(blank))?;

    let mut pool = candidate_pool(idiom, blank, &correct);
    if pool.len() < DISTRACTORS {
        return Err(CatalogError::InsufficientDistractors {
            idiom_id: idiom.id,
            position: blank,
            available: pool.len(),
        });
    }
    match mode {
        DistractorMode::Seeded => seeded_shuffle(&mut pool, &format!("{}-{blank}-pool", idiom.id)),
        #[cfg(feature = "rng")]
        DistractorMode::Session => entropy_shuffle(&mut pool),
    }
    pool.truncate(DISTRACTORS);

    let mut options = [correct.clone(), pool[0].clone(), pool[1].clone(), pool[2].clone()];
    let seed = idiom.id as usize + blank * 100;
    seeded_shuffle(&mut options, &seed.to_string());

    let correct_index = options
        .iter()
        .position(|o| *o == correct)
        .ok_or(CatalogError::InvalidBlank(blank))?;
    Ok(ChoiceSet {
        options,
        correct_index,
    })
}

/// Fisher-Yates from the back: swap `i` with `|hash("{seed}-{i}")| mod (i+1)`.
pub fn seeded_shuffle<T>(items: &mut [T], seed: &str) {
    for i in (1..items.len()).rev() {
        let j = hash_index(&format!("{seed}-{i}"), i + 1);
        items.swap(i, j);
    }
}

#[cfg(feature = "rng")]
fn entropy_shuffle<T>(items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let mut buf = [0u8; 4];
        if let Err(e) = getrandom::getrandom(&mut buf) {
            log::warn!("entropy unavailable, keeping catalog order for distractors: {e}");
            return;
        }
        let j = u32::from_le_bytes(buf) as usize % (i + 1);
        items.swap(i, j);
    }
}
