// Catalog invariants. Native-friendly, no wasm/browser APIs.

use std::collections::HashSet;

use daily_idiom::catalog::{self, Category};
use daily_idiom::options::{DistractorMode, candidate_pool, generate_options};

#[test]
fn idiom_ids_are_unique() {
    let mut seen = HashSet::new();
    for idiom in catalog::all_idioms() {
        assert!(seen.insert(idiom.id), "duplicate id {} ({})", idiom.id, idiom.script);
    }
}

#[test]
fn script_and_phonetic_are_four_chars() {
    for idiom in catalog::all_idioms() {
        assert_eq!(idiom.script.chars().count(), 4, "script of {} is not 4 chars", idiom.id);
        assert_eq!(idiom.phonetic.chars().count(), 4, "phonetic of {} is not 4 chars", idiom.id);
        for c in idiom.phonetic.chars() {
            assert!(
                ('가'..='힣').contains(&c),
                "phonetic '{}' of {} has non-hangul char '{}'",
                idiom.phonetic,
                idiom.id,
                c
            );
        }
    }
}

#[test]
fn text_fields_are_filled() {
    for idiom in catalog::all_idioms() {
        assert!(!idiom.meaning.is_empty(), "empty meaning for {}", idiom.id);
        assert!(!idiom.example.is_empty(), "empty example for {}", idiom.id);
        assert!(!idiom.origin.is_empty(), "empty origin for {}", idiom.id);
        assert!(!idiom.explanation.is_empty(), "empty explanation for {}", idiom.id);
    }
}

#[test]
fn every_category_has_entries_of_its_own_kind() {
    for cat in Category::ALL {
        let entries = catalog::idioms_by_category(cat);
        assert!(!entries.is_empty(), "category {:?} is empty", cat);
        assert!(entries.iter().all(|i| i.category == cat));
    }
}

#[test]
fn every_idiom_position_has_enough_distractors() {
    for idiom in catalog::all_idioms() {
        for pos in 0..4 {
            let correct = idiom.label_at(pos).unwrap();
            let pool = candidate_pool(idiom, pos, &correct);
            assert!(
                pool.len() >= 3,
                "idiom {} position {} has {} candidates",
                idiom.id,
                pos,
                pool.len()
            );
            assert!(generate_options(idiom, pos, DistractorMode::Seeded).is_ok());
        }
    }
}

#[test]
fn lookup_by_id() {
    let idiom = catalog::idiom_by_id(21).unwrap();
    assert_eq!(idiom.phonetic, "관포지교");
    assert_eq!(idiom.category, Category::Relations);
    assert!(catalog::require_idiom(0).is_err());
}
