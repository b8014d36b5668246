//! Static idiom catalog.
//!
//! Entries are grouped by category, one file per category under `src/catalog/`.
//! The concatenation order (wisdom, study, relations, nature, emotion) is part of
//! the daily selection contract: changing it changes which idiom every date maps
//! to, so reordering or adding entries goes together with a new selector
//! version tag.

use serde::Serialize;
use std::sync::OnceLock;

use crate::error::CatalogError;

mod emotion;
mod nature;
mod relations;
mod study;
mod wisdom;

/// Thematic grouping shown as tabs in the collection browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Wisdom,
    Study,
    Relations,
    Nature,
    Emotion,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Wisdom,
        Category::Study,
        Category::Relations,
        Category::Nature,
        Category::Emotion,
    ];

    /// Lowercase key used in stored data and by the JS host.
    pub fn key(self) -> &'static str {
        match self {
            Category::Wisdom => "wisdom",
            Category::Study => "study",
            Category::Relations => "relations",
            Category::Nature => "nature",
            Category::Emotion => "emotion",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Wisdom => "삶과 지혜",
            Category::Study => "학문과 노력",
            Category::Relations => "인간관계",
            Category::Nature => "자연과 세상",
            Category::Emotion => "마음과 감정",
        }
    }

    fn entries(self) -> &'static [IdiomEntry] {
        match self {
            Category::Wisdom => wisdom::WISDOM,
            Category::Study => study::STUDY,
            Category::Relations => relations::RELATIONS,
            Category::Nature => nature::NATURE,
            Category::Emotion => emotion::EMOTION,
        }
    }
}

/// One quiz subject. `script` (hanja) and `phonetic` (hangul reading) are
/// aligned character by character and always four characters long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdiomEntry {
    pub id: u32,
    pub script: &'static str,
    pub phonetic: &'static str,
    pub meaning: &'static str,
    pub explanation: &'static str,
    pub example: &'static str,
    pub origin: &'static str,
    pub category: Category,
}

impl IdiomEntry {
    pub fn script_char(&self, pos: usize) -> Option<char> {
        self.script.chars().nth(pos)
    }

    pub fn phonetic_char(&self, pos: usize) -> Option<char> {
        self.phonetic.chars().nth(pos)
    }

    /// Option label for the character at `pos`, e.g. `지(知)`.
    pub fn label_at(&self, pos: usize) -> Option<String> {
        let kr = self.phonetic_char(pos)?;
        let hanja = self.script_char(pos)?;
        Some(format!("{kr}({hanja})"))
    }
}

/// Every idiom in selection order.
pub fn all_idioms() -> &'static [IdiomEntry] {
    static ALL: OnceLock<&'static [IdiomEntry]> = OnceLock::new();
    ALL.get_or_init(|| {
        let all: Vec<IdiomEntry> = Category::ALL
            .iter()
            .flat_map(|c| c.entries().iter().copied())
            .collect();
        Box::leak(all.into_boxed_slice())
    })
}

pub fn idiom_by_id(id: u32) -> Option<&'static IdiomEntry> {
    all_idioms().iter().find(|i| i.id == id)
}

/// Like [`idiom_by_id`] but treats a missing id as a catalog bug.
pub fn require_idiom(id: u32) -> Result<&'static IdiomEntry, CatalogError> {
    idiom_by_id(id).ok_or(CatalogError::UnknownIdiom(id))
}

pub fn idioms_by_category(category: Category) -> &'static [IdiomEntry] {
    category.entries()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_idioms_concatenates_categories_in_order() {
        let all = all_idioms();
        let total: usize = Category::ALL.iter().map(|c| c.entries().len()).sum();
        assert_eq!(all.len(), total);
        assert_eq!(all[0].category, Category::Wisdom);
        assert_eq!(all[all.len() - 1].category, Category::Emotion);
    }

    #[test]
    fn test_label_at() {
        let e = idiom_by_id(7).unwrap();
        assert_eq!(e.script, "溫故知新");
        assert_eq!(e.label_at(2).as_deref(), Some("지(知)"));
        assert_eq!(e.label_at(4), None);
    }

    #[test]
    fn test_category_keys() {
        for c in Category::ALL {
            assert_eq!(Category::from_key(c.key()), Some(c));
            assert_eq!(serde_json::to_string(&c).unwrap(), format!("\"{}\"", c.key()));
        }
        assert_eq!(Category::from_key("Wisdom"), None);
    }

    #[test]
    fn test_require_idiom_unknown() {
        assert_eq!(require_idiom(9999), Err(CatalogError::UnknownIdiom(9999)));
    }
}
