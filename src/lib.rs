//! Daily Idiom core crate.
//!
//! Each calendar day maps to one four-character idiom with one character
//! blanked out, answered as a four-way multiple choice. Correct answers build a
//! collection, daily play builds a streak, and ad-gated unlocks open the hint,
//! collection, stats and streak-shield flows. Rendering lives in the JS host;
//! this crate owns selection, option generation, persistence rules and the
//! streak/unlock state machine, exported through `wasm-bindgen`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod ad;
pub mod catalog;
pub mod daily;
pub mod dates;
pub mod error;
pub mod options;
pub mod session;
pub mod stats;
pub mod store;
pub mod streak;
pub mod unlocks;
mod web;

pub use daily::{DailyQuestion, Variant, select_daily};
pub use dates::{Clock, DayKey};
pub use error::{CatalogError, SessionError};
pub use session::{Session, SessionConfig};
pub use store::{KeyValueStore, MemoryStore, Progress};
pub use web::DailyIdiomApp;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("daily-idiom core loaded ({} idioms)", catalog::all_idioms().len());
}

pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e:?}")))
}

/// Question for an arbitrary date, for previews and share cards.
#[wasm_bindgen]
pub fn select_daily_question(date: &str, yesterday: bool) -> Result<JsValue, JsValue> {
    let date = DayKey::parse(date).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let variant = if yesterday { Variant::Yesterday } else { Variant::Today };
    let question = select_daily(date, variant).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&question)
}

#[wasm_bindgen]
pub fn catalog_size() -> usize {
    catalog::all_idioms().len()
}
