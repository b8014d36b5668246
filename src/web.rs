//! JS-facing wrapper around [`Session`].
//!
//! The session sits in a `RefCell`; a borrow is never held across an `.await`
//! so ad callbacks re-entering the app cannot hit a borrow panic.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::ad::{AdOutcome, AdService, JsAdService};
use crate::catalog::Category;
use crate::dates::SystemClock;
use crate::session::{Session, SessionConfig};
use crate::store::{KeyValueStore, LocalStorage, MemoryStore};
use crate::to_js;

type AppSession = Session<Rc<dyn KeyValueStore>, SystemClock>;

#[wasm_bindgen]
pub struct DailyIdiomApp {
    session: RefCell<AppSession>,
    ads: JsAdService,
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_category(key: &str) -> Result<Category, JsValue> {
    Category::from_key(key).ok_or_else(|| JsValue::from_str(&format!("unknown category {key:?}")))
}

impl DailyIdiomApp {
    async fn after_ad(&self, grant: impl FnOnce(&mut AppSession)) -> AdOutcome {
        let outcome = self.ads.show().await;
        grant(&mut *self.session.borrow_mut());
        outcome
    }
}

#[wasm_bindgen]
impl DailyIdiomApp {
    /// `show_ad` is an optional JS function returning a Promise that settles
    /// when the ad is dismissed. Without it every gate opens immediately.
    #[wasm_bindgen(constructor)]
    pub fn new(show_ad: Option<js_sys::Function>) -> DailyIdiomApp {
        let store: Rc<dyn KeyValueStore> = match LocalStorage::open() {
            Ok(storage) => Rc::new(storage),
            Err(e) => {
                log::warn!("localStorage unavailable ({e}), progress will not persist");
                Rc::new(MemoryStore::new())
            }
        };
        DailyIdiomApp {
            session: RefCell::new(Session::new(store, SystemClock, SessionConfig::default())),
            ads: JsAdService::new(show_ad),
        }
    }

    pub fn question(&self) -> Result<JsValue, JsValue> {
        let question = self.session.borrow().question().map_err(js_err)?;
        to_js(&question)
    }

    pub fn submit_answer(&self, selected_index: usize) -> Result<JsValue, JsValue> {
        let outcome = self
            .session
            .borrow_mut()
            .submit_answer(selected_index)
            .map_err(js_err)?;
        to_js(&outcome)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let mut session = self.session.borrow_mut();
        to_js(session.snapshot())
    }

    pub fn hint(&self) -> Result<Option<String>, JsValue> {
        let hint = self.session.borrow().hint().map_err(js_err)?;
        Ok(hint.map(str::to_owned))
    }

    pub fn countdown(&self) -> Result<JsValue, JsValue> {
        to_js(&SystemClock.countdown())
    }

    pub fn shield_offer(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.borrow().shield_offer())
    }

    pub fn dismiss_shield(&self) {
        self.session.borrow_mut().dismiss_shield();
    }

    pub fn cancel_yesterday(&self) {
        self.session.borrow_mut().cancel_yesterday();
    }

    pub fn collection(&self, category: &str) -> Result<JsValue, JsValue> {
        let category = parse_category(category)?;
        to_js(&self.session.borrow().collection_view(category))
    }

    pub fn stats(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.borrow_mut().stats_view())
    }

    pub async fn unlock_hint(&self) -> Result<JsValue, JsValue> {
        let outcome = self.after_ad(|s| s.grant_hint()).await;
        to_js(&outcome)
    }

    pub async fn open_collection(&self) -> Result<JsValue, JsValue> {
        let outcome = self.after_ad(|s| s.grant_collection()).await;
        to_js(&outcome)
    }

    pub async fn open_stats(&self) -> Result<JsValue, JsValue> {
        let outcome = self.after_ad(|s| s.grant_stats()).await;
        to_js(&outcome)
    }

    /// Resolves to `true` once yesterday's question is active.
    pub async fn accept_shield(&self) -> Result<bool, JsValue> {
        if self.session.borrow().shield_offer().is_none() {
            return Ok(false);
        }
        let mut granted = false;
        self.after_ad(|s| granted = s.grant_shield()).await;
        Ok(granted)
    }
}
