//! Interstitial ad gate.
//!
//! Showing an ad is a single-shot async capability. Callers continue the same
//! way whether the ad actually played or the platform could not show one; the
//! outcome is only reported for logging.

use std::future::Future;

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdOutcome {
    Shown,
    Unsupported,
}

pub trait AdService {
    /// Resolves exactly once, after the ad is dismissed or immediately when no
    /// ad can be shown.
    fn show(&self) -> impl Future<Output = AdOutcome>;
}

/// Platforms without ads. Every gate opens immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAds;

impl AdService for NoAds {
    async fn show(&self) -> AdOutcome {
        AdOutcome::Unsupported
    }
}

/// Ad display provided by the host page: a JS function that returns a Promise
/// resolving (to anything) once the ad is dismissed. Resolving to the string
/// `"unsupported"` reports that no ad was available.
pub struct JsAdService {
    show_ad: Option<js_sys::Function>,
}

impl JsAdService {
    pub fn new(show_ad: Option<js_sys::Function>) -> Self {
        Self { show_ad }
    }
}

impl AdService for JsAdService {
    async fn show(&self) -> AdOutcome {
        let Some(show_ad) = &self.show_ad else {
            return AdOutcome::Unsupported;
        };
        let returned = match show_ad.call0(&JsValue::NULL) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("ad call threw: {e:?}");
                return AdOutcome::Unsupported;
            }
        };
        let Ok(promise) = returned.dyn_into::<js_sys::Promise>() else {
            return AdOutcome::Unsupported;
        };
        match JsFuture::from(promise).await {
            Ok(v) if v.as_string().as_deref() == Some("unsupported") => AdOutcome::Unsupported,
            Ok(_) => AdOutcome::Shown,
            Err(e) => {
                log::warn!("ad failed to show: {e:?}");
                AdOutcome::Unsupported
            }
        }
    }
}
