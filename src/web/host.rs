//! Browser implementations of the runtime's capabilities.

use crate::clock::Clock;
use crate::config::{DeckConfig, parse_config};
use crate::session::SessionStore;
use anyhow::{Result, anyhow};
use tracing::{debug, warn};
use web_sys::{Document, Storage, Window};

/// Inline `<script type="application/toml">` element holding deck settings.
const CONFIG_ELEMENT_ID: &str = "deck-config";
const FALLBACK_LOCALE: &str = "en-US";

/// `sessionStorage` of the current tab; absent when the browser denies it.
pub(crate) struct BrowserSessionStore {
    storage: Option<Storage>,
}

impl BrowserSessionStore {
    pub(crate) fn for_window(window: &Window) -> Self {
        let storage = match window.session_storage() {
            Ok(storage) => storage,
            Err(err) => {
                warn!("sessionStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| anyhow!("sessionStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|err| anyhow!("sessionStorage write failed: {err:?}"))
    }
}

/// `Date`-backed clock formatting wall time in the browser's language.
pub(crate) struct JsClock {
    locale: String,
}

impl JsClock {
    pub(crate) fn for_window(window: &Window) -> Self {
        let locale = window
            .navigator()
            .language()
            .filter(|lang| !lang.is_empty())
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string());
        Self { locale }
    }
}

impl Clock for JsClock {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now().max(0.0) as u64
    }

    fn wall_clock_label(&self) -> String {
        js_sys::Date::new_0()
            .to_locale_time_string(&self.locale)
            .into()
    }
}

pub(crate) fn load_config(document: &Document) -> DeckConfig {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    {
        Some(text) => parse_config(&text),
        None => {
            debug!("No inline deck config; using defaults");
            DeckConfig::default()
        }
    }
}

/// Read a `data-*` attribute from `<body>`.
pub(crate) fn body_data(document: &Document, name: &str) -> Option<String> {
    document.body()?.dataset().get(name)
}
