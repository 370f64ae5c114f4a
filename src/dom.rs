//! Browser shell around the pure applier.
//!
//! Everything that touches `web_sys` lives here: `localStorage` reads,
//! stylesheet discovery, the window timer, and the sponsor widget.
//! Nothing here decides anything. The applier picks the theme; this
//! module wires it to the page.
//!
//! TRADE-OFFS
//! ==========
//! Every lookup degrades to `None` or an error value, so a missing
//! window, blocked storage, or absent element turns the run into a
//! logged no-op instead of a page-breaking panic.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, HtmlLinkElement};

use crate::applier::{self, Outcome, Skip, ThemeSource};
use crate::consts::{
    CDN_PREFIX, PREFERENCE_KEY, SPONSOR_BUTTON_ID, SPONSOR_LINK_ID, THEME_STORE_KEY,
};
use crate::schedule::{PendingWrite, WriteScheduler};
use crate::sheets::{PairError, SheetPair, Slot, StylesheetSet};
use crate::sponsor::{self, ClassSwap};

// ── Storage ──────────────────────────────────────────────────────────

/// Theme entries read live from `window.localStorage`.
pub struct LocalStorageSource;

impl LocalStorageSource {
    fn read_entry(key: &str) -> Option<String> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }
}

impl ThemeSource for LocalStorageSource {
    fn preference(&self) -> Option<String> {
        Self::read_entry(PREFERENCE_KEY)
    }

    fn theme_urls(&self) -> Option<String> {
        Self::read_entry(THEME_STORE_KEY)
    }
}

// ── Stylesheets ──────────────────────────────────────────────────────

fn stylesheet_selector() -> String {
    format!(r#"link[rel=stylesheet][href^="{CDN_PREFIX}"]"#)
}

/// Locate the two CDN-hosted stylesheet links the page swaps between.
pub fn discover_sheets(document: &Document) -> Result<SheetPair<HtmlLinkElement>, PairError> {
    use wasm_bindgen::JsCast;

    let mut links = Vec::new();
    if let Ok(nodes) = document.query_selector_all(&stylesheet_selector()) {
        for index in 0..nodes.length() {
            if let Some(link) = nodes
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlLinkElement>().ok())
            {
                links.push(link);
            }
        }
    }
    SheetPair::from_matches(links)
}

impl StylesheetSet for SheetPair<HtmlLinkElement> {
    fn set_href(&self, slot: Slot, href: &str) {
        self.get(slot).set_href(href);
    }
}

// ── Deferred writes ──────────────────────────────────────────────────

/// Armed browser timeout holding the pending buffer write.
pub struct PendingTimeout(Timeout);

impl PendingWrite for PendingTimeout {
    fn forget(self) {
        self.0.forget();
    }

    fn cancel(self) {
        self.0.cancel();
    }
}

/// Schedules deferred writes on the window timer.
pub struct TimeoutScheduler;

impl WriteScheduler for TimeoutScheduler {
    type Pending = PendingTimeout;

    fn defer(&self, delay: Duration, write: Box<dyn FnOnce()>) -> PendingTimeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        PendingTimeout(Timeout::new(millis, write))
    }
}

// ── Sponsor widget ───────────────────────────────────────────────────

fn swap_class(document: &Document, id: &str, swap: ClassSwap) {
    if let Some(element) = document.get_element_by_id(id) {
        let classes = element.class_list();
        let _ = classes.remove_1(swap.remove);
        let _ = classes.add_1(swap.add);
    }
}

/// Restyle the sponsor button and link for the chosen theme. Pages
/// without the widget are left untouched.
pub fn restyle_sponsor(document: &Document, alternate: bool) {
    let swaps = sponsor::classes(alternate);
    swap_class(document, SPONSOR_BUTTON_ID, swaps.button);
    swap_class(document, SPONSOR_LINK_ID, swaps.link);
}

// ── Entry points ─────────────────────────────────────────────────────

/// Run one full pass: read the stored entries, decide, and install.
pub fn apply_stored_theme() -> Outcome {
    let outcome = applier::decide(&LocalStorageSource);
    let Outcome::Applied(choice) = &outcome else {
        return outcome;
    };

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return applier::skipped(Skip::Stylesheets(PairError::TooFew { found: 0 }));
    };

    match discover_sheets(&document) {
        Ok(sheets) => {
            applier::execute(choice, &sheets, &TimeoutScheduler);
            restyle_sponsor(&document, choice.alternate);
            outcome
        }
        Err(err) => applier::skipped(Skip::Stylesheets(err)),
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Runs when the module is instantiated, before the app's own scripts.
#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
    let outcome = apply_stored_theme();
    log::debug!("startup theme pass: {outcome:?}");
}

/// On-demand re-run for pages that change the stored theme after load.
#[wasm_bindgen(js_name = applyStoredTheme)]
pub fn apply_stored_theme_js() {
    let outcome = apply_stored_theme();
    log::debug!("requested theme pass: {outcome:?}");
}

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;
