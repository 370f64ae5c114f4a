//! The theme applier: decide whether to swap, then swap.
//!
//! DESIGN
//! ======
//! Split in two so every property is testable without a browser: [`decide`]
//! performs the storage lookups, decoding, and URL selection; [`execute`]
//! performs the two stylesheet writes. The browser shell in [`crate::dom`]
//! orders them so the document is only queried after a positive decision; an
//! unconfigured page never logs about stylesheets.
//!
//! This is a cosmetic enhancement. Every shortfall downgrades to a logged
//! no-op, and nothing here may block page rendering.

use crate::consts::BUFFER_WRITE_DELAY;
use crate::persistence::{self, DecodeError};
use crate::schedule::{PendingWrite, WriteScheduler};
use crate::sheets::{PairError, Slot, StylesheetSet};

/// Injected read-only lookup capability over the two persisted entries.
///
/// Implementations return the raw serialized entry, or `None` when the key
/// is absent. Keeping the value raw lets the applier distinguish an absent
/// entry (a defined no-op) from a malformed one (a logged skip).
pub trait ThemeSource {
    /// Raw preference flag entry, if present.
    fn preference(&self) -> Option<String>;

    /// Raw theme URL pair entry, if present.
    fn theme_urls(&self) -> Option<String>;
}

/// The selected theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeChoice {
    /// Stylesheet URL to install, exactly as stored.
    pub href: String,
    /// Whether the alternate theme was chosen.
    pub alternate: bool,
}

/// Reason an apply pass was skipped. Every variant is recoverable: the page
/// keeps whatever theme it loaded with.
#[derive(Debug, thiserror::Error)]
pub enum Skip {
    /// Theme URLs are stored but the preference flag is missing.
    #[error("preference entry missing while theme store is present")]
    MissingPreference,
    /// The preference flag is stored but the theme URLs are missing.
    #[error("theme store entry missing while preference is present")]
    MissingThemeUrls,
    /// The preference entry would not decode.
    #[error("preference entry: {0}")]
    Preference(#[source] DecodeError),
    /// The theme store entry would not decode.
    #[error("theme store entry: {0}")]
    ThemeUrls(#[source] DecodeError),
    /// The document lacks the managed stylesheet links.
    #[error(transparent)]
    Stylesheets(#[from] PairError),
}

/// Result of one apply pass.
#[derive(Debug)]
pub enum Outcome {
    /// A theme was selected (and, once executed, installed).
    Applied(ThemeChoice),
    /// Neither entry is stored: the page has never persisted a preference.
    /// The one defined silent no-op.
    NotConfigured,
    /// A recoverable skip condition was hit and logged.
    Skipped(Skip),
}

/// Look up and decode both entries, then select the stylesheet URL.
///
/// Performs no writes. Both entries absent is the silent no-op; every other
/// shortfall logs a warning and skips.
pub fn decide(source: &impl ThemeSource) -> Outcome {
    let (raw_preference, raw_urls) = match (source.preference(), source.theme_urls()) {
        (None, None) => return Outcome::NotConfigured,
        (None, Some(_)) => return skipped(Skip::MissingPreference),
        (Some(_), None) => return skipped(Skip::MissingThemeUrls),
        (Some(preference), Some(urls)) => (preference, urls),
    };

    let use_alternate = match persistence::decode_preference(&raw_preference) {
        Ok(flag) => flag,
        Err(err) => return skipped(Skip::Preference(err)),
    };
    let urls = match persistence::decode_theme_urls(&raw_urls) {
        Ok(urls) => urls,
        Err(err) => return skipped(Skip::ThemeUrls(err)),
    };

    Outcome::Applied(ThemeChoice {
        href: urls.choose(use_alternate).to_owned(),
        alternate: use_alternate,
    })
}

/// Install the chosen stylesheet: primary slot now, buffer slot after
/// [`BUFFER_WRITE_DELAY`].
///
/// The deferred write is forgotten rather than held; if the document unloads
/// first the browser drops the timeout with it.
pub fn execute<L>(choice: &ThemeChoice, sheets: &L, scheduler: &impl WriteScheduler)
where
    L: StylesheetSet + Clone + 'static,
{
    sheets.set_href(Slot::Primary, &choice.href);

    let sheets = sheets.clone();
    let href = choice.href.clone();
    scheduler
        .defer(
            BUFFER_WRITE_DELAY,
            Box::new(move || sheets.set_href(Slot::Buffer, &href)),
        )
        .forget();
}

/// Log a skip and wrap it. Shared with the browser shell so every skip path
/// reads the same in the console.
pub(crate) fn skipped(skip: Skip) -> Outcome {
    log::warn!("theme swap skipped: {skip}");
    Outcome::Skipped(skip)
}

#[cfg(test)]
#[path = "applier_test.rs"]
mod applier_test;
