//! Fixed contract with the host page: storage keys, selector prefix, timing.
//!
//! Every value here is owned by the page that loads this module. The keys and
//! ids must match what the host framework writes; changing them breaks the
//! pairing silently, so they live in one place.

use std::time::Duration;

// ── Storage keys ────────────────────────────────────────────────

/// localStorage key of the persisted preference flag, written by the host
/// framework's persistence layer. Holds a JSON array whose first element is
/// the boolean "alternate theme active" flag, e.g. `[true]`.
pub const PREFERENCE_KEY: &str = "_dash_persistence.switch.value.true";

/// localStorage key of the theme URL pair, written by the host page's theme
/// store. Holds a JSON array of exactly two stylesheet URLs:
/// `[0]` default theme, `[1]` alternate theme.
pub const THEME_STORE_KEY: &str = "theme-store";

// ── Stylesheet discovery ────────────────────────────────────────

/// `href` prefix identifying the managed stylesheet `<link>` elements. Only
/// links served from this CDN host participate in the swap.
pub const CDN_PREFIX: &str = "https://cdn.jsdelivr";

// ── Timing ──────────────────────────────────────────────────────

/// Delay before the buffer stylesheet is rewritten. The primary sheet is
/// updated first; the buffer follows once the new theme has had a moment to
/// paint. Presentation timing only, not a correctness requirement.
pub const BUFFER_WRITE_DELAY: Duration = Duration::from_millis(100);

// ── Sponsor elements ────────────────────────────────────────────

/// Element id of the sponsor button restyled alongside the theme.
pub const SPONSOR_BUTTON_ID: &str = "kofi-btn";

/// Element id of the sponsor popover link restyled alongside the theme.
pub const SPONSOR_LINK_ID: &str = "kofi-link-color";

/// Button class for the default (light) theme.
pub const SPONSOR_BUTTON_DEFAULT: &str = "btn-light";

/// Button class for the alternate (dark) theme.
pub const SPONSOR_BUTTON_ALTERNATE: &str = "btn-dark";

/// Link class for the default (light) theme.
pub const SPONSOR_LINK_DEFAULT: &str = "link-dark";

/// Link class for the alternate (dark) theme.
pub const SPONSOR_LINK_ALTERNATE: &str = "link-light";
