//! Startup theme swap for the dashboard's stylesheets.
//!
//! This crate is compiled to WebAssembly and runs in the browser before
//! the app's own scripts. It reads the persisted dark-mode flag and the
//! published theme URL pair from `localStorage` to pick the stylesheet
//! the visitor last chose, then installs that URL on the page's two
//! CDN-hosted `<link>` elements so the first paint already shows the
//! right theme. Pages with nothing persisted are left exactly as served.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`applier`] | Decision core and the [`applier::decide`] / [`applier::execute`] split |
//! | [`consts`] | Storage keys, selector prefix, buffer delay, sponsor ids |
//! | [`dom`] | Browser shell: storage, link discovery, timers, entry points |
//! | [`persistence`] | Decoders for the persisted storage entry formats |
//! | [`schedule`] | Deferred single-shot write contract |
//! | [`sheets`] | Primary/buffer stylesheet pair and the write seam |
//! | [`sponsor`] | Theme-tracking class swaps for the sponsor widget |

pub mod applier;
pub mod consts;
pub mod dom;
pub mod persistence;
pub mod schedule;
pub mod sheets;
pub mod sponsor;
