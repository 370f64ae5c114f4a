//! Decoding of the persisted theme entries.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both entries are written by the host page's framework (the switch
//! persistence layer and the theme store component); this crate only reads
//! them. The shapes are the producer's wire format, not ours, so decoding is
//! strict about element types and reports malformed entries instead of
//! guessing.

use serde::Deserialize;

/// Error decoding a persisted entry.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The entry is not valid JSON or does not match the expected shape.
    #[error("malformed persisted entry: {0}")]
    Json(#[from] serde_json::Error),
    /// The preference entry decoded to an empty list.
    #[error("preference entry holds no elements")]
    EmptyPreference,
}

/// The persisted theme URL pair: `[0]` default theme, `[1]` alternate theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeUrls(String, String);

impl ThemeUrls {
    /// Build a pair from explicit URLs.
    #[must_use]
    pub fn new(default_url: impl Into<String>, alternate_url: impl Into<String>) -> Self {
        Self(default_url.into(), alternate_url.into())
    }

    /// Stylesheet URL of the default theme.
    #[must_use]
    pub fn default_url(&self) -> &str {
        &self.0
    }

    /// Stylesheet URL of the alternate theme.
    #[must_use]
    pub fn alternate_url(&self) -> &str {
        &self.1
    }

    /// Select the URL for the given preference. The returned string is the
    /// stored value, byte for byte; no normalization is applied.
    #[must_use]
    pub fn choose(&self, use_alternate: bool) -> &str {
        if use_alternate { &self.1 } else { &self.0 }
    }
}

/// Decode the preference flag entry.
///
/// The persistence layer stores a JSON array of persisted values; the flag is
/// its first element. Trailing elements are ignored, but every element must
/// be a boolean and the array must not be empty.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the entry is not a JSON boolean array or
/// the array is empty.
pub fn decode_preference(raw: &str) -> Result<bool, DecodeError> {
    let values: Vec<bool> = serde_json::from_str(raw)?;
    values.first().copied().ok_or(DecodeError::EmptyPreference)
}

/// Decode the theme URL pair entry: a JSON array of exactly two strings.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the entry is not a two-element JSON string
/// array.
pub fn decode_theme_urls(raw: &str) -> Result<ThemeUrls, DecodeError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;
