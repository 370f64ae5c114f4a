//! Named mapping over the two managed stylesheet elements.
//!
//! The host page carries two CDN-served stylesheet links. The second match in
//! document order is the primary sheet; the first match is a buffer that
//! follows after a short delay. Naming the roles keeps positional indices out
//! of the rest of the crate.

/// Role of a managed stylesheet element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Second selector match; rewritten immediately.
    Primary,
    /// First selector match; rewritten after [`crate::consts::BUFFER_WRITE_DELAY`].
    Buffer,
}

/// Error pairing up the managed stylesheet elements.
#[derive(Debug, thiserror::Error)]
pub enum PairError {
    /// The document exposes fewer than two matching stylesheet links.
    #[error("expected two managed stylesheet links, found {found}")]
    TooFew { found: usize },
}

/// The two managed stylesheet elements, by role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetPair<T> {
    /// Second selector match.
    pub primary: T,
    /// First selector match.
    pub buffer: T,
}

impl<T> SheetPair<T> {
    /// Build the pair from selector matches in document order.
    ///
    /// The first two matches are used (`[1]` primary, `[0]` buffer); any
    /// further matches are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::TooFew`] when fewer than two matches exist.
    pub fn from_matches(matches: Vec<T>) -> Result<Self, PairError> {
        let found = matches.len();
        let mut iter = matches.into_iter();
        let (Some(buffer), Some(primary)) = (iter.next(), iter.next()) else {
            return Err(PairError::TooFew { found });
        };
        Ok(Self { primary, buffer })
    }

    /// The element filling `slot`.
    #[must_use]
    pub fn get(&self, slot: Slot) -> &T {
        match slot {
            Slot::Primary => &self.primary,
            Slot::Buffer => &self.buffer,
        }
    }
}

/// Injected DOM-mutation capability: rewrite the `href` of one managed
/// stylesheet element. Implementations absorb their own failures; a write
/// must never unwind into the applier.
pub trait StylesheetSet {
    /// Point the element in `slot` at `href`.
    fn set_href(&self, slot: Slot, href: &str);
}

#[cfg(test)]
#[path = "sheets_test.rs"]
mod sheets_test;
