//! Sponsor widget restyling.
//!
//! The footer sponsor button and its popover link carry contextual
//! classes that must track the active theme: a dark page gets a dark
//! button and a light link, a light page the reverse. This module
//! computes the swaps as plain data; the DOM shell applies them.

use crate::consts::{
    SPONSOR_BUTTON_ALTERNATE, SPONSOR_BUTTON_DEFAULT, SPONSOR_LINK_ALTERNATE, SPONSOR_LINK_DEFAULT,
};

/// One class replacement on a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSwap {
    pub add: &'static str,
    pub remove: &'static str,
}

/// Class swaps for the sponsor button and its popover link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SponsorClasses {
    pub button: ClassSwap,
    pub link: ClassSwap,
}

/// Classes the sponsor elements should carry under the given theme.
#[must_use]
pub fn classes(alternate: bool) -> SponsorClasses {
    if alternate {
        SponsorClasses {
            button: ClassSwap {
                add: SPONSOR_BUTTON_ALTERNATE,
                remove: SPONSOR_BUTTON_DEFAULT,
            },
            link: ClassSwap {
                add: SPONSOR_LINK_ALTERNATE,
                remove: SPONSOR_LINK_DEFAULT,
            },
        }
    } else {
        SponsorClasses {
            button: ClassSwap {
                add: SPONSOR_BUTTON_DEFAULT,
                remove: SPONSOR_BUTTON_ALTERNATE,
            },
            link: ClassSwap {
                add: SPONSOR_LINK_DEFAULT,
                remove: SPONSOR_LINK_ALTERNATE,
            },
        }
    }
}

#[cfg(test)]
#[path = "sponsor_test.rs"]
mod sponsor_test;
