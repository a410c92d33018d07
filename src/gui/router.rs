// src/gui/router.rs
use super::pages::{self, Page};

/// Tab order as shown in the header.
pub static PAGES: &[&'static dyn Page] = &[
    &pages::overview::PAGE,
    &pages::detail::PAGE,
    &pages::compare::PAGE,
    &pages::leaderboard::PAGE,
    &pages::map::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

/// Out-of-range indices fall back to the first tab.
pub fn page_at(idx: usize) -> &'static dyn Page {
    PAGES.get(idx).copied().unwrap_or(PAGES[0])
}
