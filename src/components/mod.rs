//! Shared UI building blocks: the protected-shell chrome and the cards
//! and feeds the dashboard pages are assembled from.

pub mod activity_feed;
pub mod guard;
pub mod header;
pub mod layout;
pub mod project_card;
pub mod sidebar;
pub mod stat_card;
pub mod theme_toggle;
