//! Small browser-facing utilities shared across pages.

pub mod dark_mode;
pub mod drafts;
pub mod time;
