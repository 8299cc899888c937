//! Client-side shell state shared across pages.

pub mod nav;
