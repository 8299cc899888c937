//! Navigation shell state: route table, sidebar geometry, active-entry
//! matching.
//!
//! The sidebar and the content column are laid out independently but must
//! agree on one number, so both read their width/offset from the same
//! pair of functions here. Active matching is exact string equality on
//! the pathname; no prefix matching, so `/projects` never lights up for
//! `/projects/42` and an unlisted route lights up nothing.

/// Canonical route paths. Pages link with these, never with literals.
pub mod paths {
    pub const OVERVIEW: &str = "/";
    pub const PROJECTS: &str = "/projects";
    pub const DATABASES: &str = "/databases";
    pub const DEPLOYMENTS: &str = "/deployments";
    pub const ANALYTICS: &str = "/analytics";
    pub const SETTINGS: &str = "/settings";
    pub const LOGIN: &str = "/login";
}

/// One sidebar row. `icon` picks the glyph via a CSS modifier class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

/// Sidebar rows, top to bottom. Databases has no page yet and lands on
/// the not-found route; Deployments is reachable from the overview page
/// but intentionally absent here.
pub const SIDEBAR_ENTRIES: [NavEntry; 5] = [
    NavEntry {
        label: "Dashboard",
        path: paths::OVERVIEW,
        icon: "dashboard",
    },
    NavEntry {
        label: "Projects",
        path: paths::PROJECTS,
        icon: "projects",
    },
    NavEntry {
        label: "Databases",
        path: paths::DATABASES,
        icon: "databases",
    },
    NavEntry {
        label: "Analytics",
        path: paths::ANALYTICS,
        icon: "analytics",
    },
    NavEntry {
        label: "Settings",
        path: paths::SETTINGS,
        icon: "settings",
    },
];

pub const SIDEBAR_WIDTH_EXPANDED: f64 = 256.0;
pub const SIDEBAR_WIDTH_COLLAPSED: f64 = 64.0;

/// Shell chrome state. Lives in a signal at the app root so it survives
/// route changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub collapsed: bool,
}

impl NavState {
    pub fn toggle_collapse(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

pub fn sidebar_width(collapsed: bool) -> f64 {
    if collapsed {
        SIDEBAR_WIDTH_COLLAPSED
    } else {
        SIDEBAR_WIDTH_EXPANDED
    }
}

/// Left offset of the content column and the header. Defined in terms of
/// the sidebar width so the two cannot drift apart.
pub fn content_offset(collapsed: bool) -> f64 {
    sidebar_width(collapsed)
}

/// Exact-match active test against the current pathname.
pub fn is_active(entry_path: &str, pathname: &str) -> bool {
    entry_path == pathname
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;
