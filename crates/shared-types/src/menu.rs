//! Sidebar menu derived purely from the user's role.
//!
//! Every entry here must be reachable for the same role through
//! [`RouteTable::resolve`](crate::routing::RouteTable::resolve). The tests in
//! this module and in the `tests` crate hold the two in agreement.

use crate::models::UserRole;
use crate::routing::{
    PATH_ADMIN_REPORTS, PATH_ADMIN_SETTINGS, PATH_ADMIN_USERS, PATH_COURSES, PATH_DASHBOARD,
    PATH_EXCUSE_LETTERS, PATH_FORUM, PATH_LOST_FOUND, PATH_MAP, PATH_PROFILE,
};

/// Icon hint for a menu entry. The UI maps it to a concrete icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Dashboard,
    Users,
    Courses,
    Forum,
    Reports,
    Settings,
    Letters,
    Community,
    LostFound,
    Map,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: MenuIcon,
}

/// A labelled group of entries ("Overview", "Campus Life", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGroup {
    pub label: &'static str,
    pub entries: &'static [MenuEntry],
}

const fn entry(label: &'static str, path: &'static str, icon: MenuIcon) -> MenuEntry {
    MenuEntry { label, path, icon }
}

const ADMIN_MENU: &[MenuGroup] = &[
    MenuGroup {
        label: "Overview",
        entries: &[
            entry("Dashboard", PATH_DASHBOARD, MenuIcon::Dashboard),
            entry("Users", PATH_ADMIN_USERS, MenuIcon::Users),
            entry("Courses", PATH_COURSES, MenuIcon::Courses),
        ],
    },
    MenuGroup {
        label: "Management",
        entries: &[
            entry("Forum", PATH_FORUM, MenuIcon::Forum),
            entry("Reports", PATH_ADMIN_REPORTS, MenuIcon::Reports),
            entry("Settings", PATH_ADMIN_SETTINGS, MenuIcon::Settings),
        ],
    },
];

const ACADEMIC_MENU: &[MenuGroup] = &[
    MenuGroup {
        label: "Main",
        entries: &[
            entry("Dashboard", PATH_DASHBOARD, MenuIcon::Dashboard),
            entry("My Courses", PATH_COURSES, MenuIcon::Courses),
            entry("Excuse Letters", PATH_EXCUSE_LETTERS, MenuIcon::Letters),
        ],
    },
    MenuGroup {
        label: "Campus Life",
        entries: &[
            entry("PH Corners", PATH_FORUM, MenuIcon::Community),
            entry("Lost & Found", PATH_LOST_FOUND, MenuIcon::LostFound),
            entry("Campus Map", PATH_MAP, MenuIcon::Map),
        ],
    },
    MenuGroup {
        label: "Personal",
        entries: &[entry("My Profile", PATH_PROFILE, MenuIcon::Profile)],
    },
];

/// Ordered menu groups for `role`. Students and teachers share one menu.
pub fn build_menu(role: UserRole) -> &'static [MenuGroup] {
    match role {
        UserRole::Admin => ADMIN_MENU,
        UserRole::Student | UserRole::Teacher => ACADEMIC_MENU,
    }
}

/// Subtitle under the sidebar brand.
pub fn portal_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "Admin Console",
        UserRole::Student | UserRole::Teacher => "Academic Portal",
    }
}

/// Every entry of a menu, flattened in display order.
pub fn menu_entries(groups: &[MenuGroup]) -> impl Iterator<Item = &MenuEntry> {
    groups.iter().flat_map(|g| g.entries.iter())
}
