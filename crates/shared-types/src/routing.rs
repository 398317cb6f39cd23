//! Role-scoped route table and navigation guard.
//!
//! The table is plain data: an ordered list of `(path, view, required roles)`
//! entries evaluated by [`RouteTable::resolve`]. Matching is exact and
//! literal; there are no prefixes or path parameters. Resolution is
//! recomputed on every navigation since the role can change across a
//! logout/login cycle.

use std::collections::HashSet;

use crate::error::AppError;
use crate::models::{User, UserRole};

/// Where every unauthorized or unknown navigation lands.
pub const DEFAULT_PATH: &str = "/";

pub const PATH_DASHBOARD: &str = "/";
pub const PATH_PROFILE: &str = "/profile";
pub const PATH_COURSES: &str = "/courses";
pub const PATH_MAP: &str = "/map";
pub const PATH_FORUM: &str = "/forum";
pub const PATH_LOST_FOUND: &str = "/lost-found";
pub const PATH_EXCUSE_LETTERS: &str = "/excuse-letters";
pub const PATH_ADMIN_USERS: &str = "/admin/users";
pub const PATH_ADMIN_REPORTS: &str = "/admin/reports";
pub const PATH_ADMIN_SETTINGS: &str = "/admin/settings";

/// A view the shell can mount. Opaque to the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Dashboard,
    Profile,
    Courses,
    Map,
    Forum,
    LostFound,
    ExcuseLetters,
    AdminUsers,
    AdminReports,
    AdminSettings,
}

impl ViewId {
    /// Page title shown in the topbar.
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Profile => "My Profile",
            ViewId::Courses => "Courses",
            ViewId::Map => "Campus Map",
            ViewId::Forum => "Forum",
            ViewId::LostFound => "Lost & Found",
            ViewId::ExcuseLetters => "Excuse Letters",
            ViewId::AdminUsers => "Users",
            ViewId::AdminReports => "Reports",
            ViewId::AdminSettings => "Settings",
        }
    }
}

const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];
const ANY_ROLE: &[UserRole] = &[];

/// One `(path, view, required roles)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: ViewId,
    /// Roles allowed to reach the view. Empty means any authenticated role.
    pub required_roles: &'static [UserRole],
}

impl RouteEntry {
    pub const fn new(
        path: &'static str,
        view: ViewId,
        required_roles: &'static [UserRole],
    ) -> Self {
        Self {
            path,
            view,
            required_roles,
        }
    }

    /// Whether `role` may reach this entry.
    pub fn permits(&self, role: UserRole) -> bool {
        self.required_roles.is_empty() || self.required_roles.contains(&role)
    }
}

/// The portal's route surface.
pub const STANDARD_ROUTES: &[RouteEntry] = &[
    RouteEntry::new(PATH_DASHBOARD, ViewId::Dashboard, ANY_ROLE),
    RouteEntry::new(PATH_PROFILE, ViewId::Profile, ANY_ROLE),
    RouteEntry::new(PATH_COURSES, ViewId::Courses, ANY_ROLE),
    RouteEntry::new(PATH_MAP, ViewId::Map, ANY_ROLE),
    RouteEntry::new(PATH_FORUM, ViewId::Forum, ANY_ROLE),
    RouteEntry::new(PATH_LOST_FOUND, ViewId::LostFound, ANY_ROLE),
    RouteEntry::new(PATH_EXCUSE_LETTERS, ViewId::ExcuseLetters, ANY_ROLE),
    RouteEntry::new(PATH_ADMIN_USERS, ViewId::AdminUsers, ADMIN_ONLY),
    RouteEntry::new(PATH_ADMIN_REPORTS, ViewId::AdminReports, ADMIN_ONLY),
    RouteEntry::new(PATH_ADMIN_SETTINGS, ViewId::AdminSettings, ADMIN_ONLY),
];

/// Why the guard sent the user back to [`DEFAULT_PATH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// The path exists but the role is not in its required set.
    Unauthorized,
    /// No entry matches the path (the `*` catch-all).
    UnknownRoute,
}

/// Outcome of guarding one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No session: only the login view is reachable, whatever the path.
    Login,
    /// The path's view, reachable for the current role.
    View(ViewId),
    Redirect {
        to: &'static str,
        reason: RedirectReason,
    },
}

impl Resolution {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Resolution::Redirect { .. })
    }

    /// The view that ends up on screen, if any.
    pub fn view(&self) -> Option<ViewId> {
        match self {
            Resolution::View(view) => Some(*view),
            _ => None,
        }
    }
}

/// Static, immutable route table with unique paths.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RouteTable {
    /// Build a table, rejecting duplicate paths.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.path) {
                return Err(AppError::duplicate_route(entry.path));
            }
        }
        Ok(Self { entries })
    }

    /// The portal's table ([`STANDARD_ROUTES`]).
    pub fn standard() -> Self {
        // Uniqueness of STANDARD_ROUTES is covered by tests.
        Self {
            entries: STANDARD_ROUTES.to_vec(),
        }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Exact literal match.
    pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Decide what `path` shows for the given session user.
    ///
    /// An absent user short-circuits to [`Resolution::Login`] before any
    /// lookup. Unauthorized and unknown paths both redirect to
    /// [`DEFAULT_PATH`].
    pub fn resolve(&self, path: &str, user: Option<&User>) -> Resolution {
        let Some(user) = user else {
            return Resolution::Login;
        };

        match self.lookup(path) {
            Some(entry) if entry.permits(user.role) => Resolution::View(entry.view),
            Some(_) => {
                tracing::debug!(path, role = %user.role, "unauthorized navigation redirected");
                Resolution::Redirect {
                    to: DEFAULT_PATH,
                    reason: RedirectReason::Unauthorized,
                }
            }
            None => {
                tracing::debug!(path, role = %user.role, "unknown route redirected");
                Resolution::Redirect {
                    to: DEFAULT_PATH,
                    reason: RedirectReason::UnknownRoute,
                }
            }
        }
    }

    /// Resolve and follow a redirect once, returning the final path and
    /// resolution.
    ///
    /// The default route is reachable for every authenticated role, so a
    /// single hop always settles.
    pub fn settle<'p>(&self, path: &'p str, user: Option<&User>) -> (&'p str, Resolution) {
        match self.resolve(path, user) {
            Resolution::Redirect { to, .. } => (to, self.resolve(to, user)),
            other => (path, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::AppErrorKind;

    fn user(role: UserRole) -> User {
        User::new("u1", "Test User", "t@campus.edu", role)
    }

    #[test]
    fn standard_routes_have_unique_paths() {
        assert!(RouteTable::new(STANDARD_ROUTES.to_vec()).is_ok());
        assert_eq!(RouteTable::standard().entries().len(), 10);
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let entries = vec![
            RouteEntry::new("/forum", ViewId::Forum, ANY_ROLE),
            RouteEntry::new("/forum", ViewId::Courses, ANY_ROLE),
        ];
        let err = RouteTable::new(entries).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::DuplicateRoute);
    }

    #[test]
    fn absent_session_always_resolves_to_login() {
        let table = RouteTable::standard();
        for path in ["/", "/admin/users", "/nowhere", ""] {
            assert_eq!(table.resolve(path, None), Resolution::Login);
        }
    }

    #[test]
    fn admin_reaches_admin_routes() {
        let table = RouteTable::standard();
        let admin = user(UserRole::Admin);
        assert_eq!(
            table.resolve(PATH_ADMIN_USERS, Some(&admin)),
            Resolution::View(ViewId::AdminUsers)
        );
    }

    #[test]
    fn student_is_redirected_from_admin_routes() {
        let table = RouteTable::standard();
        let student = user(UserRole::Student);
        assert_eq!(
            table.resolve(PATH_ADMIN_REPORTS, Some(&student)),
            Resolution::Redirect {
                to: DEFAULT_PATH,
                reason: RedirectReason::Unauthorized,
            }
        );
    }

    #[test]
    fn matching_is_exact() {
        let table = RouteTable::standard();
        let admin = user(UserRole::Admin);
        for path in ["/admin", "/admin/users/", "/Forum", "/forum/1", "/admin/*"] {
            assert_eq!(
                table.resolve(path, Some(&admin)),
                Resolution::Redirect {
                    to: DEFAULT_PATH,
                    reason: RedirectReason::UnknownRoute,
                },
                "path {path}"
            );
        }
    }

    #[test]
    fn settle_follows_redirect_to_dashboard() {
        let table = RouteTable::standard();
        let teacher = user(UserRole::Teacher);
        let (path, resolution) = table.settle(PATH_ADMIN_SETTINGS, Some(&teacher));
        assert_eq!(path, DEFAULT_PATH);
        assert_eq!(resolution, Resolution::View(ViewId::Dashboard));
    }

    #[test]
    fn settle_keeps_reachable_path() {
        let table = RouteTable::standard();
        let student = user(UserRole::Student);
        let (path, resolution) = table.settle(PATH_MAP, Some(&student));
        assert_eq!(path, PATH_MAP);
        assert_eq!(resolution.view(), Some(ViewId::Map));
    }

    #[test]
    fn empty_required_roles_permit_everyone() {
        let entry = RouteEntry::new("/x", ViewId::Forum, ANY_ROLE);
        assert!(entry.permits(UserRole::Student));
        assert!(entry.permits(UserRole::Teacher));
        assert!(entry.permits(UserRole::Admin));
    }
}
