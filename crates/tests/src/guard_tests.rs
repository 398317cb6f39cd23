use pretty_assertions::assert_eq;
use shared_types::{
    RedirectReason, Resolution, UserRole, ViewId, PATH_ADMIN_REPORTS, PATH_ADMIN_SETTINGS,
    PATH_ADMIN_USERS, PATH_DASHBOARD,
};

use crate::common::*;

const ADMIN_PATHS: [&str; 3] = [PATH_ADMIN_USERS, PATH_ADMIN_REPORTS, PATH_ADMIN_SETTINGS];

fn redirect(reason: RedirectReason) -> Resolution {
    Resolution::Redirect { to: "/", reason }
}

// ── Unknown paths ──────────────────────────────────────────────────

#[test]
fn unknown_paths_redirect_home_for_every_role() {
    let table = table();
    let unknown = ["/nope", "/admin", "/admin/users/", "/Forum", "/forum/1", "", "//"];
    for role in every_role() {
        let user = user(role);
        for path in unknown {
            assert_eq!(
                table.resolve(path, Some(&user)),
                redirect(RedirectReason::UnknownRoute),
                "{role} at {path:?}"
            );
        }
    }
}

// ── Role restrictions ──────────────────────────────────────────────

#[test]
fn admin_paths_redirect_students_and_teachers() {
    let table = table();
    for role in [UserRole::Student, UserRole::Teacher] {
        let user = user(role);
        for path in ADMIN_PATHS {
            assert_eq!(
                table.resolve(path, Some(&user)),
                redirect(RedirectReason::Unauthorized),
                "{role} at {path}"
            );
        }
    }
}

#[test]
fn admin_reaches_every_route() {
    let table = table();
    let admin = user(UserRole::Admin);
    for entry in table.entries() {
        assert_eq!(table.resolve(entry.path, Some(&admin)), Resolution::View(entry.view));
    }
}

#[test]
fn unrestricted_routes_open_to_every_role() {
    let table = table();
    for role in every_role() {
        let user = user(role);
        for entry in table.entries().iter().filter(|e| e.required_roles.is_empty()) {
            assert_eq!(table.resolve(entry.path, Some(&user)), Resolution::View(entry.view));
        }
    }
}

// ── Scenarios ──────────────────────────────────────────────────────

#[test]
fn no_session_at_admin_users_shows_login() {
    // Not the admin view, and not a bare redirect to "/" either: "/" is
    // unreachable before login too.
    let table = table();
    assert_eq!(table.resolve(PATH_ADMIN_USERS, None), Resolution::Login);
    assert_eq!(table.resolve(PATH_DASHBOARD, None), Resolution::Login);
}

#[test]
fn teacher_at_admin_settings_settles_on_dashboard() {
    let table = table();
    let teacher = user(UserRole::Teacher);
    let (path, resolution) = table.settle(PATH_ADMIN_SETTINGS, Some(&teacher));
    assert_eq!(path, "/");
    assert_eq!(resolution, Resolution::View(ViewId::Dashboard));
}

#[test]
fn settle_leaves_reachable_paths_alone() {
    let table = table();
    let student = user(UserRole::Student);
    let (path, resolution) = table.settle("/forum", Some(&student));
    assert_eq!(path, "/forum");
    assert_eq!(resolution, Resolution::View(ViewId::Forum));
}

#[test]
fn redirect_target_is_always_reachable() {
    let table = table();
    for role in every_role() {
        let user = user(role);
        for path in ["/admin/users", "/missing"] {
            if let Resolution::Redirect { to, .. } = table.resolve(path, Some(&user)) {
                assert!(!table.resolve(to, Some(&user)).is_redirect());
            }
        }
    }
}
