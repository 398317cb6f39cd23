use pretty_assertions::assert_eq;
use shared_types::{Resolution, Session, UserRole};

use crate::common::*;

#[test]
fn toggling_twice_is_identity() {
    for start in [false, true] {
        let mut session = Session::new(start);
        session.toggle_theme();
        assert_eq!(session.theme_is_dark(), !start);
        session.toggle_theme();
        assert_eq!(session.theme_is_dark(), start);
    }
}

#[test]
fn theme_never_changes_guard_resolution() {
    let table = table();
    let paths = ["/", "/forum", "/admin/users", "/admin/reports", "/missing"];
    for role in every_role() {
        let mut session = session_as(role);
        let light: Vec<Resolution> = paths
            .iter()
            .map(|p| session.frame_at(&table, p).resolution)
            .collect();

        session.toggle_theme();
        let dark: Vec<Resolution> = paths
            .iter()
            .map(|p| session.frame_at(&table, p).resolution)
            .collect();

        assert_eq!(light, dark, "{role}");
    }
}

#[test]
fn theme_survives_logout() {
    let mut session = session_as(UserRole::Student);
    session.toggle_theme();
    session.logout();
    assert!(session.theme_is_dark());
}
