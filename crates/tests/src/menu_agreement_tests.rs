use shared_types::{build_menu, menu_entries, Resolution, UserRole};

use crate::common::*;

#[test]
fn every_menu_entry_resolves_to_its_view() {
    let table = table();
    for role in every_role() {
        let user = user(role);
        for entry in menu_entries(build_menu(role)) {
            let expected = table
                .lookup(entry.path)
                .map(|e| e.view)
                .unwrap_or_else(|| panic!("{role} menu links to unrouted {}", entry.path));
            assert_eq!(
                table.resolve(entry.path, Some(&user)),
                Resolution::View(expected),
                "{role} menu entry {}",
                entry.label
            );
        }
    }
}

#[test]
fn only_admins_see_admin_links() {
    for role in [UserRole::Student, UserRole::Teacher] {
        assert!(menu_entries(build_menu(role)).all(|e| !e.path.starts_with("/admin")));
    }
    let admin_links = menu_entries(build_menu(UserRole::Admin))
        .filter(|e| e.path.starts_with("/admin"))
        .count();
    assert_eq!(admin_links, 3);
}

#[test]
fn menu_paths_are_unique_per_role() {
    for role in every_role() {
        let mut paths: Vec<_> = menu_entries(build_menu(role)).map(|e| e.path).collect();
        let total = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), total, "{role} menu repeats a path");
    }
}

#[test]
fn frame_menu_and_guard_agree() {
    let table = table();
    for role in every_role() {
        let session = session_as(role);
        let frame = session.frame(&table);
        for entry in menu_entries(frame.menu) {
            let at = session.frame_at(&table, entry.path);
            assert!(!at.resolution.is_redirect(), "{role} at {}", entry.path);
        }
    }
}
