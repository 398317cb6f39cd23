use pretty_assertions::assert_eq;
use shared_types::{Resolution, Session, UserRole, ViewId, PATH_ADMIN_USERS, PATH_PROFILE};

use crate::common::*;

#[test]
fn login_then_logout_restores_pre_login_state() {
    let table = table();
    for role in every_role() {
        let mut session = Session::default();
        let before = session.clone();

        session.login(user(role));
        assert!(session.is_authenticated());
        session.logout();

        assert_eq!(session, before);
        assert_eq!(table.resolve("/", session.current_user()), Resolution::Login);
    }
}

#[test]
fn logout_after_navigation_returns_home() {
    let table = table();
    let mut session = session_as(UserRole::Student);
    session.navigate(&table, PATH_PROFILE);
    assert_eq!(session.current_path(), PATH_PROFILE);

    session.logout();
    assert_eq!(session.current_path(), "/");
    assert!(session.frame(&table).menu.is_empty());
}

#[test]
fn navigation_never_lands_on_unreachable_path() {
    let table = table();
    let mut session = session_as(UserRole::Teacher);
    for path in [PATH_ADMIN_USERS, "/ghost", PATH_PROFILE] {
        session.navigate(&table, path);
        let here = session.frame(&table);
        assert!(matches!(here.resolution, Resolution::View(_)), "after {path}");
    }
}

#[test]
fn admin_and_student_share_root_but_not_dashboard() {
    use shared_types::DashboardVariant;

    let table = table();
    let admin = session_as(UserRole::Admin);
    let student = session_as(UserRole::Student);

    // Both resolve "/" to the same view id...
    assert_eq!(admin.frame(&table).resolution, Resolution::View(ViewId::Dashboard));
    assert_eq!(student.frame(&table).resolution, Resolution::View(ViewId::Dashboard));

    // ...and the view picks the variant from the role.
    let pick = |s: &Session| s.role().map(DashboardVariant::for_role);
    assert_eq!(pick(&admin), Some(DashboardVariant::Admin));
    assert_eq!(pick(&student), Some(DashboardVariant::Student));
}

#[test]
fn teacher_redirected_from_admin_settings_sees_teacher_dashboard() {
    use shared_types::DashboardVariant;

    let table = table();
    let mut session = session_as(UserRole::Teacher);
    let resolution = session.navigate(&table, "/admin/settings");

    assert_eq!(resolution, Resolution::View(ViewId::Dashboard));
    assert_eq!(session.current_path(), "/");
    assert_eq!(session.role().map(DashboardVariant::for_role), Some(DashboardVariant::Teacher));
}

#[test]
fn frame_reads_one_consistent_snapshot() {
    let table = table();
    let session = session_as(UserRole::Admin);
    let frame = session.frame_at(&table, PATH_ADMIN_USERS);
    let role = frame.user.map(|u| u.role);

    assert_eq!(role, Some(UserRole::Admin));
    assert_eq!(frame.resolution, Resolution::View(ViewId::AdminUsers));
    assert_eq!(frame.menu, shared_types::build_menu(UserRole::Admin));
}

#[test]
fn frame_at_router_path_agrees_with_recorded_navigation() {
    let table = table();
    let paths = table.entries().iter().map(|e| e.path).chain(["/ghost", "/admin/audit"]);
    for role in every_role() {
        for path in paths.clone() {
            let mut session = session_as(role);
            let at = session.frame_at(&table, path).resolution;
            let landed = session.navigate(&table, path);

            match at {
                Resolution::Redirect { to, .. } => {
                    assert_eq!(to, "/", "{role} at {path}");
                    assert_eq!(session.current_path(), "/", "{role} at {path}");
                }
                _ => {
                    assert_eq!(session.current_path(), path, "{role} at {path}");
                    assert_eq!(at, landed, "{role} at {path}");
                }
            }
            assert_eq!(session.frame(&table).resolution, landed, "{role} at {path}");
        }
    }
}
