use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::fixtures;
use shared_types::{AppErrorKind, UnknownRolePolicy, User, UserRecord, UserRole};

fn record(role: &str) -> UserRecord {
    serde_json::from_value(json!({
        "id": "u-42",
        "name": "Ana Reyes",
        "email": "ana@campus.edu",
        "role": role,
        "avatarUrl": "https://i.pravatar.cc/150?u=ana",
        "hobbies": ["Chess"]
    }))
    .unwrap()
}

#[test]
fn known_roles_parse_case_insensitively() {
    for (raw, expected) in [
        ("STUDENT", UserRole::Student),
        ("teacher", UserRole::Teacher),
        (" Admin ", UserRole::Admin),
    ] {
        let user = User::from_record(record(raw), UnknownRolePolicy::Reject).unwrap();
        assert_eq!(user.role, expected);
    }
}

#[test]
fn unknown_role_rejected_by_default() {
    let err = User::from_record(record("REGISTRAR"), UnknownRolePolicy::default()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidRole);
    assert!(err.field_errors.contains_key("role"));
}

#[test]
fn unknown_role_downgraded_under_student_policy() {
    let user = User::from_record(record("REGISTRAR"), UnknownRolePolicy::Student).unwrap();
    assert_eq!(user.role, UserRole::Student);
}

#[test]
fn profile_attributes_carry_over() {
    let user = User::from_record(record("STUDENT"), UnknownRolePolicy::Reject).unwrap();
    assert_eq!(user.avatar_url.as_deref(), Some("https://i.pravatar.cc/150?u=ana"));
    assert_eq!(user.hobbies, vec!["Chess".to_string()]);
    assert_eq!(user.initials(), "AR");
    assert_eq!(user.first_name(), "Ana");
}

#[test]
fn every_demo_account_but_guest_signs_in() {
    let roles: Vec<_> = fixtures::demo_accounts()
        .into_iter()
        .map(|r| User::from_record(r, UnknownRolePolicy::Reject).map(|u| u.role).ok())
        .collect();
    assert_eq!(
        roles,
        vec![
            Some(UserRole::Student),
            Some(UserRole::Teacher),
            Some(UserRole::Admin),
            None,
        ]
    );
}
