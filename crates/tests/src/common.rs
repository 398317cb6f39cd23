use chrono::{TimeZone, Utc};
use shared_types::{
    Activity, ActivityKind, ActivityStatus, RouteTable, Session, User, UserRole, ALL_ROLES,
};

pub fn table() -> RouteTable {
    RouteTable::standard()
}

pub fn user(role: UserRole) -> User {
    let (id, name) = match role {
        UserRole::Student => ("s-1", "Juan Dela Cruz"),
        UserRole::Teacher => ("t-1", "Alan Reyes"),
        UserRole::Admin => ("a-1", "Campus Administrator"),
    };
    User::new(id, name, format!("{id}@campus.edu"), role)
}

/// A fresh session already logged in as `role`.
pub fn session_as(role: UserRole) -> Session {
    let mut session = Session::default();
    session.login(user(role));
    session
}

pub fn every_role() -> impl Iterator<Item = UserRole> {
    ALL_ROLES.iter().copied()
}

/// Activity due on `day` of March 2026.
pub fn activity(id: &str, day: u32, status: ActivityStatus) -> Activity {
    Activity {
        id: id.to_string(),
        course_id: "c1".to_string(),
        title: format!("Activity {id}"),
        kind: ActivityKind::Assignment,
        due_date: Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap(),
        status,
        grade: None,
        max_grade: 100,
    }
}
