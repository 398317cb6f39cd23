use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;

/// Portal role. The only input to every authorization decision.
///
/// - `Student`: academic portal, no admin routes.
/// - `Teacher`: academic portal with teaching widgets, no admin routes.
/// - `Admin`: admin console, including `/admin/*`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
}

/// All roles in display order.
pub const ALL_ROLES: &[UserRole] = &[UserRole::Student, UserRole::Teacher, UserRole::Admin];

impl UserRole {
    /// Strict parse. Accepts any letter case, rejects everything else.
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(UserRole::Student),
            "teacher" => Ok(UserRole::Teacher),
            "admin" => Ok(UserRole::Admin),
            _ => Err(AppError::invalid_role(s)),
        }
    }

    /// Uppercase wire form, as carried by login records.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT",
            UserRole::Teacher => "TEACHER",
            UserRole::Admin => "ADMIN",
        }
    }

    /// Human-readable label for the topbar and tables.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Teacher => "Teacher",
            UserRole::Admin => "Admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a login record with an unrecognized role is treated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnknownRolePolicy {
    /// Refuse the record with [`AppErrorKind::InvalidRole`](crate::AppErrorKind::InvalidRole).
    #[default]
    Reject,
    /// Admit the user with least privilege.
    Student,
}

impl UnknownRolePolicy {
    /// Resolve a raw role string under this policy.
    pub fn resolve(&self, raw: &str) -> Result<UserRole, AppError> {
        match (UserRole::parse(raw), self) {
            (Ok(role), _) => Ok(role),
            (Err(err), UnknownRolePolicy::Reject) => Err(err),
            (Err(_), UnknownRolePolicy::Student) => {
                tracing::warn!(role = raw, "unrecognized role downgraded to student");
                Ok(UserRole::Student)
            }
        }
    }
}

/// Identity record as handed over by a login collaborator.
///
/// The role is still an untrusted string here; [`User::from_record`] is the
/// only way to turn it into a [`User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campus: Option<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
}

/// An authenticated portal user. `role` is fixed for the session's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campus: Option<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
}

impl User {
    /// Minimal user with no profile attributes.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            avatar_url: None,
            student_id: None,
            about_me: None,
            major: None,
            year_level: None,
            campus: None,
            hobbies: Vec::new(),
        }
    }

    /// Convert an untrusted record, applying `policy` to unknown roles.
    pub fn from_record(record: UserRecord, policy: UnknownRolePolicy) -> Result<Self, AppError> {
        let role = policy.resolve(&record.role).inspect_err(|_| {
            tracing::warn!(user_id = %record.id, role = %record.role, "rejected login record");
        })?;
        Ok(Self {
            id: record.id,
            name: record.name,
            email: record.email,
            role,
            avatar_url: record.avatar_url,
            student_id: record.student_id,
            about_me: record.about_me,
            major: record.major,
            year_level: record.year_level,
            campus: record.campus,
            hobbies: record.hobbies,
        })
    }

    /// First whitespace-separated word of the name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Up to two initials, taken from the first letters of the name's words.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppErrorKind;

    fn record(role: &str) -> UserRecord {
        UserRecord {
            id: "u-9".to_string(),
            name: "Maria Clara Santos".to_string(),
            email: "maria@campus.edu".to_string(),
            role: role.to_string(),
            avatar_url: None,
            student_id: Some("2024-0001".to_string()),
            about_me: None,
            major: Some("BS Computer Science".to_string()),
            year_level: None,
            campus: None,
            hobbies: vec!["Chess".to_string()],
        }
    }

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!(UserRole::parse("STUDENT").unwrap(), UserRole::Student);
        assert_eq!(UserRole::parse("teacher").unwrap(), UserRole::Teacher);
        assert_eq!(UserRole::parse(" Admin ").unwrap(), UserRole::Admin);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = UserRole::parse("principal").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidRole);
        assert!(UserRole::parse("").is_err());
    }

    #[test]
    fn as_str_parses_back() {
        for role in ALL_ROLES {
            assert_eq!(UserRole::parse(role.as_str()).unwrap(), *role);
        }
    }

    #[test]
    fn serde_uses_uppercase_wire_form() {
        let json = serde_json::to_string(&UserRole::Teacher).unwrap();
        assert_eq!(json, "\"TEACHER\"");
    }

    #[test]
    fn reject_policy_refuses_unknown_role() {
        let err = User::from_record(record("GUEST"), UnknownRolePolicy::Reject).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidRole);
    }

    #[test]
    fn student_policy_downgrades_unknown_role() {
        let user = User::from_record(record("GUEST"), UnknownRolePolicy::Student).unwrap();
        assert_eq!(user.role, UserRole::Student);
    }

    #[test]
    fn student_policy_keeps_known_role() {
        let user = User::from_record(record("ADMIN"), UnknownRolePolicy::Student).unwrap();
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn from_record_carries_profile_fields() {
        let user = User::from_record(record("STUDENT"), UnknownRolePolicy::Reject).unwrap();
        assert_eq!(user.student_id.as_deref(), Some("2024-0001"));
        assert_eq!(user.major.as_deref(), Some("BS Computer Science"));
        assert_eq!(user.hobbies, vec!["Chess".to_string()]);
    }

    #[test]
    fn initials_take_first_two_words() {
        let user = User::new("1", "Maria Clara Santos", "m@x.edu", UserRole::Student);
        assert_eq!(user.initials(), "MC");
        assert_eq!(user.first_name(), "Maria");
    }

    #[test]
    fn single_word_name() {
        let user = User::new("1", "admin", "a@x.edu", UserRole::Admin);
        assert_eq!(user.initials(), "A");
        assert_eq!(user.first_name(), "admin");
    }
}
