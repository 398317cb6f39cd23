use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of portal errors.
///
/// Navigation never produces one of these: unauthorized and unknown paths
/// resolve to a redirect (see [`crate::routing::Resolution`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// A user record carried a role outside Student / Teacher / Admin.
    InvalidRole,
    /// `config.toml` could not be parsed.
    InvalidConfig,
    /// Two route entries share a path.
    DuplicateRoute,
    /// No login account matches the submitted identifier.
    UnknownAccount,
    ValidationError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::InvalidRole => write!(f, "InvalidRole"),
            AppErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
            AppErrorKind::DuplicateRoute => write!(f, "DuplicateRoute"),
            AppErrorKind::UnknownAccount => write!(f, "UnknownAccount"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
        }
    }
}

/// Structured error shared by the core and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn invalid_role(raw: &str) -> Self {
        let mut err = Self::new(
            AppErrorKind::InvalidRole,
            format!("Unrecognized role \"{raw}\""),
        );
        err.field_errors
            .insert("role".to_string(), "must be STUDENT, TEACHER or ADMIN".to_string());
        err
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InvalidConfig, message)
    }

    pub fn duplicate_route(path: &str) -> Self {
        Self::new(
            AppErrorKind::DuplicateRoute,
            format!("Route path {path} is declared more than once"),
        )
    }

    pub fn unknown_account(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::UnknownAccount, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Message suitable for display in a form.
    ///
    /// Prefers the first field error (sorted by field name for stable output)
    /// and falls back to the top-level message.
    pub fn friendly_message(&self) -> String {
        let mut fields: Vec<_> = self.field_errors.iter().collect();
        fields.sort();
        match fields.first() {
            Some((field, msg)) if self.kind == AppErrorKind::ValidationError => {
                format!("{field}: {msg}")
            }
            _ if self.message.is_empty() => "Something went wrong. Please try again.".to_string(),
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::invalid_config(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_role_names_the_raw_value() {
        let err = AppError::invalid_role("JANITOR");
        assert_eq!(err.kind, AppErrorKind::InvalidRole);
        assert!(err.message.contains("JANITOR"));
        assert!(err.field_errors.contains_key("role"));
    }

    #[test]
    fn duplicate_route_mentions_path() {
        let err = AppError::duplicate_route("/forum");
        assert_eq!(err.kind, AppErrorKind::DuplicateRoute);
        assert!(err.message.contains("/forum"));
    }

    #[test]
    fn friendly_message_uses_message_for_non_validation() {
        let err = AppError::invalid_role("guest");
        assert_eq!(err.friendly_message(), "Unrecognized role \"guest\"");
    }

    #[test]
    fn friendly_message_prefers_field_error_for_validation() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "is required".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.friendly_message(), "email: is required");
    }

    #[test]
    fn friendly_message_fallback_for_empty_message() {
        let err = AppError::unknown_account("");
        assert_eq!(
            err.friendly_message(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unknown_account("No account for x@y.edu");
        assert_eq!(format!("{}", err), "UnknownAccount: No account for x@y.edu");
    }

    #[test]
    fn toml_errors_become_invalid_config() {
        let parse: Result<toml::Value, _> = toml::from_str("[features");
        let err: AppError = parse.unwrap_err().into();
        assert_eq!(err.kind, AppErrorKind::InvalidConfig);
    }
}
