use pretty_assertions::assert_eq;
use shared_types::{AppConfig, AppErrorKind, FeatureFlags, UnknownRolePolicy};

#[test]
fn shipped_config_parses() {
    let config = AppConfig::from_toml_str(include_str!("../../../config.toml")).unwrap();
    assert_eq!(
        config.features,
        FeatureFlags {
            assistant: true,
            notifications: true,
        }
    );
    assert_eq!(config.session.unknown_role, UnknownRolePolicy::Reject);
    assert!(!config.session.dark_by_default);
    assert_eq!(config.dashboard.upcoming_limit, 3);
}

#[test]
fn partial_config_fills_defaults() {
    let config = AppConfig::from_toml_str(
        r#"
        [features]
        assistant = true

        [session]
        unknown_role = "student"
        "#,
    )
    .unwrap();
    assert!(config.features.assistant);
    assert!(!config.features.notifications);
    assert_eq!(config.session.unknown_role, UnknownRolePolicy::Student);
    assert_eq!(config.dashboard.upcoming_limit, 3);
}

#[test]
fn malformed_config_is_an_error() {
    let err = AppConfig::from_toml_str("[features\nassistant = ").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidConfig);
}

#[test]
fn unknown_policy_value_is_an_error() {
    let err = AppConfig::from_toml_str("[session]\nunknown_role = \"guest\"").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidConfig);
}

#[test]
fn load_or_default_falls_back() {
    assert_eq!(AppConfig::load_or_default("not = [valid"), AppConfig::default());
}
