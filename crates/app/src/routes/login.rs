use crate::auth::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowRight, LdGraduationCap};
use dioxus_free_icons::Icon;
use shared_types::fixtures;
use shared_types::{AppConfig, AppError, User, UserRecord};
use shared_ui::{Button, Card, CardContent};

/// Find the demo account for `email` and convert it under the configured
/// unknown-role policy.
fn sign_in(accounts: &[UserRecord], email: &str, config: &AppConfig) -> Result<User, AppError> {
    let email = email.trim();
    let record = accounts
        .iter()
        .find(|a| a.email.eq_ignore_ascii_case(email))
        .cloned()
        .ok_or_else(|| AppError::unknown_account(format!("No account found for {email}")))?;
    User::from_record(record, config.session.unknown_role)
}

/// Login view. Rendered for every path while no session exists.
///
/// Credentials are not checked; picking or typing a demo account is enough.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let config: AppConfig = use_context();
    let accounts = use_signal(fixtures::demo_accounts);
    let mut email = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let mut attempt = move |address: String| {
        let result = sign_in(&accounts.read(), &address, &config);
        match result {
            Ok(user) => {
                error_msg.set(None);
                session.login(user);
            }
            Err(err) => {
                tracing::warn!(error = %err, "sign-in refused");
                error_msg.set(Some(err.friendly_message()));
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            Card { class: "login-card",
                CardContent {
                    div { class: "login-brand",
                        div { class: "login-logo",
                            Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 32, height: 32 }
                        }
                        h1 { "CampusHub" }
                        p { "Sign in to your campus portal" }
                    }

                    if let Some(msg) = error_msg() {
                        div { class: "login-error", "{msg}" }
                    }

                    form {
                        class: "login-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            attempt(email());
                        },
                        label { r#for: "login-email", "Email" }
                        input {
                            id: "login-email",
                            r#type: "email",
                            placeholder: "you@campus.edu",
                            value: "{email}",
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        button { r#type: "submit", class: "login-submit",
                            "Sign In"
                            Icon::<LdArrowRight> { icon: LdArrowRight, width: 18, height: 18 }
                        }
                    }

                    div { class: "login-demo",
                        p { class: "login-demo-label", "Demo accounts" }
                        for account in accounts() {
                            DemoAccount {
                                key: "{account.id}",
                                record: account.clone(),
                                on_pick: move |address: String| {
                                    email.set(address.clone());
                                    attempt(address);
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DemoAccount(record: UserRecord, on_pick: EventHandler<String>) -> Element {
    let address = record.email.clone();
    rsx! {
        Button {
            class: "login-demo-account",
            onclick: move |_| on_pick.call(address.clone()),
            span { class: "login-demo-name", "{record.name}" }
            span { class: "login-demo-role", "{record.role}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, UnknownRolePolicy, UserRole};

    fn config(policy: UnknownRolePolicy) -> AppConfig {
        let mut config = AppConfig::default();
        config.session.unknown_role = policy;
        config
    }

    #[test]
    fn known_account_signs_in() {
        let accounts = fixtures::demo_accounts();
        let reject = config(UnknownRolePolicy::Reject);
        let user = sign_in(&accounts, " Teacher@Campus.edu ", &reject).unwrap();
        assert_eq!(user.role, UserRole::Teacher);
    }

    #[test]
    fn unknown_email_is_reported() {
        let accounts = fixtures::demo_accounts();
        let reject = config(UnknownRolePolicy::Reject);
        let err = sign_in(&accounts, "nobody@campus.edu", &reject).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::UnknownAccount);
    }

    #[test]
    fn guest_role_follows_policy() {
        let accounts = fixtures::demo_accounts();
        let rejected = sign_in(&accounts, "guest@campus.edu", &config(UnknownRolePolicy::Reject));
        assert_eq!(rejected.unwrap_err().kind, AppErrorKind::InvalidRole);

        let downgrade = config(UnknownRolePolicy::Student);
        let admitted = sign_in(&accounts, "guest@campus.edu", &downgrade).unwrap();
        assert_eq!(admitted.role, UserRole::Student);
    }
}
