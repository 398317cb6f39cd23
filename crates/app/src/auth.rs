use dioxus::prelude::*;
use shared_types::{Session, User};

/// Global session state, shared through context.
///
/// Wraps the framework-free [`Session`] in a signal so every component that
/// reads it re-renders on login, logout and theme toggle. The current path
/// is owned by the router, not recorded here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub inner: Signal<Session>,
}

impl SessionState {
    pub fn new(theme_is_dark: bool) -> Self {
        Self {
            inner: Signal::new(Session::new(theme_is_dark)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_authenticated()
    }

    pub fn theme_is_dark(&self) -> bool {
        self.inner.read().theme_is_dark()
    }

    pub fn login(&mut self, user: User) {
        self.inner.write().login(user);
    }

    pub fn logout(&mut self) {
        self.inner.write().logout();
    }

    pub fn toggle_theme(&mut self) {
        self.inner.write().toggle_theme();
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// The logged-in user, if any. Views under the shell can rely on `Some`.
pub fn use_current_user() -> Option<User> {
    let session = use_session();
    let user = session.inner.read().current_user().cloned();
    user
}
