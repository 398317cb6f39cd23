//! Session state: the current user, the theme flag and the current path.
//!
//! One `Session` is owned by the top-level component and passed down as
//! context. The shell renders from a single [`ShellFrame`] so the guard,
//! the sidebar and the active view all see the same snapshot.

use crate::menu::{build_menu, MenuGroup};
use crate::models::{User, UserRole};
use crate::routing::{Resolution, RouteTable, DEFAULT_PATH};

const NO_MENU: &[MenuGroup] = &[];

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    current_user: Option<User>,
    theme_is_dark: bool,
    current_path: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Session {
    /// Empty session, as created at application start.
    pub fn new(theme_is_dark: bool) -> Self {
        Self {
            current_user: None,
            theme_is_dark,
            current_path: DEFAULT_PATH.to_string(),
        }
    }

    /// Install `user` as the current user. The core does not validate
    /// credentials; whatever the login collaborator supplies is trusted.
    pub fn login(&mut self, user: User) {
        tracing::info!(user_id = %user.id, role = %user.role, "session opened");
        self.current_user = Some(user);
    }

    /// Clear the current user and return navigation to the default route.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::info!(user_id = %user.id, "session closed");
        }
        self.current_path = DEFAULT_PATH.to_string();
    }

    /// Flip the theme flag. Orthogonal to authorization.
    pub fn toggle_theme(&mut self) {
        self.theme_is_dark = !self.theme_is_dark;
        tracing::debug!(dark = self.theme_is_dark, "theme toggled");
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.current_user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn theme_is_dark(&self) -> bool {
        self.theme_is_dark
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Guard a navigation to `path` and record where it lands.
    ///
    /// Redirects are followed, so the recorded path is always reachable for
    /// the current role. Without a session the path is left untouched and
    /// the login view is returned.
    pub fn navigate(&mut self, table: &RouteTable, path: &str) -> Resolution {
        if self.current_user.is_none() {
            return Resolution::Login;
        }
        let (landed, resolution) = table.settle(path, self.current_user.as_ref());
        self.current_path = landed.to_string();
        resolution
    }

    /// Snapshot for one render pass at the current path.
    pub fn frame(&self, table: &RouteTable) -> ShellFrame<'_> {
        self.frame_at(table, &self.current_path)
    }

    /// Snapshot for one render pass at `path`.
    pub fn frame_at(&self, table: &RouteTable, path: &str) -> ShellFrame<'_> {
        let user = self.current_user.as_ref();
        ShellFrame {
            user,
            resolution: table.resolve(path, user),
            menu: user.map_or(NO_MENU, |u| build_menu(u.role)),
            theme_is_dark: self.theme_is_dark,
        }
    }
}

/// Everything the shell needs for one render, read from one session borrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellFrame<'a> {
    pub user: Option<&'a User>,
    pub resolution: Resolution,
    /// Empty when no one is logged in.
    pub menu: &'static [MenuGroup],
    pub theme_is_dark: bool,
}
