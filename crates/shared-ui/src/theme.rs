use dioxus::prelude::*;

/// Light or dark rendering mode, applied globally to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Label for the toggle control, naming the mode it switches *to*.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark mode",
            ThemeMode::Dark => "Light mode",
        }
    }

    /// Script that mirrors this mode onto `<html>` as the `dark` class.
    fn script(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "document.documentElement.classList.add('dark');",
            ThemeMode::Light => "document.documentElement.classList.remove('dark');",
        }
    }
}

/// Apply `mode` to the document root. Every view picks it up through CSS,
/// no route change required.
pub fn apply_theme(mode: ThemeMode) {
    document::eval(mode.script());
}
