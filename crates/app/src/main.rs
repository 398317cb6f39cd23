use dioxus::prelude::*;
use shared_types::{AppConfig, RouteTable};
use shared_ui::theme::{apply_theme, ThemeMode};

mod auth;
mod components;
mod format_helpers;
mod routes;

use auth::{use_session, SessionState};
use routes::login::Login;
use routes::Route;

/// Portal configuration, embedded at build time.
const PORTAL_CONFIG: &str = include_str!("../../../config.toml");

const PORTAL_CSS: Asset = asset!("/assets/portal.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| AppConfig::load_or_default(PORTAL_CONFIG));
    use_context_provider(|| config);
    use_context_provider(|| config.features);
    use_context_provider(RouteTable::standard);
    use_context_provider(|| SessionState::new(config.session.dark_by_default));

    let session = use_session();

    // Mirror the theme flag onto <html> whenever it flips.
    use_effect(move || {
        apply_theme(ThemeMode::from_dark(session.theme_is_dark()));
    });

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        if session.is_authenticated() {
            Router::<Route> {}
        } else {
            Login {}
        }
    }
}
