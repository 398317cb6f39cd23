pub mod admin;
pub mod courses;
pub mod dashboard;
pub mod excuse_letters;
pub mod forum;
pub mod login;
pub mod lost_found;
pub mod map;
pub mod profile;

use crate::auth::use_session;
use crate::components::assistant::AssistantOverlay;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdFileText, LdGraduationCap, LdLayoutDashboard, LdLogOut, LdMap,
    LdMenu, LdMessageSquare, LdSearch, LdSettings, LdTrendingUp, LdUser, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::fixtures;
use shared_types::{
    portal_label, unread_count, FeatureFlags, MenuIcon, Resolution, RouteTable, ViewId,
    DEFAULT_PATH,
};
use shared_ui::theme::ThemeMode;
use shared_ui::{
    Badge, BadgeTone, LabeledSwitch, Sidebar, SidebarBrand, SidebarFooter, SidebarInset,
    SidebarLink, SidebarNav, SidebarProvider, SidebarSection, SidebarTrigger, UserAvatar,
};

/// Application routes. Every page sits inside [`AppShell`], which guards
/// it against the role-scoped [`RouteTable`].
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
    #[route("/")]
    Dashboard {},
    #[route("/profile")]
    Profile {},
    #[route("/courses")]
    Courses {},
    #[route("/map")]
    CampusMap {},
    #[route("/forum")]
    Forum {},
    #[route("/lost-found")]
    LostFound {},
    #[route("/excuse-letters")]
    ExcuseLetters {},
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/admin/reports")]
    AdminReports {},
    #[route("/admin/settings")]
    AdminSettings {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
    #[end_layout]
}

impl Route {
    /// Parse a table path into a route. Unknown paths land on the
    /// catch-all, so this never fails in practice.
    pub fn from_path(path: &str) -> Self {
        path.parse().unwrap_or(Route::Dashboard {})
    }

    /// The view this route mounts. `None` for the catch-all.
    pub fn view(&self) -> Option<ViewId> {
        match self {
            Route::Dashboard {} => Some(ViewId::Dashboard),
            Route::Profile {} => Some(ViewId::Profile),
            Route::Courses {} => Some(ViewId::Courses),
            Route::CampusMap {} => Some(ViewId::Map),
            Route::Forum {} => Some(ViewId::Forum),
            Route::LostFound {} => Some(ViewId::LostFound),
            Route::ExcuseLetters {} => Some(ViewId::ExcuseLetters),
            Route::AdminUsers {} => Some(ViewId::AdminUsers),
            Route::AdminReports {} => Some(ViewId::AdminReports),
            Route::AdminSettings {} => Some(ViewId::AdminSettings),
            Route::NotFound { .. } => None,
        }
    }
}

fn menu_icon(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::Dashboard => {
            rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 20, height: 20 } }
        }
        MenuIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
        MenuIcon::Courses => {
            rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 } }
        }
        MenuIcon::Forum | MenuIcon::Community => {
            rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 20, height: 20 } }
        }
        MenuIcon::Reports => {
            rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 20, height: 20 } }
        }
        MenuIcon::Settings => {
            rsx! { Icon::<LdSettings> { icon: LdSettings, width: 20, height: 20 } }
        }
        MenuIcon::Letters => {
            rsx! { Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 } }
        }
        MenuIcon::LostFound => rsx! { Icon::<LdSearch> { icon: LdSearch, width: 20, height: 20 } },
        MenuIcon::Map => rsx! { Icon::<LdMap> { icon: LdMap, width: 20, height: 20 } },
        MenuIcon::Profile => rsx! { Icon::<LdUser> { icon: LdUser, width: 20, height: 20 } },
    }
}

/// Authenticated shell: guard, sidebar, topbar, page outlet and overlays.
///
/// The guard decision, the sidebar menu and the header user all come from
/// one [`shared_types::ShellFrame`] read from the session in a single borrow.
/// The router owns the current path; a redirect is rendered here and the
/// outlet is only mounted for a permitted view.
#[component]
fn AppShell() -> Element {
    let route: Route = use_route();
    let table: RouteTable = use_context();
    let flags: FeatureFlags = use_context();
    let mut session = use_session();
    let path = route.to_string();

    let (user, resolution, menu, dark) = {
        let current = session.inner.read();
        let frame = current.frame_at(&table, &path);
        (
            frame.user.cloned(),
            frame.resolution,
            frame.menu,
            frame.theme_is_dark,
        )
    };

    let Some(user) = user else {
        return rsx! {};
    };

    let content = match resolution {
        Resolution::View(_) => rsx! { Outlet::<Route> {} },
        Resolution::Redirect { to, .. } => {
            navigator().replace(Route::from_path(to));
            rsx! {
                div { class: "shell-redirect",
                    p { "Redirecting..." }
                }
            }
        }
        Resolution::Login => rsx! {},
    };

    let page_title = resolution.view().map(|v| v.title()).unwrap_or_default();
    let theme = ThemeMode::from_dark(dark);
    let role_label = user.role.display_name();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                SidebarBrand {
                    title: "CampusHub",
                    subtitle: portal_label(user.role).to_string(),
                    icon: rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 24, height: 24 } },
                }
                SidebarNav {
                    for group in menu.iter() {
                        SidebarSection { key: "{group.label}", label: group.label.to_string(),
                            for entry in group.entries.iter() {
                                SidebarLink {
                                    key: "{entry.path}",
                                    label: entry.label.to_string(),
                                    active: entry.path == path,
                                    icon: menu_icon(entry.icon),
                                    onselect: move |_| {
                                        navigator().push(Route::from_path(entry.path));
                                    },
                                }
                            }
                        }
                    }
                }
                SidebarFooter {
                    button {
                        r#type: "button",
                        class: "shell-signout",
                        onclick: move |_| {
                            navigator().replace(Route::from_path(DEFAULT_PATH));
                            session.logout();
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 20, height: 20 }
                        span { "Sign Out" }
                    }
                }
            }

            SidebarInset {
                header { class: "shell-topbar",
                    div { class: "shell-topbar-left",
                        SidebarTrigger {
                            Icon::<LdMenu> { icon: LdMenu, width: 22, height: 22 }
                        }
                        span { class: "shell-title", "{page_title}" }
                    }

                    div { class: "shell-topbar-right",
                        LabeledSwitch {
                            label: theme.toggle_label().to_string(),
                            checked: dark,
                            on_change: move |_| session.toggle_theme(),
                        }

                        if flags.notifications {
                            NotificationBell {}
                        }

                        div { class: "shell-user",
                            div { class: "shell-user-text",
                                p { class: "shell-user-name", "{user.name}" }
                                p { class: "shell-user-role", "{role_label}" }
                            }
                            UserAvatar {
                                initials: user.initials(),
                                src: user.avatar_url.clone(),
                            }
                        }
                    }
                }

                main { class: "shell-main",
                    div { class: "shell-page", {content} }
                }

                if flags.assistant {
                    AssistantOverlay {}
                }
            }
        }
    }
}

/// Topbar bell with the unread count and a dropdown list.
#[component]
fn NotificationBell() -> Element {
    let mut open = use_signal(|| false);
    let notifications = use_hook(fixtures::notifications);
    let unread = unread_count(&notifications);

    rsx! {
        div { class: "shell-bell",
            button {
                r#type: "button",
                class: "shell-bell-button",
                "aria-label": "Notifications",
                onclick: move |_| open.set(!open()),
                Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                if unread > 0 {
                    span { class: "shell-bell-count", "{unread}" }
                }
            }
            if open() {
                div { class: "shell-bell-panel",
                    div { class: "shell-bell-header",
                        h3 { "Notifications" }
                        Badge { tone: BadgeTone::Info, "{unread} new" }
                    }
                    for n in notifications.iter() {
                        div {
                            key: "{n.id}",
                            class: "shell-bell-item",
                            "data-unread": if n.read { "false" } else { "true" },
                            p { class: "shell-bell-item-title", "{n.title}" }
                            p { class: "shell-bell-item-message", "{n.message}" }
                            p { class: "shell-bell-item-time", "{n.timestamp}" }
                        }
                    }
                }
            }
        }
    }
}

// Route components

#[component]
fn Dashboard() -> Element {
    dashboard::DashboardPage()
}

#[component]
fn Profile() -> Element {
    profile::ProfilePage()
}

#[component]
fn Courses() -> Element {
    courses::CoursesPage()
}

#[component]
fn CampusMap() -> Element {
    map::CampusMapPage()
}

#[component]
fn Forum() -> Element {
    forum::ForumPage()
}

#[component]
fn LostFound() -> Element {
    lost_found::LostFoundPage()
}

#[component]
fn ExcuseLetters() -> Element {
    excuse_letters::ExcuseLettersPage()
}

#[component]
fn AdminUsers() -> Element {
    admin::AdminUsersPage()
}

#[component]
fn AdminReports() -> Element {
    admin::AdminReportsPage()
}

#[component]
fn AdminSettings() -> Element {
    admin::AdminSettingsPage()
}

/// Never mounted: the shell redirects unknown paths before the outlet.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! {}
}
