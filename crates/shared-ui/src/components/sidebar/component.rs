use dioxus::prelude::*;

/// Whether the navigation drawer is open. Only matters on narrow viewports;
/// on desktop the sidebar is always shown.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }
}

/// Handle to the drawer state provided by [`SidebarProvider`].
pub fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

/// Provides the drawer state to the sidebar and the topbar trigger.
/// Starts closed so a fresh mobile session lands on the content.
#[component]
pub fn SidebarProvider(children: Element) -> Element {
    let state = use_signal(SidebarState::default);
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "portal-layout",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

/// The navigation column. Tapping the backdrop closes it on mobile.
#[component]
pub fn Sidebar(children: Element) -> Element {
    let mut state = use_sidebar();
    let open = state().open;

    rsx! {
        if open {
            div {
                class: "portal-sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            class: "portal-sidebar",
            "data-state": if open { "open" } else { "closed" },
            {children}
        }
    }
}

/// Logo block at the top of the sidebar.
#[component]
pub fn SidebarBrand(title: String, subtitle: String, icon: Element) -> Element {
    rsx! {
        div { class: "portal-sidebar-brand",
            div { class: "portal-sidebar-logo", {icon} }
            div {
                h1 { class: "portal-sidebar-title", "{title}" }
                p { class: "portal-sidebar-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn SidebarNav(children: Element) -> Element {
    rsx! {
        nav { class: "portal-sidebar-nav", {children} }
    }
}

/// A labelled group of links.
#[component]
pub fn SidebarSection(label: String, children: Element) -> Element {
    rsx! {
        div { class: "portal-sidebar-section",
            p { class: "portal-sidebar-section-label", "{label}" }
            ul { class: "portal-sidebar-menu", {children} }
        }
    }
}

/// One navigation entry. Selecting it closes the drawer before `onselect`
/// runs, so the drawer never stays over the page it just opened.
#[component]
pub fn SidebarLink(
    label: String,
    #[props(default = false)] active: bool,
    icon: Element,
    onselect: EventHandler<()>,
) -> Element {
    let mut state = use_sidebar();

    rsx! {
        li {
            button {
                r#type: "button",
                class: "portal-sidebar-link",
                "data-active": if active { "true" } else { "false" },
                onclick: move |_| {
                    state.set(SidebarState { open: false });
                    onselect.call(());
                },
                span { class: "portal-sidebar-link-icon", {icon} }
                span { "{label}" }
            }
        }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "portal-sidebar-footer", {children} }
    }
}

/// Hamburger button shown in the topbar on narrow viewports.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            r#type: "button",
            class: "portal-sidebar-trigger",
            "aria-label": "Toggle navigation",
            onclick: move |_| {
                let next = state().toggled();
                state.set(next);
            },
            {children}
        }
    }
}

/// Content column beside the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        div { class: "portal-inset", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawer_starts_closed_and_toggles() {
        let state = SidebarState::default();
        assert!(!state.open);
        assert!(state.toggled().open);
        assert!(!state.toggled().toggled().open);
    }
}
