pub mod academic;
pub mod admin;

use dioxus::prelude::*;
use shared_types::DashboardVariant;

use crate::auth::use_current_user;

/// Role-adaptive dashboard. The guard only decides that `/` is reachable;
/// the variant is picked here from the session role.
#[component]
pub fn DashboardPage() -> Element {
    let Some(user) = use_current_user() else {
        return rsx! {};
    };

    match DashboardVariant::for_role(user.role) {
        DashboardVariant::Admin => rsx! { admin::AdminDashboard {} },
        variant => rsx! { academic::AcademicDashboard { user: user, variant: variant } },
    }
}
