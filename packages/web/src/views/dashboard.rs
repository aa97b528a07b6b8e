//! Role dispatcher: sends a freshly signed-in user to their home surface.

use dioxus::prelude::*;
use store::Role;
use ui::{use_auth, Spinner};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();

    if !state.identity_loaded || state.snapshot.loading {
        return rsx! { Spinner {} };
    }
    if !state.signed_in {
        nav.replace(Route::Auth {});
        return rsx! {};
    }

    match state.snapshot.role {
        Some(Role::Admin) => {
            nav.replace(Route::AdminDashboard {});
        }
        Some(Role::Beneficiary) => {
            nav.replace(Route::BeneficiarySpace {});
        }
        Some(Role::Agent) => {
            // Agents belong on the dedicated login path.
            nav.replace(Route::AgentLogin {});
        }
        None => {
            tracing::warn!("signed-in user has no resolvable role");
            nav.replace(Route::Auth {});
        }
    }
    rsx! {}
}
