use dioxus::prelude::*;

use ui::{AgentAuthProvider, AuthProvider, NotificationProvider};
use views::{
    AdminDashboard, AgentDashboard, AgentFirstLogin, AgentLogin, Auth, BeneficiarySpace, Dashboard,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/auth")]
    Auth {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/beneficiary")]
    BeneficiarySpace {},
    #[route("/agent/login")]
    AgentLogin {},
    #[route("/agent/first-login")]
    AgentFirstLogin {},
    #[route("/agent/dashboard")]
    AgentDashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            AgentAuthProvider {
                NotificationProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Redirect `/` to the role dispatcher.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
