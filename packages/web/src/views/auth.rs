//! Sign-in entry point for the hosted identity provider.

use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn Auth() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in: straight to the role dispatcher.
    if auth().identity_loaded && auth().signed_in {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center bg-zinc-900 p-8",
            h1 {
                class: "mb-2 text-2xl font-bold text-white",
                "FraudDetect"
            }
            p {
                class: "mb-8 text-sm text-zinc-400",
                "Check fraud detection platform"
            }
            button {
                class: "w-full max-w-xs rounded-lg bg-emerald-600 px-5 py-2.5 font-medium text-white hover:bg-emerald-500",
                onclick: move |_| ui::open_sign_in(),
                "Sign in"
            }
            Link {
                class: "mt-6 text-sm text-zinc-400 hover:text-white",
                to: Route::AgentLogin {},
                "Bank agent? Sign in here"
            }
        }
    }
}
