//! Agent work queue, behind the agent session gate.

use dioxus::prelude::*;
use ui::{agent_logout, use_agent_auth, use_api, AgentGuard};

use crate::Route;

#[component]
pub fn AgentDashboard() -> Element {
    rsx! {
        AgentGuard {
            AgentQueue {}
        }
    }
}

#[component]
fn AgentQueue() -> Element {
    let client = use_api();
    let agent = use_agent_auth();
    let nav = use_navigator();

    let queue = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { api::fetch_agent_cheques(&client).await }
        }
    });

    let logout = move |_| {
        agent_logout(&client, agent);
        nav.replace(Route::AgentLogin {});
    };

    rsx! {
        div {
            class: "min-h-screen bg-zinc-900 text-white",
            header {
                class: "flex items-center justify-between border-b border-zinc-800 px-6 py-4",
                h1 { class: "text-lg font-semibold", "Check queue" }
                button {
                    class: "rounded-lg bg-zinc-800 px-4 py-2 text-sm hover:bg-zinc-700",
                    onclick: logout,
                    "Sign out"
                }
            }
            main {
                class: "p-6",
                match &*queue.read() {
                    Some(Ok(cheques)) => rsx! {
                        p {
                            class: "mb-6 text-sm text-zinc-400",
                            "{cheques.agent_name} — {cheques.agent_email}"
                        }
                        ChequeList {
                            heading: "Drawn on your bank",
                            items: cheques.cheques_meme_banque.clone(),
                        }
                        ChequeList {
                            heading: "Drawn on another bank",
                            items: cheques.cheques_autre_banque.clone(),
                        }
                    },
                    Some(Err(err)) => rsx! {
                        p { class: "text-sm text-red-400", "Could not load the queue: {err}" }
                    },
                    None => rsx! {
                        p { class: "text-sm text-zinc-500", "Loading…" }
                    },
                }
            }
        }
    }
}

#[component]
fn ChequeList(heading: &'static str, items: Vec<api::ChequeSummary>) -> Element {
    rsx! {
        section {
            class: "mb-8",
            h2 { class: "mb-3 text-sm font-semibold uppercase tracking-wide text-zinc-500", "{heading}" }
            if items.is_empty() {
                p { class: "text-sm text-zinc-600", "Nothing pending." }
            } else {
                ul {
                    class: "grid gap-3 sm:grid-cols-2 lg:grid-cols-3",
                    for cheque in items {
                        li {
                            key: "{cheque.id}",
                            class: "rounded-lg bg-zinc-800 p-3",
                            img {
                                class: "mb-2 w-full rounded object-cover",
                                src: "{cheque.image_url}",
                                alt: "Check {cheque.id}",
                            }
                            if let Some(date) = &cheque.date_depot {
                                p { class: "text-xs text-zinc-400", "Deposited {date}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
