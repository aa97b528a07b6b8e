//! Administration console, admin-only.

use dioxus::prelude::*;
use store::Role;
use ui::{use_channel_state, ChannelState, RequireRole, SignOutButton};

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        RequireRole {
            required: Role::Admin,
            AdminInner {}
        }
    }
}

#[component]
fn AdminInner() -> Element {
    let channel = use_channel_state();
    let live = channel() == ChannelState::Open;

    rsx! {
        div {
            class: "min-h-screen bg-zinc-900 text-white",
            header {
                class: "flex items-center justify-between border-b border-zinc-800 px-6 py-4",
                h1 { class: "text-lg font-semibold", "Administration" }
                div {
                    class: "flex items-center gap-4",
                    span {
                        class: if live { "flex items-center gap-2 text-sm text-emerald-400" } else { "flex items-center gap-2 text-sm text-zinc-500" },
                        span {
                            class: if live { "size-2 rounded-full bg-emerald-400" } else { "size-2 rounded-full bg-zinc-500" },
                        }
                        if live { "Live" } else { "Offline" }
                    }
                    SignOutButton {
                        class: "rounded-lg bg-zinc-800 px-4 py-2 text-sm hover:bg-zinc-700",
                    }
                }
            }
            main {
                class: "p-6",
                p {
                    class: "text-zinc-400",
                    "Submitted checks across all banks appear here as they arrive."
                }
            }
        }
    }
}
