//! Forced password change on an agent's first connection.
//!
//! Reachable only mid-flow: the login screen parks the provisioned
//! credentials in the in-memory pending-reset signal and navigates here. A
//! direct visit (or a page reload, which clears that signal) goes back to
//! the login form.

use dioxus::prelude::*;
use ui::use_pending_reset;

use crate::Route;

#[component]
pub fn AgentFirstLogin() -> Element {
    let client = ui::use_api();
    let mut pending = use_pending_reset();
    let nav = use_navigator();

    let mut new_password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let Some(reset) = pending() else {
        nav.replace(Route::AgentLogin {});
        return rsx! {};
    };

    let submit = move |event: FormEvent| {
        event.prevent_default();
        if busy() {
            return;
        }
        if new_password.peek().as_str() != confirm.peek().as_str() {
            error.set(Some("Passwords do not match.".to_string()));
            return;
        }
        let Some(reset) = pending.peek().clone() else {
            return;
        };
        let client = client.clone();
        busy.set(true);
        error.set(None);
        spawn(async move {
            let chosen = new_password.peek().clone();
            match api::reset_agent_password(&client, &reset.email, &reset.password, &chosen).await {
                Ok(_) => {
                    pending.set(None);
                    nav.replace(Route::AgentLogin {});
                }
                Err(err) => {
                    tracing::warn!("agent password change refused: {err}");
                    error.set(Some(err.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-zinc-900 p-8",
            form {
                class: "w-full max-w-sm rounded-xl bg-zinc-800 p-6",
                onsubmit: submit,
                h1 { class: "mb-2 text-xl font-semibold text-white", "Choose a new password" }
                p {
                    class: "mb-6 text-sm text-zinc-400",
                    "First connection for {reset.email}. Pick a password to replace the provisioned one."
                }
                label {
                    class: "mb-1 block text-sm text-zinc-400",
                    r#for: "new-password",
                    "New password"
                }
                input {
                    id: "new-password",
                    class: "mb-4 w-full rounded-lg bg-zinc-900 px-3 py-2 text-white",
                    r#type: "password",
                    required: true,
                    minlength: 8,
                    value: "{new_password}",
                    oninput: move |e| new_password.set(e.value()),
                }
                label {
                    class: "mb-1 block text-sm text-zinc-400",
                    r#for: "confirm-password",
                    "Confirm password"
                }
                input {
                    id: "confirm-password",
                    class: "mb-4 w-full rounded-lg bg-zinc-900 px-3 py-2 text-white",
                    r#type: "password",
                    required: true,
                    value: "{confirm}",
                    oninput: move |e| confirm.set(e.value()),
                }
                if let Some(message) = error() {
                    p { class: "mb-4 text-sm text-red-400", "{message}" }
                }
                button {
                    class: "w-full rounded-lg bg-emerald-600 px-4 py-2 font-medium text-white hover:bg-emerald-500 disabled:opacity-50",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Saving…" } else { "Change password" }
                }
            }
        }
    }
}
