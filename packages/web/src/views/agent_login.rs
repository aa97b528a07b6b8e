//! Agent sign-in form for the legacy credential path.

use dioxus::prelude::*;
use store::AgentSession;
use ui::{complete_agent_login, use_agent_auth, use_api, use_pending_reset, PendingReset};

use crate::Route;

#[component]
pub fn AgentLogin() -> Element {
    let client = use_api();
    let agent = use_agent_auth();
    let mut pending = use_pending_reset();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    // A live session skips the form.
    if agent().loaded && agent().session.is_some() {
        nav.replace(Route::AgentDashboard {});
        return rsx! {};
    }

    let submit = move |event: FormEvent| {
        event.prevent_default();
        if busy() {
            return;
        }
        let client = client.clone();
        busy.set(true);
        error.set(None);
        spawn(async move {
            let entered_email = email.peek().clone();
            let entered_password = password.peek().clone();
            match api::login_agent(&client, &entered_email, &entered_password).await {
                Ok(api::AgentLoginResponse::Success {
                    access_token,
                    user_id,
                    ..
                }) => {
                    complete_agent_login(
                        &client,
                        agent,
                        AgentSession {
                            access_token,
                            user_id,
                            email: entered_email,
                            role: "agent".to_string(),
                        },
                    );
                    nav.replace(Route::AgentDashboard {});
                }
                Ok(api::AgentLoginResponse::ResetRequired { .. }) => {
                    // Carried in memory only, for the next screen.
                    pending.set(Some(PendingReset {
                        email: entered_email,
                        password: entered_password,
                    }));
                    nav.replace(Route::AgentFirstLogin {});
                }
                Err(err) => {
                    tracing::warn!("agent login refused: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-zinc-900 p-8",
            form {
                class: "w-full max-w-sm rounded-xl bg-zinc-800 p-6",
                onsubmit: submit,
                h1 { class: "mb-6 text-xl font-semibold text-white", "Agent sign-in" }
                label {
                    class: "mb-1 block text-sm text-zinc-400",
                    r#for: "email",
                    "Email"
                }
                input {
                    id: "email",
                    class: "mb-4 w-full rounded-lg bg-zinc-900 px-3 py-2 text-white",
                    r#type: "email",
                    required: true,
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                label {
                    class: "mb-1 block text-sm text-zinc-400",
                    r#for: "password",
                    "Password"
                }
                input {
                    id: "password",
                    class: "mb-4 w-full rounded-lg bg-zinc-900 px-3 py-2 text-white",
                    r#type: "password",
                    required: true,
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                if let Some(message) = error() {
                    p { class: "mb-4 text-sm text-red-400", "{message}" }
                }
                button {
                    class: "w-full rounded-lg bg-emerald-600 px-4 py-2 font-medium text-white hover:bg-emerald-500 disabled:opacity-50",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in…" } else { "Sign in" }
                }
            }
        }
    }
}
