//! Agent authentication context — the legacy JWT path.
//!
//! Runs alongside the identity-provider path: admins and beneficiaries sign
//! in through the identity SDK, bank agents through `POST /agents/login`.
//! The session is persisted in durable storage and restored on mount; the
//! bearer token is pushed into the shared [`Client`] so the injector can
//! attach it to `/agents/*` requests.
//!
//! The forced first-password-change flow keeps the provisional credentials
//! in [`PendingReset`], an in-memory context signal scoped to the single
//! navigation hop from the login screen to the password-change screen. They
//! never touch durable storage.

use dioxus::prelude::*;
use store::{AgentSession, KvStore};

use crate::auth::{use_api, Client};

/// State of the legacy agent session.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentAuthState {
    pub session: Option<AgentSession>,
    /// Whether durable storage has been consulted yet.
    pub loaded: bool,
}

/// Provisional credentials for the forced password change. In memory only.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReset {
    pub email: String,
    pub password: String,
}

fn agent_kv() -> impl KvStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageKv::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryKv::new()
    }
}

/// Get the agent session state.
pub fn use_agent_auth() -> Signal<AgentAuthState> {
    use_context::<Signal<AgentAuthState>>()
}

/// Get the pending forced-reset credentials, if the user is mid-flow.
pub fn use_pending_reset() -> Signal<Option<PendingReset>> {
    use_context::<Signal<Option<PendingReset>>>()
}

/// Provider component for the agent session. Restores a persisted session
/// before the first render and installs its token on the shared client.
#[component]
pub fn AgentAuthProvider(children: Element) -> Element {
    let client = use_api();

    let state = use_signal(move || {
        let session = store::load_agent_session(&agent_kv());
        if let Some(session) = &session {
            client.set_agent_token(Some(session.access_token.clone()));
        }
        AgentAuthState {
            session,
            loaded: true,
        }
    });

    use_context_provider(|| state);
    use_context_provider(|| Signal::new(Option::<PendingReset>::None));

    rsx! {
        {children}
    }
}

/// Persist a fresh agent session and install its token on the client.
pub fn complete_agent_login(client: &Client, mut state: Signal<AgentAuthState>, session: AgentSession) {
    store::save_agent_session(&agent_kv(), &session);
    client.set_agent_token(Some(session.access_token.clone()));
    state.set(AgentAuthState {
        session: Some(session),
        loaded: true,
    });
}

/// Explicit agent logout: clears storage, the injector token, and the state.
pub fn agent_logout(client: &Client, mut state: Signal<AgentAuthState>) {
    store::clear_agent_session(&agent_kv());
    client.set_agent_token(None);
    state.set(AgentAuthState {
        session: None,
        loaded: true,
    });
}
