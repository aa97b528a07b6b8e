//! Authentication context and hooks.
//!
//! [`AuthProvider`] is the single writer of the shared auth state: it waits
//! for the identity SDK, publishes the identity flags, and runs the role
//! sync for a signed-in user. Everything downstream reads the published
//! [`AuthState`] reactively via [`use_auth`].

use std::time::Duration;

use api::{ApiClient, IdentityProvider};
use dioxus::prelude::*;
use store::{AuthSnapshot, RoleSync};

use crate::clerk::ClerkIdentity;
use crate::spinner::Spinner;

/// The concrete client every screen shares.
pub type Client = ApiClient<ClerkIdentity>;

/// Published authentication state.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    /// Has the identity SDK finished loading?
    pub identity_loaded: bool,
    /// Is a user signed in with the identity provider?
    pub signed_in: bool,
    /// Identity-provider id of the signed-in user.
    pub user_id: Option<String>,
    /// Role / bank / RIB snapshot published by the role synchronizer.
    pub snapshot: AuthSnapshot,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            identity_loaded: false,
            signed_in: false,
            user_id: None,
            snapshot: AuthSnapshot::default(),
        }
    }
}

impl AuthState {
    /// Whether the blocking screen must stay up: identity SDK still
    /// loading, or a signed-in user whose role has not settled — including
    /// a failed sync. Letting children render with `role: None` would send
    /// the dispatcher and the sign-in entry into a redirect loop.
    pub fn blocking(&self) -> bool {
        !self.identity_loaded
            || (self.signed_in && (self.snapshot.loading || self.snapshot.error))
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared REST client.
pub fn use_api() -> Client {
    use_context::<Client>()
}

/// Get the role synchronization cell (single writer behind the signal).
pub fn use_role_sync() -> Signal<RoleSync> {
    use_context::<Signal<RoleSync>>()
}

/// Fetch the profile and publish the resolved role / bank / RIB triple.
///
/// Concurrent calls are safe: each attempt draws a sequence number and only
/// the latest-issued response is published, so a slow fetch can never
/// overwrite fresher data. On failure the snapshot downgrades to
/// `{None, None, None}` with the error flag set.
pub async fn sync_user_role(
    client: &Client,
    mut sync: Signal<RoleSync>,
    mut auth: Signal<AuthState>,
) {
    let seq = {
        let mut cell = sync.write();
        let seq = cell.begin();
        let snapshot = cell.snapshot();
        drop(cell);
        auth.write().snapshot = snapshot;
        seq
    };

    let outcome = api::fetch_profile(client).await;
    if let Err(ref err) = outcome {
        tracing::error!("role sync failed: {err}");
    }

    let mut cell = sync.write();
    if cell.apply(seq, outcome) {
        let snapshot = cell.snapshot();
        drop(cell);
        auth.write().snapshot = snapshot;
    }
}

/// Auth state to publish when the identity provider reports `user_id`.
/// A signed-in user starts in the loading snapshot so guards block until
/// the role sync settles.
fn published_state(user_id: Option<String>) -> AuthState {
    let signed_in = user_id.is_some();
    AuthState {
        identity_loaded: true,
        signed_in,
        user_id,
        snapshot: if signed_in {
            AuthSnapshot::default()
        } else {
            AuthSnapshot::signed_out()
        },
    }
}

/// Provider component that manages authentication state.
/// Wrap the app with this component; it blocks rendering until the identity
/// SDK has loaded and the first role sync has settled.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context_provider(|| ApiClient::new(ClerkIdentity));
    let sync = use_context_provider(|| Signal::new(RoleSync::new()));
    let mut auth = use_context_provider(|| Signal::new(AuthState::default()));

    // Wait for the identity SDK, then watch the signed-in user. The SDK's
    // sign-in dialog completes without a page navigation, so the flags and
    // the role sync have to follow every change, not just the one at mount.
    let _ = use_future(move || {
        let client = client.clone();
        async move {
            let identity = ClerkIdentity;
            while !identity.is_loaded() {
                crate::time::sleep(Duration::from_millis(100)).await;
            }
            let mut published: Option<Option<String>> = None;
            loop {
                let user_id = identity.user_id();
                if published.as_ref() != Some(&user_id) {
                    auth.set(published_state(user_id.clone()));
                    let signed_in = user_id.is_some();
                    published = Some(user_id);
                    if signed_in {
                        sync_user_role(&client, sync, auth).await;
                    }
                }
                crate::time::sleep(Duration::from_millis(250)).await;
            }
        }
    });

    let state = auth();
    if state.identity_loaded && state.signed_in && state.snapshot.error {
        return rsx! { SyncFailed {} };
    }
    if state.blocking() {
        return rsx! { Spinner {} };
    }
    rsx! {
        {children}
    }
}

/// Full-screen stop after a failed role sync. Nothing behind it renders
/// until a retry succeeds, so no screen ever sees a signed-in user without
/// a role.
#[component]
fn SyncFailed() -> Element {
    let client = use_api();
    let sync = use_role_sync();
    let auth = use_auth();

    let retry = move |_| {
        let client = client.clone();
        spawn(async move {
            sync_user_role(&client, sync, auth).await;
        });
    };

    rsx! {
        div {
            class: "h-screen w-full flex flex-col items-center justify-center gap-4 bg-zinc-900",
            p {
                class: "text-sm text-zinc-400",
                "Your profile could not be loaded."
            }
            button {
                class: "rounded-lg bg-emerald-600 px-4 py-2 text-sm font-medium text-white hover:bg-emerald-500",
                onclick: retry,
                "Try again"
            }
        }
    }
}

/// Button that signs the user out of the identity provider and drops the
/// published snapshot back to signed-out.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();
    let mut sync = use_role_sync();

    let onclick = move |_| {
        crate::clerk::sign_out();
        sync.write().reset();
        auth.set(AuthState {
            identity_loaded: true,
            signed_in: false,
            user_id: None,
            snapshot: AuthSnapshot::signed_out(),
        });
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(crate::SIGN_IN_PATH);
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocking_until_identity_loads() {
        let state = AuthState::default();
        assert!(state.blocking());
    }

    #[test]
    fn signed_out_user_is_not_blocked() {
        let state = AuthState {
            identity_loaded: true,
            signed_in: false,
            user_id: None,
            snapshot: AuthSnapshot::signed_out(),
        };
        assert!(!state.blocking());
    }

    #[test]
    fn signed_in_user_blocks_while_role_syncs() {
        let state = AuthState {
            identity_loaded: true,
            signed_in: true,
            user_id: Some("user_1".to_string()),
            snapshot: AuthSnapshot::default(),
        };
        assert!(state.blocking());
    }

    #[test]
    fn failed_sync_keeps_the_blocking_screen_up() {
        // An unreachable backend publishes the error snapshot; children must
        // not render with a signed-in user and no role, or the dispatcher
        // and the sign-in entry redirect each other forever.
        let mut sync = RoleSync::new();
        let seq = sync.begin();
        sync.apply(seq, Err::<store::ProfileRecord, &str>("connection refused"));

        let snapshot = sync.snapshot();
        assert!(!snapshot.loading);
        assert!(snapshot.error);

        let state = AuthState {
            identity_loaded: true,
            signed_in: true,
            user_id: Some("user_1".to_string()),
            snapshot,
        };
        assert!(state.blocking());
    }

    #[test]
    fn watcher_publishes_loading_state_for_a_fresh_sign_in() {
        // Signing in through the SDK dialog changes the user without a page
        // navigation; the published state must drop back to loading so the
        // new user's sync blocks until it settles.
        let state = published_state(Some("user_2".to_string()));
        assert!(state.identity_loaded);
        assert!(state.signed_in);
        assert_eq!(state.user_id.as_deref(), Some("user_2"));
        assert!(state.snapshot.loading);

        let state = published_state(None);
        assert!(state.identity_loaded);
        assert!(!state.signed_in);
        assert!(!state.snapshot.loading);
        assert!(!state.blocking());
    }
}
