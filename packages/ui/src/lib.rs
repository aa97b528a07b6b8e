//! # Shared UI for the check-fraud platform
//!
//! Providers, hooks, and components shared by every rendered surface:
//!
//! | Module | Provides |
//! |---|---|
//! | [`auth`] | Identity-provider session, role sync, [`AuthProvider`] |
//! | [`agent_auth`] | Legacy agent JWT session, [`AgentAuthProvider`] |
//! | [`channel`] | Realtime websocket channel, [`NotificationProvider`] |
//! | [`toast`] | Transient toast stack rendered by the channel |
//! | [`guard`] | Role-based route guards |
//! | [`theme`] | Per-bank theming |
//!
//! Providers nest `AuthProvider > AgentAuthProvider > NotificationProvider`,
//! outermost first: the agent provider installs its token on the client the
//! auth provider owns, and the channel reads the auth state both publish.

pub use dioxus_free_icons::Icon;

pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod agent_auth;
mod auth;
mod channel;
mod clerk;
mod guard;
mod spinner;
mod theme;
mod time;
mod toast;

pub use agent_auth::{
    agent_logout, complete_agent_login, use_agent_auth, use_pending_reset, AgentAuthProvider,
    AgentAuthState, PendingReset,
};
pub use auth::{
    sync_user_role, use_api, use_auth, use_role_sync, AuthProvider, AuthState, Client,
    SignOutButton,
};
pub use channel::{
    backoff_delay, use_channel_state, ChannelState, NotificationProvider, MAX_RECONNECT_ATTEMPTS,
};
pub use clerk::{open_sign_in, ClerkIdentity};
pub use guard::{agent_guard_decision, guard_decision, AgentGuard, GuardDecision, RequireRole};
pub use spinner::Spinner;
pub use theme::{use_bank_theme, BankBadge};
pub use toast::{toast_variant, use_toasts, Toast, ToastVariant, Toaster, Toasts, TOAST_TTL_MS};

/// Where signed-out users of the identity-provider path land.
pub const SIGN_IN_PATH: &str = "/auth";

/// Where signed-out bank agents land.
pub const AGENT_SIGN_IN_PATH: &str = "/agent/login";
