//! Seam to the third-party identity provider.
//!
//! The identity SDK owns sign-in, sign-up, MFA enrollment and session
//! management; this crate only ever asks it four questions. The trait keeps
//! the REST client independent of the browser glue: the ui crate supplies a
//! JS-backed implementation on wasm, tests use [`NullIdentity`].
//!
//! Bearer credentials are opaque — they are attached to a header and
//! forgotten, never inspected or persisted here.

/// Ambient identity as exposed by the identity provider SDK.
pub trait IdentityProvider: Clone + 'static {
    /// Has the SDK finished loading? Nothing should be decided before this.
    fn is_loaded(&self) -> bool;

    /// Is there a signed-in user right now?
    fn is_signed_in(&self) -> bool;

    /// Identifier of the signed-in user, if any.
    fn user_id(&self) -> Option<String>;

    /// Fetch a fresh short-lived bearer credential. `None` when signed out
    /// or when the provider fails — the caller sends the request without a
    /// header and lets the server reject it.
    async fn bearer_token(&self) -> Option<String>;
}

/// Identity provider that reports a loaded SDK with nobody signed in.
/// Used on native targets and in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullIdentity;

impl IdentityProvider for NullIdentity {
    fn is_loaded(&self) -> bool {
        true
    }

    fn is_signed_in(&self) -> bool {
        false
    }

    fn user_id(&self) -> Option<String> {
        None
    }

    async fn bearer_token(&self) -> Option<String> {
        None
    }
}
