//! Route guards for role-restricted screens.
//!
//! Pure decision functions ([`guard_decision`], [`agent_guard_decision`])
//! drive the two gate components. A guard is exactly that — a gate: it never
//! retries, and a role mismatch simply redirects. Re-evaluation happens
//! because the components read reactive state.

use dioxus::prelude::*;
use store::Role;

use crate::agent_auth::use_agent_auth;
use crate::auth::use_auth;
use crate::spinner::Spinner;

/// What a guard does with the current navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Identity or role state still settling: block with a spinner.
    Loading,
    /// Nobody signed in: go to the sign-in entry point.
    RedirectSignIn,
    /// Signed in but not allowed here: go to the neutral home route.
    RedirectHome,
    /// Render the protected children.
    Allow,
}

/// Gate for identity-provider roles.
pub fn guard_decision(
    identity_loaded: bool,
    signed_in: bool,
    role_loading: bool,
    role: Option<Role>,
    required: Role,
) -> GuardDecision {
    if !identity_loaded || role_loading {
        return GuardDecision::Loading;
    }
    if !signed_in {
        return GuardDecision::RedirectSignIn;
    }
    if role == Some(required) {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectHome
    }
}

/// Gate for the legacy agent path. A wrong or missing role forces a fresh
/// agent login rather than redirecting home.
pub fn agent_guard_decision(loaded: bool, session_role: Option<&str>) -> GuardDecision {
    if !loaded {
        return GuardDecision::Loading;
    }
    match session_role {
        Some("agent") => GuardDecision::Allow,
        Some(_) | None => GuardDecision::RedirectSignIn,
    }
}

fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}

/// Renders `children` only for a signed-in user with `required` role.
#[component]
pub fn RequireRole(required: Role, children: Element) -> Element {
    let auth = use_auth();
    let state = auth();

    match guard_decision(
        state.identity_loaded,
        state.signed_in,
        state.snapshot.loading,
        state.snapshot.role,
        required,
    ) {
        GuardDecision::Loading => rsx! { Spinner {} },
        GuardDecision::RedirectSignIn => {
            redirect(crate::SIGN_IN_PATH);
            rsx! { Spinner {} }
        }
        GuardDecision::RedirectHome => {
            tracing::warn!(
                "access refused: required {:?}, current {:?}",
                required,
                state.snapshot.role
            );
            redirect("/");
            rsx! { Spinner {} }
        }
        GuardDecision::Allow => rsx! {
            {children}
        },
    }
}

/// Renders `children` only for a signed-in agent on the legacy path.
#[component]
pub fn AgentGuard(children: Element) -> Element {
    let agent = use_agent_auth();
    let state = agent();

    match agent_guard_decision(
        state.loaded,
        state.session.as_ref().map(|s| s.role.as_str()),
    ) {
        GuardDecision::Allow => rsx! {
            {children}
        },
        GuardDecision::Loading => rsx! { Spinner {} },
        _ => {
            redirect(crate::AGENT_SIGN_IN_PATH);
            rsx! { Spinner {} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_while_identity_or_role_loads() {
        assert_eq!(
            guard_decision(false, false, false, None, Role::Admin),
            GuardDecision::Loading
        );
        assert_eq!(
            guard_decision(true, true, true, None, Role::Admin),
            GuardDecision::Loading
        );
        // Loading wins even when a (stale) role is still published.
        assert_eq!(
            guard_decision(true, true, true, Some(Role::Admin), Role::Admin),
            GuardDecision::Loading
        );
    }

    #[test]
    fn signed_out_users_go_to_sign_in_regardless_of_role() {
        assert_eq!(
            guard_decision(true, false, false, None, Role::Beneficiary),
            GuardDecision::RedirectSignIn
        );
        assert_eq!(
            guard_decision(true, false, false, Some(Role::Admin), Role::Admin),
            GuardDecision::RedirectSignIn
        );
    }

    #[test]
    fn wrong_role_goes_home() {
        assert_eq!(
            guard_decision(true, true, false, Some(Role::Agent), Role::Admin),
            GuardDecision::RedirectHome
        );
        assert_eq!(
            guard_decision(true, true, false, None, Role::Admin),
            GuardDecision::RedirectHome
        );
    }

    #[test]
    fn matching_role_is_allowed() {
        for role in [Role::Admin, Role::Agent, Role::Beneficiary] {
            assert_eq!(
                guard_decision(true, true, false, Some(role), role),
                GuardDecision::Allow
            );
        }
    }

    #[test]
    fn agent_gate_requires_the_agent_role() {
        assert_eq!(agent_guard_decision(false, None), GuardDecision::Loading);
        assert_eq!(
            agent_guard_decision(true, None),
            GuardDecision::RedirectSignIn
        );
        assert_eq!(
            agent_guard_decision(true, Some("admin")),
            GuardDecision::RedirectSignIn
        );
        assert_eq!(agent_guard_decision(true, Some("agent")), GuardDecision::Allow);
    }
}
