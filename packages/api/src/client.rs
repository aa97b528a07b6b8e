//! # Token-injecting REST client
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] and attaches a bearer credential
//! to every outgoing request:
//!
//! - requests under the legacy [`AGENT_PATH_PREFIX`] get the statically held
//!   agent token (set by the agent login flow, cleared on logout);
//! - everything else gets a fresh credential from the identity provider.
//!
//! If no credential can be produced the request goes out without an
//! `Authorization` header and the server answers 401 — the injector never
//! retries and never caches a failure.
//!
//! The base URL comes from `FRAUDDETECT_API_BASE` at build time, defaulting
//! to the local dev backend. The websocket base is derived from it.

use std::sync::{Arc, RwLock};

use reqwest::Method;
use serde::Serialize;

use crate::error::ApiError;
use crate::identity::IdentityProvider;

/// Path prefix of the legacy agent endpoints, authenticated with the agent
/// JWT instead of the identity provider.
pub const AGENT_PATH_PREFIX: &str = "/agents";

/// Base URL of the REST backend.
pub fn api_base() -> &'static str {
    option_env!("FRAUDDETECT_API_BASE").unwrap_or("http://localhost:8000")
}

/// Base URL of the realtime channel, derived from [`api_base`]
/// (`http` → `ws`, `https` → `wss`).
pub fn ws_base() -> String {
    api_base().replacen("http", "ws", 1)
}

/// REST client with bearer injection.
#[derive(Clone)]
pub struct ApiClient<I> {
    http: reqwest::Client,
    base: String,
    identity: I,
    agent_token: Arc<RwLock<Option<String>>>,
}

impl<I: IdentityProvider> ApiClient<I> {
    pub fn new(identity: I) -> Self {
        Self::with_base(identity, api_base())
    }

    pub fn with_base(identity: I, base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
            identity,
            agent_token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn identity(&self) -> &I {
        &self.identity
    }

    /// Install or clear the agent bearer token used for the legacy path.
    /// Shared across clones of this client.
    pub fn set_agent_token(&self, token: Option<String>) {
        *self.agent_token.write().unwrap() = token;
    }

    /// Does this path use the statically held agent token rather than the
    /// identity provider?
    pub fn uses_agent_token(path: &str) -> bool {
        path.starts_with(AGENT_PATH_PREFIX)
    }

    /// Credential to attach for `path`, if any can be produced.
    pub async fn bearer_for(&self, path: &str) -> Option<String> {
        if Self::uses_agent_token(path) {
            return self.agent_token.read().unwrap().clone();
        }
        if !self.identity.is_signed_in() {
            return None;
        }
        self.identity.bearer_token().await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<reqwest::Response, ApiError> {
        let bearer = self.bearer_for(path).await;
        tracing::debug!(%method, path, authorized = bearer.is_some(), "dispatching request");
        let mut request = self.http.request(method, format!("{}{}", self.base, path));
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        self.send(Method::GET, path, None::<&()>).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: &(impl Serialize + ?Sized),
    ) -> Result<reqwest::Response, ApiError> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put(
        &self,
        path: &str,
        body: &(impl Serialize + ?Sized),
    ) -> Result<reqwest::Response, ApiError> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        self.send(Method::DELETE, path, None::<&()>).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::NullIdentity;

    /// Identity provider that always hands out the same token.
    #[derive(Clone)]
    struct FixedIdentity(&'static str);

    impl IdentityProvider for FixedIdentity {
        fn is_loaded(&self) -> bool {
            true
        }
        fn is_signed_in(&self) -> bool {
            true
        }
        fn user_id(&self) -> Option<String> {
            Some("user_1".to_string())
        }
        async fn bearer_token(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[test]
    fn agent_prefix_routing() {
        assert!(ApiClient::<NullIdentity>::uses_agent_token("/agents/login"));
        assert!(ApiClient::<NullIdentity>::uses_agent_token(
            "/agents/cheques/me"
        ));
        assert!(!ApiClient::<NullIdentity>::uses_agent_token("/users/me"));
        assert!(!ApiClient::<NullIdentity>::uses_agent_token("/cheques/1"));
    }

    #[tokio::test]
    async fn agent_paths_use_the_static_token() {
        let client = ApiClient::with_base(FixedIdentity("identity-token"), "http://test");
        client.set_agent_token(Some("agent-jwt".to_string()));

        assert_eq!(
            client.bearer_for("/agents/cheques/me").await.as_deref(),
            Some("agent-jwt")
        );
        assert_eq!(
            client.bearer_for("/users/me").await.as_deref(),
            Some("identity-token")
        );
    }

    #[tokio::test]
    async fn missing_credentials_mean_no_header() {
        let client = ApiClient::with_base(NullIdentity, "http://test");
        // Signed out: no identity token, no agent token.
        assert_eq!(client.bearer_for("/users/me").await, None);
        assert_eq!(client.bearer_for("/agents/login").await, None);
    }

    #[tokio::test]
    async fn clearing_the_agent_token_is_shared_across_clones() {
        let client = ApiClient::with_base(NullIdentity, "http://test");
        let clone = client.clone();
        client.set_agent_token(Some("agent-jwt".to_string()));
        assert_eq!(
            clone.bearer_for("/agents/login").await.as_deref(),
            Some("agent-jwt")
        );
        clone.set_agent_token(None);
        assert_eq!(client.bearer_for("/agents/login").await, None);
    }

    #[test]
    fn ws_base_swaps_the_scheme() {
        assert!(ws_base().starts_with("ws"));
    }
}
