//! # Legacy agent credential service
//!
//! Bank agents are provisioned by an admin and sign in with email/password
//! against the backend directly, outside the identity provider. Two calls:
//!
//! - `POST /agents/login` — returns either a completed bearer token or a
//!   `reset_required` status forcing a first-connection password change;
//! - `POST /agents/reset-password` — completes that forced change.
//!
//! Whether this path is a transitional migration or permanent is an open
//! question upstream; the client supports both auth paths side by side.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::identity::IdentityProvider;

/// Outcome of `POST /agents/login`, discriminated by `status`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AgentLoginResponse {
    /// Credentials accepted; the token authenticates `/agents/*` calls.
    Success {
        access_token: String,
        user_id: i64,
        #[serde(default)]
        message: Option<String>,
    },
    /// Credentials accepted but the agent must change their provisioned
    /// password before a token is issued.
    ResetRequired {
        #[serde(default)]
        message: Option<String>,
    },
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ResetRequest<'a> {
    email: &'a str,
    old_password: &'a str,
    new_password: &'a str,
}

/// Response of `POST /agents/reset-password`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgentResetResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Authenticate an agent. Invalid credentials surface as
/// [`ApiError::Rejected`] with the backend's `detail` message.
pub async fn login_agent<I: IdentityProvider>(
    client: &ApiClient<I>,
    email: &str,
    password: &str,
) -> Result<AgentLoginResponse, ApiError> {
    let response = client
        .post("/agents/login", &LoginRequest { email, password })
        .await?;
    Ok(response.json().await?)
}

/// Complete the forced first-connection password change.
pub async fn reset_agent_password<I: IdentityProvider>(
    client: &ApiClient<I>,
    email: &str,
    old_password: &str,
    new_password: &str,
) -> Result<AgentResetResponse, ApiError> {
    let response = client
        .post(
            "/agents/reset-password",
            &ResetRequest {
                email,
                old_password,
                new_password,
            },
        )
        .await?;
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_success_parses() {
        let body = r#"{
            "status": "success",
            "message": "Connexion Agent réussie.",
            "access_token": "jwt-token",
            "user_id": 7
        }"#;
        let parsed: AgentLoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed,
            AgentLoginResponse::Success {
                access_token: "jwt-token".to_string(),
                user_id: 7,
                message: Some("Connexion Agent réussie.".to_string()),
            }
        );
    }

    #[test]
    fn login_reset_required_parses() {
        let body = r#"{"status": "reset_required", "message": "Change it."}"#;
        let parsed: AgentLoginResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(parsed, AgentLoginResponse::ResetRequired { .. }));
    }

    #[test]
    fn unknown_status_is_an_error() {
        let body = r#"{"status": "maybe"}"#;
        assert!(serde_json::from_str::<AgentLoginResponse>(body).is_err());
    }
}
