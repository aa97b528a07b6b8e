//! # Agent session persistence — the legacy JWT auth path
//!
//! Bank agents authenticate against `POST /agents/login` instead of the
//! identity provider, receiving a bearer token that has to survive page
//! reloads. The session is persisted in durable storage under the legacy
//! keys the backend migration still expects:
//!
//! | Key | Payload |
//! |-----|---------|
//! | [`AGENT_TOKEN_KEY`] | raw bearer token |
//! | [`AGENT_USER_KEY`] | JSON-encoded [`AgentSession`] minus the token |
//!
//! The session is cleared only on explicit logout. A corrupted stored
//! payload self-heals: both keys are removed and the user simply has to log
//! in again.

use serde::{Deserialize, Serialize};

use crate::kv::KvStore;

pub const AGENT_TOKEN_KEY: &str = "agent_access_token";
pub const AGENT_USER_KEY: &str = "agent_user_data";

/// A signed-in agent on the legacy auth path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSession {
    pub access_token: String,
    pub user_id: i64,
    pub email: String,
    pub role: String,
}

/// Stored shape of [`AGENT_USER_KEY`]; the token lives under its own key.
#[derive(Debug, Serialize, Deserialize)]
struct StoredAgentUser {
    id: i64,
    email: String,
    role: String,
}

/// Load the persisted agent session, if any.
///
/// Returns `None` when nothing is stored or when the stored user payload no
/// longer parses; in the latter case both keys are removed.
pub fn load_agent_session(kv: &impl KvStore) -> Option<AgentSession> {
    let token = kv.get(AGENT_TOKEN_KEY)?;
    let raw_user = kv.get(AGENT_USER_KEY)?;
    match serde_json::from_str::<StoredAgentUser>(&raw_user) {
        Ok(user) => Some(AgentSession {
            access_token: token,
            user_id: user.id,
            email: user.email,
            role: user.role,
        }),
        Err(err) => {
            tracing::warn!("stored agent session is corrupted, clearing it: {err}");
            clear_agent_session(kv);
            None
        }
    }
}

/// Persist an agent session across reloads.
pub fn save_agent_session(kv: &impl KvStore, session: &AgentSession) {
    let user = StoredAgentUser {
        id: session.user_id,
        email: session.email.clone(),
        role: session.role.clone(),
    };
    // Serializing three plain fields cannot fail.
    let raw_user = serde_json::to_string(&user).unwrap_or_default();
    kv.set(AGENT_TOKEN_KEY, &session.access_token);
    kv.set(AGENT_USER_KEY, &raw_user);
}

/// Remove the persisted session (explicit logout).
pub fn clear_agent_session(kv: &impl KvStore) {
    kv.remove(AGENT_TOKEN_KEY);
    kv.remove(AGENT_USER_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;

    fn session() -> AgentSession {
        AgentSession {
            access_token: "jwt-token".to_string(),
            user_id: 42,
            email: "agent@cih.ma".to_string(),
            role: "agent".to_string(),
        }
    }

    #[test]
    fn session_survives_a_store_round_trip() {
        let kv = MemoryKv::new();
        save_agent_session(&kv, &session());
        assert_eq!(load_agent_session(&kv), Some(session()));
    }

    #[test]
    fn logout_clears_both_keys() {
        let kv = MemoryKv::new();
        save_agent_session(&kv, &session());
        clear_agent_session(&kv);
        assert_eq!(load_agent_session(&kv), None);
        assert_eq!(kv.get(AGENT_TOKEN_KEY), None);
        assert_eq!(kv.get(AGENT_USER_KEY), None);
    }

    #[test]
    fn corrupted_user_payload_self_heals() {
        let kv = MemoryKv::new();
        kv.set(AGENT_TOKEN_KEY, "jwt-token");
        kv.set(AGENT_USER_KEY, "{not json");

        assert_eq!(load_agent_session(&kv), None);
        // Both keys cleaned up, not just the broken one.
        assert_eq!(kv.get(AGENT_TOKEN_KEY), None);
        assert_eq!(kv.get(AGENT_USER_KEY), None);
    }

    #[test]
    fn missing_token_means_no_session() {
        let kv = MemoryKv::new();
        kv.set(AGENT_USER_KEY, r#"{"id":1,"email":"a@b.c","role":"agent"}"#);
        assert_eq!(load_agent_session(&kv), None);
    }
}
