//! Profile and role models shared across the workspace.
//!
//! [`ProfileRecord`] mirrors the payload of `GET /users/me` on the backend.
//! The `bank_id` it carries is a hint only: for beneficiaries the RIB is the
//! authoritative source of bank affiliation (see [`crate::banks`]), so the
//! record is always passed through [`ProfileRecord::resolved_bank_id`] before
//! being published.

use serde::{Deserialize, Serialize};

use crate::banks::bank_id_from_rib;

/// Role of a signed-in user, as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
    Beneficiary,
}

impl Role {
    /// Wire name as it appears in backend payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
            Role::Beneficiary => "beneficiary",
        }
    }
}

/// Server-resolved profile from `GET /users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub role: Role,
    #[serde(default)]
    pub bank_id: Option<i32>,
    #[serde(default)]
    pub rib: Option<String>,
}

impl ProfileRecord {
    /// Effective bank id: the RIB's leading bank code wins over the stored
    /// `bank_id`; an unrecognized code (or no RIB at all) falls back to the
    /// server-provided value, which may be absent.
    pub fn resolved_bank_id(&self) -> Option<i32> {
        self.rib
            .as_deref()
            .and_then(bank_id_from_rib)
            .or(self.bank_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rib_overrides_server_bank_id() {
        let record = ProfileRecord {
            role: Role::Beneficiary,
            bank_id: Some(0),
            rib: Some("2301234567890123456789".to_string()),
        };
        assert_eq!(record.resolved_bank_id(), Some(17));
    }

    #[test]
    fn unrecognized_rib_keeps_server_bank_id() {
        let record = ProfileRecord {
            role: Role::Beneficiary,
            bank_id: Some(19),
            rib: Some("9991234567890123456789".to_string()),
        };
        assert_eq!(record.resolved_bank_id(), Some(19));
    }

    #[test]
    fn missing_rib_keeps_server_bank_id() {
        let record = ProfileRecord {
            role: Role::Agent,
            bank_id: Some(18),
            rib: None,
        };
        assert_eq!(record.resolved_bank_id(), Some(18));
    }

    #[test]
    fn role_wire_names_round_trip() {
        for role in [Role::Admin, Role::Agent, Role::Beneficiary] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }
}
