//! Agent work queue: checks awaiting the signed-in agent's bank.

use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::identity::IdentityProvider;

/// A deposited check as listed by `GET /agents/cheques/me`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChequeSummary {
    pub id: i64,
    pub image_url: String,
    #[serde(default)]
    pub date_depot: Option<String>,
    pub beneficiaire_id: i64,
    pub banque_cible_id: i32,
}

/// The agent's work queue, split by whether the check targets the agent's
/// own bank or has to be forwarded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgentCheques {
    pub cheques_meme_banque: Vec<ChequeSummary>,
    pub cheques_autre_banque: Vec<ChequeSummary>,
    #[serde(rename = "agentName")]
    pub agent_name: String,
    #[serde(rename = "agentBankId")]
    pub agent_bank_id: Option<i32>,
    #[serde(rename = "agentEmail")]
    pub agent_email: String,
}

/// Fetch the checks assigned to the signed-in agent's bank. Uses the agent
/// bearer token (legacy path).
pub async fn fetch_agent_cheques<I: IdentityProvider>(
    client: &ApiClient<I>,
) -> Result<AgentCheques, ApiError> {
    let response = client.get("/agents/cheques/me").await?;
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_cheques_payload_parses() {
        let body = r#"{
            "cheques_meme_banque": [
                {"id": 1, "image_url": "/u/1.png", "date_depot": "2025-11-28T10:00:00",
                 "beneficiaire_id": 9, "banque_cible_id": 17}
            ],
            "cheques_autre_banque": [],
            "agentName": "Amine Idrissi",
            "agentBankId": 17,
            "agentEmail": "agent@cih.ma"
        }"#;
        let parsed: AgentCheques = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.cheques_meme_banque.len(), 1);
        assert_eq!(parsed.cheques_meme_banque[0].banque_cible_id, 17);
        assert!(parsed.cheques_autre_banque.is_empty());
        assert_eq!(parsed.agent_bank_id, Some(17));
    }
}
