//! Error type for backend calls.
//!
//! Errors stay component-local: the screen that issued the request decides
//! what to show. There is no global handler and no retry policy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, refused, aborted)
    /// or the body failed to decode.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status. `detail` is the
    /// human-readable message FastAPI puts in the error body, suitable for
    /// inline display on forms.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
}

impl ApiError {
    /// Build a [`ApiError::Rejected`] from a non-success response, pulling
    /// the `detail` field out of the body when present.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            detail: Option<String>,
        }

        let status = response.status().as_u16();
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| "The server rejected the request.".to_string());
        ApiError::Rejected { status, detail }
    }
}
