//! Profile endpoint.

use store::ProfileRecord;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::identity::IdentityProvider;

/// Fetch the caller's profile from `GET /users/me`.
///
/// Called on every sign-in and on explicit refresh; the result is never
/// cached here.
pub async fn fetch_profile<I: IdentityProvider>(
    client: &ApiClient<I>,
) -> Result<ProfileRecord, ApiError> {
    let response = client.get("/users/me").await?;
    Ok(response.json().await?)
}
