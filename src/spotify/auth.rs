use crate::{
    Res, SyncError,
    config::Credentials,
    spotify::SpotifyApi,
    types::TokenResponse,
    utils,
};

/// Exchanges the long-lived refresh token for a short-lived access token.
///
/// Sends the refresh grant to the token endpoint, authenticated with the
/// `Basic` header built from the client id and secret. The access token is
/// valid for about an hour, which comfortably covers one backup run, so it is
/// neither cached nor persisted.
///
/// # Arguments
///
/// * `api` - HTTP client and endpoint URLs
/// * `credentials` - Client id and secret of the registered application
/// * `refresh_token` - Refresh token obtained once during the initial authorization
///
/// # Errors
///
/// Every failure is reported as [`SyncError::Authentication`]:
/// - the request cannot be sent (network, DNS, timeout)
/// - the endpoint answers with a non-2xx status (e.g. a revoked refresh token)
/// - the body is not JSON or carries no `access_token`
///
/// Nothing is retried.
pub async fn refresh_access_token(
    api: &SpotifyApi,
    credentials: &Credentials,
    refresh_token: &str,
) -> Res<String> {
    if refresh_token.is_empty() {
        return Err(SyncError::Configuration(
            "refresh token must not be empty".to_string(),
        ));
    }

    let response = api
        .client()
        .post(api.token_url())
        .header("Authorization", utils::basic_auth_header(credentials))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", credentials.client_id.as_str()),
        ])
        .send()
        .await
        .map_err(|e| SyncError::Authentication(e.to_string()))?;

    let response = response
        .error_for_status()
        .map_err(|e| SyncError::Authentication(e.to_string()))?;

    let json: TokenResponse = response
        .json()
        .await
        .map_err(|e| SyncError::Authentication(e.to_string()))?;

    json.access_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            SyncError::Authentication("token response carries no access_token".to_string())
        })
}
