use crate::{Res, SyncError, spotify::SpotifyApi, types::CurrentUser};

/// Returns the id of the user the access token belongs to.
pub async fn current_user_id(api: &SpotifyApi, token: &str) -> Res<String> {
    let response = api
        .client()
        .get(api.endpoint("/me"))
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()
        .map_err(|e| SyncError::from_status(e, "current user"))?;

    let user = response.json::<CurrentUser>().await?;
    Ok(user.id)
}
