use crate::{
    Res, SyncError,
    config::Config,
    spotify::SpotifyApi,
    types::{
        AddTracksToPlaylistRequest, AddTracksToPlaylistResponse, InsertOutcome,
        PlaylistTracksPage, SearchPlaylistsResponse,
    },
};

/// Page size for every playlist tracks request.
pub const PAGE_SIZE: usize = 50;

/// Name the weekly discovery playlist is published under.
pub const DISCOVER_WEEKLY: &str = "Discover Weekly";

// Only the track URI is needed, so keep the payload small.
const TRACK_URI_FIELDS: &str = "items.track.uri";

/// Finds the weekly discovery playlist through the catalog search.
///
/// Searches for playlists named "Discover Weekly" owned by `owner` (the
/// service's own account) and returns the id of the first hit. Result order
/// is decided by Spotify and is not guaranteed to be stable.
///
/// # Errors
///
/// - [`SyncError::NotFound`] if the search yields no usable playlist
/// - [`SyncError::Transport`] on network or HTTP failures
pub async fn discover_weekly_playlist_id(
    api: &SpotifyApi,
    token: &str,
    owner: &str,
) -> Res<String> {
    let response = api
        .client()
        .get(api.endpoint("/search"))
        .query(&[("q", DISCOVER_WEEKLY), ("type", "playlist"), ("owner", owner)])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()
        .map_err(|e| SyncError::from_status(e, "playlist search"))?;

    let result = response.json::<SearchPlaylistsResponse>().await?;

    result
        .playlists
        .items
        .into_iter()
        .flatten()
        .next()
        .map(|playlist| playlist.id)
        .ok_or_else(|| SyncError::NotFound(format!("{DISCOVER_WEEKLY} playlist")))
}

/// Returns the source playlist id, preferring the configured one.
///
/// The catalog search only runs when `DISCOVER_WEEKLY_PLAYLIST_ID` is unset.
pub async fn resolve_source_playlist(
    api: &SpotifyApi,
    token: &str,
    config: &Config,
) -> Res<String> {
    match &config.discover_weekly_playlist_id {
        Some(id) => Ok(id.clone()),
        None => discover_weekly_playlist_id(api, token, &config.source_account_id).await,
    }
}

/// Lists the track URIs of a playlist.
///
/// Fetches exactly one page of [`PAGE_SIZE`] entries. Tracks past the 50th
/// are not returned; see the module docs of [`crate::spotify`]. Entries
/// without a track (removed or local files) are skipped.
pub async fn list_track_uris(
    api: &SpotifyApi,
    playlist_id: &str,
    token: &str,
) -> Res<Vec<String>> {
    let page = fetch_tracks_page(api, playlist_id, token, None).await?;

    Ok(page
        .items
        .into_iter()
        .filter_map(|item| item.track.map(|t| t.uri))
        .collect())
}

/// Checks whether `track_uri` is already part of the playlist.
///
/// Walks the playlist page by page ([`PAGE_SIZE`] entries per request,
/// advancing `offset`) and stops on the first match. An empty page marks the
/// end of the playlist.
pub async fn playlist_contains(
    api: &SpotifyApi,
    playlist_id: &str,
    track_uri: &str,
    token: &str,
) -> Res<bool> {
    let mut offset = 0;

    loop {
        let page = fetch_tracks_page(api, playlist_id, token, Some(offset)).await?;
        if page.items.is_empty() {
            return Ok(false);
        }

        let found = page
            .items
            .iter()
            .filter_map(|item| item.track.as_ref())
            .any(|track| track.uri == track_uri);
        if found {
            return Ok(true);
        }

        offset += PAGE_SIZE;
    }
}

/// Appends a track to the playlist unless it is already there.
///
/// Re-inserting a track is a no-op that reports
/// [`InsertOutcome::AlreadyPresent`], which makes a whole run safe to repeat.
/// A failing append is returned as is; nothing is rolled back or retried.
pub async fn insert_track(
    api: &SpotifyApi,
    playlist_id: &str,
    track_uri: &str,
    token: &str,
) -> Res<InsertOutcome> {
    if playlist_contains(api, playlist_id, track_uri, token).await? {
        return Ok(InsertOutcome::AlreadyPresent);
    }

    let body = AddTracksToPlaylistRequest {
        uris: vec![track_uri.to_string()],
    };

    let response = api
        .client()
        .post(api.endpoint(&format!("/playlists/{playlist_id}/tracks")))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()
        .map_err(|e| SyncError::from_status(e, &format!("playlist {playlist_id}")))?;

    let added = response.json::<AddTracksToPlaylistResponse>().await?;
    Ok(InsertOutcome::Added {
        snapshot_id: added.snapshot_id,
    })
}

async fn fetch_tracks_page(
    api: &SpotifyApi,
    playlist_id: &str,
    token: &str,
    offset: Option<usize>,
) -> Res<PlaylistTracksPage> {
    let mut request = api
        .client()
        .get(api.endpoint(&format!("/playlists/{playlist_id}/tracks")))
        .query(&[("fields", TRACK_URI_FIELDS)])
        .query(&[("limit", PAGE_SIZE)]);
    if let Some(offset) = offset {
        request = request.query(&[("offset", offset)]);
    }

    let response = request
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()
        .map_err(|e| SyncError::from_status(e, &format!("playlist {playlist_id}")))?;

    Ok(response.json::<PlaylistTracksPage>().await?)
}
