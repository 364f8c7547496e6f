use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentUser {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchPlaylistsResponse {
    pub playlists: PlaylistsPage,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistsPage {
    // Spotify reports playlists that are no longer available as `null`.
    pub items: Vec<Option<SimplifiedPlaylist>>,
}

#[derive(Debug, Deserialize)]
pub struct SimplifiedPlaylist {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistTracksPage {
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<TrackRef>,
}

#[derive(Debug, Deserialize)]
pub struct TrackRef {
    pub uri: String,
}

#[derive(Debug, Serialize)]
pub struct AddTracksToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddTracksToPlaylistResponse {
    pub snapshot_id: String,
}

/// What happened to a single track during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    AlreadyPresent,
    Added { snapshot_id: String },
}

#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub user_id: String,
    pub source_playlist_id: String,
    pub backup_playlist_id: String,
    pub added: Vec<String>,
    pub already_present: Vec<String>,
}

impl SyncReport {
    pub fn total(&self) -> usize {
        self.added.len() + self.already_present.len()
    }

    pub fn rows(&self) -> Vec<SyncTableRow> {
        let added = self.added.iter().map(|uri| SyncTableRow {
            track: uri.clone(),
            status: "added".to_string(),
        });
        let present = self.already_present.iter().map(|uri| SyncTableRow {
            track: uri.clone(),
            status: "already present".to_string(),
        });
        added.chain(present).collect()
    }
}

#[derive(Tabled)]
pub struct SyncTableRow {
    pub track: String,
    pub status: String,
}
