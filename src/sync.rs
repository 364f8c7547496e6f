//! A single backup run.
//!
//! ```text
//! START → access token → user → source playlist → source tracks
//!       → for each track: check and insert → END
//! ```
//!
//! The steps run strictly one after another. The first failing step aborts
//! the run; tracks inserted before the failure stay in the backup playlist,
//! and because insertion is idempotent the next run simply picks up the rest.

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res,
    config::Config,
    info,
    spotify::{SpotifyApi, auth, playlist, user},
    success,
    types::{InsertOutcome, SyncReport},
    warning,
};

/// Copies the source playlist's tracks into the backup playlist.
///
/// Performs its own token refresh; nothing carries over from a previous run.
pub async fn run(api: &SpotifyApi, config: &Config) -> Res<SyncReport> {
    info!("Getting access token.");
    let token =
        auth::refresh_access_token(api, &config.credentials, &config.refresh_token).await?;

    info!("Getting current user.");
    let user_id = user::current_user_id(api, &token).await?;
    if user_id != config.user_id {
        warning!(
            "Access token belongs to {} but SPOTIFY_USER_ID is {}.",
            user_id,
            config.user_id
        );
    }

    info!("Getting discover weekly playlist id.");
    let source_playlist_id = playlist::resolve_source_playlist(api, &token, config).await?;

    info!("Getting discover weekly playlist track ids.");
    let track_uris = playlist::list_track_uris(api, &source_playlist_id, &token).await?;

    info!(
        "Inserting {} tracks into backup playlist {}.",
        track_uris.len(),
        config.backup_playlist_id
    );

    let mut report = SyncReport {
        user_id,
        source_playlist_id,
        backup_playlist_id: config.backup_playlist_id.clone(),
        ..Default::default()
    };

    let pb = ProgressBar::new(track_uris.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}") {
        pb.set_style(style);
    }

    for uri in track_uris {
        pb.set_message(uri.clone());
        let outcome =
            match playlist::insert_track(api, &config.backup_playlist_id, &uri, &token).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            };

        match outcome {
            InsertOutcome::AlreadyPresent => {
                pb.suspend(|| info!("{} is already in playlist.", uri));
                report.already_present.push(uri);
            }
            InsertOutcome::Added { .. } => {
                pb.suspend(|| success!("Successfully added {} to playlist.", uri));
                report.added.push(uri);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(report)
}
