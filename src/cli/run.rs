use tabled::Table;

use crate::{
    Res, config::Config, error, info, spotify::SpotifyApi, success, sync, types::SyncReport,
};

/// Runs the backup once and prints a summary table.
///
/// Exits the process with status 1 if the run fails, so schedulers relying on
/// the exit code notice the failure.
pub async fn run(config: Config) {
    if let Err(e) = run_once(&config).await {
        error!("Backup run failed: {}", e);
    }
}

pub(crate) async fn run_once(config: &Config) -> Res<SyncReport> {
    info!("Starting backup run.");
    let api = SpotifyApi::from_config(config);
    let report = sync::run(&api, config).await?;
    print_report(&report);
    Ok(report)
}

fn print_report(report: &SyncReport) {
    if report.total() > 0 {
        println!("{}", Table::new(report.rows()));
    }

    success!(
        "Backed up {} tracks from {} into {} ({} new, {} already present).",
        report.total(),
        report.source_playlist_id,
        report.backup_playlist_id,
        report.added.len(),
        report.already_present.len()
    );
}
