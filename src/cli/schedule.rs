use chrono::Utc;

use crate::{cli::run::run_once, config::Config, info, utils, warning};

/// Runs the backup every Monday at 06:00 UTC until the process is stopped.
///
/// Runs happen one after another on the same task, so they never overlap. A
/// failed run is logged and the loop waits for the next trigger; the next run
/// picks up whatever the failed one left behind.
pub async fn schedule(config: Config, now: bool) {
    if now {
        if let Err(e) = run_once(&config).await {
            warning!("Backup run failed: {}", e);
        }
    }

    loop {
        let current = Utc::now();
        let next = utils::next_weekly_trigger(current);
        let wait = next - current;
        info!(
            "Next backup run at {} (in {}).",
            next.format("%Y-%m-%d %H:%M UTC"),
            utils::format_wait(wait)
        );

        tokio::time::sleep(wait.to_std().unwrap_or_default()).await;

        if let Err(e) = run_once(&config).await {
            warning!("Backup run failed: {}", e);
        }
    }
}
