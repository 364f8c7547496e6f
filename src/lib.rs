//! Discover Weekly backup library
//!
//! Copies the tracks of the weekly discovery playlist into a persistent backup
//! playlist so they survive the weekly refresh. The whole job is one sequential
//! run: refresh the access token, resolve the user and the source playlist,
//! list its tracks and append every track the backup does not hold yet.
//!
//! # Modules
//!
//! - `cli` - Command-line entry points (`run`, `schedule`)
//! - `config` - Configuration loading and validation
//! - `error` - The error type shared by every step of a run
//! - `spotify` - The handful of Spotify Web API calls a run needs
//! - `sync` - The orchestrator sequencing a single run
//! - `types` - Request and response payloads
//! - `utils` - Small helpers (auth header encoding, trigger times)
//!
//! # Example
//!
//! ```
//! use dwbackup::{config, spotify::SpotifyApi, sync};
//!
//! #[tokio::main]
//! async fn main() -> dwbackup::Res<()> {
//!     let config = config::Config::from_env()?;
//!     let api = SpotifyApi::from_config(&config);
//!     let report = sync::run(&api, &config).await?;
//!     println!("added {} tracks", report.added.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spotify;
pub mod sync;
pub mod types;
pub mod utils;

pub use error::SyncError;

/// Result alias used across the crate.
///
/// Every fallible step of a run reports a [`SyncError`], so callers can tell
/// a configuration problem from an authentication or transport failure.
pub type Res<T> = std::result::Result<T, SyncError>;

/// Prints an informational message with a blue bullet point.
///
/// Each step of a backup run announces itself with this macro before it
/// starts, so a failed run shows in the log which step it died in.
///
/// ```
/// info!("Resolving source playlist");
/// info!("Listing {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// ```
/// success!("Added {} to the backup playlist", uri);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only the
/// binary's top level uses it; library code returns [`SyncError`] instead so
/// the scheduler loop can survive a failed run.
///
/// ```
/// error!("Backup run failed: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for problems that do not abort the run, e.g. the token belonging to a
/// different user than the configured one.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
