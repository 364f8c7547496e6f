//! # CLI Module
//!
//! User-facing commands of `dwbackup`. Both commands perform the same backup
//! run from [`crate::sync`]; they differ only in who decides when it runs.
//!
//! - [`run`] - a single run, for cron jobs, systemd timers or serverless
//!   timer triggers that already fire once a week
//! - [`schedule`] - keeps the process alive and runs every Monday at 06:00 UTC
//!
//! ## Usage
//!
//! ```bash
//! dwbackup run                 # back up right now, exit non-zero on failure
//! dwbackup schedule            # wait for Monday 06:00 UTC, repeat forever
//! dwbackup schedule --now      # one run immediately, then weekly
//! ```
//!
//! Configuration is validated before either command touches the network; see
//! [`crate::config`].

mod run;
mod schedule;

pub use run::run;
pub use schedule::schedule;
