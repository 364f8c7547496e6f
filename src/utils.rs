use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};

use crate::config::Credentials;

/// Hour (UTC) of the weekly trigger, Mondays.
pub const TRIGGER_HOUR: u32 = 6;

/// Value of the `Authorization` header for the token endpoint.
pub fn basic_auth_header(credentials: &Credentials) -> String {
    let pair = format!(
        "{id}:{secret}",
        id = credentials.client_id,
        secret = credentials.client_secret
    );
    format!("Basic {}", STANDARD.encode(pair.as_bytes()))
}

/// Next Monday 06:00:00 UTC strictly after `now`.
pub fn next_weekly_trigger(now: DateTime<Utc>) -> DateTime<Utc> {
    let trigger_time = NaiveTime::from_hms_opt(TRIGGER_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);
    let today = now.date_naive();
    let days_until_monday = (7 - today.weekday().num_days_from_monday()) % 7;

    let candidate = (today + Duration::days(days_until_monday as i64))
        .and_time(trigger_time)
        .and_utc();

    if candidate > now {
        candidate
    } else {
        candidate + Duration::days(7)
    }
}

/// Human readable wait, e.g. `2d 3h 15m`.
pub fn format_wait(wait: Duration) -> String {
    let minutes = wait.num_minutes().max(0);
    let (days, hours, minutes) = (minutes / 1440, (minutes % 1440) / 60, minutes % 60);

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
