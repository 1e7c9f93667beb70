//! Helpers for computing and rendering instants.

use chrono::{
    DateTime, Local, TimeDelta, Utc,
    format::{Item, StrftimeItems},
};
use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

/// `MM/dd/yyyy HH:mm:ss`
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Returns `instant` moved by `delta`, or `None` if the result is not representable.
pub fn offset(instant: SystemTime, delta: TimeDelta) -> Option<SystemTime> {
    match delta.to_std() {
        Ok(forward) => instant.checked_add(forward),
        Err(_) => instant.checked_sub((-delta).to_std().ok()?),
    }
}

/// Returns `instant` moved back by `days` whole days of 24 hours.
pub fn days_before(instant: SystemTime, days: i64) -> Option<SystemTime> {
    offset(instant, -TimeDelta::try_days(days)?)
}

/// Returns the current time moved back by `days` whole days of 24 hours.
pub fn days_ago(days: i64) -> Option<SystemTime> {
    days_before(SystemTime::now(), days)
}

/// Converts `instant` to a UTC date, or `None` if chrono can't represent it.
pub fn to_datetime(instant: SystemTime) -> Option<DateTime<Utc>> {
    let epoch = DateTime::from_timestamp(0, 0)?;
    match instant.duration_since(UNIX_EPOCH) {
        Ok(after) => epoch.checked_add_signed(TimeDelta::from_std(after).ok()?),
        Err(err) => epoch.checked_sub_signed(TimeDelta::from_std(err.duration()).ok()?),
    }
}

/// Returns the milliseconds between the unix epoch and `instant`, rounded towards the past.
pub fn unix_millis(instant: SystemTime) -> i128 {
    match instant.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_millis() as i128,
        Err(err) => -(err.duration().as_nanos().div_ceil(1_000_000) as i128),
    }
}

/// Returns `true` if `format` is a valid strftime layout.
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Parses an instant given on the command line.
///
/// Accepted forms:
/// - RFC 3339, e.g. `2024-01-02T03:04:05Z`
/// - `@<seconds>` since the unix epoch
/// - `<milliseconds>` since the unix epoch
pub fn parse_instant(s: &str) -> Result<SystemTime, String> {
    let s = s.trim();
    let since_epoch = |delta: Option<TimeDelta>| {
        delta
            .and_then(|delta| offset(UNIX_EPOCH, delta))
            .ok_or_else(|| format!("instant `{s}` is out of range"))
    };

    if let Some(secs) = s.strip_prefix('@') {
        let secs = secs.parse::<i64>().map_err(|err| format!("invalid seconds `{secs}`: {err}"))?;
        return since_epoch(TimeDelta::try_seconds(secs));
    }
    if let Ok(millis) = s.parse::<i64>() {
        return since_epoch(TimeDelta::try_milliseconds(millis));
    }
    DateTime::parse_from_rfc3339(s)
        .map(SystemTime::from)
        .map_err(|err| format!("invalid instant `{s}`: {err}"))
}

/// Renders a [`SystemTime`] with a strftime layout.
///
/// The layout must be valid, see [`is_valid_format`]. Instants outside chrono's range are
/// printed as `@<seconds>` since the unix epoch, the form [`parse_instant`] accepts.
#[derive(Clone, Copy, Debug)]
pub struct DisplayInstant<'a> {
    instant: SystemTime,
    format: &'a str,
    utc: bool,
}

impl<'a> DisplayInstant<'a> {
    /// Renders `instant` in local time using [`DEFAULT_DATE_FORMAT`].
    pub fn new(instant: SystemTime) -> Self {
        Self { instant, format: DEFAULT_DATE_FORMAT, utc: false }
    }

    /// Uses the given strftime layout.
    pub fn format(mut self, format: &'a str) -> Self {
        self.format = format;
        self
    }

    /// Renders in UTC instead of local time.
    pub fn utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }
}

impl fmt::Display for DisplayInstant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(datetime) = to_datetime(self.instant) else {
            return match self.instant.duration_since(UNIX_EPOCH) {
                Ok(after) => write!(f, "@{}", after.as_secs()),
                Err(err) => write!(f, "@-{}", err.duration().as_secs()),
            };
        };
        if self.utc {
            write!(f, "{}", datetime.format(self.format))
        } else {
            write!(f, "{}", datetime.with_timezone(&Local).format(self.format))
        }
    }
}
