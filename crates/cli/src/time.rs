use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use regex::Regex;
use thiserror::Error;

/// Zone used to interpret absolute `HH:MM:SS` tokens.
pub const CIVIL_ZONE: Tz = chrono_tz::America::Toronto;

const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Error)]
pub enum TimeError {
  #[error("invalid time expression: {0}")]
  InvalidTimeExpression(String),
}

pub fn resolve(token: &str, reference_now: DateTime<Utc>, civil_zone: Tz) -> Result<String, TimeError> {
  if token == "now" {
    return Ok(reference_now.format(UTC_FORMAT).to_string());
  }

  if token.starts_with('-') {
    let offset = parse_offset(token)?;
    let resolved = reference_now
      .checked_sub_signed(offset)
      .ok_or_else(|| TimeError::InvalidTimeExpression(token.to_string()))?;
    return Ok(resolved.format(UTC_FORMAT).to_string());
  }

  resolve_clock_time(token, reference_now, civil_zone)
}

fn parse_offset(token: &str) -> Result<Duration, TimeError> {
  let invalid = || TimeError::InvalidTimeExpression(token.to_string());

  let pattern =
    Regex::new(r"^-(?:(\d+)d)?(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?$").map_err(|_| invalid())?;
  let captures = pattern.captures(token).ok_or_else(invalid)?;

  let magnitude = |index: usize| -> Result<i64, TimeError> {
    match captures.get(index) {
      Some(group) => group.as_str().parse().map_err(|_| invalid()),
      None => Ok(0),
    }
  };

  let days = magnitude(1)?;
  let hours = magnitude(2)?;
  let minutes = magnitude(3)?;
  let seconds = magnitude(4)?;

  // A sign with zero total magnitude is a typo; "now" covers the zero case.
  if days == 0 && hours == 0 && minutes == 0 && seconds == 0 {
    return Err(invalid());
  }

  let total = days
    .checked_mul(86_400)
    .and_then(|t| t.checked_add(hours.checked_mul(3_600)?))
    .and_then(|t| t.checked_add(minutes.checked_mul(60)?))
    .and_then(|t| t.checked_add(seconds))
    .ok_or_else(invalid)?;

  Duration::try_seconds(total).ok_or_else(invalid)
}

fn resolve_clock_time(
  token: &str,
  reference_now: DateTime<Utc>,
  civil_zone: Tz,
) -> Result<String, TimeError> {
  let invalid = || TimeError::InvalidTimeExpression(token.to_string());

  let pattern = Regex::new(r"^\d{2}:\d{2}:\d{2}$").map_err(|_| invalid())?;
  if !pattern.is_match(token) {
    return Err(invalid());
  }

  let clock = NaiveTime::parse_from_str(token, "%H:%M:%S").map_err(|_| invalid())?;
  let local_date = reference_now.with_timezone(&civil_zone).date_naive();
  let local = civil_zone
    .from_local_datetime(&local_date.and_time(clock))
    .earliest()
    .ok_or_else(invalid)?;

  Ok(local.with_timezone(&Utc).format(UTC_FORMAT).to_string())
}
