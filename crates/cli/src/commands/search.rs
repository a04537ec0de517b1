use crate::credentials::{CredentialError, Credentials};
use crate::http::{search_logs, HttpError};
use crate::output::{error_output, render_response, serialize_error, ErrorOutput};
use crate::query::SearchRequest;
use crate::time::{resolve, TimeError, CIVIL_ZONE};
use chrono::{DateTime, Utc};
use clap::Parser;

#[derive(Parser)]
pub struct SearchArgs {
  /// Start time (see time formats below).
  #[arg(long)]
  pub from: String,

  /// End time (see time formats below).
  #[arg(long, default_value = "now")]
  pub to: String,

  /// Log query passed through verbatim, e.g. "@logger:worker" to match one
  /// logger or "-@logger:worker" to exclude it.
  #[arg(long, default_value = "")]
  pub query: String,
}

fn map_time_error(err: TimeError) -> ErrorOutput {
  error_output(
    "INVALID_TIME_EXPRESSION",
    "Failed to resolve time expression.",
    Some(err.to_string()),
  )
}

fn map_credential_error(err: CredentialError) -> ErrorOutput {
  error_output(
    "MISSING_CREDENTIAL",
    "Missing Datadog credentials. Set DD_API_KEY and DD_APP_KEY.",
    Some(err.to_string()),
  )
}

fn map_http_error(err: HttpError) -> ErrorOutput {
  error_output("SEARCH_FAILED", "Failed to query Datadog logs.", Some(err.to_string()))
}

pub fn build_request(args: &SearchArgs, reference_now: DateTime<Utc>) -> Result<SearchRequest, ErrorOutput> {
  let from = resolve(&args.from, reference_now, CIVIL_ZONE).map_err(map_time_error)?;
  let to = resolve(&args.to, reference_now, CIVIL_ZONE).map_err(map_time_error)?;
  Ok(SearchRequest::new(from, to, args.query.clone()))
}

pub fn run(args: SearchArgs) -> Result<(), String> {
  dotenvy::dotenv().ok();

  let credentials = Credentials::from_env().map_err(|err| serialize_error(map_credential_error(err)))?;
  let request = build_request(&args, Utc::now()).map_err(serialize_error)?;
  let response = search_logs(&credentials, &request).map_err(|err| serialize_error(map_http_error(err)))?;

  let json = render_response(&response).map_err(|err| {
    serialize_error(error_output(
      "SERIALIZE_FAILED",
      "Failed to serialize output.",
      Some(err.to_string()),
    ))
  })?;
  println!("{json}");
  Ok(())
}
