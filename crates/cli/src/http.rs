use crate::credentials::Credentials;
use crate::query::SearchRequest;
use serde_json::Value;
use thiserror::Error;

pub const SEARCH_URL: &str = "https://api.datadoghq.com/api/v2/logs/events/search";
pub const API_KEY_HEADER: &str = "DD-API-KEY";
pub const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";

#[derive(Debug, Error)]
pub enum HttpError {
  #[error("request failed: {0}")]
  RequestFailed(String),
  #[error("response decode failed")]
  DecodeFailed,
}

pub fn search_logs(credentials: &Credentials, request: &SearchRequest) -> Result<Value, HttpError> {
  let client = reqwest::blocking::Client::new();
  let response = client
    .post(SEARCH_URL)
    .header(API_KEY_HEADER, &credentials.api_key)
    .header(APP_KEY_HEADER, &credentials.app_key)
    .json(request)
    .send()
    .map_err(|err| HttpError::RequestFailed(err.to_string()))?;

  if !response.status().is_success() {
    return Err(HttpError::RequestFailed(response.status().to_string()));
  }

  response.json().map_err(|_| HttpError::DecodeFailed)
}
