use thiserror::Error;

pub const API_KEY_VAR: &str = "DD_API_KEY";
pub const APP_KEY_VAR: &str = "DD_APP_KEY";

#[derive(Debug, Error)]
pub enum CredentialError {
  #[error("missing credential: {0}")]
  Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
  pub api_key: String,
  pub app_key: String,
}

impl Credentials {
  pub fn from_lookup<F>(mut lookup: F) -> Result<Self, CredentialError>
  where
    F: FnMut(&str) -> Option<String>,
  {
    let mut read = |name: &'static str| match lookup(name) {
      Some(value) if !value.trim().is_empty() => Ok(value),
      _ => Err(CredentialError::Missing(name)),
    };

    let api_key = read(API_KEY_VAR)?;
    let app_key = read(APP_KEY_VAR)?;
    Ok(Self { api_key, app_key })
  }

  pub fn from_env() -> Result<Self, CredentialError> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }
}
