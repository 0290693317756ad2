use anyhow::Context;
use serde::Deserialize;
use tracing::{
  debug,
  error,
  info,
  warn
};

pub const DEFAULT_API_BASE_URL: &str =
  "https://mate.academy/students-api";
pub const DEFAULT_ERROR_TIMEOUT_MS: u32 =
  3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  /// `None` means the build was made
  /// without a user id; the UI shows the
  /// warning screen and never fetches.
  pub user_id:          Option<u64>,
  pub api_base_url:     String,
  pub error_timeout_ms: u32
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
  #[serde(default)]
  api: ApiSection,
  #[serde(default)]
  ui:  UiSection
}

#[derive(Debug, Deserialize)]
struct ApiSection {
  #[serde(
    default = "default_api_base_url"
  )]
  base_url: String
}

#[derive(Debug, Deserialize)]
struct UiSection {
  #[serde(
    default = "default_error_timeout_ms"
  )]
  error_timeout_ms: u32
}

impl Default for ApiSection {
  fn default() -> Self {
    Self {
      base_url: default_api_base_url()
    }
  }
}

impl Default for UiSection {
  fn default() -> Self {
    Self {
      error_timeout_ms:
        default_error_timeout_ms()
    }
  }
}

fn default_api_base_url() -> String {
  DEFAULT_API_BASE_URL.to_string()
}

fn default_error_timeout_ms() -> u32 {
  DEFAULT_ERROR_TIMEOUT_MS
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      user_id:          None,
      api_base_url:
        default_api_base_url(),
      error_timeout_ms:
        DEFAULT_ERROR_TIMEOUT_MS
    }
  }
}

impl AppConfig {
  pub fn from_toml(
    text: &str
  ) -> anyhow::Result<Self> {
    let file: ConfigFile =
      toml::from_str(text).context(
        "failed to parse app config"
      )?;

    Ok(Self {
      user_id:          None,
      api_base_url:     file.api.base_url,
      error_timeout_ms: file
        .ui
        .error_timeout_ms
    })
  }

  /// Resolves the effective config from
  /// the embedded defaults and the values
  /// captured at build time. A broken
  /// embedded file degrades to built-in
  /// defaults instead of failing startup.
  #[tracing::instrument(skip(
    defaults_toml
  ))]
  pub fn resolve(
    defaults_toml: &str,
    user_id: Option<&str>,
    api_base_url: Option<&str>
  ) -> Self {
    let mut cfg =
      match Self::from_toml(defaults_toml)
      {
        | Ok(cfg) => cfg,
        | Err(err) => {
          error!(error = %format!("{err:#}"), "embedded config invalid; using defaults");
          Self::default()
        }
      };

    cfg.user_id = parse_user_id(user_id);

    if let Some(url) = api_base_url
      .map(str::trim)
      .filter(|url| !url.is_empty())
    {
      debug!(url, "overriding api base url");
      cfg.api_base_url = url.to_string();
    }

    info!(
      user_id = ?cfg.user_id,
      api = %cfg.api_base_url,
      error_timeout_ms = cfg.error_timeout_ms,
      "resolved app config"
    );
    cfg
  }
}

/// Empty, zero, and unparsable ids all
/// count as unset.
pub fn parse_user_id(
  raw: Option<&str>
) -> Option<u64> {
  let raw = raw?.trim();
  if raw.is_empty() {
    return None;
  }

  match raw.parse::<u64>() {
    | Ok(0) => None,
    | Ok(id) => Some(id),
    | Err(err) => {
      warn!(raw, error = %err, "ignoring invalid user id");
      None
    }
  }
}
