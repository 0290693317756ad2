use thiserror::Error;

/// Why a task fetch failed. Every variant
/// is shown to the user as the same
/// [`ErrorMessage::UnableToLoad`] text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
  #[error("network error: {0}")]
  Network(String),
  #[error("unexpected HTTP status {0}")]
  Status(u16),
  #[error("malformed task payload: {0}")]
  Decode(String)
}

impl LoadError {
  pub fn kind(&self) -> &'static str {
    match self {
      | LoadError::Network(_) => "network",
      | LoadError::Status(_) => "status",
      | LoadError::Decode(_) => "decode"
    }
  }

  pub fn user_message(
    &self
  ) -> ErrorMessage {
    ErrorMessage::UnableToLoad
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ErrorMessage {
  UnableToLoad
}

impl ErrorMessage {
  pub fn as_str(self) -> &'static str {
    match self {
      | ErrorMessage::UnableToLoad => {
        "Unable to load todos"
      }
    }
  }
}

impl std::fmt::Display for ErrorMessage {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>
  ) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
