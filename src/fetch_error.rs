use super::*;

#[derive(Debug, Error)]
pub(crate) enum FetchError {
  #[error("request failed: {0}")]
  Network(#[from] reqwest::Error),
  #[error("malformed response: {0}")]
  Parse(#[from] serde_json::Error),
  #[error("unexpected status {status}")]
  Status { status: StatusCode },
}
