use super::*;

/// Canonical `at://` reference to a Bluesky post record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PostUri(String);

impl PostUri {
  const COLLECTION: &str = "app.bsky.feed.post";

  const SCHEME: &str = "at://";

  const WEB_HOST: &str = "bsky.app";

  pub(crate) fn as_str(&self) -> &str {
    &self.0
  }

  /// Repository part of the reference, a handle or a DID.
  pub(crate) fn authority(&self) -> &str {
    self.0[Self::SCHEME.len()..]
      .split('/')
      .next()
      .unwrap_or_default()
  }

  /// Accepts either a canonical reference, passed through as is, or a
  /// `https://bsky.app/profile/{handle}/post/{id}` URL.
  pub(crate) fn parse(reference: &str) -> Result<Self> {
    let reference = reference.trim();

    if reference.starts_with(Self::SCHEME) {
      return Ok(Self(reference.to_string()));
    }

    let url = Url::parse(reference)
      .with_context(|| format!("invalid Bluesky post URL `{reference}`"))?;

    if url.host_str() != Some(Self::WEB_HOST) {
      bail!("`{reference}` is not a {} URL", Self::WEB_HOST);
    }

    let segments = url
      .path_segments()
      .map(|segments| segments.collect::<Vec<_>>())
      .unwrap_or_default();

    match segments.as_slice() {
      ["profile", handle, "post", post_id, ..]
        if !handle.is_empty() && !post_id.is_empty() =>
      {
        Ok(Self(format!(
          "{}{handle}/{}/{post_id}",
          Self::SCHEME,
          Self::COLLECTION
        )))
      }
      _ => bail!("`{reference}` does not point at a Bluesky post"),
    }
  }

  pub(crate) fn record_key(&self) -> &str {
    record_key(&self.0)
  }

  pub(crate) fn web_url(&self) -> String {
    format!(
      "https://{}/profile/{}/post/{}",
      Self::WEB_HOST,
      self.authority(),
      self.record_key()
    )
  }
}

impl Display for PostUri {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Trailing path segment of an `at://` record reference.
pub(crate) fn record_key(uri: &str) -> &str {
  uri.rsplit('/').next().unwrap_or_default()
}
