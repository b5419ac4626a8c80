use super::*;

/// Page-level values shared by every widget on a page.
#[derive(Clone, Debug, Default)]
pub(crate) struct Ambient {
  pub(crate) mastodon_host: Option<String>,
  pub(crate) mastodon_toot_id: Option<String>,
  pub(crate) mastodon_user: Option<String>,
}

/// Values declared on the widget itself.
#[derive(Clone, Debug, Default)]
pub(crate) struct Attributes {
  pub(crate) bluesky_post: Option<String>,
  pub(crate) style: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MastodonSource {
  pub(crate) host: String,
  pub(crate) status_id: String,
  pub(crate) user: String,
}

impl MastodonSource {
  pub(crate) fn web_url(&self) -> String {
    format!("https://{}/@{}/{}", self.host, self.user, self.status_id)
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct BlueskySource {
  /// What the page author supplied, kept for the header link.
  pub(crate) reference: String,
  pub(crate) uri: PostUri,
}

impl BlueskySource {
  pub(crate) fn web_url(&self) -> String {
    if self.reference.starts_with("https://") {
      self.reference.clone()
    } else {
      self.uri.web_url()
    }
  }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct WidgetConfig {
  pub(crate) bluesky: Option<BlueskySource>,
  pub(crate) mastodon: Option<MastodonSource>,
  pub(crate) style: Option<String>,
}

impl WidgetConfig {
  fn non_empty(value: Option<&String>) -> Option<String> {
    value
      .map(|value| value.trim())
      .filter(|value| !value.is_empty())
      .map(str::to_string)
  }

  pub(crate) fn resolve(ambient: &Ambient, attributes: &Attributes) -> Self {
    let mastodon = Self::resolve_mastodon(ambient);

    let bluesky = Self::non_empty(attributes.bluesky_post.as_ref()).and_then(
      |reference| match PostUri::parse(&reference) {
        Ok(uri) => Some(BlueskySource { reference, uri }),
        Err(error) => {
          warn!("ignoring Bluesky post reference: {error:#}");
          None
        }
      },
    );

    Self {
      bluesky,
      mastodon,
      style: attributes.style.clone(),
    }
  }

  fn resolve_mastodon(ambient: &Ambient) -> Option<MastodonSource> {
    let status_id = Self::non_empty(ambient.mastodon_toot_id.as_ref())?;

    let host = Self::non_empty(ambient.mastodon_host.as_ref());
    let user = Self::non_empty(ambient.mastodon_user.as_ref())
      .map(|user| user.trim_start_matches('@').to_string());

    match (host, user) {
      (Some(host), Some(user)) => Some(MastodonSource {
        host,
        status_id,
        user,
      }),
      _ => {
        warn!(
          status_id,
          "Mastodon status id given without host and user, skipping Mastodon"
        );
        None
      }
    }
  }
}
