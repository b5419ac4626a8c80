use super::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Platform {
  Bluesky,
  Mastodon,
}

impl Platform {
  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Bluesky => "Bluesky",
      Self::Mastodon => "Mastodon",
    }
  }

  /// Class names of the repost and like counters, following each
  /// platform's own vocabulary.
  pub(crate) fn counter_classes(self) -> (&'static str, &'static str) {
    match self {
      Self::Bluesky => ("reposts", "likes"),
      Self::Mastodon => ("reblogs", "favourites"),
    }
  }
}

impl Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(match self {
      Self::Bluesky => "bluesky",
      Self::Mastodon => "mastodon",
    })
  }
}
