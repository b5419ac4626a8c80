use super::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum Format {
  #[default]
  Html,
  Text,
}

#[derive(Debug, Parser)]
#[command(name = "social-comments")]
#[command(about = "Render Mastodon and Bluesky replies as one comment list")]
#[command(version)]
pub(crate) struct Arguments {
  /// Bluesky post, as an at:// reference or a bsky.app post URL
  #[arg(long, env = "SOCIAL_COMMENTS_BLUESKY_POST")]
  pub(crate) bluesky_post: Option<String>,

  /// Output format
  #[arg(long, value_enum, default_value_t)]
  pub(crate) format: Format,

  /// Mastodon instance hosting the original post
  #[arg(long, env = "SOCIAL_COMMENTS_MASTODON_HOST")]
  pub(crate) mastodon_host: Option<String>,

  /// Id of the original Mastodon status
  #[arg(long, env = "SOCIAL_COMMENTS_MASTODON_TOOT_ID")]
  pub(crate) mastodon_toot_id: Option<String>,

  /// Account that published the original Mastodon status
  #[arg(long, env = "SOCIAL_COMMENTS_MASTODON_USER")]
  pub(crate) mastodon_user: Option<String>,

  /// Open the written file in the default browser
  #[arg(long, requires = "output")]
  pub(crate) open: bool,

  /// Write to this file instead of stdout
  #[arg(short, long)]
  pub(crate) output: Option<PathBuf>,

  /// Run every comment block through an allow-list HTML sanitizer
  #[arg(long)]
  pub(crate) sanitize: bool,

  /// Wrap the widget in a complete HTML document
  #[arg(long)]
  pub(crate) standalone: bool,

  /// Inline style forwarded to the comment list container
  #[arg(long)]
  pub(crate) style: Option<String>,

  /// Icon set
  #[arg(long, value_enum, default_value_t)]
  pub(crate) theme: Theme,

  /// Wrap width for text output
  #[arg(long, default_value_t = 80)]
  pub(crate) width: usize,
}

impl Arguments {
  pub(crate) fn widget_config(&self) -> WidgetConfig {
    WidgetConfig::resolve(
      &Ambient {
        mastodon_host: self.mastodon_host.clone(),
        mastodon_toot_id: self.mastodon_toot_id.clone(),
        mastodon_user: self.mastodon_user.clone(),
      },
      &Attributes {
        bluesky_post: self.bluesky_post.clone(),
        style: self.style.clone(),
      },
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flags_build_widget_config() {
    let arguments = Arguments::try_parse_from([
      "social-comments",
      "--mastodon-host",
      "mastodon.example",
      "--mastodon-user",
      "owner",
      "--mastodon-toot-id",
      "100",
      "--bluesky-post",
      "https://bsky.app/profile/alice.example/post/abc123",
      "--theme",
      "classic",
      "--format",
      "text",
      "--sanitize",
    ])
    .unwrap();

    assert_eq!(arguments.theme, Theme::Classic);
    assert_eq!(arguments.format, Format::Text);
    assert!(arguments.sanitize);

    let config = arguments.widget_config();

    assert_eq!(config.mastodon.unwrap().status_id, "100");
    assert_eq!(
      config.bluesky.unwrap().uri.as_str(),
      "at://alice.example/app.bsky.feed.post/abc123"
    );
  }

  #[test]
  fn open_requires_output() {
    assert!(Arguments::try_parse_from(["social-comments", "--open"]).is_err());
  }
}
