use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Account {
  pub(crate) acct: String,
  pub(crate) avatar_static: Option<String>,
  #[serde(default)]
  pub(crate) display_name: String,
  #[serde(default)]
  pub(crate) url: String,
}

impl Account {
  /// `@acct`, with the instance hostname appended for local accounts.
  /// The hostname comes from the profile URL, or `fallback_host` when
  /// that does not parse.
  pub(crate) fn handle(&self, fallback_host: &str) -> String {
    let acct = self.acct.trim_start_matches('@');

    if acct.contains('@') {
      return format!("@{acct}");
    }

    let host = Url::parse(&self.url)
      .ok()
      .and_then(|url| url.host_str().map(str::to_string))
      .unwrap_or_else(|| fallback_host.to_string());

    format!("@{acct}@{host}")
  }
}

#[derive(Debug, Deserialize)]
pub(crate) struct MediaAttachment {
  pub(crate) description: Option<String>,
  pub(crate) mime_type: Option<String>,
  pub(crate) preview_url: Option<String>,
  pub(crate) r#type: String,
  #[serde(default)]
  pub(crate) url: String,
}

impl From<MediaAttachment> for Attachment {
  fn from(media: MediaAttachment) -> Self {
    Self {
      alt_text: media.description,
      kind: AttachmentKind::from(media.r#type.as_str()),
      mime_type: media.mime_type,
      preview_url: media.preview_url,
      url: media.url,
    }
  }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Status {
  pub(crate) account: Account,
  #[serde(default)]
  pub(crate) content: String,
  #[serde(default)]
  pub(crate) created_at: String,
  pub(crate) favourites_count: Option<u64>,
  #[serde(deserialize_with = "deserialize_id")]
  pub(crate) id: String,
  #[serde(default, deserialize_with = "deserialize_optional_id")]
  pub(crate) in_reply_to_id: Option<String>,
  #[serde(default)]
  pub(crate) media_attachments: Vec<MediaAttachment>,
  pub(crate) reblogs_count: Option<u64>,
  pub(crate) replies_count: Option<u64>,
  pub(crate) url: Option<String>,
}

impl Status {
  pub(crate) fn into_comment(self, host: &str) -> Comment {
    let handle = self.account.handle(host);

    let Account {
      avatar_static,
      display_name,
      url: profile_url,
      ..
    } = self.account;

    Comment {
      attachments: self
        .media_attachments
        .into_iter()
        .map(Attachment::from)
        .collect(),
      author: Author {
        avatar_url: avatar_static,
        display_name,
        handle,
        profile_url,
      },
      content: self.content,
      counts: Counts {
        likes: self.favourites_count.unwrap_or_default(),
        replies: self.replies_count.unwrap_or_default(),
        reposts: self.reblogs_count.unwrap_or_default(),
      },
      permalink: self.url.unwrap_or_default(),
      parent_id: self.in_reply_to_id,
      platform: Platform::Mastodon,
      timestamp: parse_timestamp(&self.created_at),
      published: self.created_at,
      id: self.id,
    }
  }
}

/// Response of `GET /api/v1/statuses/{id}/context`.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusContext {
  #[serde(default)]
  pub(crate) descendants: Vec<Status>,
}

impl StatusContext {
  pub(crate) fn into_comments(self, host: &str) -> Vec<Comment> {
    self
      .descendants
      .into_iter()
      .map(|status| status.into_comment(host))
      .collect()
  }
}
