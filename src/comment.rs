use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Author {
  pub(crate) avatar_url: Option<String>,
  pub(crate) display_name: String,
  pub(crate) handle: String,
  pub(crate) profile_url: String,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Counts {
  pub(crate) likes: u64,
  pub(crate) replies: u64,
  pub(crate) reposts: u64,
}

/// A reply from either platform, normalized for merging and rendering.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Comment {
  pub(crate) attachments: Vec<Attachment>,
  pub(crate) author: Author,
  pub(crate) content: String,
  pub(crate) counts: Counts,
  pub(crate) id: String,
  /// Only decides indentation, no tree is rebuilt from it.
  pub(crate) parent_id: Option<String>,
  pub(crate) permalink: String,
  pub(crate) platform: Platform,
  pub(crate) published: String,
  pub(crate) timestamp: Option<DateTime<Utc>>,
}

impl Comment {
  pub(crate) fn is_reply(&self) -> bool {
    self.parent_id.as_deref().is_some_and(|id| !id.is_empty())
  }

  /// Stable sort, newest first. Comments without a valid timestamp sink
  /// to the end.
  pub(crate) fn sort_newest_first(comments: &mut [Comment]) {
    comments.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
  }
}
