use super::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileView {
  pub(crate) avatar: Option<String>,
  #[serde(default)]
  pub(crate) did: String,
  pub(crate) display_name: Option<String>,
  #[serde(default)]
  pub(crate) handle: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordRef {
  pub(crate) uri: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReplyRef {
  pub(crate) parent: Option<RecordRef>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PostRecord {
  pub(crate) reply: Option<ReplyRef>,
  #[serde(default)]
  pub(crate) text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageView {
  #[serde(default)]
  pub(crate) alt: String,
  pub(crate) fullsize: String,
  pub(crate) thumb: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "$type")]
pub(crate) enum EmbedView {
  #[serde(rename = "app.bsky.embed.images#view")]
  Images { images: Vec<ImageView> },
  #[serde(other)]
  Unsupported,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostView {
  pub(crate) author: ProfileView,
  pub(crate) embed: Option<EmbedView>,
  #[serde(default)]
  pub(crate) indexed_at: String,
  pub(crate) like_count: Option<u64>,
  #[serde(default)]
  pub(crate) record: PostRecord,
  pub(crate) reply_count: Option<u64>,
  pub(crate) repost_count: Option<u64>,
  #[serde(deserialize_with = "deserialize_id")]
  pub(crate) uri: String,
}

impl PostView {
  fn attachments(embed: Option<EmbedView>) -> Vec<Attachment> {
    match embed {
      Some(EmbedView::Images { images }) => images
        .into_iter()
        .map(|image| Attachment {
          alt_text: Some(image.alt).filter(|alt| !alt.is_empty()),
          kind: AttachmentKind::Image,
          mime_type: None,
          preview_url: image.thumb,
          url: image.fullsize,
        })
        .collect(),
      Some(EmbedView::Unsupported) | None => Vec::new(),
    }
  }

  /// Permalinks are built from the author's DID, which survives handle
  /// changes.
  pub(crate) fn into_comment(self) -> Comment {
    let ProfileView {
      avatar,
      did,
      display_name,
      handle,
    } = self.author;

    let permalink = format!(
      "https://bsky.app/profile/{did}/post/{}",
      record_key(&self.uri)
    );

    Comment {
      attachments: Self::attachments(self.embed),
      author: Author {
        avatar_url: avatar,
        display_name: display_name
          .filter(|name| !name.trim().is_empty())
          .unwrap_or_else(|| handle.clone()),
        profile_url: format!("https://bsky.app/profile/{did}"),
        handle,
      },
      content: self.record.text,
      counts: Counts {
        likes: self.like_count.unwrap_or_default(),
        replies: self.reply_count.unwrap_or_default(),
        reposts: self.repost_count.unwrap_or_default(),
      },
      id: self.uri,
      parent_id: self
        .record
        .reply
        .and_then(|reply| reply.parent)
        .map(|parent| parent.uri),
      permalink,
      platform: Platform::Bluesky,
      timestamp: parse_timestamp(&self.indexed_at),
      published: self.indexed_at,
    }
  }
}

/// One node of a `getPostThread` reply tree. Blocked and deleted replies
/// arrive as nodes without a post.
#[derive(Debug, Deserialize)]
pub(crate) struct ThreadNode {
  pub(crate) post: Option<PostView>,
  #[serde(default)]
  pub(crate) replies: Vec<ThreadNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ThreadResponse {
  pub(crate) thread: ThreadNode,
}

impl ThreadResponse {
  /// Pre-order flattening of the reply tree: every reply is followed by
  /// its own replies. Uses an explicit stack, so thread depth is bounded
  /// by memory rather than by the call stack.
  pub(crate) fn into_comments(self) -> Vec<Comment> {
    let mut comments = Vec::new();

    let mut stack = self.thread.replies;
    stack.reverse();

    while let Some(node) = stack.pop() {
      let ThreadNode { post, mut replies } = node;

      match post {
        Some(post) => comments.push(post.into_comment()),
        None => debug!("skipping Bluesky reply without a post view"),
      }

      replies.reverse();
      stack.append(&mut replies);
    }

    comments
  }
}
