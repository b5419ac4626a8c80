use {super::*, std::fmt::Write};

/// Terminal rendition of a comment list.
pub(crate) struct PlainText {
  width: usize,
}

impl PlainText {
  const INDENT: &str = "  ";

  fn body(comment: &Comment, width: usize) -> Result<Vec<String>> {
    Ok(match comment.platform {
      Platform::Mastodon => html2text::from_read(comment.content.as_bytes(), width)
        .context("failed to convert Mastodon content to text")?
        .lines()
        .map(|line| line.trim_end().to_string())
        .filter(|line| !line.is_empty())
        .collect(),
      Platform::Bluesky => comment
        .content
        .lines()
        .flat_map(|line| wrap_text(line, width))
        .collect(),
    })
  }

  pub(crate) fn new(width: usize) -> Self {
    Self { width }
  }

  pub(crate) fn render_comment(&self, comment: &Comment) -> Result<String> {
    let indent = if comment.is_reply() { Self::INDENT } else { "" };

    let width = self
      .width
      .saturating_sub(indent.len())
      .max(Self::INDENT.len() * 10);

    let mut lines = vec![format!(
      "{} ({}) · {} · {}",
      comment.author.display_name,
      comment.author.handle,
      comment.platform.label(),
      format_timestamp(comment),
    )];

    lines.extend(Self::body(comment, width)?);

    lines.extend(
      comment
        .attachments
        .iter()
        .map(|attachment| format!("[{}] {}", attachment.kind, attachment.url)),
    );

    let Counts {
      likes,
      replies,
      reposts,
    } = comment.counts;

    lines.push(format!(
      "{} · {} · {} · {}",
      format_count(replies, "reply", "replies"),
      format_count(reposts, "repost", "reposts"),
      format_count(likes, "like", "likes"),
      comment.permalink
    ));

    let mut out = String::new();

    for line in lines {
      writeln!(out, "{indent}{line}")?;
    }

    Ok(out)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn comment(platform: Platform, content: &str) -> Comment {
    Comment {
      attachments: Vec::new(),
      author: Author {
        avatar_url: None,
        display_name: "Ada".to_string(),
        handle: "ada.example".to_string(),
        profile_url: "https://bsky.app/profile/did:plc:ada".to_string(),
      },
      content: content.to_string(),
      counts: Counts {
        likes: 3,
        replies: 1,
        reposts: 0,
      },
      id: "at://did:plc:ada/app.bsky.feed.post/1".to_string(),
      parent_id: None,
      permalink: "https://bsky.app/profile/did:plc:ada/post/1".to_string(),
      platform,
      published: "2024-05-01T12:00:00Z".to_string(),
      timestamp: parse_timestamp("2024-05-01T12:00:00Z"),
    }
  }

  #[test]
  fn mastodon_markup_is_converted_to_text() {
    let text = PlainText::new(80)
      .render_comment(&comment(Platform::Mastodon, "<p>Hello there</p>"))
      .unwrap();

    assert!(text.contains("Hello there"));
    assert!(!text.contains("<p>"));
  }

  #[test]
  fn bluesky_text_is_kept_literally() {
    let text = PlainText::new(80)
      .render_comment(&comment(Platform::Bluesky, "<b>hi</b>"))
      .unwrap();

    let lines = text.lines().collect::<Vec<_>>();

    assert!(lines[0].starts_with("Ada (ada.example) · Bluesky · "));
    assert_eq!(lines[1], "<b>hi</b>");
    assert_eq!(
      lines[2],
      "1 reply · 0 reposts · 3 likes · https://bsky.app/profile/did:plc:ada/post/1"
    );
  }

  #[test]
  fn replies_are_indented() {
    let mut reply = comment(Platform::Bluesky, "nested");
    reply.parent_id = Some("at://parent".to_string());

    let text = PlainText::new(80).render_comment(&reply).unwrap();

    assert!(text.lines().all(|line| line.starts_with(PlainText::INDENT)));
  }
}
