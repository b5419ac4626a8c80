use {super::*, std::fmt::Write};

/// Builds the markup block for a single comment. Every remote field is
/// escaped here; Mastodon content is the only value inserted as is, since
/// the instance serves it sanitized.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Renderer {
  theme: Theme,
}

impl Renderer {
  pub(crate) fn new(theme: Theme) -> Self {
    Self { theme }
  }

  fn render_attachments(
    out: &mut String,
    attachments: &[Attachment],
  ) -> fmt::Result {
    if attachments.is_empty() {
      return Ok(());
    }

    out.push_str(r#"<div class="attachments">"#);

    for attachment in attachments {
      let url = safe_url(&attachment.url);

      let mime_type =
        escape_attribute(attachment.mime_type.as_deref().unwrap_or_default());

      match &attachment.kind {
        AttachmentKind::Image => write!(
          out,
          r#"<a href="{url}" rel="nofollow"><img src="{}" alt="{}" /></a>"#,
          safe_url(attachment.preview_url.as_deref().unwrap_or(&attachment.url)),
          escape_attribute(attachment.alt_text.as_deref().unwrap_or_default()),
        )?,
        AttachmentKind::Video => write!(
          out,
          r#"<video controls><source src="{url}" type="{mime_type}"></video>"#
        )?,
        AttachmentKind::Gifv => write!(
          out,
          r#"<video autoplay loop muted playsinline><source src="{url}" type="{mime_type}"></video>"#
        )?,
        AttachmentKind::Audio => write!(
          out,
          r#"<audio controls><source src="{url}" type="{mime_type}"></audio>"#
        )?,
        AttachmentKind::Other(kind) => write!(
          out,
          r#"<a href="{url}" rel="nofollow">{}</a>"#,
          escape_text(kind)
        )?,
      }
    }

    out.push_str("</div>");

    Ok(())
  }

  pub(crate) fn render_comment(&self, comment: &Comment) -> Result<String> {
    let mut out = String::new();

    self
      .write_comment(&mut out, comment)
      .with_context(|| format!("failed to render comment {}", comment.id))?;

    Ok(out)
  }

  fn render_counter(
    out: &mut String,
    class: &str,
    icon: &str,
    count: u64,
    permalink: &str,
  ) -> fmt::Result {
    let active = if count > 0 { " active" } else { "" };

    let label = if count > 0 {
      count.to_string()
    } else {
      String::new()
    };

    write!(
      out,
      r#"<div class="{class}{active}"><a href="{permalink}" rel="nofollow">{icon}{label}</a></div>"#
    )
  }

  fn write_comment(&self, out: &mut String, comment: &Comment) -> fmt::Result {
    let Comment { author, counts, .. } = comment;

    let permalink = safe_url(&comment.permalink);
    let profile = safe_url(&author.profile_url);

    write!(out, r#"<div class="social-comment {}""#, comment.platform)?;

    if comment.is_reply() {
      out.push_str(r#" style="margin-left: var(--comment-indent)""#);
    }

    out.push('>');

    write!(
      out,
      r#"<div class="author"><div class="avatar"><img src="{}" height="60" width="60" alt="" /></div>"#,
      author
        .avatar_url
        .as_deref()
        .map_or(Cow::Borrowed(""), safe_url),
    )?;

    write!(
      out,
      r#"<div class="details"><a class="name" href="{profile}" rel="nofollow">{}</a><a class="user" href="{profile}" rel="nofollow">{}</a></div>"#,
      escape_text(&author.display_name),
      escape_text(&author.handle),
    )?;

    let datetime = comment
      .timestamp
      .map(|timestamp| timestamp.to_rfc3339())
      .unwrap_or_default();

    write!(
      out,
      r#"<a class="date" href="{permalink}" rel="nofollow"><time datetime="{datetime}">{}</time></a>"#,
      escape_text(&format_timestamp(comment)),
    )?;

    write!(
      out,
      r#"<span class="platform-indicator" title="{}">{}</span></div>"#,
      comment.platform.label(),
      self.theme.platform_icon(comment.platform),
    )?;

    out.push_str(r#"<div class="content">"#);

    match comment.platform {
      Platform::Mastodon => out.push_str(&comment.content),
      Platform::Bluesky => out.push_str(&escape_text(&comment.content)),
    }

    out.push_str("</div>");

    Self::render_attachments(out, &comment.attachments)?;

    let (reposts, likes) = comment.platform.counter_classes();

    out.push_str(r#"<div class="status">"#);

    Self::render_counter(
      out,
      "replies",
      self.theme.replies_icon(),
      counts.replies,
      &permalink,
    )?;

    Self::render_counter(
      out,
      reposts,
      self.theme.reposts_icon(),
      counts.reposts,
      &permalink,
    )?;

    Self::render_counter(
      out,
      likes,
      self.theme.likes_icon(),
      counts.likes,
      &permalink,
    )?;

    out.push_str("</div></div>");

    Ok(())
  }
}
