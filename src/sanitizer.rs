use super::*;

/// Markup cleaner supplied by the host, run over every assembled comment
/// block before it is inserted.
pub(crate) trait Sanitizer: Send + Sync {
  fn sanitize(&self, html: &str) -> String;
}

impl<F> Sanitizer for F
where
  F: Fn(&str) -> String + Send + Sync,
{
  fn sanitize(&self, html: &str) -> String {
    self(html)
  }
}

/// Allow-list cleaner that keeps the widget's own markup (classes, inline
/// indentation, media players) and drops everything else, scripts and
/// event handlers included.
pub(crate) struct HtmlSanitizer {
  builder: ammonia::Builder<'static>,
}

impl Default for HtmlSanitizer {
  fn default() -> Self {
    let mut builder = ammonia::Builder::default();

    builder
      .add_tags(&["audio", "source", "time", "video"])
      .add_generic_attributes(&["class", "style"])
      .add_tag_attributes("audio", &["controls"])
      .add_tag_attributes("source", &["src", "type"])
      .add_tag_attributes("time", &["datetime"])
      .add_tag_attributes(
        "video",
        &["autoplay", "controls", "loop", "muted", "playsinline"],
      )
      .link_rel(Some("nofollow noopener noreferrer"));

    Self { builder }
  }
}

impl Sanitizer for HtmlSanitizer {
  fn sanitize(&self, html: &str) -> String {
    self.builder.clean(html).to_string()
  }
}
