use super::*;

/// One activation of the comment widget. Owns its comments exclusively;
/// nothing is shared between widgets or kept across activations.
pub(crate) struct Widget {
  client: Client,
  comments: Vec<Comment>,
  config: WidgetConfig,
  renderer: Renderer,
  sanitizer: Option<Box<dyn Sanitizer>>,
  state: LoadState,
}

impl Widget {
  async fn bluesky_comments(&self) -> Vec<Comment> {
    let Some(source) = &self.config.bluesky else {
      return Vec::new();
    };

    match self.client.fetch_bluesky_thread(&source.uri).await {
      Ok(comments) => {
        debug!(uri = %source.uri, count = comments.len(), "fetched Bluesky replies");
        comments
      }
      Err(error) => {
        warn!(uri = %source.uri, "error loading Bluesky comments: {error}");
        Vec::new()
      }
    }
  }

  #[cfg(test)]
  pub(crate) fn comments(&self) -> &[Comment] {
    &self.comments
  }

  fn header(&self) -> String {
    let mastodon = self.config.mastodon.as_ref().map(|source| {
      format!(
        r#"<a href="{}">Mastodon</a>"#,
        escape_attribute(&source.web_url())
      )
    });

    let bluesky = self.config.bluesky.as_ref().map(|source| {
      format!(r#"<a href="{}">Bluesky</a>"#, safe_url(&source.web_url()))
    });

    let links = mastodon.into_iter().chain(bluesky).collect::<Vec<_>>();

    if links.is_empty() {
      return String::new();
    }

    format!("<p>Join the conversation on {}</p>", links.join(" or "))
  }

  /// Runs the load sequence. Does nothing once comments are loaded.
  pub(crate) async fn load(&mut self) {
    if matches!(self.state, LoadState::Loaded(_)) {
      debug!("comments already loaded");
      return;
    }

    self.state = LoadState::Loading;

    match self.load_comments().await {
      Ok((comments, blocks)) => {
        info!(count = comments.len(), "loaded comments");
        self.comments = comments;
        self.state = LoadState::Loaded(blocks);
      }
      Err(error) => {
        error!("error loading comments: {error:#}");
        self.state = LoadState::Error;
      }
    }
  }

  async fn load_comments(&self) -> Result<(Vec<Comment>, Vec<String>)> {
    let (mut comments, bluesky) =
      join(self.mastodon_comments(), self.bluesky_comments()).await;

    comments.extend(bluesky);

    Comment::sort_newest_first(&mut comments);

    let blocks = comments
      .iter()
      .map(|comment| self.render_block(comment))
      .collect::<Result<Vec<_>>>()?;

    Ok((comments, blocks))
  }

  async fn mastodon_comments(&self) -> Vec<Comment> {
    let Some(source) = &self.config.mastodon else {
      return Vec::new();
    };

    match self.client.fetch_mastodon_context(source).await {
      Ok(comments) => {
        debug!(host = %source.host, count = comments.len(), "fetched Mastodon replies");
        comments
      }
      Err(error) => {
        warn!(host = %source.host, "error loading Mastodon comments: {error}");
        Vec::new()
      }
    }
  }

  pub(crate) fn new(client: Client, config: WidgetConfig, theme: Theme) -> Self {
    Self {
      client,
      comments: Vec::new(),
      config,
      renderer: Renderer::new(theme),
      sanitizer: None,
      state: LoadState::Idle,
    }
  }

  /// Widget markup: heading, links to the original posts and the comment
  /// list container.
  pub(crate) fn render(&self) -> String {
    let style = self
      .config
      .style
      .as_deref()
      .map(|style| format!(r#" style="{}""#, escape_attribute(style)))
      .unwrap_or_default();

    let body = match &self.state {
      LoadState::Idle | LoadState::Loading => {
        format!("<p>{LOADING_MESSAGE}</p>")
      }
      LoadState::Loaded(blocks) if blocks.is_empty() => {
        format!("<p>{EMPTY_MESSAGE}</p>")
      }
      LoadState::Loaded(blocks) => blocks.concat(),
      LoadState::Error => format!("<p>{ERROR_MESSAGE}</p>"),
    };

    format!(
      r#"<h2>Comments</h2>{}<div id="social-comments-list"{style}>{body}</div>"#,
      self.header()
    )
  }

  fn render_block(&self, comment: &Comment) -> Result<String> {
    let block = self.renderer.render_comment(comment)?;

    Ok(match &self.sanitizer {
      Some(sanitizer) => sanitizer.sanitize(&block),
      None => block,
    })
  }

  pub(crate) fn render_text(&self, width: usize) -> Result<String> {
    match &self.state {
      LoadState::Idle | LoadState::Loading => Ok(format!("{LOADING_MESSAGE}\n")),
      LoadState::Error => Ok(format!("{ERROR_MESSAGE}\n")),
      LoadState::Loaded(_) if self.comments.is_empty() => {
        Ok(format!("{EMPTY_MESSAGE}\n"))
      }
      LoadState::Loaded(_) => {
        let plain = PlainText::new(width);

        Ok(
          self
            .comments
            .iter()
            .map(|comment| plain.render_comment(comment))
            .collect::<Result<Vec<_>>>()?
            .join("\n"),
        )
      }
    }
  }

  #[cfg(test)]
  pub(crate) fn state(&self) -> &LoadState {
    &self.state
  }

  pub(crate) fn with_sanitizer(
    mut self,
    sanitizer: impl Sanitizer + 'static,
  ) -> Self {
    self.sanitizer = Some(Box::new(sanitizer));
    self
  }
}
