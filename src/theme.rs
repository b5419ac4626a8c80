use super::*;

/// Icon set used by the renderer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum Theme {
  /// Font Awesome 6 brand icons with inline SVG counters.
  #[default]
  Brands,
  /// Font Awesome 4 glyphs throughout.
  Classic,
}

impl Theme {
  const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.7.1/css/all.min.css";

  pub(crate) fn extra_styles(self) -> &'static str {
    match self {
      Self::Brands => {
        "
.social-comment .platform-indicator {
  display: flex;
  align-items: center;
}

.social-comment .platform-indicator i {
  font-size: 16px;
}
"
      }
      Self::Classic => {
        "
.social-comment .platform-indicator {
  font-size: 0.8em;
  color: #888;
}
"
      }
    }
  }

  pub(crate) fn likes_icon(self) -> &'static str {
    match self {
      Self::Brands => {
        r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor"><path d="M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z"/></svg>"#
      }
      Self::Classic => r#"<i class="fa fa-star fa-fw"></i>"#,
    }
  }

  pub(crate) fn platform_icon(self, platform: Platform) -> &'static str {
    match (self, platform) {
      (Self::Brands, Platform::Bluesky) => {
        r#"<i class="fa-brands fa-bluesky" style="color: #0085ff"></i>"#
      }
      (Self::Brands, Platform::Mastodon) => {
        r#"<i class="fab fa-mastodon" style="color: #563acc"></i>"#
      }
      (Self::Classic, Platform::Bluesky) => {
        r#"<svg height="12" width="12" viewBox="0 0 16 16"><path fill="currentColor" d="M8 0C3.58 0 0 3.58 0 8s3.58 8 8 8 8-3.58 8-8-3.58-8-8-8zm3.5 7.5H9v5H7v-5H4.5v-2h7v2z"/></svg>"#
      }
      (Self::Classic, Platform::Mastodon) => r#"<i class="fa fa-mastodon"></i>"#,
    }
  }

  pub(crate) fn replies_icon(self) -> &'static str {
    match self {
      Self::Brands => {
        r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor"><path d="M10 9V5l-7 7 7 7v-4.1c5 0 8.5 1.6 11 5.1-1-5-4-10-11-11z"/></svg>"#
      }
      Self::Classic => r#"<i class="fa fa-reply fa-fw"></i>"#,
    }
  }

  pub(crate) fn reposts_icon(self) -> &'static str {
    match self {
      Self::Brands => {
        r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor"><path d="M23.77 15.67l-3.5 3.5c-.15.15-.34.22-.53.22s-.38-.07-.53-.22l-3.5-3.5c-.29-.29-.29-.77 0-1.06s.77-.29 1.06 0l2.22 2.22V6.9c0-1.24-1.01-2.25-2.25-2.25h-5.85c-.41 0-.75-.34-.75-.75s.34-.75.75-.75h5.85c2.07 0 3.75 1.68 3.75 3.75v10.24l2.22-2.22c.29-.29.77-.29 1.06 0s.29.77 0 1.06zM13.11 18.95H7.26c-1.24 0-2.25-1.01-2.25-2.25V6.46l2.22 2.22c.15.15.34.22.53.22s.38-.07.53-.22c.29-.29.29-.77 0-1.06l-3.5-3.5c-.29-.29-.77-.29-1.06 0l-3.5 3.5c-.29.29-.29.77 0 1.06s.77.29 1.06 0l2.22-2.22V16.7c0 2.07 1.68 3.75 3.75 3.75h5.85c.41 0 .75-.34.75-.75s-.34-.75-.75-.75z"/></svg>"#
      }
      Self::Classic => r#"<i class="fa fa-retweet fa-fw"></i>"#,
    }
  }

  /// Stylesheet a standalone page must link for the icons to show.
  pub(crate) fn stylesheet(self) -> Option<&'static str> {
    match self {
      Self::Brands => Some(Self::FONT_AWESOME),
      Self::Classic => None,
    }
  }
}
