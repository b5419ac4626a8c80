use super::*;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum AttachmentKind {
  Audio,
  Gifv,
  Image,
  Other(String),
  Video,
}

impl From<&str> for AttachmentKind {
  fn from(kind: &str) -> Self {
    match kind {
      "audio" => Self::Audio,
      "gifv" => Self::Gifv,
      "image" => Self::Image,
      "video" => Self::Video,
      other => Self::Other(other.to_string()),
    }
  }
}

impl Display for AttachmentKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(match self {
      Self::Audio => "audio",
      Self::Gifv => "gifv",
      Self::Image => "image",
      Self::Other(kind) => kind,
      Self::Video => "video",
    })
  }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Attachment {
  pub(crate) alt_text: Option<String>,
  pub(crate) kind: AttachmentKind,
  pub(crate) mime_type: Option<String>,
  pub(crate) preview_url: Option<String>,
  pub(crate) url: String,
}
