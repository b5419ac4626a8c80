use super::*;

/// Ids arrive as strings from Mastodon but some compatible servers send
/// bare numbers.
pub(crate) fn deserialize_optional_id<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let unexpected = match Option::<Value>::deserialize(deserializer)? {
    None | Some(Value::Null) => return Ok(None),
    Some(Value::String(id)) => return Ok(Some(id)),
    Some(Value::Number(id)) => return Ok(Some(id.to_string())),
    Some(Value::Bool(value)) => Unexpected::Bool(value),
    Some(Value::Array(_)) => Unexpected::Seq,
    Some(Value::Object(_)) => Unexpected::Map,
  };

  Err(de::Error::invalid_type(unexpected, &"an id string or number"))
}

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  match deserialize_optional_id(deserializer)? {
    Some(id) if !id.trim().is_empty() => Ok(id),
    Some(_) => Err(de::Error::invalid_value(
      Unexpected::Str(""),
      &"a non-empty id",
    )),
    None => Err(de::Error::invalid_value(
      Unexpected::Option,
      &"a non-empty id",
    )),
  }
}

pub(crate) fn escape_attribute(value: &str) -> Cow<'_, str> {
  html_escape::encode_double_quoted_attribute(value)
}

pub(crate) fn escape_text(value: &str) -> Cow<'_, str> {
  html_escape::encode_safe(value)
}

pub(crate) fn format_count(
  count: u64,
  singular: &str,
  plural: &str,
) -> String {
  match count {
    1 => format!("1 {singular}"),
    _ => format!("{count} {plural}"),
  }
}

pub(crate) fn format_timestamp(comment: &Comment) -> String {
  match comment.timestamp {
    Some(timestamp) => timestamp
      .with_timezone(&Local)
      .format("%Y-%m-%d %H:%M")
      .to_string(),
    None => comment.published.clone(),
  }
}

pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(value)
    .ok()
    .map(|timestamp| timestamp.with_timezone(&Utc))
}

/// Escaped `href`/`src` value. Anything but an absolute http(s) URL
/// collapses to `#`.
pub(crate) fn safe_url(value: &str) -> Cow<'_, str> {
  match Url::parse(value) {
    Ok(url) if matches!(url.scheme(), "http" | "https") => {
      escape_attribute(value)
    }
    _ => Cow::Borrowed("#"),
  }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  text.split_whitespace().fold(Vec::new(), |mut lines, word| {
    match lines.last_mut() {
      Some(line)
        if line.chars().count() + 1 + word.chars().count() <= width =>
      {
        line.push(' ');
        line.push_str(word);
      }
      _ => lines.push(word.to_string()),
    }

    lines
  })
}

#[cfg(test)]
mod tests {
  use {super::*, serde::Deserialize};

  #[derive(Deserialize, Debug, PartialEq)]
  struct Ids {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    parent: Option<String>,
  }

  fn parse_ids(input: &str) -> Result<Ids, serde_json::Error> {
    serde_json::from_str(input)
  }

  #[test]
  fn ids_accept_strings_and_numbers() {
    assert_eq!(
      parse_ids(r#"{"id": "109876543210", "parent": 42}"#).unwrap(),
      Ids {
        id: "109876543210".to_string(),
        parent: Some("42".to_string()),
      }
    );

    assert_eq!(parse_ids(r#"{"id": 7, "parent": null}"#).unwrap().parent, None);
    assert_eq!(parse_ids(r#"{"id": 7}"#).unwrap().parent, None);
  }

  #[test]
  fn ids_must_be_present_and_non_empty() {
    assert!(parse_ids(r#"{"id": null}"#).is_err());
    assert!(parse_ids(r#"{"id": ""}"#).is_err());
    assert!(parse_ids(r#"{"id": "  "}"#).is_err());
    assert!(parse_ids("{}").is_err());
    assert!(parse_ids(r#"{"id": true}"#).is_err());
  }

  #[test]
  fn escape_text_neutralizes_markup() {
    let escaped = escape_text("<b>hi</b> & 'you'");

    assert!(escaped.starts_with("&lt;b&gt;hi&lt;"));
    assert!(escaped.contains(" &amp; "));
    assert!(!escaped.contains(['<', '>', '\'']));
  }

  #[test]
  fn format_count_handles_singular_and_plural() {
    assert_eq!(format_count(1, "reply", "replies"), "1 reply");
    assert_eq!(format_count(2, "reply", "replies"), "2 replies");
    assert_eq!(format_count(0, "like", "likes"), "0 likes");
  }

  #[test]
  fn parse_timestamp_accepts_offsets_and_fractions() {
    assert_eq!(
      parse_timestamp("2024-05-01T12:00:00.123Z").map(|t| t.timestamp()),
      Some(1_714_564_800)
    );

    assert_eq!(
      parse_timestamp("2024-05-01T14:00:00+02:00").map(|t| t.timestamp()),
      Some(1_714_564_800)
    );

    assert_eq!(parse_timestamp("not a date"), None);
  }

  #[test]
  fn safe_url_rejects_non_http_schemes() {
    assert_eq!(safe_url("javascript:alert(1)"), "#");
    assert_eq!(safe_url("relative/path"), "#");
    assert_eq!(
      safe_url("https://example.com/?a=1&b=\"2\""),
      "https://example.com/?a=1&amp;b=&quot;2&quot;"
    );
  }

  #[test]
  fn wrap_text_returns_empty_for_empty_input() {
    assert_eq!(wrap_text("", 10), Vec::<String>::new());
  }

  #[test]
  fn wrap_text_keeps_overlong_words_whole() {
    assert_eq!(
      wrap_text("a supercalifragilistic word", 8),
      vec!["a", "supercalifragilistic", "word"]
    );
  }

  #[test]
  fn wrap_text_wraps_longer_text() {
    assert_eq!(
      wrap_text("hello brave new world", 11),
      vec!["hello brave".to_string(), "new world".to_string()]
    );
  }
}
