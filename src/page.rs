use super::*;

const STYLES: &str = "
:root {
  --font-color: #5d686f;
  --font-size: 1.0rem;
  --block-border-width: 1px;
  --block-border-radius: 3px;
  --block-border-color: #ededf0;
  --block-background-color: #f7f8f8;
  --comment-indent: 40px;
}

#social-comments-list {
  margin: 0 auto;
  margin-top: 1rem;
}

.social-comment {
  background-color: var(--block-background-color);
  border-radius: var(--block-border-radius);
  border: var(--block-border-width) var(--block-border-color) solid;
  padding: 20px;
  margin-bottom: 1.5rem;
  display: flex;
  flex-direction: column;
  color: var(--font-color);
  font-size: var(--font-size);
}

.social-comment p {
  margin-bottom: 0px;
}

.social-comment .author {
  padding-top: 0;
  display: flex;
}

.social-comment .author a {
  text-decoration: none;
}

.social-comment .author .avatar img {
  margin-right: 1rem;
  min-width: 60px;
  border-radius: 5px;
}

.social-comment .author .details {
  display: flex;
  flex-direction: column;
}

.social-comment .author .details .name {
  font-weight: bold;
}

.social-comment .author .details .user {
  color: #5d686f;
  font-size: medium;
}

.social-comment .author .date {
  margin-left: auto;
  font-size: small;
}

.social-comment .content {
  margin: 15px 20px;
}

.social-comment .attachments {
  margin: 0px 10px;
}

.social-comment .attachments > * {
  margin: 0px 10px;
}

.social-comment .attachments img {
  max-width: 100%;
}

.social-comment .content p:first-child {
  margin-top: 0;
  margin-bottom: 0;
}

.social-comment .status > div {
  display: inline-block;
  margin-right: 15px;
}

.social-comment .status a {
  color: #5d686f;
  text-decoration: none;
}

.social-comment .status .replies.active a {
  color: #003eaa;
}

.social-comment .status .reblogs.active a,
.social-comment .status .reposts.active a {
  color: #8c8dff;
}

.social-comment .status .favourites.active a,
.social-comment .status .likes.active a {
  color: #ca8f04;
}

.social-comment .platform-indicator {
  margin-left: auto;
  padding: 2px 6px;
  border-radius: 4px;
  background: rgba(0,0,0,0.05);
}
";

/// Wraps widget markup in a complete HTML document carrying the widget
/// stylesheet and whatever icon stylesheet the theme needs.
pub(crate) fn document(widget: &str, theme: Theme) -> String {
  let stylesheet = theme
    .stylesheet()
    .map(|href| format!(r#"<link rel="stylesheet" href="{href}">"#))
    .unwrap_or_default();

  format!(
    "<!doctype html>
<html>
<head>
<meta charset=\"utf-8\">
<title>Comments</title>
{stylesheet}
<style>{STYLES}{}</style>
</head>
<body>
<section class=\"social-comments\">
{widget}
</section>
</body>
</html>
",
    theme.extra_styles()
  )
}
