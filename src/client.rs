use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  bluesky_api: String,
  client: reqwest::Client,
  mastodon_scheme: &'static str,
}

impl Default for Client {
  fn default() -> Self {
    Self {
      bluesky_api: Self::BLUESKY_API.to_string(),
      client: reqwest::Client::new(),
      mastodon_scheme: "https",
    }
  }
}

impl Client {
  const BLUESKY_API: &str = "https://public.api.bsky.app";

  const THREAD_ENDPOINT: &str = "xrpc/app.bsky.feed.getPostThread";

  pub(crate) async fn fetch_bluesky_thread(
    &self,
    uri: &PostUri,
  ) -> Result<Vec<Comment>, FetchError> {
    let url = format!("{}/{}", self.bluesky_api, Self::THREAD_ENDPOINT);

    let response = self
      .client
      .get(url)
      .query(&[("uri", uri.as_str())])
      .header(ACCEPT, "application/json")
      .send()
      .await?;

    Ok(Self::parse::<ThreadResponse>(response).await?.into_comments())
  }

  pub(crate) async fn fetch_mastodon_context(
    &self,
    source: &MastodonSource,
  ) -> Result<Vec<Comment>, FetchError> {
    let url = format!(
      "{}://{}/api/v1/statuses/{}/context",
      self.mastodon_scheme, source.host, source.status_id
    );

    let response = self.client.get(url).send().await?;

    Ok(
      Self::parse::<StatusContext>(response)
        .await?
        .into_comments(&source.host),
    )
  }

  async fn parse<T: DeserializeOwned>(
    response: reqwest::Response,
  ) -> Result<T, FetchError> {
    let status = response.status();

    if !status.is_success() {
      return Err(FetchError::Status { status });
    }

    let body = response.bytes().await?;

    Ok(serde_json::from_slice(&body)?)
  }

  /// Points both APIs at a plain-HTTP server, for tests.
  #[cfg(test)]
  pub(crate) fn with_local_server(address: &str) -> Self {
    Self {
      bluesky_api: format!("http://{address}"),
      client: reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build test client"),
      mastodon_scheme: "http",
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::test_server::TestServer};

  fn mastodon_source(server: &TestServer) -> MastodonSource {
    MastodonSource {
      host: server.address(),
      status_id: "100".to_string(),
      user: "owner".to_string(),
    }
  }

  #[tokio::test]
  async fn mastodon_context_is_fetched_and_mapped() {
    let server = TestServer::start(vec![(
      "/api/v1/statuses/100/context",
      200,
      r#"{"descendants":[{"id":"1","created_at":"2024-05-01T12:00:00Z","content":"<p>hi</p>","account":{"acct":"a","url":"https://m.example/@a"}}]}"#,
    )])
    .await;

    let comments = Client::with_local_server(&server.address())
      .fetch_mastodon_context(&mastodon_source(&server))
      .await
      .unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].author.handle, "@a@m.example");
  }

  #[tokio::test]
  async fn bluesky_thread_sends_uri_as_query_parameter() {
    let server = TestServer::start(vec![(
      "/xrpc/app.bsky.feed.getPostThread?uri=at%3A%2F%2Falice.example%2Fapp.bsky.feed.post%2Fabc123",
      200,
      r#"{"thread":{"replies":[]}}"#,
    )])
    .await;

    let uri = PostUri::parse("at://alice.example/app.bsky.feed.post/abc123")
      .unwrap();

    let comments = Client::with_local_server(&server.address())
      .fetch_bluesky_thread(&uri)
      .await
      .unwrap();

    assert!(comments.is_empty());
  }

  #[tokio::test]
  async fn non_success_status_is_an_error() {
    let server = TestServer::start(vec![(
      "/api/v1/statuses/100/context",
      500,
      "oops",
    )])
    .await;

    let error = Client::with_local_server(&server.address())
      .fetch_mastodon_context(&mastodon_source(&server))
      .await
      .unwrap_err();

    assert!(matches!(error, FetchError::Status { status } if status.as_u16() == 500));
  }

  #[tokio::test]
  async fn bluesky_non_success_status_is_an_error() {
    let server = TestServer::start(vec![(
      "/xrpc/app.bsky.feed.getPostThread?uri=at%3A%2F%2Falice.example%2Fapp.bsky.feed.post%2Fabc123",
      500,
      "{}",
    )])
    .await;

    let uri = PostUri::parse("at://alice.example/app.bsky.feed.post/abc123")
      .unwrap();

    let error = Client::with_local_server(&server.address())
      .fetch_bluesky_thread(&uri)
      .await
      .unwrap_err();

    assert!(matches!(error, FetchError::Status { status } if status.as_u16() == 500));
  }

  #[tokio::test]
  async fn malformed_json_is_a_parse_error() {
    let server = TestServer::start(vec![(
      "/api/v1/statuses/100/context",
      200,
      "{not json",
    )])
    .await;

    let error = Client::with_local_server(&server.address())
      .fetch_mastodon_context(&mastodon_source(&server))
      .await
      .unwrap_err();

    assert!(matches!(error, FetchError::Parse(_)));
  }
}
