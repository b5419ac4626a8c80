use {
  std::net::SocketAddr,
  tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
  },
};

type Route = (&'static str, u16, &'static str);

/// Minimal HTTP/1.1 responder serving canned bodies by request target.
pub(crate) struct TestServer {
  address: SocketAddr,
}

impl TestServer {
  pub(crate) fn address(&self) -> String {
    self.address.to_string()
  }

  async fn respond(mut stream: TcpStream, routes: &[Route]) {
    let mut request = Vec::new();
    let mut buffer = [0; 1024];

    while !request.windows(4).any(|window| window == b"\r\n\r\n") {
      match stream.read(&mut buffer).await {
        Ok(0) | Err(_) => return,
        Ok(n) => request.extend_from_slice(&buffer[..n]),
      }
    }

    let request = String::from_utf8_lossy(&request);

    let target = request
      .lines()
      .next()
      .and_then(|line| line.split_whitespace().nth(1))
      .unwrap_or_default();

    let (status, body) = routes
      .iter()
      .find(|(path, _, _)| *path == target)
      .map_or((404, "not found"), |(_, status, body)| (*status, *body));

    let response = format!(
      "HTTP/1.1 {status} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
      body.len()
    );

    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
  }

  pub(crate) async fn start(routes: Vec<Route>) -> Self {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
      while let Ok((stream, _)) = listener.accept().await {
        Self::respond(stream, &routes).await;
      }
    });

    Self { address }
  }
}
