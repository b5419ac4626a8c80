use {
  anyhow::{Context, bail},
  arguments::{Arguments, Format},
  attachment::{Attachment, AttachmentKind},
  chrono::{DateTime, Local, Utc},
  clap::{Parser, ValueEnum},
  client::Client,
  comment::{Author, Comment, Counts},
  config::{Ambient, Attributes, MastodonSource, WidgetConfig},
  crossterm::style::Stylize,
  fetch_error::FetchError,
  futures::future::join,
  load_state::LoadState,
  plain_text::PlainText,
  platform::Platform,
  post_uri::{PostUri, record_key},
  renderer::Renderer,
  reqwest::{StatusCode, header::ACCEPT},
  sanitizer::{HtmlSanitizer, Sanitizer},
  serde::{
    Deserialize, Deserializer,
    de::{self, DeserializeOwned, Unexpected},
  },
  serde_json::Value,
  status::StatusContext,
  std::{
    backtrace::BacktraceStatus,
    borrow::Cow,
    fmt::{self, Display},
    fs,
    io::{self, IsTerminal, Write as _},
    path::PathBuf,
    process,
  },
  theme::Theme,
  thiserror::Error,
  thread::ThreadResponse,
  tracing::{debug, error, info, warn},
  tracing_subscriber::EnvFilter,
  url::Url,
  utils::{
    deserialize_id, deserialize_optional_id, escape_attribute,
    escape_text, format_count, format_timestamp, parse_timestamp, safe_url,
    wrap_text,
  },
  widget::Widget,
};

mod arguments;
mod attachment;
mod client;
mod comment;
mod config;
mod fetch_error;
mod load_state;
mod page;
mod plain_text;
mod platform;
mod post_uri;
mod renderer;
mod sanitizer;
mod status;
#[cfg(test)]
mod test_server;
mod theme;
mod thread;
mod utils;
mod widget;

const EMPTY_MESSAGE: &str = "No comments found";
const ERROR_MESSAGE: &str = "Error loading comments";
const LOADING_MESSAGE: &str = "Loading comments...";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("social_comments=info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_ansi(io::stderr().is_terminal())
    .init();
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  initialize_logging();

  let widget =
    Widget::new(Client::default(), arguments.widget_config(), arguments.theme);

  let mut widget = if arguments.sanitize {
    widget.with_sanitizer(HtmlSanitizer::default())
  } else {
    widget
  };

  widget.load().await;

  let output = match arguments.format {
    Format::Html if arguments.standalone => {
      page::document(&widget.render(), arguments.theme)
    }
    Format::Html => widget.render(),
    Format::Text => widget.render_text(arguments.width)?,
  };

  match &arguments.output {
    Some(path) => {
      fs::write(path, &output)
        .with_context(|| format!("could not write `{}`", path.display()))?;

      info!(path = %path.display(), "wrote comments");

      if arguments.open {
        webbrowser::open(&path.to_string_lossy())
          .with_context(|| format!("could not open `{}`", path.display()))?;
      }
    }
    None => {
      let mut stdout = io::stdout().lock();
      stdout.write_all(output.as_bytes())?;
      stdout.flush()?;
    }
  }

  Ok(())
}

fn report(error: &anyhow::Error) {
  let use_color = io::stderr().is_terminal();

  let heading = |text: &str| {
    if use_color {
      text.bold().red().to_string()
    } else {
      text.to_string()
    }
  };

  eprintln!("{} could not render comments: {error}", heading("error:"));

  let causes = error.chain().skip(1).collect::<Vec<_>>();

  if !causes.is_empty() {
    eprintln!("\n{}", heading("caused by:"));

    for cause in causes {
      eprintln!("  {} {cause}", heading("-"));
    }
  }

  let backtrace = error.backtrace();

  if backtrace.status() == BacktraceStatus::Captured {
    eprintln!("\n{}\n{backtrace}", heading("backtrace:"));
  }
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    report(&error);
    process::exit(1);
  }
}
