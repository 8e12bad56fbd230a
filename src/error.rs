use std::{
  fmt::{self, Display, Formatter},
  path::PathBuf,
};

use snafu::Snafu;

use crate::span::SourceSpan;

/// Everything that can go wrong while driving the embedded compiler.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
  /// No compiler executable could be located. Raised before any I/O.
  #[snafu(display("Embedded Sass compiler executable not found. Searched: {}", searched.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")))]
  ExecutableNotFound { searched: Vec<PathBuf> },

  /// The executable was found but could not be started.
  #[snafu(display("Failed to spawn the embedded Sass compiler at {}: {source}", path.display()))]
  Spawn {
    path: PathBuf,
    source: std::io::Error,
  },

  /// The host detected a protocol violation in data received from the
  /// compiler.
  #[snafu(display("Compiler caused error: {message}"))]
  Compiler { message: String },

  /// The compiler reported a protocol violation by the host via an
  /// out-of-band `Error` message.
  #[snafu(display("Compiler reported error: {message}"))]
  Host { message: String },

  /// A request/response bookkeeping violation detected locally.
  #[snafu(display("{message}"))]
  Protocol { message: String },

  /// The dispatcher already failed; no further messages can be exchanged.
  #[snafu(display("Dispatcher closed"))]
  Closed,

  /// The child process exited before the compilation finished.
  #[snafu(display("Embedded compiler exited unexpectedly."))]
  CompilerExit,

  /// The stylesheet failed to compile. This is a Sass-level failure, not
  /// a protocol problem; the session shut down normally.
  #[snafu(display("{exception}"))]
  CompileFailed { exception: Box<Exception> },

  /// An I/O failure on the child's stdio.
  #[snafu(display("I/O error while talking to the embedded Sass compiler: {source}"))]
  Io { source: std::io::Error },
}

impl Error {
  pub(crate) fn compiler(message: impl Into<String>) -> Self {
    Self::Compiler {
      message: message.into(),
    }
  }

  pub(crate) fn host(message: impl Into<String>) -> Self {
    Self::Host {
      message: message.into(),
    }
  }

  pub(crate) fn protocol(message: impl Into<String>) -> Self {
    Self::Protocol {
      message: message.into(),
    }
  }
}

impl From<std::io::Error> for Error {
  fn from(source: std::io::Error) -> Self {
    Self::Io { source }
  }
}

/// A Sass compilation failure, as reported by the compiler.
#[derive(Debug, Clone, PartialEq)]
pub struct Exception {
  message: String,
  span: Option<SourceSpan>,
  stack_trace: Option<String>,
  formatted: String,
}

impl Exception {
  pub(crate) fn new(
    message: String,
    span: Option<SourceSpan>,
    stack_trace: Option<String>,
    formatted: String,
  ) -> Self {
    Self {
      message,
      span,
      stack_trace,
      formatted,
    }
  }

  /// The failure message, without location information.
  pub fn message(&self) -> &str {
    &self.message
  }

  /// Where in the stylesheet the failure occurred, if known.
  pub fn span(&self) -> Option<&SourceSpan> {
    self.span.as_ref()
  }

  /// The Sass stack trace at the point of failure.
  pub fn stack_trace(&self) -> Option<&str> {
    self.stack_trace.as_deref()
  }
}

impl Display for Exception {
  /// Reproduces the compiler's preformatted diagnostic verbatim.
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.formatted.is_empty() {
      f.write_str(&self.message)
    } else {
      f.write_str(&self.formatted)
    }
  }
}

impl std::error::Error for Exception {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn error_messages_carry_their_prefixes() {
    assert_eq!(
      Error::compiler("Invalid buffer").to_string(),
      "Compiler caused error: Invalid buffer"
    );
    assert_eq!(
      Error::host("broken host").to_string(),
      "Compiler reported error: broken host"
    );
    assert_eq!(
      Error::CompilerExit.to_string(),
      "Embedded compiler exited unexpectedly."
    );
    assert_eq!(Error::Closed.to_string(), "Dispatcher closed");
  }

  #[test]
  fn exception_displays_formatted_verbatim() {
    let exception = Exception::new(
      "expected \"}\".".into(),
      None,
      None,
      "Error: expected \"}\".\n  ╷\n1 │ a {\n  ╵".into(),
    );
    assert!(exception.to_string().starts_with("Error: expected \"}\"."));
  }

  #[test]
  fn exception_falls_back_to_message() {
    let exception = Exception::new("boom".into(), None, None, String::new());
    assert_eq!(exception.to_string(), "boom");
  }
}
