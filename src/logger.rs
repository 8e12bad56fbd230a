use std::io::Write;

use strum::Display;

use crate::span::SourceSpan;

/// The kinds of diagnostics the compiler emits during a compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogEventKind {
  Warning,
  DeprecationWarning,
  Debug,
}

/// A warning or `@debug` message emitted by the compiler.
///
/// Log events are delivered in arrival order, interleaved correctly with
/// the compilation result.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
  pub kind: LogEventKind,
  /// The message text, without location information.
  pub message: String,
  /// A human-readable rendition, preformatted by the compiler.
  pub formatted: String,
  pub span: Option<SourceSpan>,
  /// The Sass stack trace at the point the event was emitted.
  pub stack_trace: Option<String>,
}

/// Receives the compiler's diagnostics.
///
/// The default method bodies reproduce the behavior of a compile without a
/// logger: the preformatted text goes to the host's stderr, falling back
/// to the bare message when the compiler sent no preformatted rendition.
pub trait Logger {
  /// Called for warnings and deprecation warnings.
  fn warn(&self, event: &LogEvent) {
    write_to_stderr(event);
  }

  /// Called for `@debug` messages.
  fn debug(&self, event: &LogEvent) {
    write_to_stderr(event);
  }
}

/// The logger used when none is configured.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StderrLogger;

impl Logger for StderrLogger {}

fn write_to_stderr(event: &LogEvent) {
  let Some(text) = stderr_text(event) else {
    return;
  };
  let mut stderr = std::io::stderr().lock();
  let _ = stderr.write_all(text.as_bytes());
  if !text.ends_with('\n') {
    let _ = stderr.write_all(b"\n");
  }
}

/// The text the default logger writes for `event`: `formatted` when the
/// compiler provided it, otherwise `message`, otherwise nothing.
fn stderr_text(event: &LogEvent) -> Option<&str> {
  if !event.formatted.is_empty() {
    Some(&event.formatted)
  } else if !event.message.is_empty() {
    Some(&event.message)
  } else {
    None
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use super::*;

  fn event(formatted: &str, message: &str) -> LogEvent {
    LogEvent {
      kind: LogEventKind::Warning,
      message: message.into(),
      formatted: formatted.into(),
      span: None,
      stack_trace: None,
    }
  }

  #[test]
  fn default_logger_prefers_the_preformatted_text() {
    let event = event("WARNING: careful\n", "careful");
    assert_eq!(stderr_text(&event), Some("WARNING: careful\n"));
  }

  #[test]
  fn default_logger_falls_back_to_the_message() {
    let event = event("", "careful");
    assert_eq!(stderr_text(&event), Some("careful"));
    // Exercise the actual default path too.
    StderrLogger.warn(&event);
  }

  #[test]
  fn default_logger_stays_silent_with_nothing_to_say() {
    assert_eq!(stderr_text(&event("", "")), None);
  }

  #[test]
  fn custom_loggers_observe_events() {
    struct Recorder(Rc<RefCell<Vec<String>>>);
    impl Logger for Recorder {
      fn warn(&self, event: &LogEvent) {
        self.0.borrow_mut().push(format!("warn: {}", event.message));
      }
      fn debug(&self, event: &LogEvent) {
        self.0.borrow_mut().push(format!("debug: {}", event.message));
      }
    }

    let seen = Rc::new(RefCell::new(Vec::new()));
    let logger = Recorder(seen.clone());
    let event = LogEvent {
      kind: LogEventKind::Warning,
      message: "careful".into(),
      formatted: String::new(),
      span: None,
      stack_trace: None,
    };
    logger.warn(&event);
    logger.debug(&LogEvent {
      kind: LogEventKind::Debug,
      message: "peek".into(),
      ..event.clone()
    });
    assert_eq!(
      seen.borrow().as_slice(),
      ["warn: careful", "debug: peek"]
    );
  }
}
