use url::Url;

use crate::{error::Error, proto};

/// A location within a stylesheet. Lines and columns are zero-based, as
/// they are on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
  /// Byte offset from the start of the file.
  pub offset: u32,
  pub line: u32,
  pub column: u32,
}

/// A span of text within a stylesheet, as attached to compile failures and
/// log events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
  /// The text covered by the span. May be empty for a point span.
  pub text: String,
  pub start: SourceLocation,
  /// The end of the span; equal to `start` for a point span.
  pub end: SourceLocation,
  /// The URL of the stylesheet, if it has one.
  pub url: Option<Url>,
  /// Additional surrounding text, if the compiler provided any.
  pub context: Option<String>,
}

impl SourceLocation {
  fn from_proto(location: proto::source_span::SourceLocation) -> Self {
    Self {
      offset: location.offset,
      line: location.line,
      column: location.column,
    }
  }
}

impl SourceSpan {
  pub(crate) fn from_proto(span: proto::SourceSpan) -> Result<Self, Error> {
    let start = span
      .start
      .map(SourceLocation::from_proto)
      .ok_or_else(|| Error::compiler("SourceSpan.start is not set"))?;
    let end = span.end.map(SourceLocation::from_proto).unwrap_or(start);
    Ok(Self {
      text: span.text,
      start,
      end,
      url: Url::parse(&span.url).ok(),
      context: (!span.context.is_empty()).then_some(span.context),
    })
  }
}
