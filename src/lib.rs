//! Host for the Embedded Sass protocol.
//!
//! Drives a Dart Sass compiler as a child process, speaking length-prefixed
//! protobuf over its stdio, and exposes blocking and async `compile` APIs
//! with user-supplied [importers](Importer) and
//! [custom functions](value::CustomFunction).
//!
//! ```no_run
//! let result = sasshost::blocking::compile_string(
//!   "a {b: 1px + 1px}",
//!   sasshost::StringOptions::new(),
//! )?;
//! assert!(result.css.contains("2px"));
//! # Ok::<(), sasshost::Error>(())
//! ```
//!
//! The compiler executable is located via the `SASS_EMBEDDED_COMPILER_PATH`
//! environment variable, the `vendor/` directories next to the running
//! executable, or an explicit [`Options::compiler_path`].
//!
//! A session (one compile, one child process) belongs to the thread or
//! task that created it; the async API returns futures that are not
//! `Send`.

pub mod blocking;
mod compile;
mod dispatcher;
mod error;
mod exec;
mod importer;
mod logger;
mod message;
mod options;
mod packet;
mod protofier;
mod registry;
mod span;
mod tracker;

/// Generated protocol types, exposed for integration tooling. The wire
/// representation is not covered by semver.
#[cfg(not(feature = "protobuf-binding-from-source"))]
pub mod proto;
#[cfg(feature = "protobuf-binding-from-source")]
pub mod proto {
  pub use embedded_sass_proto::*;
}

pub use compile::{CompileResult, compile, compile_string};
pub use error::{Error, Exception};
pub use importer::{FileImporter, Importer, ImporterResult, SassImporter};
pub use logger::{LogEvent, LogEventKind, Logger};
pub use options::{Options, OutputStyle, StringOptions, Syntax};
pub use span::{SourceLocation, SourceSpan};

/// The Sass value model, re-exported from `sasshost-value`.
pub use sasshost_value as value;
pub use sasshost_value::Value;

/// The version of the Embedded Sass protocol this host speaks. Fixed at
/// build time; no version negotiation happens on the wire.
pub const PROTOCOL_VERSION: &str = "3.2.0";
